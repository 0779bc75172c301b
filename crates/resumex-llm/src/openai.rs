//! OpenAI-compatible chat-completion backend.

use std::time::Duration;

use resumex_core::BackendError;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::backend::ModelBackend;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking client for any OpenAI-compatible `/chat/completions`
/// endpoint. Low temperature keeps the extraction as deterministic as
/// the model allows.
pub struct OpenAiBackend {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>) -> Result<OpenAiBackend, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| BackendError::RequestError(e.to_string()))?;
        Ok(OpenAiBackend {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> OpenAiBackend {
        self.model = model.into();
        self
    }

    /// Point at a different OpenAI-compatible server (proxy, local
    /// model, ...).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> OpenAiBackend {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl ModelBackend for OpenAiBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, BackendError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "max_tokens": 1024,
            "temperature": 0.1,
        });

        debug!(model = %self.model, "sending chat completion request");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| BackendError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(BackendError::RequestError(format!(
                "model endpoint returned {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| BackendError::RequestError(format!("malformed completion: {e}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| BackendError::RequestError("completion had no choices".to_string()))
    }
}
