//! Model-assisted resume extraction.
//!
//! An alternate path to the same structured-result contract as
//! `resumex-parsing`: the field extraction itself is delegated to an
//! external chat model, then the returned payload is validated against
//! the resume schema and the experience total is recomputed locally.
//! The model is never trusted with numbers — see [`validate`].

use resumex_core::intervals::MonthPoint;
use resumex_core::{ExtractError, ExtractedResume};
use serde_json::Value;
use tracing::debug;

mod backend;
mod openai;
mod prompt;
pub mod validate;

pub use backend::ModelBackend;
pub use openai::OpenAiBackend;
pub use resumex_core::BackendError;

/// Extract structured resume data from flat text via an external model.
///
/// Fails with [`ExtractError::InvalidResumeData`] when the completion is
/// not valid JSON or violates the schema, and with
/// [`ExtractError::Backend`] when the model call itself fails.
pub fn extract_via_model(
    text: &str,
    backend: &dyn ModelBackend,
) -> Result<ExtractedResume, ExtractError> {
    extract_via_model_at(text, backend, MonthPoint::now())
}

/// Like [`extract_via_model`] with an explicit "current month", so
/// ongoing positions resolve deterministically in tests.
pub fn extract_via_model_at(
    text: &str,
    backend: &dyn ModelBackend,
    now: MonthPoint,
) -> Result<ExtractedResume, ExtractError> {
    let completion = backend.complete(prompt::SYSTEM_PROMPT, &prompt::extraction_prompt(text))?;
    let cleaned = prompt::clean_json_block(&completion);
    debug!(len = cleaned.len(), "received model completion");

    let payload: Value = serde_json::from_str(cleaned).map_err(|e| {
        ExtractError::InvalidResumeData(format!("model output is not valid JSON: {e}"))
    })?;
    validate::validate_payload(&payload, now.year)?;
    Ok(validate::resume_from_payload(&payload, now))
}
