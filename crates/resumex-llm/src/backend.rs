use resumex_core::BackendError;

/// A chat-completion capable model.
///
/// One blocking call per resume; retry and timeout policy belong to the
/// caller. Keeping the transport behind this seam lets the validation
/// and recomputation logic run against canned outputs in tests.
pub trait ModelBackend: Send + Sync {
    /// Send one system + user message pair, return the raw completion
    /// text.
    fn complete(&self, system: &str, user: &str) -> Result<String, BackendError>;
}
