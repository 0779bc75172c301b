//! PDF text extraction backed by the pure-Rust `lopdf` crate.

use lopdf::Document;
use resumex_core::{BackendError, PdfBackend};
use tracing::debug;

/// Stateless [`PdfBackend`] over `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> LopdfBackend {
        LopdfBackend
    }
}

impl PdfBackend for LopdfBackend {
    /// Concatenate per-page text in page order. A page that fails to
    /// yield text contributes nothing rather than failing the document;
    /// only an unreadable container is an error.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError> {
        let document =
            Document::load_mem(bytes).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    if !page_text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                Err(e) => {
                    debug!(page = page_number, error = %e, "page yielded no text");
                }
            }
        }
        Ok(text)
    }
}
