//! Turns an uploaded file into flat text for the extraction pipeline.
//!
//! Supported inputs are PDF, DOCX and UTF-8 plain text; anything else
//! fails with [`ExtractError::UnsupportedFormat`]. The PDF backend is
//! pluggable through [`PdfBackend`]; the default (behind the `pdf`
//! feature, on by default) is the pure-Rust `resumex-pdf-lopdf` crate.

use std::path::Path;

use tracing::debug;

mod docx;
pub mod sniff;

// Re-export domain types for convenience
pub use resumex_core::{BackendError, ExtractError, PdfBackend};
pub use sniff::{sniff, DocumentKind};

/// An uploaded file: opaque bytes plus an optional declared MIME type.
/// Ephemeral — created per upload and discarded once the text is out.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    declared_mime: Option<String>,
}

impl RawDocument {
    pub fn from_bytes(bytes: Vec<u8>) -> RawDocument {
        RawDocument {
            bytes,
            declared_mime: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<RawDocument, ExtractError> {
        Ok(RawDocument::from_bytes(std::fs::read(path)?))
    }

    /// Attach the MIME type the uploader claimed, e.g. from a
    /// `Content-Type` header.
    pub fn with_declared_mime(mut self, mime: impl Into<String>) -> RawDocument {
        self.declared_mime = Some(mime.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Extract flat text from a document using the given PDF backend.
///
/// PDF pages are concatenated in page order; DOCX paragraphs become one
/// line each. Fails only when the format is unrecognized or the
/// container itself is unreadable — partial extraction is accepted.
pub fn extract_text_with(
    document: &RawDocument,
    pdf: &dyn PdfBackend,
) -> Result<String, ExtractError> {
    let kind = sniff::sniff(&document.bytes, document.declared_mime.as_deref()).ok_or_else(|| {
        ExtractError::UnsupportedFormat(
            document
                .declared_mime
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        )
    })?;
    debug!(?kind, len = document.bytes.len(), "sniffed document");

    match kind {
        DocumentKind::Pdf => Ok(pdf.extract_text(&document.bytes)?),
        DocumentKind::Docx => Ok(docx::extract_text(&document.bytes)?),
        DocumentKind::PlainText => String::from_utf8(document.bytes.clone())
            .map_err(|_| ExtractError::UnsupportedFormat("non-UTF-8 text".to_string())),
    }
}

/// [`extract_text_with`] using the default lopdf backend.
#[cfg(feature = "pdf")]
pub fn extract_text(document: &RawDocument) -> Result<String, ExtractError> {
    let backend = resumex_pdf_lopdf::LopdfBackend::default();
    extract_text_with(document, &backend)
}

/// Full heuristic pipeline: file bytes to structured resume.
///
/// The only failure modes are an unrecognized/unreadable document;
/// field-level extraction misses degrade to absent values.
pub fn parse_resume_with(
    document: &RawDocument,
    pdf: &dyn PdfBackend,
    extractor: &resumex_parsing::ResumeExtractor,
) -> Result<resumex_parsing::ExtractedResume, ExtractError> {
    let text = extract_text_with(document, pdf)?;
    Ok(extractor.parse_text(&text))
}

/// [`parse_resume_with`] using the default backend, configuration, and
/// annotator.
#[cfg(feature = "pdf")]
pub fn parse_resume(
    document: &RawDocument,
) -> Result<resumex_parsing::ExtractedResume, ExtractError> {
    let backend = resumex_pdf_lopdf::LopdfBackend::default();
    parse_resume_with(
        document,
        &backend,
        &resumex_parsing::ResumeExtractor::default(),
    )
}
