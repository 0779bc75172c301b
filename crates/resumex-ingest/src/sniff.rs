//! Content-type detection from magic bytes, with the declared MIME type
//! as a tie-breaker. The declared type alone is never trusted for the
//! binary formats; the bytes have to agree.

use std::io::Cursor;

/// The document formats the extraction pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

pub(crate) const PDF_MAGIC: &[u8] = b"%PDF-";
pub(crate) const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Sniff the document kind, or `None` when the bytes match no supported
/// format.
pub fn sniff(bytes: &[u8], declared_mime: Option<&str>) -> Option<DocumentKind> {
    if bytes.starts_with(PDF_MAGIC) {
        return Some(DocumentKind::Pdf);
    }
    if bytes.starts_with(ZIP_MAGIC) {
        // A DOCX is a zip with the word-processing body at a fixed path.
        // Other zips (e.g. ODT, plain archives) are not supported.
        return contains_docx_body(bytes).then_some(DocumentKind::Docx);
    }
    match declared_mime {
        Some("text/plain") => return Some(DocumentKind::PlainText),
        Some(_) => return None,
        None => {}
    }
    if std::str::from_utf8(bytes).is_ok() && !bytes.contains(&0) {
        return Some(DocumentKind::PlainText);
    }
    None
}

fn contains_docx_body(bytes: &[u8]) -> bool {
    zip::ZipArchive::new(Cursor::new(bytes))
        .is_ok_and(|mut archive| archive.by_name("word/document.xml").is_ok())
}
