//! DOCX text extraction: unpack the zip container, stream the
//! word-processing XML body, and emit one line per paragraph in
//! document order. No layout or table reconstruction.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use resumex_core::BackendError;

pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, BackendError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| BackendError::OpenError(format!("not a zip container: {e}")))?;
    let mut body = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| BackendError::OpenError(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut body)
        .map_err(|e| BackendError::ExtractionError(format!("unreadable document body: {e}")))?;

    paragraphs_from_xml(&body)
}

fn paragraphs_from_xml(xml: &str) -> Result<String, BackendError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(t)) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| BackendError::ExtractionError(format!("bad XML text: {e}")))?;
                text.push_str(&chunk);
            }
            // Paragraph and explicit line breaks both become newlines.
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(BackendError::ExtractionError(format!(
                    "malformed document XML: {e}"
                )));
            }
        }
        buf.clear();
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0"?><w:document><w:body>
            <w:p><w:r><w:t>John Smith</w:t></w:r></w:p>
            <w:p><w:r><w:t>Email: j@example.com</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let bytes = docx_with_body(xml);
        let text = extract_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["John Smith", "Email: j@example.com"]);
    }

    #[test]
    fn test_runs_within_paragraph_concatenate() {
        let xml = r#"<w:document><w:body><w:p>
            <w:r><w:t>Software </w:t></w:r><w:r><w:t>Engineer</w:t></w:r>
        </w:p></w:body></w:document>"#;
        let bytes = docx_with_body(xml);
        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("Software Engineer"));
    }

    #[test]
    fn test_missing_body_is_open_error() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        writer.finish().unwrap();
        let bytes = cursor.into_inner();

        assert!(matches!(
            extract_text(&bytes),
            Err(BackendError::OpenError(_))
        ));
    }
}
