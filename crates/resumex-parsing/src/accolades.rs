use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::annotate::SentenceView;
use resumex_core::AccoladeEntry;

use crate::dictionary;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[A-Za-z0-9$\-_@.&+!*(),%/#~?=]+").expect("static regex"));

/// One entry per sentence carrying a certification/award keyword. The
/// url field is empty, not absent, when no URL is present.
pub(crate) fn extract_accolades(view: &SentenceView) -> Vec<AccoladeEntry> {
    let mut entries = Vec::new();
    for sentence in &view.sentences {
        let lower = sentence.text.to_lowercase();
        if !dictionary::ACCOLADE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        let years: Vec<i32> = YEAR_RE
            .find_iter(&sentence.text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        entries.push(AccoladeEntry {
            url: URL_RE
                .find(&sentence.text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            start_year: years.first().copied(),
            end_year: years.get(1).copied(),
        });
    }
    entries
}
