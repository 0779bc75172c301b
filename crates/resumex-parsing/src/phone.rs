use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ResumeParsingConfig;
use crate::dictionary;

/// Generic fallback: loose international-ish shape, at least three
/// digit groups so bare years never match.
static GENERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[\s\-]?)?(\(?\d{2,4}\)?[\s\-]?)?\d{2,4}[\s\-]?\d{2,4}[\s\-]?\d{2,4}")
        .expect("static regex")
});

/// Two-tier phone extraction: keyword-anchored first, generic numeric
/// pattern as fallback. The returned value keeps only digits and a
/// leading `+`.
pub(crate) fn extract_phone(text: &str, config: &ResumeParsingConfig) -> Option<String> {
    let keywords = config
        .phone_keywords
        .resolve(&dictionary::as_strings(dictionary::PHONE_KEYWORDS));
    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    let pattern = format!(r"(?i)({})[\s:]*([+\d][\d\s\-().]{{7,}})", escaped.join("|"));

    // The keyword list is config-dependent, so this regex is compiled
    // per call rather than cached.
    if let Ok(re) = Regex::new(&pattern) {
        if let Some(caps) = re.captures(text) {
            return Some(digits_only(&caps[2]));
        }
    }

    GENERIC_RE.find(text).map(|m| digits_only(m.as_str()))
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_anchored() {
        let config = ResumeParsingConfig::default();
        assert_eq!(
            extract_phone("Mobile: +1 (555) 010-0199", &config),
            Some("+15550100199".to_string())
        );
    }

    #[test]
    fn test_generic_fallback() {
        let config = ResumeParsingConfig::default();
        assert_eq!(
            extract_phone("reach 555-010-0199 after hours", &config),
            Some("5550100199".to_string())
        );
    }

    #[test]
    fn test_bare_year_not_a_phone() {
        let config = ResumeParsingConfig::default();
        assert_eq!(extract_phone("joined the firm during 2018", &config), None);
    }

    #[test]
    fn test_custom_keywords() {
        let config = crate::config::ResumeParsingConfigBuilder::new()
            .set_phone_keywords(vec!["telefon".to_string()])
            .build()
            .unwrap();
        assert_eq!(
            extract_phone("Telefon: 030 1234 5678", &config),
            Some("03012345678".to_string())
        );
    }
}
