use std::collections::BTreeSet;

use crate::config::ResumeParsingConfig;
use crate::dictionary;

/// Skills as a deduplicated set: a keyword is included if it appears as
/// a substring of the lower-cased text.
pub(crate) fn extract_skills(text: &str, config: &ResumeParsingConfig) -> BTreeSet<String> {
    let keywords = config
        .skill_keywords
        .resolve(&dictionary::default_skill_keywords());
    let lower = text.to_lowercase();
    keywords
        .into_iter()
        .filter(|keyword| lower.contains(keyword.as_str()))
        .collect()
}
