use resumex_core::WorkExperienceEntry;

use crate::config::ResumeParsingConfig;
use crate::dictionary;

/// Current job title: first canonical keyword found in the lower-cased
/// text wins, in list order. If no keyword matches, fall back to the
/// position of an ongoing work-experience entry.
pub(crate) fn extract_current_job_title(
    text: &str,
    experience: &[WorkExperienceEntry],
    config: &ResumeParsingConfig,
) -> Option<String> {
    let keywords = config
        .title_keywords
        .resolve(&dictionary::as_strings(dictionary::JOB_TITLE_KEYWORDS));
    let lower = text.to_lowercase();
    for keyword in &keywords {
        if lower.contains(keyword.as_str()) {
            return Some(dictionary::title_case(keyword));
        }
    }

    experience
        .iter()
        .find(|entry| {
            let ongoing = match entry.end_year {
                None => true,
                Some(end) => end.is_present(),
            };
            ongoing && entry.position.as_deref().is_some_and(|p| !p.is_empty())
        })
        .and_then(|entry| entry.position.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumex_core::EndYear;

    fn entry(position: Option<&str>, end_year: Option<EndYear>) -> WorkExperienceEntry {
        WorkExperienceEntry {
            company: None,
            position: position.map(|p| p.to_string()),
            joining_year: Some(2019),
            end_year,
            description: String::new(),
        }
    }

    #[test]
    fn test_keyword_list_order_wins() {
        let config = ResumeParsingConfig::default();
        // "software engineer" precedes "developer" in the list even
        // though "developer" appears first in the text.
        let text = "seasoned developer and software engineer";
        assert_eq!(
            extract_current_job_title(text, &[], &config),
            Some("Software Engineer".to_string())
        );
    }

    #[test]
    fn test_fallback_to_ongoing_position() {
        let config = ResumeParsingConfig::default();
        let experience = vec![
            entry(Some("welder"), Some(EndYear::Year(2015))),
            entry(Some("foreman"), Some(EndYear::Present)),
        ];
        assert_eq!(
            extract_current_job_title("no recognized vocabulary", &experience, &config),
            Some("foreman".to_string())
        );
    }

    #[test]
    fn test_open_ended_entry_counts_as_ongoing() {
        let config = ResumeParsingConfig::default();
        let experience = vec![entry(Some("surveyor"), None)];
        assert_eq!(
            extract_current_job_title("nothing in the dictionary", &experience, &config),
            Some("surveyor".to_string())
        );
    }

    #[test]
    fn test_absent_when_nothing_matches() {
        let config = ResumeParsingConfig::default();
        let experience = vec![entry(None, None)];
        assert_eq!(
            extract_current_job_title("plain text", &experience, &config),
            None
        );
    }
}
