use resumex_core::annotate::SentenceView;

use crate::config::ResumeParsingConfig;

/// Candidate name from the annotated view.
///
/// Primary: the first person entity with at least two tokens. Fallback:
/// scan the leading sentences for a "Name: ..." label or a short bare
/// phrase.
pub(crate) fn extract_name(view: &SentenceView, config: &ResumeParsingConfig) -> Option<String> {
    for person in view.persons() {
        if person.text.split_whitespace().count() >= 2 {
            return Some(person.text.clone());
        }
    }

    for sentence in view.sentences.iter().take(config.name_scan_sentences()) {
        let text = sentence.text.trim();
        if let Some((prefix, suffix)) = text.split_once(':') {
            let prefix = prefix.to_lowercase();
            if prefix.contains("name") {
                let name = suffix.trim();
                if name.split_whitespace().count() >= 2 {
                    return Some(name.to_string());
                }
            }
        } else if (2..=4).contains(&text.split_whitespace().count()) {
            return Some(text.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumex_core::annotate::{EntityLabel, EntitySpan, Sentence};

    fn sentence(text: &str, entities: Vec<EntitySpan>) -> Sentence {
        Sentence {
            text: text.to_string(),
            start: 0,
            entities,
        }
    }

    fn person(text: &str) -> EntitySpan {
        EntitySpan {
            label: EntityLabel::Person,
            text: text.to_string(),
            start: 0,
            end: text.len(),
        }
    }

    #[test]
    fn test_person_entity_wins() {
        let view = SentenceView {
            sentences: vec![sentence("Jane Doe", vec![person("Jane Doe")])],
        };
        let config = ResumeParsingConfig::default();
        assert_eq!(extract_name(&view, &config), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_single_token_person_skipped() {
        let view = SentenceView {
            sentences: vec![
                sentence("Madonna", vec![person("Madonna")]),
                sentence("Name: John Q Smith", vec![]),
            ],
        };
        let config = ResumeParsingConfig::default();
        assert_eq!(
            extract_name(&view, &config),
            Some("John Q Smith".to_string())
        );
    }

    #[test]
    fn test_colon_label_fallback() {
        let view = SentenceView {
            sentences: vec![sentence("Full Name: Ada Lovelace", vec![])],
        };
        let config = ResumeParsingConfig::default();
        assert_eq!(
            extract_name(&view, &config),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_short_phrase_fallback() {
        let view = SentenceView {
            sentences: vec![sentence("Grace Brewster Hopper", vec![])],
        };
        let config = ResumeParsingConfig::default();
        assert_eq!(
            extract_name(&view, &config),
            Some("Grace Brewster Hopper".to_string())
        );
    }

    #[test]
    fn test_fallback_limited_to_leading_sentences() {
        let view = SentenceView {
            sentences: vec![
                sentence(
                    "An objective statement that runs on for quite a few words here",
                    vec![],
                ),
                sentence(
                    "Another long sentence with far too many tokens to be a name",
                    vec![],
                ),
                sentence(
                    "Yet another long sentence that is clearly body text in the resume",
                    vec![],
                ),
                sentence("Deep Buried Name", vec![]),
            ],
        };
        let config = ResumeParsingConfig::default();
        assert_eq!(extract_name(&view, &config), None);
    }
}
