use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::annotate::SentenceView;
use resumex_core::{DegreeType, EducationEntry};

use crate::dictionary;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

/// Last " in "/" at " occurrence; the suffix is read as the institution.
static INSTITUTION_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s(?:in|at)\s").expect("static regex"));

/// One entry per sentence carrying an education keyword. Degree matching
/// walks the pattern map in priority order (bachelor, master, phd); the
/// first category with a hit wins.
pub(crate) fn extract_education(view: &SentenceView) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    for sentence in &view.sentences {
        let lower = sentence.text.to_lowercase();
        if !dictionary::EDUCATION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        let year = YEAR_RE
            .find(&sentence.text)
            .and_then(|m| m.as_str().parse::<i32>().ok());

        let mut degree = None;
        let mut degree_type = None;
        'outer: for (category, patterns) in dictionary::DEGREE_PATTERNS {
            for pattern in *patterns {
                if lower.contains(pattern) {
                    degree = Some(pattern.to_string());
                    degree_type = match *category {
                        "bachelor" => Some(DegreeType::UnderGrad),
                        "master" => Some(DegreeType::Grad),
                        _ => Some(DegreeType::Phd),
                    };
                    break 'outer;
                }
            }
        }

        let institution = match INSTITUTION_SPLIT_RE.find_iter(&sentence.text).last() {
            Some(m) => sentence.text[m.end()..].trim().to_string(),
            None => sentence.text.clone(),
        };

        entries.push(EducationEntry {
            institution: Some(institution),
            degree,
            degree_type,
            year,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::RuleAnnotator;
    use resumex_core::annotate::Annotator;

    fn parse(text: &str) -> Vec<EducationEntry> {
        extract_education(&RuleAnnotator::new().annotate(text))
    }

    #[test]
    fn test_degree_and_year() {
        let entries = parse("Completed my Master of Science at Springfield University in 2015");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree.as_deref(), Some("master"));
        assert_eq!(entries[0].degree_type, Some(DegreeType::Grad));
        assert_eq!(entries[0].year, Some(2015));
    }

    #[test]
    fn test_bachelor_has_priority_over_master() {
        // Priority order, not text order: "bachelor" category is checked
        // first even when "master" appears earlier in the sentence.
        let entries = parse("Master classes aside, earned a bachelor from City College");
        assert_eq!(entries[0].degree_type, Some(DegreeType::UnderGrad));
    }

    #[test]
    fn test_institution_after_last_preposition() {
        let entries = parse("Bachelor of Arts at Old Hall in New Haven University");
        assert_eq!(
            entries[0].institution.as_deref(),
            Some("New Haven University")
        );
    }

    #[test]
    fn test_institution_defaults_to_sentence() {
        let entries = parse("Springfield College 2012");
        assert_eq!(
            entries[0].institution.as_deref(),
            Some("Springfield College 2012")
        );
        assert_eq!(entries[0].year, Some(2012));
        assert_eq!(entries[0].degree, None);
    }

    #[test]
    fn test_non_education_sentence_skipped() {
        assert!(parse("shipped a payments service in 2019").is_empty());
    }
}
