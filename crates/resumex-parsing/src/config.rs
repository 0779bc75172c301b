use regex::Regex;

/// Controls how a list of keywords/values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the heuristic resume extraction pipeline.
///
/// All regex fields are `Option<Regex>` — `None` means "use the built-in
/// default". The keyword dictionaries are immutable statics resolved
/// through [`ListOverride`], so concurrent parses never share mutable
/// state. Use [`ResumeParsingConfigBuilder`] to construct from string
/// patterns.
#[derive(Debug, Clone, Default)]
pub struct ResumeParsingConfig {
    // ── sections.rs ──
    /// Regex locating experience-labeled section headers.
    pub(crate) experience_header_re: Option<Regex>,
    /// Regex for the capitalized header line that ends a section.
    pub(crate) section_end_re: Option<Regex>,

    // ── title.rs ──
    /// Canonical job-title keywords, scanned in list order.
    pub(crate) title_keywords: ListOverride<String>,

    // ── skills.rs ──
    /// Skill keywords matched as substrings of the lower-cased text.
    pub(crate) skill_keywords: ListOverride<String>,

    // ── experience.rs ──
    /// Keywords that qualify a sentence as work experience.
    pub(crate) experience_keywords: ListOverride<String>,

    // ── phone.rs ──
    /// Keywords that anchor a phone number.
    pub(crate) phone_keywords: ListOverride<String>,

    // ── name.rs ──
    /// How many leading sentences the name fallback inspects (default: 3).
    pub(crate) name_scan_sentences: Option<usize>,
}

impl ResumeParsingConfig {
    pub(crate) fn name_scan_sentences(&self) -> usize {
        self.name_scan_sentences.unwrap_or(3)
    }
}

/// Builder for [`ResumeParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in
/// [`build()`](Self::build). Fails fast with `regex::Error` if any
/// pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ResumeParsingConfigBuilder {
    experience_header_re: Option<String>,
    section_end_re: Option<String>,
    title_keywords: ListOverride<String>,
    skill_keywords: ListOverride<String>,
    experience_keywords: ListOverride<String>,
    phone_keywords: ListOverride<String>,
    name_scan_sentences: Option<usize>,
}

impl ResumeParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Section patterns ──

    pub fn experience_header_regex(mut self, pattern: &str) -> Self {
        self.experience_header_re = Some(pattern.to_string());
        self
    }

    pub fn section_end_regex(mut self, pattern: &str) -> Self {
        self.section_end_re = Some(pattern.to_string());
        self
    }

    // ── Keyword lists ──

    pub fn set_title_keywords(mut self, keywords: Vec<String>) -> Self {
        self.title_keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_title_keyword(mut self, keyword: String) -> Self {
        self.title_keywords = extend(self.title_keywords, keyword);
        self
    }

    pub fn set_skill_keywords(mut self, keywords: Vec<String>) -> Self {
        self.skill_keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_skill_keyword(mut self, keyword: String) -> Self {
        self.skill_keywords = extend(self.skill_keywords, keyword);
        self
    }

    pub fn set_experience_keywords(mut self, keywords: Vec<String>) -> Self {
        self.experience_keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_experience_keyword(mut self, keyword: String) -> Self {
        self.experience_keywords = extend(self.experience_keywords, keyword);
        self
    }

    pub fn set_phone_keywords(mut self, keywords: Vec<String>) -> Self {
        self.phone_keywords = ListOverride::Replace(keywords);
        self
    }

    pub fn add_phone_keyword(mut self, keyword: String) -> Self {
        self.phone_keywords = extend(self.phone_keywords, keyword);
        self
    }

    // ── Scalars ──

    pub fn name_scan_sentences(mut self, n: usize) -> Self {
        self.name_scan_sentences = Some(n);
        self
    }

    /// Compile all string patterns into regexes and produce a
    /// [`ResumeParsingConfig`].
    pub fn build(self) -> Result<ResumeParsingConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        Ok(ResumeParsingConfig {
            experience_header_re: compile(self.experience_header_re)?,
            section_end_re: compile(self.section_end_re)?,
            title_keywords: self.title_keywords,
            skill_keywords: self.skill_keywords,
            experience_keywords: self.experience_keywords,
            phone_keywords: self.phone_keywords,
            name_scan_sentences: self.name_scan_sentences,
        })
    }
}

fn extend(current: ListOverride<String>, value: String) -> ListOverride<String> {
    match current {
        ListOverride::Extend(mut v) => {
            v.push(value);
            ListOverride::Extend(v)
        }
        _ => ListOverride::Extend(vec![value]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResumeParsingConfig::default();
        assert_eq!(config.name_scan_sentences(), 3);
        assert!(config.experience_header_re.is_none());
    }

    #[test]
    fn test_builder_custom_regex() {
        let config = ResumeParsingConfigBuilder::new()
            .experience_header_regex(r"(?im)^\s*berufserfahrung\s*$")
            .build()
            .unwrap();
        assert!(config.experience_header_re.is_some());
    }

    #[test]
    fn test_builder_invalid_regex() {
        let result = ResumeParsingConfigBuilder::new()
            .experience_header_regex(r"[invalid")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_builder_add_keyword_accumulates() {
        let config = ResumeParsingConfigBuilder::new()
            .add_skill_keyword("terraform".to_string())
            .add_skill_keyword("ansible".to_string())
            .build()
            .unwrap();
        match config.skill_keywords {
            ListOverride::Extend(v) => assert_eq!(v.len(), 2),
            _ => panic!("expected Extend"),
        }
    }
}
