//! Built-in keyword dictionaries.
//!
//! These are immutable lookup tables initialized once at first use; config
//! overrides are resolved against them per parse, so concurrent parses
//! never touch shared mutable state.

/// Canonical job-title keywords. Scanned against the lower-cased full
/// text in list order; the first hit wins.
pub(crate) static JOB_TITLE_KEYWORDS: &[&str] = &[
    "software engineer",
    "developer",
    "data scientist",
    "project manager",
    "product manager",
    "consultant",
    "analyst",
    "architect",
    "designer",
    "qa engineer",
    "test engineer",
    "full stack developer",
    "frontend developer",
    "backend developer",
    "devops engineer",
    "machine learning engineer",
    "ai engineer",
    "researcher",
    "intern",
    "lead",
    "manager",
    "director",
    "chief",
    "cto",
    "ceo",
    "coo",
    "founder",
    "owner",
    "administrator",
    "business analyst",
    "data analyst",
    "system administrator",
    "network engineer",
    "security engineer",
    "cloud engineer",
    "solutions architect",
    "technical lead",
    "senior engineer",
    "principal engineer",
    "staff engineer",
    "engineering manager",
];

/// Skill keywords by category. Categories are not preserved in the
/// output; they only organize the table.
pub(crate) static SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &["python", "java", "javascript", "c++", "ruby", "php", "swift", "kotlin"],
    ),
    (
        "databases",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle"],
    ),
    (
        "frameworks",
        &["django", "flask", "react", "angular", "vue", "spring", "express"],
    ),
    (
        "tools",
        &["git", "docker", "kubernetes", "jenkins", "aws", "azure", "gcp"],
    ),
    (
        "languages",
        &["english", "spanish", "french", "german", "chinese", "japanese"],
    ),
];

/// Flattened skill keyword list, for override resolution.
pub(crate) fn default_skill_keywords() -> Vec<String> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, keywords)| keywords.iter())
        .map(|k| k.to_string())
        .collect()
}

/// Keywords that qualify a sentence as work experience.
pub(crate) static EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "worked",
    "job",
    "position",
    "role",
    "company",
    "employed",
];

/// Keywords that qualify a sentence as education.
pub(crate) static EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "bachelor",
    "master",
    "phd",
    "b.tech",
    "m.tech",
    "b.s.",
    "m.s.",
];

/// Degree keyword patterns in priority order: the first category with a
/// hit wins. The matched token becomes `degree`; the category maps to
/// `degree_type`.
pub(crate) static DEGREE_PATTERNS: &[(&str, &[&str])] = &[
    ("bachelor", &["bachelor", "b.s.", "b.tech", "b.e.", "b.sc.", "b.a."]),
    ("master", &["master", "m.s.", "m.tech", "m.e.", "m.sc.", "m.a."]),
    ("phd", &["phd", "doctorate", "d.phil"]),
];

/// Keywords that qualify a sentence as an accolade/certification.
pub(crate) static ACCOLADE_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "award",
    "achievement",
    "accomplishment",
];

/// Keywords that anchor a phone number.
pub(crate) static PHONE_KEYWORDS: &[&str] = &[
    "phone",
    "phone no",
    "phone number",
    "mobile",
    "mobile no",
    "mobile number",
    "cell",
    "cell no",
    "cell number",
    "tel",
    "tel no",
    "telephone",
    "telephone no",
    "contact",
    "contact no",
    "reach me at",
    "call",
];

pub(crate) fn as_strings(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

/// Title-case a keyword for display ("software engineer" → "Software Engineer").
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("software engineer"), "Software Engineer");
        assert_eq!(title_case("cto"), "Cto");
    }

    #[test]
    fn test_skill_keywords_flatten() {
        let all = default_skill_keywords();
        assert!(all.contains(&"python".to_string()));
        assert!(all.contains(&"mongodb".to_string()));
        assert!(all.contains(&"german".to_string()));
    }
}
