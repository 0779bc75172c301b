//! Work-experience sentence extraction and years-of-experience
//! reconciliation.
//!
//! Two independent strategies produce the years value, applied in
//! precedence order: a direct "N years of experience" statement is
//! authoritative when present; otherwise date ranges inside
//! experience-labeled sections are merged as month intervals. Neither
//! cross-validates the other.

use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::annotate::SentenceView;
use resumex_core::intervals::{self, MonthPoint};
use resumex_core::{EndYear, WorkExperienceEntry};

use crate::config::ResumeParsingConfig;
use crate::dictionary;
use crate::sections;

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

/// First token after an employer preposition. Single-token capture is a
/// known limitation: multi-word company names lose everything after the
/// first word.
static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:at|with|in|for)\s+(\S+)").expect("static regex"));

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:as|position of|role of)\s+(\S+)").expect("static regex")
});

static ONGOING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:present|current|till\s+date|till\s+now)\b").expect("static regex")
});

/// "N years of experience" / "N+ yrs experience"; a trailing `+` adds
/// half a year.
static DIRECT_STATEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(\+)?\s*(?:years?|yrs?)\s*(?:of\s+)?experience\b")
        .expect("static regex")
});

/// One entry per qualifying sentence, in document order. A sentence
/// qualifies if it carries an experience keyword, or names a known job
/// title alongside a 4-digit year.
pub(crate) fn extract_work_experience(
    view: &SentenceView,
    config: &ResumeParsingConfig,
) -> Vec<WorkExperienceEntry> {
    let keywords = config
        .experience_keywords
        .resolve(&dictionary::as_strings(dictionary::EXPERIENCE_KEYWORDS));
    let titles = config
        .title_keywords
        .resolve(&dictionary::as_strings(dictionary::JOB_TITLE_KEYWORDS));

    let mut entries = Vec::new();
    for sentence in &view.sentences {
        let lower = sentence.text.to_lowercase();
        let keyword_hit = keywords.iter().any(|k| lower.contains(k.as_str()));
        let dated_title_hit = YEAR_RE.is_match(&sentence.text)
            && titles.iter().any(|t| lower.contains(t.as_str()));
        if !keyword_hit && !dated_title_hit {
            continue;
        }

        let years: Vec<i32> = YEAR_RE
            .find_iter(&sentence.text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        let joining_year = years.first().copied();
        let end_year = match years.get(1) {
            Some(&year) => Some(EndYear::Year(year)),
            None if joining_year.is_some() && ONGOING_RE.is_match(&sentence.text) => {
                Some(EndYear::Present)
            }
            None => None,
        };

        entries.push(WorkExperienceEntry {
            company: capture_token(&COMPANY_RE, &sentence.text),
            position: capture_token(&POSITION_RE, &sentence.text),
            joining_year,
            end_year,
            description: sentence.text.clone(),
        });
    }
    entries
}

fn capture_token(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| {
        caps[1]
            .trim_end_matches(['.', ',', ';', ':'])
            .to_string()
    })
}

/// The canonical years-of-experience value for one resume.
pub(crate) fn years_of_experience(
    text: &str,
    config: &ResumeParsingConfig,
    now: MonthPoint,
) -> f64 {
    if let Some(caps) = DIRECT_STATEMENT_RE.captures(text) {
        if let Ok(mut years) = caps[1].parse::<f64>() {
            if caps.get(2).is_some() {
                years += 0.5;
            }
            return years;
        }
    }

    let mut ranges = Vec::new();
    for section in sections::experience_sections(text, config) {
        ranges.extend(sections::month_ranges(section, now));
    }
    if ranges.is_empty() {
        return 0.0;
    }
    intervals::years_from_months(intervals::total_months(ranges))
}
