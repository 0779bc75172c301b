//! Experience-section location and month-range scanning.
//!
//! Sections start at a line matching the experience header pattern and
//! run to the next capitalized header line (or end of text). Date ranges
//! inside a section are parsed at month granularity for the interval
//! reconciliation in `experience.rs`.

use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::intervals::{month_from_name, MonthPoint};

use crate::config::ResumeParsingConfig;

static DEFAULT_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:project experience|professional experience|work experience|experience|project details)\s*:?\s*$")
        .expect("static regex")
});

/// A short title-cased line with no lowercase-leading words reads as the
/// next section header.
static DEFAULT_SECTION_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[A-Z][A-Za-z]*(?:\s+[A-Z&/][A-Za-z]*){0,4}:?[ \t]*$").expect("static regex")
});

/// `"<Month> <Year>"` to `"<Month> <Year>"` or an ongoing marker.
/// Month words are validated separately so stray words in the month slot
/// drop the match rather than producing a bogus range.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b([a-z]{3,9})\.?\s+((?:19|20)\d{2})\s*(?:(?:-|–|—|to|until|till)\s*)?(?:\b([a-z]{3,9})\.?\s+((?:19|20)\d{2})|\b(present|current|till\s+date|till\s+now))",
    )
    .expect("static regex")
});

/// The bodies of all experience-labeled sections, in document order.
pub(crate) fn experience_sections<'a>(text: &'a str, config: &ResumeParsingConfig) -> Vec<&'a str> {
    let header_re = config.experience_header_re.as_ref().unwrap_or(&DEFAULT_HEADER_RE);
    let end_re = config.section_end_re.as_ref().unwrap_or(&DEFAULT_SECTION_END_RE);

    let mut sections = Vec::new();
    for header in header_re.find_iter(text) {
        let body_start = header.end();
        let rest = &text[body_start..];
        let body_end = end_re
            .find_iter(rest)
            // Skip a header match at offset 0, which is the trailing
            // newline boundary of the header line itself.
            .find(|m| m.start() > 0)
            .map(|m| m.start())
            .unwrap_or(rest.len());
        let body = rest[..body_end].trim();
        if !body.is_empty() {
            sections.push(body);
        }
    }
    sections
}

/// All month-granular (start, end) ranges in one section body. An
/// ongoing marker ("Present", "Till Date", ...) resolves to `now`.
pub(crate) fn month_ranges(section: &str, now: MonthPoint) -> Vec<(MonthPoint, MonthPoint)> {
    let mut ranges = Vec::new();
    for caps in DATE_RANGE_RE.captures_iter(section) {
        let start_month = caps.get(1).and_then(|m| month_from_name(m.as_str()));
        let start_year = caps.get(2).and_then(|m| m.as_str().parse::<i32>().ok());
        let (Some(sm), Some(sy)) = (start_month, start_year) else {
            continue;
        };
        let start = MonthPoint::new(sy, sm);

        let end = if caps.get(5).is_some() {
            now
        } else {
            let end_month = caps.get(3).and_then(|m| month_from_name(m.as_str()));
            let end_year = caps.get(4).and_then(|m| m.as_str().parse::<i32>().ok());
            match (end_month, end_year) {
                (Some(em), Some(ey)) => MonthPoint::new(ey, em),
                _ => continue,
            }
        };
        ranges.push((start, end));
    }
    ranges
}
