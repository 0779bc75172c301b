//! Schema validation of model output and deterministic recomputation of
//! the experience total.
//!
//! The model's own `years_of_experience` opinion is never trusted: once
//! the payload passes validation, the value is recomputed from the
//! work-experience date pairs with the same interval merge the heuristic
//! path uses.

use std::collections::BTreeSet;

use resumex_core::intervals::{self, parse_month_year, MonthPoint};
use resumex_core::{
    DegreeType, EducationEntry, EndYear, ExtractError, ExtractedResume, WorkExperienceEntry,
};
use serde_json::Value;

const MIN_YEAR: i64 = 1900;

fn violation(rule: impl Into<String>) -> ExtractError {
    ExtractError::InvalidResumeData(rule.into())
}

/// An end marker that means "still employed here": JSON null, a missing
/// key, or the literal string "present".
fn is_ongoing_marker(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("present"),
        _ => false,
    }
}

/// Validate a model-produced payload against the resume contract.
///
/// Required top-level fields are `name`, `email` and `skills`; year
/// fields must be integers in `[1900, current_year]`; a work-experience
/// `end_year` may not precede its `start_year`. The first violated rule
/// aborts with [`ExtractError::InvalidResumeData`].
pub fn validate_payload(payload: &Value, current_year: i32) -> Result<(), ExtractError> {
    let object = payload
        .as_object()
        .ok_or_else(|| violation("payload must be a JSON object"))?;

    for field in ["name", "email"] {
        match object.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            Some(_) => return Err(violation(format!("{field} must be a non-empty string"))),
            None => return Err(violation(format!("missing required field: {field}"))),
        }
    }

    let skills = object
        .get("skills")
        .ok_or_else(|| violation("missing required field: skills"))?;
    let skills = skills
        .as_array()
        .ok_or_else(|| violation("skills must be an array of strings"))?;
    if !skills.iter().all(Value::is_string) {
        return Err(violation("skills must be an array of strings"));
    }

    let max_year = current_year as i64;

    if let Some(education) = object.get("education").filter(|v| !v.is_null()) {
        let entries = education
            .as_array()
            .ok_or_else(|| violation("education must be an array"))?;
        for entry in entries {
            match entry.get("year") {
                None | Some(Value::Null) => {}
                Some(year) => {
                    let year = year
                        .as_i64()
                        .ok_or_else(|| violation("education year must be an integer or null"))?;
                    if !(MIN_YEAR..=max_year).contains(&year) {
                        return Err(violation(format!("invalid education year: {year}")));
                    }
                }
            }
        }
    }

    if let Some(experience) = object.get("work_experience").filter(|v| !v.is_null()) {
        let entries = experience
            .as_array()
            .ok_or_else(|| violation("work_experience must be an array"))?;
        for entry in entries {
            let start_year = entry
                .get("start_year")
                .and_then(Value::as_i64)
                .ok_or_else(|| violation("work experience start_year must be an integer"))?;
            if !(MIN_YEAR..=max_year).contains(&start_year) {
                return Err(violation(format!(
                    "invalid work experience start year: {start_year}"
                )));
            }
            if is_ongoing_marker(entry.get("end_year")) {
                continue;
            }
            let end_year = entry
                .get("end_year")
                .and_then(Value::as_i64)
                .ok_or_else(|| violation("work experience end_year must be an integer or null"))?;
            if end_year < start_year {
                return Err(violation(format!(
                    "work experience end year ({end_year}) cannot be before start year ({start_year})"
                )));
            }
            if end_year > max_year {
                return Err(violation(format!(
                    "invalid work experience end year: {end_year}"
                )));
            }
        }
    }

    Ok(())
}

/// Start of a work period: a `"<Month> <Year>"` start_date when present,
/// otherwise January of start_year.
fn period_start(entry: &Value) -> Option<MonthPoint> {
    if let Some(date) = entry.get("start_date").and_then(Value::as_str) {
        if let Some(point) = parse_month_year(date) {
            return Some(point);
        }
    }
    let year = entry.get("start_year")?.as_i64()?;
    Some(MonthPoint::new(year as i32, 1))
}

/// End of a work period: end_date/end_year when concrete, `now` for an
/// ongoing marker. Bare years widen to December so a single-year entry
/// counts as a full year.
fn period_end(entry: &Value, now: MonthPoint) -> MonthPoint {
    if let Some(date) = entry.get("end_date").and_then(Value::as_str) {
        if let Some(point) = parse_month_year(date) {
            return point;
        }
    }
    match entry.get("end_year").and_then(Value::as_i64) {
        Some(year) => MonthPoint::new(year as i32, 12),
        None => now,
    }
}

/// Recompute total experience from the validated work-experience list.
pub fn recompute_experience(entries: &[Value], now: MonthPoint) -> f64 {
    let periods: Vec<(MonthPoint, MonthPoint)> = entries
        .iter()
        .filter_map(|entry| {
            let start = period_start(entry)?;
            let end = period_end(entry, now);
            Some((start, end))
        })
        .collect();
    if periods.is_empty() {
        return 0.0;
    }
    intervals::years_from_months(intervals::total_months(periods))
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build the structured result from a payload that already passed
/// [`validate_payload`].
pub fn resume_from_payload(payload: &Value, now: MonthPoint) -> ExtractedResume {
    let empty = Vec::new();
    let experience_values = payload
        .get("work_experience")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let work_experience: Vec<WorkExperienceEntry> = experience_values
        .iter()
        .map(|entry| WorkExperienceEntry {
            company: string_field(entry, "company"),
            position: string_field(entry, "title"),
            joining_year: entry
                .get("start_year")
                .and_then(Value::as_i64)
                .map(|y| y as i32),
            end_year: match entry.get("end_year") {
                Some(Value::Number(n)) => n.as_i64().map(|y| EndYear::Year(y as i32)),
                value if is_ongoing_marker(value) && entry.get("start_year").is_some() => {
                    Some(EndYear::Present)
                }
                _ => None,
            },
            description: string_field(entry, "description").unwrap_or_default(),
        })
        .collect();

    let education = payload
        .get("education")
        .and_then(Value::as_array)
        .unwrap_or(&empty)
        .iter()
        .map(|entry| {
            let degree = string_field(entry, "degree");
            EducationEntry {
                institution: string_field(entry, "school"),
                degree_type: degree.as_deref().and_then(DegreeType::from_degree_text),
                degree,
                year: entry.get("year").and_then(Value::as_i64).map(|y| y as i32),
            }
        })
        .collect();

    let skills: BTreeSet<String> = payload
        .get("skills")
        .and_then(Value::as_array)
        .unwrap_or(&empty)
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.to_lowercase())
        .collect();

    ExtractedResume {
        name: string_field(payload, "name"),
        email: string_field(payload, "email"),
        phone: string_field(payload, "phone"),
        // The model lists experience newest-first; its first entry's
        // title stands in for the current position.
        current_job_title: experience_values
            .first()
            .and_then(|entry| string_field(entry, "title")),
        years_of_experience: recompute_experience(experience_values, now),
        skills,
        work_experience,
        education,
        accolades: Vec::new(),
    }
}
