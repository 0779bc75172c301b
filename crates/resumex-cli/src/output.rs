use std::io::Write;

use owo_colors::OwoColorize;
use resumex_core::{EndYear, ExtractedResume};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the extracted resume as a human-readable summary.
pub fn print_resume(
    w: &mut dyn Write,
    resume: &ExtractedResume,
    color: ColorMode,
) -> std::io::Result<()> {
    let field = |w: &mut dyn Write, label: &str, value: Option<&str>| -> std::io::Result<()> {
        let value = value.unwrap_or("-");
        if color.enabled() {
            writeln!(w, "{:<12} {}", label.bold(), value)
        } else {
            writeln!(w, "{label:<12} {value}")
        }
    };

    field(w, "Name", resume.name.as_deref())?;
    field(w, "Email", resume.email.as_deref())?;
    field(w, "Phone", resume.phone.as_deref())?;
    field(w, "Title", resume.current_job_title.as_deref())?;
    writeln!(w, "{:<12} {}", "Experience", format_years(resume.years_of_experience))?;

    if !resume.skills.is_empty() {
        let skills: Vec<&str> = resume.skills.iter().map(|s| s.as_str()).collect();
        writeln!(w, "{:<12} {}", "Skills", skills.join(", "))?;
    }

    if !resume.work_experience.is_empty() {
        writeln!(w)?;
        writeln!(w, "Work experience:")?;
        for entry in &resume.work_experience {
            let company = entry.company.as_deref().unwrap_or("?");
            let position = entry.position.as_deref().unwrap_or("?");
            let span = format_span(entry.joining_year, entry.end_year);
            let line = format!("  {position} at {company} ({span})");
            if color.enabled() {
                writeln!(w, "{}", line)?;
                if !entry.description.is_empty() {
                    writeln!(w, "    {}", entry.description.dimmed())?;
                }
            } else {
                writeln!(w, "{line}")?;
                if !entry.description.is_empty() {
                    writeln!(w, "    {}", entry.description)?;
                }
            }
        }
    }

    if !resume.education.is_empty() {
        writeln!(w)?;
        writeln!(w, "Education:")?;
        for entry in &resume.education {
            let institution = entry.institution.as_deref().unwrap_or("?");
            let degree = entry.degree.as_deref().unwrap_or("?");
            match entry.year {
                Some(year) => writeln!(w, "  {degree}, {institution} ({year})")?,
                None => writeln!(w, "  {degree}, {institution}")?,
            }
        }
    }

    if !resume.accolades.is_empty() {
        writeln!(w)?;
        writeln!(w, "Accolades:")?;
        for entry in &resume.accolades {
            let span = match (entry.start_year, entry.end_year) {
                (Some(s), Some(e)) => format!("{s} - {e}"),
                (Some(s), None) => s.to_string(),
                _ => "-".to_string(),
            };
            if entry.url.is_empty() {
                writeln!(w, "  {span}")?;
            } else {
                writeln!(w, "  {} ({span})", entry.url)?;
            }
        }
    }

    Ok(())
}

fn format_years(years: f64) -> String {
    if years == 0.0 {
        "unknown".to_string()
    } else {
        format!("{years} years")
    }
}

fn format_span(joining: Option<i32>, end: Option<EndYear>) -> String {
    match (joining, end) {
        (Some(start), Some(EndYear::Year(end))) => format!("{start} - {end}"),
        (Some(start), Some(EndYear::Present)) => format!("{start} - present"),
        (Some(start), None) => format!("since {start}"),
        _ => "dates unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_contains_fields() {
        let mut resume = ExtractedResume::default();
        resume.name = Some("Jane Doe".to_string());
        resume.years_of_experience = 3.3;
        resume.skills.insert("python".to_string());

        let mut buf = Vec::new();
        print_resume(&mut buf, &resume, ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("3.3 years"));
        assert!(out.contains("python"));
    }

    #[test]
    fn test_span_formatting() {
        assert_eq!(format_span(Some(2018), Some(EndYear::Year(2021))), "2018 - 2021");
        assert_eq!(
            format_span(Some(2022), Some(EndYear::Present)),
            "2022 - present"
        );
        assert_eq!(format_span(Some(2022), None), "since 2022");
        assert_eq!(format_span(None, None), "dates unknown");
    }
}
