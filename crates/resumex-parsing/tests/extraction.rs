//! End-to-end extraction over realistic resume text.

use resumex_core::intervals::MonthPoint;
use resumex_parsing::{EndYear, ResumeExtractor};

fn now() -> MonthPoint {
    MonthPoint::new(2026, 8)
}

#[test]
fn minimal_resume_end_to_end() {
    let text = "John Smith\nEmail: john.smith@example.com\nSoftware Engineer at Acme from 2018 to 2021";
    let resume = ResumeExtractor::default().parse_text_at(text, now());

    assert_eq!(resume.name.as_deref(), Some("John Smith"));
    assert_eq!(resume.email.as_deref(), Some("john.smith@example.com"));
    assert_eq!(
        resume.current_job_title.as_deref(),
        Some("Software Engineer")
    );
    assert_eq!(resume.work_experience.len(), 1);
    assert_eq!(resume.work_experience[0].joining_year, Some(2018));
    assert_eq!(
        resume.work_experience[0].end_year,
        Some(EndYear::Year(2021))
    );
}

#[test]
fn stated_experience_beats_date_ranges() {
    let text = "Jane Doe\njane@corp.io\n7+ years of experience\n\
                Professional Experience\nAcme, Jan 2024 - Dec 2024";
    let resume = ResumeExtractor::default().parse_text_at(text, now());
    assert_eq!(resume.years_of_experience, 7.5);
}

#[test]
fn sectioned_resume_reconciles_overlapping_ranges() {
    let text = "Jane Doe\njane@corp.io\n\
                Professional Experience\n\
                Acme Corp, Jan 2018 - Dec 2019, backend work\n\
                Beta Inc, Jun 2019 - Mar 2021, platform work\n\
                Education\n\
                Bachelor of Science at Springfield University in 2014";
    let resume = ResumeExtractor::default().parse_text_at(text, now());

    // 39 merged months, overlap counted once.
    assert_eq!(resume.years_of_experience, 3.3);
    assert_eq!(resume.education.len(), 1);
    assert_eq!(resume.education[0].year, Some(2014));
}

#[test]
fn skills_are_deduplicated() {
    let text = "Polyglot: Python Python java and more python";
    let resume = ResumeExtractor::default().parse_text_at(text, now());
    let skills: Vec<&str> = resume.skills.iter().map(|s| s.as_str()).collect();
    assert_eq!(skills, vec!["java", "python"]);
}

#[test]
fn fields_degrade_to_absent_not_errors() {
    let resume = ResumeExtractor::default().parse_text_at("x", now());
    assert_eq!(resume.name, None);
    assert_eq!(resume.email, None);
    assert_eq!(resume.phone, None);
    assert_eq!(resume.current_job_title, None);
    assert_eq!(resume.years_of_experience, 0.0);
    assert!(resume.skills.is_empty());
    assert!(resume.work_experience.is_empty());
    assert!(resume.education.is_empty());
    assert!(resume.accolades.is_empty());
}
