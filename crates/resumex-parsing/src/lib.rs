//! Heuristic resume field extraction.
//!
//! Takes flat resume text (see `resumex-ingest` for file handling) and
//! derives structured candidate fields through a layered chain of
//! pattern-matching heuristics: name, email, phone, current title,
//! years of experience, skills, work history, education, accolades.
//! Every extractor is rule-based and deterministic; a field that cannot
//! be found degrades to an absent value rather than an error.
//!
//! The entry point is [`ResumeExtractor`] (or [`parse_resume_text`] for
//! default settings):
//!
//! ```
//! use resumex_parsing::parse_resume_text;
//!
//! let resume = parse_resume_text(
//!     "John Smith\nEmail: john.smith@example.com\n\
//!      Software Engineer at Acme from 2018 to 2021",
//! );
//! assert_eq!(resume.name.as_deref(), Some("John Smith"));
//! assert_eq!(resume.email.as_deref(), Some("john.smith@example.com"));
//! ```

mod accolades;
mod annotator;
mod config;
mod dictionary;
mod education;
mod email;
mod experience;
mod extractor;
mod name;
mod phone;
mod sections;
mod skills;
mod title;

pub use annotator::RuleAnnotator;
pub use config::{ListOverride, ResumeParsingConfig, ResumeParsingConfigBuilder};
pub use extractor::{parse_resume_text, ResumeExtractor};

pub use resumex_core::{
    AccoladeEntry, DegreeType, EducationEntry, EndYear, ExtractedResume, WorkExperienceEntry,
};
