use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod annotate;
pub mod intervals;

// Re-export for convenience
pub use annotate::{Annotator, EntityLabel, EntitySpan, Sentence, SentenceView};
pub use intervals::{merge_periods, years_from_months, MonthPoint};

/// End marker of a work-experience entry: either a concrete year or an
/// ongoing position ("present", "till date", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndYear {
    Present,
    #[serde(untagged)]
    Year(i32),
}

impl EndYear {
    /// The concrete year, if this is not an ongoing position.
    pub fn year(self) -> Option<i32> {
        match self {
            EndYear::Year(y) => Some(y),
            EndYear::Present => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, EndYear::Present)
    }
}

/// Degree category of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeType {
    UnderGrad,
    Grad,
    PostGrad,
    Phd,
}

impl DegreeType {
    /// Map a free-text degree description to a category.
    ///
    /// Mirrors the categories the persistence layer stores: bachelor-level
    /// degrees map to `UnderGrad`, master-level to `Grad`, explicit
    /// postgraduate wording to `PostGrad`, doctoral to `Phd`.
    pub fn from_degree_text(degree: &str) -> Option<DegreeType> {
        let d = degree.to_lowercase();
        let any = |words: &[&str]| words.iter().any(|w| d.contains(w));
        if any(&["phd", "doctoral", "doctorate", "d.phil"]) {
            Some(DegreeType::Phd)
        } else if any(&["post_grad", "postgraduate"]) {
            Some(DegreeType::PostGrad)
        } else if any(&["master", "msc", "m.s.", "m.tech", "graduate"]) {
            Some(DegreeType::Grad)
        } else if any(&["bachelor", "bsc", "b.s.", "b.tech", "undergraduate"]) {
            Some(DegreeType::UnderGrad)
        } else {
            None
        }
    }
}

/// One work-experience entry, in order of appearance in the resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub joining_year: Option<i32>,
    pub end_year: Option<EndYear>,
    pub description: String,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub degree_type: Option<DegreeType>,
    pub year: Option<i32>,
}

/// One accolade/certification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccoladeEntry {
    pub url: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// The structured result of one resume parse.
///
/// This is the sole artifact handed to callers; it owns nothing beyond its
/// own fields. Invariants: `years_of_experience >= 0`; `skills` is
/// deduplicated; year fields, when present, are 4-digit years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtractedResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub current_job_title: Option<String>,
    pub years_of_experience: f64,
    pub skills: BTreeSet<String>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub accolades: Vec<AccoladeEntry>,
}

/// Error from a text-extraction or model backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("model request failed: {0}")]
    RequestError(String),
}

/// The checked failure kinds of the extraction pipeline.
///
/// Individual field extractors never raise — a field that cannot be found
/// degrades to `None`/empty. Only an unreadable/unrecognized document or a
/// schema violation in the model-assisted path aborts a parse.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("invalid resume data: {0}")]
    InvalidResumeData(String),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level per-file text extraction step; the
/// parsing pipeline (sentence annotation, field extraction, experience
/// reconciliation) lives in `resumex-parsing`.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF document.
    ///
    /// Pages that fail to yield text must contribute an empty string
    /// rather than failing the whole document.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_year_serde() {
        let y: EndYear = serde_json::from_str("2021").unwrap();
        assert_eq!(y, EndYear::Year(2021));
        let p: EndYear = serde_json::from_str("\"present\"").unwrap();
        assert_eq!(p, EndYear::Present);
        assert_eq!(serde_json::to_string(&EndYear::Year(2021)).unwrap(), "2021");
        assert_eq!(
            serde_json::to_string(&EndYear::Present).unwrap(),
            "\"present\""
        );
    }

    #[test]
    fn test_degree_type_mapping() {
        assert_eq!(
            DegreeType::from_degree_text("Bachelor of Science"),
            Some(DegreeType::UnderGrad)
        );
        assert_eq!(
            DegreeType::from_degree_text("M.Tech"),
            Some(DegreeType::Grad)
        );
        assert_eq!(
            DegreeType::from_degree_text("Postgraduate Diploma"),
            Some(DegreeType::PostGrad)
        );
        assert_eq!(DegreeType::from_degree_text("PhD"), Some(DegreeType::Phd));
        assert_eq!(DegreeType::from_degree_text("diploma"), None);
    }

    #[test]
    fn test_degree_type_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&DegreeType::UnderGrad).unwrap(),
            "\"under_grad\""
        );
    }

    #[test]
    fn test_extracted_resume_roundtrip() {
        let mut resume = ExtractedResume::default();
        resume.name = Some("John Smith".into());
        resume.skills.insert("python".into());
        resume.skills.insert("java".into());
        let json = serde_json::to_string(&resume).unwrap();
        let back: ExtractedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}
