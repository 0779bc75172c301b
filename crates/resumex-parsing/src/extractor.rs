use resumex_core::annotate::Annotator;
use resumex_core::intervals::MonthPoint;
use resumex_core::ExtractedResume;
use tracing::debug;

use crate::annotator::RuleAnnotator;
use crate::config::ResumeParsingConfig;
use crate::{accolades, education, email, experience, name, phone, skills, title};

/// Heuristic resume extraction facade.
///
/// Holds the configuration and the annotator; each [`parse_text`]
/// invocation owns its own sentence view and intermediate state, so one
/// extractor can serve concurrent parses.
///
/// [`parse_text`]: ResumeExtractor::parse_text
pub struct ResumeExtractor {
    config: ResumeParsingConfig,
    annotator: Box<dyn Annotator>,
}

impl ResumeExtractor {
    pub fn new(config: ResumeParsingConfig) -> ResumeExtractor {
        ResumeExtractor {
            config,
            annotator: Box::new(RuleAnnotator::new()),
        }
    }

    /// Replace the default rule-based annotator, e.g. with one backed by
    /// an NLP engine.
    pub fn with_annotator(mut self, annotator: Box<dyn Annotator>) -> ResumeExtractor {
        self.annotator = annotator;
        self
    }

    /// Run every field extractor over the flat text and assemble the
    /// structured result. Field-level misses degrade to absent values;
    /// this never fails.
    pub fn parse_text(&self, text: &str) -> ExtractedResume {
        self.parse_text_at(text, MonthPoint::now())
    }

    /// Like [`parse_text`](Self::parse_text) with an explicit "current
    /// month", so ongoing date ranges resolve deterministically in tests.
    pub fn parse_text_at(&self, text: &str, now: MonthPoint) -> ExtractedResume {
        let view = self.annotator.annotate(text);
        debug!(sentences = view.sentences.len(), "annotated resume text");

        let work_experience = experience::extract_work_experience(&view, &self.config);
        let resume = ExtractedResume {
            name: name::extract_name(&view, &self.config),
            email: email::extract_email(text),
            phone: phone::extract_phone(text, &self.config),
            current_job_title: title::extract_current_job_title(
                text,
                &work_experience,
                &self.config,
            ),
            years_of_experience: experience::years_of_experience(text, &self.config, now),
            skills: skills::extract_skills(text, &self.config),
            education: education::extract_education(&view),
            accolades: accolades::extract_accolades(&view),
            work_experience,
        };
        debug!(
            name_found = resume.name.is_some(),
            email_found = resume.email.is_some(),
            entries = resume.work_experience.len(),
            years = resume.years_of_experience,
            "resume fields extracted"
        );
        resume
    }
}

impl Default for ResumeExtractor {
    fn default() -> ResumeExtractor {
        ResumeExtractor::new(ResumeParsingConfig::default())
    }
}

/// Parse flat resume text with the default configuration and annotator.
pub fn parse_resume_text(text: &str) -> ExtractedResume {
    ResumeExtractor::default().parse_text(text)
}
