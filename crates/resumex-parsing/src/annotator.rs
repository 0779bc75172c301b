use once_cell::sync::Lazy;
use regex::Regex;
use resumex_core::annotate::{Annotator, EntityLabel, EntitySpan, Sentence, SentenceView};

/// Sentence boundaries: a terminator followed by whitespace, or any
/// newline run. Abbreviations like "B.S." will over-split; the field
/// extractors tolerate that.
static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+|\n+").expect("static regex"));

/// Words that disqualify a short capitalized line from being read as a
/// person name (section headers, title vocabulary, boilerplate).
static NON_NAME_WORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "profile",
    "projects",
    "certifications",
    "accolades",
    "contact",
    "information",
    "details",
    "resume",
    "curriculum",
    "vitae",
    "engineer",
    "developer",
    "manager",
    "analyst",
    "scientist",
    "architect",
    "consultant",
    "designer",
];

/// Rule-based sentence segmenter and person-name recognizer.
///
/// This is the default [`Annotator`]: it needs no model files and is
/// deterministic. A short line of capitalized alphabetic tokens that
/// carries no header/title vocabulary is labeled as a person span —
/// resumes put the candidate's name on such a line almost universally.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> RuleAnnotator {
        RuleAnnotator
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> SentenceView {
        let mut sentences = Vec::new();
        let mut cursor = 0usize;

        for brk in SENTENCE_BREAK_RE.find_iter(text) {
            push_sentence(&mut sentences, text, cursor, brk.start());
            cursor = brk.end();
        }
        push_sentence(&mut sentences, text, cursor, text.len());

        SentenceView { sentences }
    }
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (raw.len() - raw.trim_start().len());
    let entities = person_span(trimmed, offset);
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start: offset,
        entities,
    });
}

/// Label the whole sentence as a person if it reads like a bare name:
/// 2–4 capitalized alphabetic tokens and no header/title vocabulary.
fn person_span(sentence: &str, offset: usize) -> Vec<EntitySpan> {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return Vec::new();
    }
    if !tokens.iter().all(|t| looks_like_name_token(t)) {
        return Vec::new();
    }
    let lower = sentence.to_lowercase();
    if NON_NAME_WORDS.iter().any(|w| lower.contains(w)) {
        return Vec::new();
    }
    vec![EntitySpan {
        label: EntityLabel::Person,
        text: sentence.to_string(),
        start: offset,
        end: offset + sentence.len(),
    }]
}

fn looks_like_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphabetic() || c == '.'),
        _ => false,
    }
}
