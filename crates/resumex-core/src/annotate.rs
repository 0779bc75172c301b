/// Label attached to a recognized text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
}

/// A labeled entity with byte offsets into the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// One sentence of the source text, with any entities found inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    /// Byte offset of the sentence start in the source text.
    pub start: usize,
    pub entities: Vec<EntitySpan>,
}

/// An annotated, read-only view of one document: sentences in document
/// order, each possibly carrying entity spans. Produced once per parse
/// and shared by all field extractors; no extractor mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceView {
    pub sentences: Vec<Sentence>,
}

impl SentenceView {
    /// All person entities across the view, in document order.
    pub fn persons(&self) -> impl Iterator<Item = &EntitySpan> {
        self.sentences
            .iter()
            .flat_map(|s| s.entities.iter())
            .filter(|e| e.label == EntityLabel::Person)
    }
}

/// Trait for sentence segmentation and entity annotation.
///
/// The annotation step is an external capability the extraction core
/// depends on but does not own. Keeping it behind this seam lets the
/// heuristic extractors run against synthetic annotations in tests,
/// decoupled from any specific NLP engine.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> SentenceView;
}
