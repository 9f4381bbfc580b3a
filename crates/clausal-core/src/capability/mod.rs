mod classifier;
mod recognizer;
mod simplifier;
mod splitter;
mod terms;

use std::sync::Arc;

use thiserror::Error;

pub use classifier::{Classifier, KeywordClassifier, UNCLASSIFIED};
pub use recognizer::{EntityRecognizer, LabeledPattern, RuleBasedRecognizer};
pub use simplifier::{GlossarySimplifier, Simplifier};
pub use splitter::{SentenceSplitter, UnicodeSentenceSplitter};
pub use terms::TermDictionary;

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),
    #[error("capability call failed: {0}")]
    Failed(String),
}

pub type CapabilityResult<T> = Result<T, CapabilityError>;

// Shared, read-only handles with process-wide lifetime. Built once at startup
// and passed by reference through the pipeline; tests swap in stubs.
#[derive(Clone)]
pub struct Capabilities {
    pub splitter: Arc<dyn SentenceSplitter>,
    pub recognizer: Arc<dyn EntityRecognizer>,
    pub classifier: Arc<dyn Classifier>,
    pub simplifier: Arc<dyn Simplifier>,
    pub terms: Arc<TermDictionary>,
}

impl Capabilities {
    #[must_use]
    pub fn load() -> Self {
        Self {
            splitter: Arc::new(UnicodeSentenceSplitter::new()),
            recognizer: Arc::new(RuleBasedRecognizer::with_default_patterns()),
            classifier: Arc::new(KeywordClassifier::load()),
            simplifier: Arc::new(GlossarySimplifier::load()),
            terms: Arc::new(TermDictionary::builtin()),
        }
    }

    #[must_use]
    pub fn with_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_simplifier(mut self, simplifier: Arc<dyn Simplifier>) -> Self {
        self.simplifier = simplifier;
        self
    }

    #[must_use]
    pub fn with_terms(mut self, terms: Arc<TermDictionary>) -> Self {
        self.terms = terms;
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::load()
    }
}
