use std::collections::BTreeMap;
use std::sync::Arc;

use crate::capability::{
    Classifier, SentenceSplitter, Simplifier, TermDictionary, UNCLASSIFIED,
};

#[derive(Debug, Clone)]
pub struct ClauseAnalysis {
    pub clause_type: String,
    pub simplified_text: String,
    pub legal_terms: BTreeMap<String, String>,
    pub soft_failures: u32,
}

// Runs the three independent analyses for one clause. A failure in any one of
// them downgrades that field and leaves the other two untouched.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    classifier: Arc<dyn Classifier>,
    simplifier: Arc<dyn Simplifier>,
    splitter: Arc<dyn SentenceSplitter>,
    terms: Arc<TermDictionary>,
    max_simplified_len: usize,
}

impl AnalysisOrchestrator {
    #[must_use]
    pub fn new(
        classifier: Arc<dyn Classifier>,
        simplifier: Arc<dyn Simplifier>,
        splitter: Arc<dyn SentenceSplitter>,
        terms: Arc<TermDictionary>,
    ) -> Self {
        Self {
            classifier,
            simplifier,
            splitter,
            terms,
            max_simplified_len: 60,
        }
    }

    #[must_use]
    pub fn with_max_simplified_len(mut self, max_len: usize) -> Self {
        self.max_simplified_len = max_len;
        self
    }

    pub fn analyze(&self, text: &str) -> ClauseAnalysis {
        let mut soft_failures = 0;

        let clause_type = match self.classifier.classify(text) {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(error = %e, "classification failed, marking clause unclassified");
                soft_failures += 1;
                UNCLASSIFIED.to_string()
            }
        };

        let simplified_text = match self.splitter.split(text) {
            Ok(sentences) => {
                let mut rewritten = Vec::with_capacity(sentences.len());
                for sentence in &sentences {
                    match self.simplifier.rewrite(sentence, self.max_simplified_len) {
                        Ok(simple) if !simple.is_empty() => rewritten.push(simple),
                        Ok(_) => {}
                        Err(e) => {
                            // Best effort: the failed sentence is dropped from
                            // the rewrite, not from the clause.
                            tracing::warn!(error = %e, "simplification failed, dropping sentence");
                            soft_failures += 1;
                        }
                    }
                }
                rewritten.join(" ")
            }
            Err(e) => {
                tracing::warn!(error = %e, "sentence split failed, skipping simplification");
                soft_failures += 1;
                String::new()
            }
        };

        let legal_terms = self.terms.find_in(text);

        ClauseAnalysis {
            clause_type,
            simplified_text,
            legal_terms,
            soft_failures,
        }
    }
}
