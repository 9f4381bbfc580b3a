use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capability::{CapabilityResult, EntityRecognizer, SentenceSplitter};
use crate::record::EntityMention;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decomposition {
    pub sentences: Vec<String>,
    pub entities: Vec<EntityMention>,
}

#[derive(Clone)]
pub struct ClauseDecomposer {
    splitter: Arc<dyn SentenceSplitter>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl ClauseDecomposer {
    #[must_use]
    pub fn new(splitter: Arc<dyn SentenceSplitter>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            splitter,
            recognizer,
        }
    }

    pub fn decompose(&self, text: &str) -> CapabilityResult<Decomposition> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Decomposition::default());
        }

        let mut sentences = self.splitter.split(trimmed)?;
        if sentences.is_empty() {
            sentences.push(trimmed.to_string());
        }

        let mut entities = self.recognizer.recognize(trimmed)?;
        entities.sort();
        entities.dedup();

        Ok(Decomposition {
            sentences,
            entities,
        })
    }
}
