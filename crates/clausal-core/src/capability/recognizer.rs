use regex::Regex;

use super::CapabilityResult;
use crate::record::EntityMention;

pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> CapabilityResult<Vec<EntityMention>>;
}

pub struct LabeledPattern {
    pub label: String,
    pub regex: Regex,
}

impl LabeledPattern {
    pub fn new(label: &str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label: label.to_string(),
            regex: Regex::new(pattern)?,
        })
    }
}

pub struct RuleBasedRecognizer {
    patterns: Vec<LabeledPattern>,
}

impl RuleBasedRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: LabeledPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    #[must_use]
    pub fn with_default_patterns() -> Self {
        let mut recognizer = Self::new();

        let defaults = [
            ("MONEY", r"\$\s?\d[\d,]*(?:\.\d{1,2})?"),
            ("PERCENT", r"\b\d+(?:\.\d+)?\s?%"),
            (
                "DATE",
                r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
            ),
            ("DURATION", r"\b\d+\s+(?:day|week|month|year)s?\b"),
            (
                "ORG",
                r"\b(?:[A-Z][A-Za-z]+\s+)+(?:Inc|LLC|Ltd|Corp|Co|Company|Corporation)\b\.?",
            ),
        ];

        for (label, pattern) in defaults {
            if let Ok(p) = LabeledPattern::new(label, pattern) {
                recognizer.patterns.push(p);
            }
        }

        recognizer
    }
}

impl Default for RuleBasedRecognizer {
    fn default() -> Self {
        Self::with_default_patterns()
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> CapabilityResult<Vec<EntityMention>> {
        let mut mentions = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                mentions.push(EntityMention::new(found.as_str(), pattern.label.as_str()));
            }
        }

        mentions.sort();
        mentions.dedup();

        Ok(mentions)
    }
}
