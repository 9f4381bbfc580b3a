use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::source::DocumentSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseBlock {
    pub index: usize,
    pub number: Option<String>,
    pub text: String,
}

impl ClauseBlock {
    #[must_use]
    pub fn new(index: usize, number: Option<String>, text: String) -> Self {
        Self { index, number, text }
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityMention {
    pub text: String,
    pub label: String,
}

impl EntityMention {
    #[must_use]
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseRecord {
    pub index: usize,
    pub number: Option<String>,
    pub text: String,
    pub sentences: Vec<String>,
    pub entities: Vec<EntityMention>,
    pub clause_type: String,
    pub simplified_text: String,
    pub legal_terms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub clause_count: usize,
    pub sentence_count: usize,
    pub entity_count: usize,
    pub soft_failures: u32,
    pub duration_ms: u64,
}

impl AnalysisStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub source: DocumentSource,
    pub clauses: Vec<ClauseRecord>,
    pub stats: AnalysisStats,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &ClauseRecord> {
        self.clauses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_mention_ordering() {
        let mut mentions = vec![
            EntityMention::new("$500", "MONEY"),
            EntityMention::new("30 days", "DURATION"),
            EntityMention::new("$500", "MONEY"),
        ];

        mentions.sort();
        mentions.dedup();

        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].text, "$500");
    }

    #[test]
    fn test_clause_block_trimmed() {
        let block = ClauseBlock::new(0, Some("1.1".into()), "  1.1 Payment terms.  ".into());
        assert_eq!(block.trimmed(), "1.1 Payment terms.");
    }

    #[test]
    fn test_clause_record_serializes() {
        let record = ClauseRecord {
            index: 0,
            number: Some("1.1".into()),
            text: "1.1 A breach occurred.".into(),
            sentences: vec!["1.1 A breach occurred.".into()],
            entities: vec![EntityMention::new("30 days", "DURATION")],
            clause_type: "Termination".into(),
            simplified_text: "1.1 A breach occurred.".into(),
            legal_terms: BTreeMap::from([("breach".to_string(), "A violation.".to_string())]),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["number"], "1.1");
        assert_eq!(json["legal_terms"]["breach"], "A violation.");
        assert_eq!(json["entities"][0]["label"], "DURATION");
    }
}
