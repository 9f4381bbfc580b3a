use unicode_segmentation::UnicodeSegmentation;

use super::CapabilityResult;

pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> CapabilityResult<Vec<String>>;
}

pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnicodeSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> CapabilityResult<Vec<String>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let sentences: Vec<String> = trimmed
            .unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // A clause without detectable boundaries is one sentence.
        if sentences.is_empty() {
            return Ok(vec![trimmed.to_string()]);
        }

        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_sentences() {
        let splitter = UnicodeSentenceSplitter::new();
        let sentences = splitter
            .split("The Client shall pay within 30 days. Late payments accrue interest.")
            .unwrap();

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("The Client"));
        assert!(sentences[1].starts_with("Late payments"));
    }

    #[test]
    fn test_split_no_boundary_falls_back_to_input() {
        let splitter = UnicodeSentenceSplitter::new();
        let sentences = splitter.split("  governing law of the State of Delaware  ").unwrap();

        assert_eq!(sentences, vec!["governing law of the State of Delaware".to_string()]);
    }

    #[test]
    fn test_split_empty_input() {
        let splitter = UnicodeSentenceSplitter::new();
        assert!(splitter.split("   ").unwrap().is_empty());
    }
}
