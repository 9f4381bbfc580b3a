use super::CapabilityResult;

pub const UNCLASSIFIED: &str = "Unclassified";

pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> CapabilityResult<String>;
}

// Keyword-scored stand-in for a fine-tuned clause classification model. The
// label set matches the categories the model head was trained on.
pub struct KeywordClassifier {
    categories: Vec<(&'static str, Vec<&'static str>)>,
}

impl KeywordClassifier {
    #[must_use]
    pub fn load() -> Self {
        Self {
            categories: vec![
                (
                    "Confidentiality",
                    vec!["confidential", "non-disclosure", "nondisclosure", "disclose", "proprietary"],
                ),
                (
                    "Termination",
                    vec!["terminate", "termination", "expire", "expiration"],
                ),
                (
                    "Indemnity",
                    vec!["indemnif", "hold harmless", "liability", "liabilities"],
                ),
                (
                    "Dispute Resolution",
                    vec!["arbitration", "arbitrator", "dispute", "mediation"],
                ),
                (
                    "Governing Law",
                    vec!["governing law", "governed by", "laws of", "jurisdiction"],
                ),
            ],
        }
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> CapabilityResult<String> {
        let haystack = text.to_lowercase();

        let mut best: Option<(&str, usize)> = None;
        for (label, keywords) in &self.categories {
            let score: usize = keywords.iter().map(|k| haystack.matches(k).count()).sum();
            if score == 0 {
                continue;
            }
            // Ties resolve to the first category in declaration order.
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((label, score)),
            }
        }

        Ok(best.map_or_else(|| UNCLASSIFIED.to_string(), |(label, _)| label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_termination() {
        let classifier = KeywordClassifier::load();
        let label = classifier
            .classify("Either party may terminate this Agreement upon written notice.")
            .unwrap();

        assert_eq!(label, "Termination");
    }

    #[test]
    fn test_classify_indemnity() {
        let classifier = KeywordClassifier::load();
        let label = classifier
            .classify("The Lessee shall indemnify and hold harmless the Lessor from any liability.")
            .unwrap();

        assert_eq!(label, "Indemnity");
    }

    #[test]
    fn test_classify_no_signal() {
        let classifier = KeywordClassifier::load();
        let label = classifier.classify("The Company shall pay $500.").unwrap();

        assert_eq!(label, UNCLASSIFIED);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = KeywordClassifier::load();
        let text = "Any dispute shall be settled by arbitration under the laws of Delaware.";

        assert_eq!(classifier.classify(text).unwrap(), classifier.classify(text).unwrap());
    }
}
