use once_cell::sync::Lazy;
use regex::Regex;

use super::CapabilityResult;

pub trait Simplifier: Send + Sync {
    fn rewrite(&self, text: &str, max_len: usize) -> CapabilityResult<String>;
}

// Longer phrases come before their substrings so "shall not" rewrites before
// "shall" can touch it.
const GLOSSARY: &[(&str, &str)] = &[
    ("notwithstanding anything to the contrary contained herein", "despite anything else in this document"),
    ("notwithstanding", "despite"),
    ("in the event that", "if"),
    ("in the event of", "if there is"),
    ("prior to", "before"),
    ("subsequent to", "after"),
    ("pursuant to", "under"),
    ("hereinafter", "from now on"),
    ("herein", "in this document"),
    ("hereto", "to this document"),
    ("hereof", "of this document"),
    ("thereof", "of it"),
    ("therein", "in it"),
    ("forthwith", "immediately"),
    ("indemnify and hold harmless", "protect and compensate"),
    ("indemnify", "compensate"),
    ("null and void", "invalid"),
    ("shall not", "must not"),
    ("shall", "must"),
];

static GLOSSARY_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    GLOSSARY
        .iter()
        .map(|(phrase, plain)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
            (Regex::new(&pattern).unwrap(), *plain)
        })
        .collect()
});

// Deterministic stand-in for a beam-search text simplification model:
// word-boundary phrase substitution followed by a word-count cap.
pub struct GlossarySimplifier;

impl GlossarySimplifier {
    #[must_use]
    pub fn load() -> Self {
        Self
    }
}

impl Simplifier for GlossarySimplifier {
    fn rewrite(&self, text: &str, max_len: usize) -> CapabilityResult<String> {
        let mut rewritten = text.trim().to_string();

        for (pattern, plain) in GLOSSARY_RULES.iter() {
            rewritten = pattern.replace_all(&rewritten, *plain).into_owned();
        }

        let words: Vec<&str> = rewritten.split_whitespace().collect();
        if max_len > 0 && words.len() > max_len {
            rewritten = words[..max_len].join(" ");
        } else {
            rewritten = words.join(" ");
        }

        Ok(rewritten)
    }
}
