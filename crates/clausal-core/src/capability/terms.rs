use std::collections::BTreeMap;

use regex::Regex;

const BUILTIN_TERMS: &[(&str, &str)] = &[
    (
        "arbitration",
        "A method of resolving disputes outside the courts.",
    ),
    (
        "breach",
        "A violation of a law, duty, or other form of obligation.",
    ),
    (
        "force majeure",
        "Unforeseeable circumstances that prevent someone from fulfilling a contract.",
    ),
    (
        "indemnity",
        "Security or protection against a loss or other financial burden.",
    ),
    (
        "jurisdiction",
        "The official power to make legal decisions and judgments.",
    ),
];

struct TermEntry {
    term: String,
    definition: String,
    pattern: Regex,
}

// Immutable term-to-definition mapping. Entries are kept sorted by term so
// matches always come back in the same order.
pub struct TermDictionary {
    entries: Vec<TermEntry>,
}

impl TermDictionary {
    pub fn from_entries<I>(entries: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut built: Vec<TermEntry> = Vec::new();

        for (term, definition) in entries {
            let pattern = Self::whole_word_pattern(&term)?;
            built.push(TermEntry {
                term,
                definition,
                pattern,
            });
        }

        built.sort_by(|a, b| a.term.cmp(&b.term));
        built.dedup_by(|a, b| a.term == b.term);

        Ok(Self { entries: built })
    }

    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = Vec::new();

        for (term, definition) in BUILTIN_TERMS {
            if let Ok(pattern) = Self::whole_word_pattern(term) {
                entries.push(TermEntry {
                    term: (*term).to_string(),
                    definition: (*definition).to_string(),
                    pattern,
                });
            }
        }

        Self { entries }
    }

    // Whole words only: "breach" must not match inside "breaches".
    fn whole_word_pattern(term: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
    }

    #[must_use]
    pub fn find_in(&self, text: &str) -> BTreeMap<String, String> {
        let mut found = BTreeMap::new();

        for entry in &self.entries {
            if entry.pattern.is_match(text) {
                found.insert(entry.term.clone(), entry.definition.clone());
            }
        }

        found
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.term.as_str(), e.definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
