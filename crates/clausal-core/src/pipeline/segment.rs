use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::record::ClauseBlock;

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("no numbered clause markers detected")]
    NoMarkers,
}

pub type SegmentResult<T> = Result<T, SegmentError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    pub start: usize,
    pub end: usize,
    pub number: String,
}

pub trait BoundaryDetector: Send + Sync {
    fn find(&self, text: &str) -> Vec<MarkerSpan>;
}

// Markers such as "1.1 ", "2.3.4) " or "10.2. ": one or two digits, one or
// more dotted groups, an optional ')' or '.', then whitespace.
static CLAUSE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}(?:\.\d{1,2})+[.)]?)\s").unwrap());

pub struct NumberingDetector;

impl NumberingDetector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NumberingDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryDetector for NumberingDetector {
    fn find(&self, text: &str) -> Vec<MarkerSpan> {
        CLAUSE_MARKER
            .captures_iter(text)
            .filter_map(|cap| {
                cap.get(1).map(|m| MarkerSpan {
                    start: m.start(),
                    end: m.end(),
                    number: m.as_str().trim_end_matches(['.', ')']).to_string(),
                })
            })
            .collect()
    }
}

pub struct Segmenter {
    detector: Box<dyn BoundaryDetector>,
}

impl Segmenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: Box::new(NumberingDetector::new()),
        }
    }

    #[must_use]
    pub fn with_detector(detector: Box<dyn BoundaryDetector>) -> Self {
        Self { detector }
    }

    pub fn segment(&self, text: &str) -> SegmentResult<Vec<ClauseBlock>> {
        let markers = self.detector.find(text);
        if markers.is_empty() {
            return Err(SegmentError::NoMarkers);
        }

        let mut blocks = Vec::with_capacity(markers.len());
        for (i, marker) in markers.iter().enumerate() {
            // Preamble text before the first marker stays attached to the
            // first block.
            let start = if i == 0 { 0 } else { marker.start };
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);

            let span = &text[start..end];
            if span.trim().is_empty() {
                continue;
            }

            blocks.push(ClauseBlock::new(
                blocks.len(),
                Some(marker.number.clone()),
                span.to_string(),
            ));
        }

        Ok(blocks)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
