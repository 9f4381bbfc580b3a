use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::{ExtractError, SegmentError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source document not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("document contains no extractable text")]
    EmptyDocument,

    #[error("document does not contain standard numbered clauses")]
    NoClausesDetected,

    #[error("internal error: {0}")]
    Internal(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound(_) => ErrorKind::SourceNotFound,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::ExtractionFailed(_) => ErrorKind::ExtractionFailed,
            Self::EmptyDocument => ErrorKind::EmptyDocument,
            Self::NoClausesDetected => ErrorKind::NoClausesDetected,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    SourceNotFound,
    UnsupportedFormat,
    ExtractionFailed,
    EmptyDocument,
    NoClausesDetected,
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::UnsupportedFormat => "unsupported_format",
            Self::ExtractionFailed => "extraction_failed",
            Self::EmptyDocument => "empty_document",
            Self::NoClausesDetected => "no_clauses_detected",
            Self::Internal => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExtractError> for PipelineError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::SourceNotFound(path) => Self::SourceNotFound(path),
            ExtractError::UnsupportedFormat(format) => Self::UnsupportedFormat(format),
            ExtractError::Encoding(message) => {
                Self::ExtractionFailed(format!("encoding: {message}"))
            }
            ExtractError::Failed(message) => Self::ExtractionFailed(message),
        }
    }
}

impl From<SegmentError> for PipelineError {
    fn from(err: SegmentError) -> Self {
        match err {
            SegmentError::NoMarkers => Self::NoClausesDetected,
        }
    }
}
