mod analyze;
mod decompose;
mod extract;
mod normalize;
mod runner;
mod segment;

pub use analyze::{AnalysisOrchestrator, ClauseAnalysis};
pub use decompose::{ClauseDecomposer, Decomposition};
pub use extract::{
    CompositeExtractor, DocxExtractor, ExtractError, ExtractResult, PdfExtractor,
    PlainTextExtractor, TextExtractor,
};
pub use normalize::normalize;
pub use runner::{Pipeline, PipelineConfig};
pub use segment::{
    BoundaryDetector, MarkerSpan, NumberingDetector, SegmentError, SegmentResult, Segmenter,
};
