pub mod capability;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod source;

pub use capability::{
    Capabilities, CapabilityError, CapabilityResult, Classifier, EntityRecognizer,
    GlossarySimplifier, KeywordClassifier, LabeledPattern, RuleBasedRecognizer, SentenceSplitter,
    Simplifier, TermDictionary, UnicodeSentenceSplitter, UNCLASSIFIED,
};
pub use error::{ErrorKind, PipelineError, PipelineResult};
pub use pipeline::{
    normalize, AnalysisOrchestrator, BoundaryDetector, ClauseAnalysis, ClauseDecomposer,
    CompositeExtractor, Decomposition, DocxExtractor, ExtractError, ExtractResult, MarkerSpan,
    NumberingDetector, PdfExtractor, Pipeline, PipelineConfig, PlainTextExtractor, SegmentError,
    SegmentResult, Segmenter, TextExtractor,
};
pub use record::{AnalysisResult, AnalysisStats, ClauseBlock, ClauseRecord, EntityMention};
pub use source::{DocumentFormat, DocumentSource};
