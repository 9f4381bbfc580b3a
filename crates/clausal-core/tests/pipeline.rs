use std::sync::Arc;

use clausal_core::{
    Capabilities, CapabilityError, CapabilityResult, Classifier, Pipeline, PipelineConfig,
    PipelineError, TermDictionary, UNCLASSIFIED,
};

const CONTRACT: &str = "Preamble.\n1.1 The Company shall pay $500.\n1.2 This Agreement may be terminated by either party.";

struct AlwaysFailingClassifier;

impl Classifier for AlwaysFailingClassifier {
    fn classify(&self, _text: &str) -> CapabilityResult<String> {
        Err(CapabilityError::Failed("classification model raised".into()))
    }
}

#[tokio::test]
async fn end_to_end_example() {
    let terms = TermDictionary::from_entries(vec![(
        "terminated".to_string(),
        "Brought to an end before its natural conclusion.".to_string(),
    )])
    .unwrap();

    let pipeline = Pipeline::new(Capabilities::load().with_terms(Arc::new(terms)));
    let result = pipeline.run_text(CONTRACT, None).await.unwrap();

    assert_eq!(result.clauses.len(), 2);

    let first = &result.clauses[0];
    let second = &result.clauses[1];

    assert!(first.text.starts_with("Preamble."));
    assert_eq!(first.number.as_deref(), Some("1.1"));
    assert!(!first.legal_terms.contains_key("terminated"));

    assert_eq!(second.number.as_deref(), Some("1.2"));
    assert!(second.legal_terms.contains_key("terminated"));
    assert!(!second.sentences.is_empty());
    assert!(!second.simplified_text.is_empty());
}

#[tokio::test]
async fn classifier_failure_does_not_abort_the_document() {
    let three_clauses = "1.1 The parties shall keep terms confidential. \
                         1.2 A breach may be remedied within 30 days. \
                         1.3 Disputes go to arbitration in Delaware.";

    let capabilities = Capabilities::load().with_classifier(Arc::new(AlwaysFailingClassifier));
    let pipeline = Pipeline::new(capabilities);

    let result = pipeline.run_text(three_clauses, None).await.unwrap();

    assert_eq!(result.clauses.len(), 3);
    for clause in &result.clauses {
        assert_eq!(clause.clause_type, UNCLASSIFIED);
        assert!(!clause.simplified_text.is_empty());
        assert!(!clause.sentences.is_empty());
    }

    // One recovered failure per clause, nothing fatal.
    assert_eq!(result.stats.soft_failures, 3);
    assert!(result.clauses[1].legal_terms.contains_key("breach"));
    assert!(result.clauses[2].legal_terms.contains_key("arbitration"));
}

#[tokio::test]
async fn whole_word_term_matching() {
    let pipeline = Pipeline::new(Capabilities::load());

    let result = pipeline
        .run_text("1.1 No breaches occurred. 1.2 A breach occurred.", None)
        .await
        .unwrap();

    assert!(!result.clauses[0].legal_terms.contains_key("breach"));
    assert!(result.clauses[1].legal_terms.contains_key("breach"));
}

#[tokio::test]
async fn zero_byte_document_fails_before_segmentation() {
    let pipeline = Pipeline::new(Capabilities::load());

    let err = pipeline
        .run_bytes(b"", clausal_core::DocumentFormat::PlainText, None)
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::EmptyDocument));
}

#[tokio::test]
async fn document_order_is_stable_regardless_of_completion_order() {
    let text: String = (1..=20)
        .map(|i| format!("5.{i} Obligation {i} binds the parties. "))
        .collect();

    let config = PipelineConfig {
        max_concurrent_clauses: 6,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(Capabilities::load()).with_config(config);

    for _ in 0..3 {
        let result = pipeline.run_text(&text, None).await.unwrap();
        let numbers: Vec<_> = result
            .clauses
            .iter()
            .filter_map(|c| c.number.clone())
            .collect();
        let expected: Vec<String> = (1..=20).map(|i| format!("5.{i}")).collect();
        assert_eq!(numbers, expected);
    }
}

#[tokio::test]
async fn staging_is_always_released() {
    let staging = tempfile::TempDir::new().unwrap();
    let config = PipelineConfig {
        staging_dir: staging.path().to_path_buf(),
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(Capabilities::load()).with_config(config);

    // Success path.
    pipeline
        .run_bytes(CONTRACT.as_bytes(), clausal_core::DocumentFormat::PlainText, None)
        .await
        .unwrap();
    assert_eq!(std::fs::read_dir(staging.path()).unwrap().count(), 0);

    // Extraction failure path: invalid UTF-8 for a plain text document.
    let err = pipeline
        .run_bytes(&[0xFF, 0xFE, 0x00], clausal_core::DocumentFormat::PlainText, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::ExtractionFailed(_)));
    assert_eq!(std::fs::read_dir(staging.path()).unwrap().count(), 0);

    // Structural failure path: no clause markers.
    let err = pipeline
        .run_bytes(b"prose without numbering", clausal_core::DocumentFormat::PlainText, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::NoClausesDetected));
    assert_eq!(std::fs::read_dir(staging.path()).unwrap().count(), 0);
}
