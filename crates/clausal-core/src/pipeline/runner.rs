use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use uuid::Uuid;

use super::analyze::AnalysisOrchestrator;
use super::decompose::{ClauseDecomposer, Decomposition};
use super::extract::{CompositeExtractor, TextExtractor};
use super::normalize::normalize;
use super::segment::Segmenter;
use crate::capability::Capabilities;
use crate::error::{PipelineError, PipelineResult};
use crate::record::{AnalysisResult, AnalysisStats, ClauseBlock, ClauseRecord};
use crate::source::{DocumentFormat, DocumentSource};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub staging_dir: PathBuf,
    pub max_simplified_len: usize,
    pub max_concurrent_clauses: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            staging_dir: std::env::temp_dir().join("clausal-staging"),
            max_simplified_len: 60,
            max_concurrent_clauses: 4,
        }
    }
}

pub struct Pipeline {
    extractor: Arc<dyn TextExtractor>,
    segmenter: Segmenter,
    capabilities: Capabilities,
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            extractor: Arc::new(CompositeExtractor::default()),
            segmenter: Segmenter::new(),
            capabilities,
            config: PipelineConfig::default(),
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    #[must_use]
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn run_file(&self, path: &Path) -> PipelineResult<AnalysisResult> {
        // Read before classifying the extension: a missing or unreadable file
        // reports as missing even when its extension is also unknown.
        let data = tokio::fs::read(path)
            .await
            .map_err(|_| PipelineError::SourceNotFound(path.to_path_buf()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| PipelineError::UnsupportedFormat("missing extension".into()))?;

        let format = DocumentFormat::from_extension(ext)
            .ok_or_else(|| PipelineError::UnsupportedFormat(ext.to_lowercase()))?;

        let file_name = path.file_name().and_then(|n| n.to_str()).map(String::from);

        self.run_bytes(&data, format, file_name).await
    }

    pub async fn run_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
        file_name: Option<String>,
    ) -> PipelineResult<AnalysisResult> {
        let started = Instant::now();

        tokio::fs::create_dir_all(&self.config.staging_dir)
            .await
            .map_err(|e| PipelineError::Internal(format!("staging directory: {e}")))?;

        // The staged copy is removed when the guard drops, on every exit path.
        let staged = tempfile::Builder::new()
            .prefix("clausal-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(&self.config.staging_dir)
            .map_err(|e| PipelineError::Internal(format!("staging file: {e}")))?;

        tokio::fs::write(staged.path(), data)
            .await
            .map_err(|e| PipelineError::Internal(format!("staging write: {e}")))?;

        let raw = self.extractor.extract(staged.path(), format).await?;
        drop(staged);

        let mut source = DocumentSource::new(format)
            .with_hash(content_hash(&raw))
            .with_byte_len(data.len() as u64);
        if let Some(name) = file_name {
            source = source.with_file_name(name);
        }

        self.analyze_text(&raw, source, started).await
    }

    pub async fn run_text(
        &self,
        text: &str,
        title: Option<String>,
    ) -> PipelineResult<AnalysisResult> {
        let started = Instant::now();

        let mut source =
            DocumentSource::new(DocumentFormat::PlainText).with_hash(content_hash(text));
        if let Some(title) = title {
            source = source.with_file_name(title);
        }

        self.analyze_text(text, source, started).await
    }

    async fn analyze_text(
        &self,
        raw: &str,
        source: DocumentSource,
        started: Instant,
    ) -> PipelineResult<AnalysisResult> {
        if raw.trim().is_empty() {
            return Err(PipelineError::EmptyDocument);
        }

        let text = normalize(raw);
        let blocks = self.segmenter.segment(&text)?;
        if blocks.is_empty() {
            return Err(PipelineError::NoClausesDetected);
        }

        tracing::debug!(clauses = blocks.len(), "segmented document");

        let decomposer = ClauseDecomposer::new(
            Arc::clone(&self.capabilities.splitter),
            Arc::clone(&self.capabilities.recognizer),
        );
        let orchestrator = AnalysisOrchestrator::new(
            Arc::clone(&self.capabilities.classifier),
            Arc::clone(&self.capabilities.simplifier),
            Arc::clone(&self.capabilities.splitter),
            Arc::clone(&self.capabilities.terms),
        )
        .with_max_simplified_len(self.config.max_simplified_len);

        // Clauses are independent: fan out index-tagged, gather, restore
        // document order before assembly.
        let clause_count = blocks.len();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_clauses.max(1)));
        let mut tasks: JoinSet<(usize, ClauseRecord, u32)> = JoinSet::new();

        for block in blocks {
            let decomposer = decomposer.clone();
            let orchestrator = orchestrator.clone();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                analyze_clause(&decomposer, &orchestrator, block)
            });
        }

        let mut slots: Vec<Option<ClauseRecord>> = vec![None; clause_count];
        let mut soft_failures = 0;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, record, clause_soft_failures)) => {
                    soft_failures += clause_soft_failures;
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(record);
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "clause analysis task failed");
                    return Err(PipelineError::Internal(format!(
                        "clause analysis task failed: {e}"
                    )));
                }
            }
        }

        let clauses: Vec<ClauseRecord> = slots.into_iter().flatten().collect();

        let stats = AnalysisStats {
            clause_count: clauses.len(),
            sentence_count: clauses.iter().map(|c| c.sentences.len()).sum(),
            entity_count: clauses.iter().map(|c| c.entities.len()).sum(),
            soft_failures,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        tracing::info!(
            clauses = stats.clause_count,
            soft_failures = stats.soft_failures,
            duration_ms = stats.duration_ms,
            "document analysis complete"
        );

        Ok(AnalysisResult {
            id: Uuid::now_v7(),
            source,
            clauses,
            stats,
            analyzed_at: Utc::now(),
        })
    }
}

fn analyze_clause(
    decomposer: &ClauseDecomposer,
    orchestrator: &AnalysisOrchestrator,
    block: ClauseBlock,
) -> (usize, ClauseRecord, u32) {
    let index = block.index;
    let text = block.trimmed().to_string();
    let mut soft_failures = 0;

    let decomposition = match decomposer.decompose(&text) {
        Ok(decomposition) => decomposition,
        Err(e) => {
            tracing::warn!(clause = index, error = %e, "decomposition failed, emitting bare clause");
            soft_failures += 1;
            Decomposition::default()
        }
    };

    let analysis = orchestrator.analyze(&text);
    soft_failures += analysis.soft_failures;

    let record = ClauseRecord {
        index,
        number: block.number,
        text,
        sentences: decomposition.sentences,
        entities: decomposition.entities,
        clause_type: analysis.clause_type,
        simplified_text: analysis.simplified_text,
        legal_terms: analysis.legal_terms,
    };

    (index, record, soft_failures)
}

fn content_hash(content: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
