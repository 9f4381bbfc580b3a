use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::source::DocumentFormat;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("extraction failed: {0}")]
    Failed(String),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[async_trait::async_trait]
pub trait TextExtractor: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    async fn extract(&self, path: &Path, format: DocumentFormat) -> ExtractResult<String>;

    async fn extract_file(&self, path: &Path) -> ExtractResult<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExtractError::UnsupportedFormat("no extension".into()))?;

        let format = DocumentFormat::from_extension(ext)
            .ok_or_else(|| ExtractError::UnsupportedFormat(ext.to_lowercase()))?;

        if !self.can_extract(format) {
            return Err(ExtractError::UnsupportedFormat(format.to_string()));
        }

        self.extract(path, format).await
    }
}

async fn read_source(path: &Path) -> ExtractResult<Vec<u8>> {
    // Missing and unreadable collapse into the same user-facing condition.
    tokio::fs::read(path)
        .await
        .map_err(|_| ExtractError::SourceNotFound(path.to_path_buf()))
}

pub struct PdfExtractor;

impl PdfExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextExtractor for PdfExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    async fn extract(&self, path: &Path, _format: DocumentFormat) -> ExtractResult<String> {
        let data = read_source(path).await?;

        // Pages come back concatenated in document order.
        pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| ExtractError::Failed(format!("could not read PDF: {e}")))
    }
}

pub struct DocxExtractor;

impl DocxExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextExtractor for DocxExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    async fn extract(&self, path: &Path, _format: DocumentFormat) -> ExtractResult<String> {
        let data = read_source(path).await?;

        let docx = docx_rs::read_docx(&data)
            .map_err(|e| ExtractError::Failed(format!("could not read DOCX: {e}")))?;

        let mut paragraphs: Vec<String> = Vec::new();
        for child in &docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(para) = child {
                let mut text = String::new();
                for para_child in &para.children {
                    if let docx_rs::ParagraphChild::Run(run) = para_child {
                        for run_child in &run.children {
                            if let docx_rs::RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextExtractor for PlainTextExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText]
    }

    async fn extract(&self, path: &Path, _format: DocumentFormat) -> ExtractResult<String> {
        let data = read_source(path).await?;

        String::from_utf8(data).map_err(|e| ExtractError::Encoding(e.to_string()))
    }
}

pub struct CompositeExtractor {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl CompositeExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn add_extractor(&mut self, extractor: Box<dyn TextExtractor>) {
        self.extractors.push(extractor);
    }

    fn find_extractor(&self, format: DocumentFormat) -> Option<&dyn TextExtractor> {
        self.extractors
            .iter()
            .find(|e| e.can_extract(format))
            .map(|e| e.as_ref())
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new()
            .with_extractor(Box::new(PdfExtractor::new()))
            .with_extractor(Box::new(DocxExtractor::new()))
            .with_extractor(Box::new(PlainTextExtractor::new()))
    }
}

#[async_trait::async_trait]
impl TextExtractor for CompositeExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[
            DocumentFormat::Pdf,
            DocumentFormat::Docx,
            DocumentFormat::PlainText,
        ]
    }

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.find_extractor(format).is_some()
    }

    async fn extract(&self, path: &Path, format: DocumentFormat) -> ExtractResult<String> {
        let extractor = self
            .find_extractor(format)
            .ok_or_else(|| ExtractError::UnsupportedFormat(format.to_string()))?;

        extractor.extract(path, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"1.1 The parties agree.").unwrap();

        let extractor = CompositeExtractor::default();
        let text = extractor.extract_file(file.path()).await.unwrap();

        assert_eq!(text, "1.1 The parties agree.");
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();

        let extractor = CompositeExtractor::default();
        let err = extractor.extract_file(file.path()).await.unwrap_err();

        assert!(matches!(err, ExtractError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[tokio::test]
    async fn test_missing_file_is_source_not_found() {
        let extractor = PdfExtractor::new();
        let missing = Path::new("/nonexistent/contract.pdf");

        let err = extractor.extract(missing, DocumentFormat::Pdf).await.unwrap_err();

        assert!(matches!(err, ExtractError::SourceNotFound(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_extraction_failed() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let extractor = PdfExtractor::new();
        let err = extractor.extract(file.path(), DocumentFormat::Pdf).await.unwrap_err();

        assert!(matches!(err, ExtractError::Failed(_)));
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_extraction_failed() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"this is not a zip archive").unwrap();

        let extractor = DocxExtractor::new();
        let err = extractor.extract(file.path(), DocumentFormat::Docx).await.unwrap_err();

        assert!(matches!(err, ExtractError::Failed(_)));
    }

    #[test]
    fn test_composite_dispatch() {
        let extractor = CompositeExtractor::default();

        assert!(extractor.can_extract(DocumentFormat::Pdf));
        assert!(extractor.can_extract(DocumentFormat::Docx));
        assert!(extractor.can_extract(DocumentFormat::PlainText));

        let empty = CompositeExtractor::new();
        assert!(!empty.can_extract(DocumentFormat::Pdf));
    }
}
