//! Resume text extraction. The extractor is a trait object so the
//! pipeline stays independent of the document format; production uses
//! the PDF backend, tests inject a plain-text stub.

use std::path::Path;

use crate::errors::AppError;

/// Narrow interface over the external text-extraction service.
pub trait TextExtractor: Send + Sync {
    /// Whether this extractor handles the given file. Directory entries
    /// it does not handle are ignored by the scan.
    fn supports(&self, path: &Path) -> bool;

    /// Returns the raw text content of the resume.
    fn extract(&self, path: &Path) -> Result<String, AppError>;
}

/// PDF extraction via `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn supports(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some("pdf")
    }

    fn extract(&self, path: &Path) -> Result<String, AppError> {
        // An unreadable resume is a candidate-scoped failure, not a
        // run-fatal I/O error.
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Extraction(format!("{}: {e}", path.display())))?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| AppError::Extraction(format!("{}: {e}", path.display())))?;
        if text.trim().is_empty() {
            return Err(AppError::Extraction(format!(
                "{}: no extractable text",
                path.display()
            )));
        }
        Ok(text)
    }
}

/// Removes markdown artifacts the extractor leaves behind before the
/// text is handed to the agents.
pub fn format_text(text: &str) -> String {
    text.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_text_strips_asterisks() {
        assert_eq!(format_text("**Senior** Engineer"), "Senior Engineer");
        assert_eq!(format_text("plain text"), "plain text");
    }

    #[test]
    fn pdf_extractor_supports_only_pdf() {
        let extractor = PdfTextExtractor;
        assert!(extractor.supports(Path::new("cvs/jdoe.pdf")));
        assert!(!extractor.supports(Path::new("cvs/jdoe.docx")));
        assert!(!extractor.supports(Path::new("cvs/notes.txt")));
        assert!(!extractor.supports(Path::new("cvs/no_extension")));
    }

    #[test]
    fn pdf_extractor_missing_file_is_candidate_scoped() {
        let extractor = PdfTextExtractor;
        let err = extractor.extract(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(err.is_candidate_scoped());
    }
}
