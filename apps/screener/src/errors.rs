use thiserror::Error;

/// Application-level error type.
///
/// The pipeline distinguishes two severities: candidate-scoped errors
/// (bad resume, malformed agent output, failed contact validation) turn
/// into a per-candidate skip, everything else aborts the run and leaves
/// recovery to the retry driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors that skip the current candidate instead of
    /// ending the run. The candidate stays unresolved and is picked up
    /// again on the next retry attempt.
    pub fn is_candidate_scoped(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Extraction(_) | AppError::Llm(_)
        )
    }
}
