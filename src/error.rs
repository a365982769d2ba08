use thiserror::Error;

/// Result type alias for the import pipeline.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Everything that can end a run, tagged by the stage it came from.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("fetch failed while reading the response body: {0}")]
    FetchRead(#[from] std::io::Error),

    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("storage failed: {0}")]
    Storage(#[from] rusqlite::Error),
}
