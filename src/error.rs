use thiserror::Error;

/// Errors raised by the shell around the parser and scorer.
///
/// The core itself never fails: malformed transcripts degrade to empty
/// fields and unmapped grades score as absent.
#[derive(Error, Debug)]
pub enum AdmitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Text Source Error: {0}")]
    Source(String),
}

pub type AdmitResult<T> = Result<T, AdmitError>;
