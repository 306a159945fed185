use thiserror::Error;

/// Errors emitted by the fixture factory.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The region table is missing or malformed. Fatal at startup.
    #[error("asset error: {0}")]
    Asset(String),
    /// A case number segment contained something other than digits.
    #[error("case number segment '{0}' is not numeric")]
    InvalidSegment(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
