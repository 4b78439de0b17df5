/// Result alias that carries the custom [`PigeonSmashError`] type.
pub type Result<T> = std::result::Result<T, PigeonSmashError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum PigeonSmashError {
    /// A caller violated a hard precondition, such as handing the classifier
    /// a landmark set that is not exactly 21 points long. Surfaced
    /// immediately instead of being mapped to a quiet "no result" value so
    /// that malformed input stays diagnosable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON de/serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl PigeonSmashError {
    /// Creates a [`PigeonSmashError::InvalidInput`] from the provided message.
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        Self::InvalidInput(msg.into())
    }
}
