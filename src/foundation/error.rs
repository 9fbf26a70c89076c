/// Convenience result type used across mondrigen.
pub type MondriResult<T> = Result<T, MondriError>;

/// Top-level error taxonomy used by the scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum MondriError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Precondition violations in golden-ratio partitioning.
    #[error("partition error: {0}")]
    Partition(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MondriError {
    /// Build a [`MondriError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MondriError::Partition`] value.
    pub fn partition(msg: impl Into<String>) -> Self {
        Self::Partition(msg.into())
    }

    /// Build a [`MondriError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
