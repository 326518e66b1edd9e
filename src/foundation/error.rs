/// Convenience alias used by all fallible `tumble` APIs.
pub type TumbleResult<T> = Result<T, TumbleError>;

/// Error type for configuration, rendering, encoding and publishing.
///
/// Frame generation failures surface as [`TumbleError::Render`] so callers can tell them apart
/// from encoder or publisher failures and clean up accordingly.
#[derive(thiserror::Error, Debug)]
pub enum TumbleError {
    /// Invalid user input (dimensions, frame counts, palettes, sink configuration).
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame could not be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// The external encoder rejected or failed to consume the frame stream.
    #[error("encode error: {0}")]
    Encode(String),

    /// The encoded artifact could not be published.
    #[error("publish error: {0}")]
    Publish(String),

    /// Catch-all for contextual I/O failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TumbleError {
    /// Build a [`TumbleError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TumbleError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TumbleError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`TumbleError::Publish`].
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
