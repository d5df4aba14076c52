/// Convenience result type used across Kronkel.
pub type KronkelResult<T> = Result<T, KronkelError>;

/// Top-level error taxonomy used by the generator APIs.
///
/// Empty input text is not an error: it produces a border-only figure.
#[derive(thiserror::Error, Debug)]
pub enum KronkelError {
    /// Grid or stroke parameters that cannot produce a figure.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Settings documents that cannot be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Failures while turning a finished figure into an image.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KronkelError {
    /// Build a [`KronkelError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`KronkelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KronkelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
