/// Convenience result type used across Orrery.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum OrreryError {
    /// Invalid user-provided chain, camera, or sketch data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating an orbit-curve chain.
    #[error("curve error: {0}")]
    Curve(String),

    /// Errors while projecting or producing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrreryError {
    /// Build a [`OrreryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OrreryError::Curve`] value.
    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    /// Build a [`OrreryError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`OrreryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
