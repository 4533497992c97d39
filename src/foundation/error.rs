/// Convenience result type used across ModelPick.
pub type ModelPickResult<T> = Result<T, ModelPickError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// Rendering and interpolation are total; only construction and loading can fail.
#[derive(thiserror::Error, Debug)]
pub enum ModelPickError {
    /// Invalid timeline, frame rate, canvas or range data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid breakpoint tables or spring configuration.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ModelPickError {
    /// Build a [`ModelPickError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ModelPickError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ModelPickError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ModelPickError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
