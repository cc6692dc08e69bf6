/// Convenience result type used across Strapline.
pub type StraplineResult<T> = Result<T, StraplineError>;

/// Top-level error taxonomy used by the crate's fallible APIs.
///
/// The strap controller itself never fails; errors arise only from the
/// ambient surfaces (preset/config validation, JSON loading, text
/// measurement) and are degraded to defaults before they reach the host.
#[derive(thiserror::Error, Debug)]
pub enum StraplineError {
    /// Invalid user-provided preset or payload data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while measuring text for autofit.
    #[error("measurement error: {0}")]
    Measure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StraplineError {
    /// Build a [`StraplineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StraplineError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`StraplineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
