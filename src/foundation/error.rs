/// Convenience result type used across segue.
pub type SegueResult<T> = Result<T, SegueError>;

/// Error taxonomy for curve construction, tween construction and configuration loading.
///
/// Running a constructed tween never fails; every variant here is raised before the first
/// `advance` call.
#[derive(thiserror::Error, Debug)]
pub enum SegueError {
    /// An ease set was requested without an `In` or an `Out` curve.
    #[error("ease error: {0}")]
    Ease(String),

    /// Invalid tween parameters (duration, step size).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegueError {
    /// Build a [`SegueError::Ease`] value.
    pub fn ease(msg: impl Into<String>) -> Self {
        Self::Ease(msg.into())
    }

    /// Build a [`SegueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SegueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
