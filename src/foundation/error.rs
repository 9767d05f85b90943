/// Convenience result type used across the crate.
pub type NotecardResult<T> = Result<T, NotecardError>;

/// Top-level error taxonomy for the notecard pipeline.
#[derive(thiserror::Error, Debug)]
pub enum NotecardError {
    /// Invalid arguments handed to a pipeline stage.
    #[error("validation error: {0}")]
    Validation(String),

    /// Problems reading the response table.
    #[error("input error: {0}")]
    Input(String),

    /// Fonts or images that could not be loaded or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Failures while laying out or rasterizing a card.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NotecardError {
    /// Build a [`NotecardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NotecardError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`NotecardError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`NotecardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
