/// Crate-wide result alias.
pub type PenlineResult<T> = Result<T, PenlineError>;

/// Error type shared by every fallible penline operation.
///
/// Numeric timeline resolution never produces one of these; errors only surface from
/// construction-time validation and file/encoder boundaries.
#[derive(thiserror::Error, Debug)]
pub enum PenlineError {
    /// A caller-supplied value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation could not be built or started.
    #[error("animation error: {0}")]
    Animation(String),

    /// The raster backend rejected a request.
    #[error("render error: {0}")]
    Render(String),

    /// A frame sink failed to encode or write output.
    #[error("encode error: {0}")]
    Encode(String),

    /// An SVG document could not be loaded.
    #[error("svg error: {0}")]
    Svg(String),

    /// Any other error, usually from an I/O or decoder boundary.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PenlineError {
    /// Build a [`PenlineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PenlineError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PenlineError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PenlineError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PenlineError::Svg`].
    pub fn svg(msg: impl Into<String>) -> Self {
        Self::Svg(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
