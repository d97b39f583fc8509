/// Convenience result type used across the crate.
pub type FourierResult<T> = Result<T, FourierError>;

/// Coarse classification of a [`FourierError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shape source could not be read or parsed.
    AssetFetch,
    /// Shape source produced no usable geometry.
    Geometry,
    /// The transform produced no coefficients.
    EmptyCoefficients,
    /// Invalid configuration or host input.
    Validation,
    /// Raster backend failure.
    Render,
    /// Anything wrapped from lower layers.
    Other,
}

/// Top-level error taxonomy used by the preparation pipeline and renderers.
#[derive(thiserror::Error, Debug)]
pub enum FourierError {
    /// Shape source unreachable, unreadable or not a valid document.
    #[error("asset fetch error: {0}")]
    AssetFetch(String),

    /// No sampleable path, zero path length, or too few sampled points.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The transform yielded no usable coefficients.
    #[error("No coefficient generated.")]
    EmptyCoefficients,

    /// Invalid configuration or host-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing a frame plan.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FourierError {
    /// Build a [`FourierError::AssetFetch`] value.
    pub fn asset_fetch(msg: impl Into<String>) -> Self {
        Self::AssetFetch(msg.into())
    }

    /// Build a [`FourierError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`FourierError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FourierError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AssetFetch(_) => ErrorKind::AssetFetch,
            Self::Geometry(_) => ErrorKind::Geometry,
            Self::EmptyCoefficients => ErrorKind::EmptyCoefficients,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Render(_) => ErrorKind::Render,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
