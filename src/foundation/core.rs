use crate::foundation::error::{FourierError, FourierResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Drawing surface extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized extents.
    pub fn new(width: u32, height: u32) -> FourierResult<Self> {
        if width == 0 || height == 0 {
            return Err(FourierError::validation("Canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center point in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from straight channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `scale` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, scale: f32) -> Self {
        let s = if scale.is_finite() {
            scale.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            a: (f32::from(self.a) * s).round() as u8,
            ..self
        }
    }

    /// Same color with alpha forced to `a`.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a unit float.
    pub fn alpha_f32(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
