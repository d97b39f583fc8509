use crate::foundation::{core::Point, math::MIN_EXTENT};

/// Point sequence re-centered on its bounding-box center and scaled so the larger
/// bounding-box side has length 1.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedShape {
    /// Normalized points, in input order.
    pub points: Vec<Point>,
    /// Bounding-box width after scaling (`<= 1`).
    pub width: f64,
    /// Bounding-box height after scaling (`<= 1`).
    pub height: f64,
}

/// Normalize `points` into shape-local space.
pub fn normalize_points(points: &[Point]) -> NormalizedShape {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    if points.is_empty() {
        return NormalizedShape {
            points: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
    }

    let cx = (min_x + max_x) * 0.5;
    let cy = (min_y + max_y) * 0.5;
    let size = MIN_EXTENT.max(max_x - min_x).max(max_y - min_y);

    NormalizedShape {
        points: points
            .iter()
            .map(|p| Point::new((p.x - cx) / size, (p.y - cy) / size))
            .collect(),
        width: (max_x - min_x) / size,
        height: (max_y - min_y) / size,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/normalize.rs"]
mod tests;
