use crate::foundation::core::{Canvas, Point, Rgba8};

/// Color at a relative offset along a gradient axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Offset in `[0, 1]` along the axis.
    pub offset: f32,
    /// Straight color at the offset.
    pub color: Rgba8,
}

/// Linear gradient between two points with three stops.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    /// Axis start (offset 0).
    pub start: Point,
    /// Axis end (offset 1).
    pub end: Point,
    /// Stops in ascending offset order.
    pub stops: [GradientStop; 3],
}

/// Stroke color and width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeStyle {
    /// Straight stroke color.
    pub color: Rgba8,
    /// Width in pixels.
    pub width: f64,
}

/// Backend-agnostic draw operation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawOp {
    /// Fill the closed polygon through `points` with a linear gradient.
    GradientPolygon {
        /// Polygon vertices; the last connects back to the first.
        points: Vec<Point>,
        /// Fill paint.
        gradient: LinearGradient,
    },
    /// Stroke a single segment.
    Line {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// Stroke a circle outline.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// Fill a disc.
    Dot {
        /// Disc center.
        center: Point,
        /// Disc radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// Centered status message shown while not ready.
    Status {
        /// Message text.
        message: String,
    },
}

/// Minimal drawing capability set the animation renders through.
pub trait DrawSurface {
    /// Fill the closed polygon through `points` with `gradient`.
    fn fill_gradient_polygon(&mut self, points: &[Point], gradient: &LinearGradient);

    /// Stroke `points` as connected segments. `opacity(i)` scales the alpha of the segment
    /// ending at `points[i]` (so `i` runs from 1, oldest, to `points.len() - 1`).
    fn stroke_faded_polyline(
        &mut self,
        points: &[Point],
        stroke: &StrokeStyle,
        opacity: &dyn Fn(usize) -> f32,
    );

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &StrokeStyle);

    /// Stroke one segment.
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Show a status message in place of the animation.
    fn status(&mut self, message: &str);
}

/// Everything needed to draw one frame, in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FramePlan {
    /// Output extent.
    pub canvas: Canvas,
    /// Clear color.
    pub background: Rgba8,
    /// Draw operations.
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    /// Empty plan for `canvas`.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
        }
    }

    /// Status message of this frame, if it shows one.
    pub fn status_message(&self) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Status { message } => Some(message.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for FramePlan {
    fn fill_gradient_polygon(&mut self, points: &[Point], gradient: &LinearGradient) {
        if points.len() < 3 {
            return;
        }
        self.ops.push(DrawOp::GradientPolygon {
            points: points.to_vec(),
            gradient: *gradient,
        });
    }

    fn stroke_faded_polyline(
        &mut self,
        points: &[Point],
        stroke: &StrokeStyle,
        opacity: &dyn Fn(usize) -> f32,
    ) {
        for i in 1..points.len() {
            self.ops.push(DrawOp::Line {
                from: points[i - 1],
                to: points[i],
                stroke: StrokeStyle {
                    color: stroke.color.scale_alpha(opacity(i)),
                    width: stroke.width,
                },
            });
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &StrokeStyle) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            stroke: *stroke,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ops.push(DrawOp::Dot {
            center,
            radius,
            color,
        });
    }

    fn status(&mut self, message: &str) {
        self.ops.push(DrawOp::Status {
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
