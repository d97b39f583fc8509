//! Trace and epicycle-chain drawing on top of [`DrawSurface`].

use crate::{
    foundation::{
        config::TraceStyle,
        core::{Point, Vec2},
        math::MIN_EXTENT,
    },
    fourier::epicycle::EpicycleLink,
    render::plan::{DrawSurface, GradientStop, LinearGradient, StrokeStyle},
};

/// Minimum gradient length in pixels.
const MIN_GRADIENT_SPAN: f64 = 1.0;
/// Minimum number of segments in the stroke fade ramp.
const MIN_FADE_WINDOW: usize = 2;

/// Gradient anchored at the trace tip and running perpendicular to its direction of
/// travel, long enough to cover the farthest trace point on that axis.
///
/// `None` for traces with fewer than 3 points.
pub fn perpendicular_gradient(points: &[Point], style: &TraceStyle) -> Option<LinearGradient> {
    let [.., prev, tip] = points else {
        return None;
    };
    if points.len() < 3 {
        return None;
    }

    let travel = *tip - *prev;
    let len = travel.hypot().max(MIN_EXTENT);
    let perp = Vec2::new(-travel.y / len, travel.x / len);

    let max_extent = points
        .iter()
        .map(|p| (*p - *tip).dot(perp).abs())
        .fold(0.0_f64, f64::max);
    let span = max_extent.max(MIN_GRADIENT_SPAN);

    let color = style.fill_color;
    let clear = color.with_alpha(0);
    Some(LinearGradient {
        start: *tip,
        end: *tip + perp * span,
        stops: [
            GradientStop { offset: 0.0, color },
            GradientStop {
                offset: style.fill_zero_pos.clamp(0.0, 1.0),
                color: clear,
            },
            GradientStop {
                offset: 1.0,
                color: clear,
            },
        ],
    })
}

/// Number of oldest segments that fade in, for a trace of `len` points.
pub fn fade_window(len: usize, ratio: f64) -> usize {
    ((len as f64 * ratio).floor() as usize).max(MIN_FADE_WINDOW)
}

/// Opacity of segment `i` (1 = oldest): ramps linearly up to full over the fade window.
pub fn fade_opacity(i: usize, window: usize) -> f32 {
    if i <= window {
        i as f32 / window.max(1) as f32
    } else {
        1.0
    }
}

/// Draw one trace: the perpendicular gradient fill, then the faded stroke.
pub fn draw_trace<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    style: &TraceStyle,
    fade_window_ratio: f64,
) {
    if points.len() < 2 {
        return;
    }
    if let Some(gradient) = perpendicular_gradient(points, style) {
        surface.fill_gradient_polygon(points, &gradient);
    }

    let window = fade_window(points.len(), fade_window_ratio);
    let stroke = StrokeStyle {
        color: style.trace_color,
        width: style.trace_stroke_width,
    };
    surface.stroke_faded_polyline(points, &stroke, &|i| fade_opacity(i, window));
}

/// Draw the epicycle circles, arms and tip dot.
pub fn draw_chain<S: DrawSurface + ?Sized>(
    surface: &mut S,
    origin: Point,
    links: &[EpicycleLink],
    style: &TraceStyle,
) {
    let circle = StrokeStyle {
        color: style.circle_color,
        width: style.circle_stroke_width,
    };
    let arm = StrokeStyle {
        color: style.vector_color,
        width: style.vector_stroke_width,
    };
    for link in links {
        if link.radius > style.min_circle_radius {
            surface.stroke_circle(link.center, link.radius, &circle);
        }
        surface.stroke_line(link.center, link.end, &arm);
    }
    let tip = links.last().map_or(origin, |l| l.end);
    surface.fill_circle(tip, style.tip_radius, style.vector_color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/trace.rs"]
mod tests;
