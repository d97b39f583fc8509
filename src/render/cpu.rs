use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{FourierError, FourierResult},
    render::passes::{FrameRGBA, PlanBackend},
    render::plan::{DrawOp, LinearGradient, StrokeStyle},
};

/// Flattening tolerance for circles, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU rasterizer for frame plans, built on `vello_cpu`.
#[derive(Default)]
pub struct CpuBackend {
    target: Option<CpuTarget>,
}

struct CpuTarget {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
}

impl CpuBackend {
    /// New backend without a target; [`PlanBackend::begin_frame`] allocates one.
    pub fn new() -> Self {
        Self::default()
    }

    fn target_mut(&mut self) -> FourierResult<&mut CpuTarget> {
        self.target
            .as_mut()
            .ok_or_else(|| FourierError::render("begin_frame was not called"))
    }
}

impl PlanBackend for CpuBackend {
    fn begin_frame(&mut self, canvas: Canvas, background: Rgba8) -> FourierResult<()> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FourierError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FourierError::render("surface height exceeds u16"))?;

        // Reuse the pixmap while the size is unchanged.
        let pixmap = match self.target.take() {
            Some(t) if t.width == width && t.height == height => t.pixmap,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        let mut target = CpuTarget {
            width,
            height,
            pixmap,
            ctx: vello_cpu::RenderContext::new(width, height),
        };
        clear_pixmap(&mut target.pixmap, [0, 0, 0, 0]);
        if background.a > 0 {
            target.ctx.set_paint(color_to_cpu(background));
            target.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        self.target = Some(target);
        Ok(())
    }

    fn exec_op(&mut self, op: &DrawOp) -> FourierResult<()> {
        let ctx = &mut self.target_mut()?.ctx;
        match op {
            DrawOp::GradientPolygon { points, gradient } => {
                let Some(path) = polygon_to_cpu(points) else {
                    return Ok(());
                };
                ctx.set_paint(gradient_to_cpu(gradient));
                ctx.fill_path(&path);
            }
            DrawOp::Line { from, to, stroke } => {
                if !set_stroke(ctx, stroke) {
                    return Ok(());
                }
                let mut path = vello_cpu::kurbo::BezPath::new();
                path.move_to(point_to_cpu(*from));
                path.line_to(point_to_cpu(*to));
                ctx.stroke_path(&path);
            }
            DrawOp::Circle {
                center,
                radius,
                stroke,
            } => {
                if !set_stroke(ctx, stroke) {
                    return Ok(());
                }
                let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), *radius);
                ctx.stroke_path(&circle.to_path(CIRCLE_TOLERANCE));
            }
            DrawOp::Dot {
                center,
                radius,
                color,
            } => {
                if color.a == 0 || *radius <= 0.0 {
                    return Ok(());
                }
                ctx.set_paint(color_to_cpu(*color));
                let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), *radius);
                ctx.fill_path(&circle.to_path(CIRCLE_TOLERANCE));
            }
            DrawOp::Status { message } => {
                // No font stack here; the host displays status text itself.
                tracing::trace!(%message, "status frame");
            }
        }
        Ok(())
    }

    fn readback_rgba8(&mut self) -> FourierResult<FrameRGBA> {
        let target = self.target_mut()?;
        target.ctx.flush();
        target.ctx.render_to_pixmap(&mut target.pixmap);
        Ok(FrameRGBA {
            width: u32::from(target.width),
            height: u32::from(target.height),
            data: target.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn set_stroke(ctx: &mut vello_cpu::RenderContext, stroke: &StrokeStyle) -> bool {
    if stroke.color.a == 0 || !(stroke.width > 0.0) {
        return false;
    }
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(stroke.width)
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round),
    );
    ctx.set_paint(color_to_cpu(stroke.color));
    true
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn polygon_to_cpu(points: &[Point]) -> Option<vello_cpu::kurbo::BezPath> {
    let (first, rest) = points.split_first()?;
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(point_to_cpu(*first));
    for p in rest {
        path.line_to(point_to_cpu(*p));
    }
    path.close_path();
    Some(path)
}

fn gradient_to_cpu(g: &LinearGradient) -> vello_cpu::peniko::Gradient {
    let [s0, s1, s2] = g.stops;
    vello_cpu::peniko::Gradient::new_linear(point_to_cpu(g.start), point_to_cpu(g.end))
        .with_stops([
            (s0.offset, color_to_cpu(s0.color)),
            (s1.offset, color_to_cpu(s1.color)),
            (s2.offset, color_to_cpu(s2.color)),
        ])
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
