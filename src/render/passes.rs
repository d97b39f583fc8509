use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::FourierResult,
    render::plan::{DrawOp, FramePlan},
};

/// Rendered frame pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Something that can rasterize a [`FramePlan`].
pub trait PlanBackend {
    /// Prepare a cleared target of `canvas` size.
    fn begin_frame(&mut self, canvas: Canvas, background: Rgba8) -> FourierResult<()>;

    /// Draw one operation onto the current target.
    fn exec_op(&mut self, op: &DrawOp) -> FourierResult<()>;

    /// Finish the frame and read its pixels back.
    fn readback_rgba8(&mut self) -> FourierResult<FrameRGBA>;
}

/// Run every op of `plan` through `backend` in order.
pub fn execute_plan<B: PlanBackend + ?Sized>(
    backend: &mut B,
    plan: &FramePlan,
) -> FourierResult<FrameRGBA> {
    backend.begin_frame(plan.canvas, plan.background)?;
    for op in &plan.ops {
        backend.exec_op(op)?;
    }
    backend.readback_rgba8()
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;
