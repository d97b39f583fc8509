use std::sync::Arc;

use rand::Rng;

use crate::{
    foundation::{
        config::{FourierConfig, TraceStyle},
        core::{Canvas, Point},
        math::{MIN_EXTENT, wrap01},
    },
    fourier::{
        dft::CoefficientSet,
        epicycle::{chain, endpoint},
        reversal::pick_reverse_index,
    },
    lifecycle::prepare::PreparedShape,
    render::{
        plan::DrawSurface,
        trace::{draw_chain, draw_trace},
    },
    trace::buffer::{Trace, TraceSample},
};

/// Per-frame animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Position within the loop, in `[0, 1)`.
    pub phase: f64,
    /// Ranked coefficient index rotating backwards this cycle.
    pub reverse_index: Option<usize>,
    /// Frames drawn since the scene became ready (or was last reset).
    pub frames_since_ready: u64,
}

impl AnimationState {
    /// Start of a cycle with the given reversal.
    pub fn new(reverse_index: Option<usize>) -> Self {
        Self {
            phase: 0.0,
            reverse_index,
            frames_since_ready: 0,
        }
    }
}

/// Where shape-local coordinates land on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawLayout {
    /// Canvas point of the shape origin.
    pub origin: Point,
    /// Pixels per normalized unit.
    pub draw_scale: f64,
}

impl DrawLayout {
    /// Center the shape and scale its width to `target_width_ratio` of the canvas.
    pub fn fit(canvas: Canvas, norm_width: f64, style: &TraceStyle) -> Self {
        Self {
            origin: canvas.center(),
            draw_scale: f64::from(canvas.width) * style.target_width_ratio
                / norm_width.max(MIN_EXTENT),
        }
    }
}

/// Append one sample per sub-step between `phase` and `phase + step`, each pairing the
/// drawn tip with the morph-target tip at the same sub-phase.
pub fn populate_trace(
    trace: &mut Trace,
    shape: &PreparedShape,
    layout: DrawLayout,
    state: &AnimationState,
    config: &FourierConfig,
) {
    let sub_steps = config.sub_steps_per_frame.max(1);
    let step = config.phase_step();
    let target_set = shape.morph_target();
    for s in 1..=sub_steps {
        let sub_phase = wrap01(state.phase + step * (s as f64) / (sub_steps as f64));
        let pos = endpoint(
            layout.origin,
            layout.draw_scale,
            sub_phase,
            &shape.low,
            state.reverse_index,
        );
        let target = endpoint(
            layout.origin,
            layout.draw_scale,
            sub_phase,
            target_set,
            state.reverse_index,
        );
        trace.push(TraceSample::new(pos, target));
    }
}

/// Count the frame and morph the trace once the warm-up window has passed.
pub fn morph_after_warmup(trace: &mut Trace, state: &mut AnimationState, config: &FourierConfig) {
    state.frames_since_ready += 1;
    if state.frames_since_ready > config.warmup_frames {
        trace.morph(config.morph_rate);
    }
}

/// Advance the phase by `step`; on wraparound pick the next cycle's reversal.
///
/// Returns `true` when the phase wrapped.
pub fn advance_phase<R: Rng + ?Sized>(
    state: &mut AnimationState,
    step: f64,
    set: &CoefficientSet,
    reversal_probability: f64,
    rng: &mut R,
) -> bool {
    state.phase += step;
    if state.phase < 1.0 {
        return false;
    }
    state.phase = wrap01(state.phase - 1.0);
    state.reverse_index = pick_reverse_index(set, reversal_probability, rng);
    tracing::debug!(reverse_index = ?state.reverse_index, "cycle wrapped");
    true
}

/// Everything owned by a ready animation.
#[derive(Clone, Debug)]
pub struct ReadyScene {
    shape: Arc<PreparedShape>,
    canvas: Canvas,
    state: AnimationState,
    trace: Trace,
}

impl ReadyScene {
    /// Fresh scene for `shape`, with a freshly picked reversal.
    pub fn new<R: Rng + ?Sized>(
        shape: Arc<PreparedShape>,
        canvas: Canvas,
        config: &FourierConfig,
        rng: &mut R,
    ) -> Self {
        let reverse = pick_reverse_index(&shape.low, config.reversal_probability, rng);
        Self {
            shape,
            canvas,
            state: AnimationState::new(reverse),
            trace: Trace::with_capacity(config.trace_capacity()),
        }
    }

    /// Clear trace, phase and warm-up for a new canvas and start a new cycle.
    /// Coefficients are kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, canvas: Canvas, config: &FourierConfig, rng: &mut R) {
        self.canvas = canvas;
        self.trace.clear();
        self.state = AnimationState::new(pick_reverse_index(
            &self.shape.low,
            config.reversal_probability,
            rng,
        ));
    }

    /// Current animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Current trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Prepared coefficient sets.
    pub fn shape(&self) -> &Arc<PreparedShape> {
        &self.shape
    }

    /// Layout for the current canvas.
    pub fn layout(&self, style: &TraceStyle) -> DrawLayout {
        DrawLayout::fit(self.canvas, self.shape.norm_width, style)
    }

    /// Run one frame: morph, sample, draw chain and trace, advance phase.
    pub fn advance_frame<R, S>(&mut self, config: &FourierConfig, rng: &mut R, surface: &mut S)
    where
        R: Rng + ?Sized,
        S: DrawSurface + ?Sized,
    {
        morph_after_warmup(&mut self.trace, &mut self.state, config);

        let layout = self.layout(&config.style);
        populate_trace(&mut self.trace, &self.shape, layout, &self.state, config);

        let step = config.phase_step();
        let links = chain(
            layout.origin,
            layout.draw_scale,
            wrap01(self.state.phase + step),
            &self.shape.low,
            self.state.reverse_index,
        );
        draw_chain(surface, layout.origin, &links, &config.style);
        draw_trace(
            surface,
            &self.trace.positions(),
            &config.style,
            config.fade_window_ratio,
        );

        advance_phase(
            &mut self.state,
            step,
            &self.shape.low,
            config.reversal_probability,
            rng,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/state.rs"]
mod tests;
