use crate::foundation::{
    core::Rgba8,
    error::{FourierError, FourierResult},
};

/// Visual styling of the epicycle chain and its trace.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceStyle {
    /// Drawn shape width as a fraction of the canvas width.
    pub target_width_ratio: f64,
    /// Base color of the faded trace stroke.
    pub trace_color: Rgba8,
    /// Stroke width of the trace in pixels.
    pub trace_stroke_width: f64,
    /// Color at the tip end of the perpendicular gradient fill.
    pub fill_color: Rgba8,
    /// Gradient position (in `[0, 1]`) where the fill reaches full transparency.
    pub fill_zero_pos: f32,
    /// Stroke color of epicycle circles.
    pub circle_color: Rgba8,
    /// Stroke width of epicycle circles.
    pub circle_stroke_width: f64,
    /// Stroke color of the rotating arms.
    pub vector_color: Rgba8,
    /// Stroke width of the rotating arms.
    pub vector_stroke_width: f64,
    /// Circles with a smaller radius (pixels) are skipped.
    pub min_circle_radius: f64,
    /// Radius of the dot drawn at the chain tip.
    pub tip_radius: f64,
    /// Clear color of every frame.
    pub background: Rgba8,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            target_width_ratio: 1.0,
            trace_color: Rgba8::WHITE,
            trace_stroke_width: 90.0,
            fill_color: Rgba8::WHITE,
            fill_zero_pos: 0.5,
            circle_color: Rgba8::WHITE,
            circle_stroke_width: 2.0,
            vector_color: Rgba8::WHITE,
            vector_stroke_width: 1.2,
            min_circle_radius: 0.5,
            tip_radius: 2.0,
            background: Rgba8::TRANSPARENT,
        }
    }
}

/// Fixed numeric configuration of the animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FourierConfig {
    /// Samples feeding the drawn (low-resolution) coefficient set.
    pub sample_count_low: usize,
    /// Samples feeding the morph-target (high-resolution) coefficient set.
    pub sample_count_high: usize,
    /// Frames per full animation cycle.
    pub loop_frames: u32,
    /// Maximum number of coefficients kept per set.
    pub coefficient_budget: usize,
    /// Fraction of the remaining distance a trace sample moves toward its target per frame.
    pub morph_rate: f64,
    /// Frames a trace sample stays alive.
    pub trace_lifetime_frames: usize,
    /// Trace samples appended per frame.
    pub sub_steps_per_frame: usize,
    /// Share of the trace covered by the stroke fade ramp.
    pub fade_window_ratio: f64,
    /// Probability that a cycle reverses one epicycle.
    pub reversal_probability: f64,
    /// Frames after readiness before morphing starts.
    pub warmup_frames: u64,
    /// Seed for reversal picks; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Visual styling.
    pub style: TraceStyle,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            sample_count_low: 100,
            sample_count_high: 720,
            loop_frames: 300,
            coefficient_budget: 120,
            morph_rate: 0.005,
            trace_lifetime_frames: 100,
            sub_steps_per_frame: 4,
            fade_window_ratio: 0.8,
            reversal_probability: 0.5,
            warmup_frames: 20,
            seed: None,
            style: TraceStyle::default(),
        }
    }
}

impl FourierConfig {
    /// Parse a JSON document (missing fields take defaults) and validate it.
    pub fn from_json_str(s: &str) -> FourierResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FourierError::validation(format!("invalid config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> FourierResult<()> {
        if self.sample_count_low < 2 || self.sample_count_high < 2 {
            return Err(FourierError::validation("sample counts must be >= 2"));
        }
        if self.loop_frames == 0 {
            return Err(FourierError::validation("loop_frames must be > 0"));
        }
        if self.coefficient_budget == 0 {
            return Err(FourierError::validation("coefficient_budget must be > 0"));
        }
        if self.trace_lifetime_frames == 0 || self.sub_steps_per_frame == 0 {
            return Err(FourierError::validation(
                "trace_lifetime_frames and sub_steps_per_frame must be > 0",
            ));
        }
        unit_range("morph_rate", self.morph_rate)?;
        unit_range("fade_window_ratio", self.fade_window_ratio)?;
        unit_range("reversal_probability", self.reversal_probability)?;
        unit_range("style.fill_zero_pos", f64::from(self.style.fill_zero_pos))?;
        if !(self.style.target_width_ratio.is_finite() && self.style.target_width_ratio > 0.0) {
            return Err(FourierError::validation(
                "style.target_width_ratio must be finite and > 0",
            ));
        }
        for (name, w) in [
            ("style.trace_stroke_width", self.style.trace_stroke_width),
            ("style.circle_stroke_width", self.style.circle_stroke_width),
            ("style.vector_stroke_width", self.style.vector_stroke_width),
            ("style.tip_radius", self.style.tip_radius),
        ] {
            if !(w.is_finite() && w >= 0.0) {
                return Err(FourierError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Phase advance per frame.
    pub fn phase_step(&self) -> f64 {
        1.0 / f64::from(self.loop_frames.max(1))
    }

    /// Maximum number of samples a trace may hold.
    pub fn trace_capacity(&self) -> usize {
        self.trace_lifetime_frames
            .saturating_mul(self.sub_steps_per_frame.max(1))
            .max(2)
    }
}

fn unit_range(name: &str, v: f64) -> FourierResult<()> {
    if !(v.is_finite() && (0.0..=1.0).contains(&v)) {
        return Err(FourierError::validation(format!("{name} must be in [0, 1]")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
