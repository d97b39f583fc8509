//! Fourier epicycle animation with a morphing, fading trace ribbon.
//!
//! A closed shape (an SVG document or raw path data) is sampled into points, normalized,
//! and transformed into two ranked sets of Fourier coefficients: a low-resolution set that
//! drives the visible epicycle chain and a high-resolution set the trace morphs toward.
//!
//! # Pipeline overview
//!
//! 1. **Prepare** (once, on the `rayon` pool): `ShapeSource -> points -> CoefficientSet`s
//! 2. **Advance** (every frame): sub-stepped trace population, morph, phase advance
//! 3. **Plan**: draw calls are recorded into a backend-agnostic [`FramePlan`]
//! 4. **Render** (optional): [`CpuBackend`] rasterizes a plan into a [`FrameRGBA`]
//!
//! # Getting started
//!
//! Hosts construct a [`FourierVisualizer`], hand it a [`HostContext`] in
//! [`FourierVisualizer::initialize`], call [`FourierVisualizer::start`], and then call
//! [`FourierVisualizer::frame`] once per display frame.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod foundation;
mod fourier;
mod lifecycle;
mod render;
mod trace;

pub use assets::sampler::{PointSampler, SvgPathSampler, load_paths, sample_paths};
pub use assets::source::ShapeSource;
pub use foundation::config::{FourierConfig, TraceStyle};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
pub use foundation::error::{ErrorKind, FourierError, FourierResult};
pub use fourier::dft::{Coefficient, CoefficientSet, compute_dft};
pub use fourier::epicycle::{EpicycleLink, chain, endpoint};
pub use fourier::normalize::{NormalizedShape, normalize_points};
pub use fourier::reversal::{is_valid_reversal, pick_reverse_index};
pub use lifecycle::controller::{FourierVisualizer, LOADING_MESSAGE, Stage, load_failure_message};
pub use lifecycle::host::{EventSource, HostContext, LocalEventBus, ResizeListener, Subscription};
pub use lifecycle::prepare::{
    Completion, CompletionToken, PreparationTask, PreparedShape, prepare_shape,
};
pub use lifecycle::state::{
    AnimationState, DrawLayout, ReadyScene, advance_phase, morph_after_warmup, populate_trace,
};
pub use render::cpu::CpuBackend;
pub use render::passes::{FrameRGBA, PlanBackend, execute_plan};
pub use render::plan::{DrawOp, DrawSurface, FramePlan, GradientStop, LinearGradient, StrokeStyle};
pub use render::trace::{
    draw_chain, draw_trace, fade_opacity, fade_window, perpendicular_gradient,
};
pub use trace::buffer::{Trace, TraceSample};
