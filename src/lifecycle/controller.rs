use std::{cell::Cell, rc::Rc, sync::Arc};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::{
    assets::{sampler::PointSampler, source::ShapeSource},
    foundation::{
        config::FourierConfig,
        core::Canvas,
        error::{FourierError, FourierResult},
    },
    lifecycle::{
        host::{HostContext, Subscription},
        prepare::{Completion, PreparationTask},
        state::{AnimationState, ReadyScene},
    },
    render::plan::{DrawSurface, FramePlan},
    trace::buffer::Trace,
};

/// Status text shown while coefficients are being prepared.
pub const LOADING_MESSAGE: &str = "Loading Fourier coefficients...";

/// Observable lifecycle stage of a [`FourierVisualizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Constructed, not yet initialized.
    Idle,
    /// Waiting for the background preparation.
    Preparing,
    /// Coefficients installed; frames animate.
    Ready,
    /// Preparation failed; frames show the error message.
    Error,
    /// Torn down; every call is a no-op.
    TornDown,
}

enum Lifecycle {
    Idle,
    Preparing(PreparationTask),
    Ready(Box<ReadyScene>),
    Error(String),
    TornDown,
}

impl Lifecycle {
    fn stage(&self) -> Stage {
        match self {
            Self::Idle => Stage::Idle,
            Self::Preparing(_) => Stage::Preparing,
            Self::Ready(_) => Stage::Ready,
            Self::Error(_) => Stage::Error,
            Self::TornDown => Stage::TornDown,
        }
    }
}

/// Host-facing Fourier epicycle animation.
///
/// All mutation happens on the thread that calls [`FourierVisualizer::frame`]; only the
/// one-shot preparation runs elsewhere.
pub struct FourierVisualizer {
    config: FourierConfig,
    sampler: Arc<dyn PointSampler>,
    source: ShapeSource,
    canvas: Option<Canvas>,
    running: bool,
    rng: Pcg32,
    lifecycle: Lifecycle,
    subscriptions: Vec<Subscription>,
    pending_resize: Rc<Cell<Option<Canvas>>>,
}

impl FourierVisualizer {
    /// Visualizer for `source`; nothing runs until [`FourierVisualizer::initialize`].
    pub fn new(
        config: FourierConfig,
        sampler: Arc<dyn PointSampler>,
        source: ShapeSource,
    ) -> FourierResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };
        Ok(Self {
            config,
            sampler,
            source,
            canvas: None,
            running: false,
            rng,
            lifecycle: Lifecycle::Idle,
            subscriptions: Vec::new(),
            pending_resize: Rc::new(Cell::new(None)),
        })
    }

    /// Take the canvas, subscribe to resizes and start preparing coefficients.
    ///
    /// Repeated calls and calls after teardown are ignored.
    #[tracing::instrument(skip(self, ctx), fields(width = ctx.canvas.width, height = ctx.canvas.height))]
    pub fn initialize(&mut self, ctx: HostContext<'_>) -> FourierResult<()> {
        if !matches!(self.lifecycle, Lifecycle::Idle) {
            return Ok(());
        }
        let canvas = Canvas::new(ctx.canvas.width, ctx.canvas.height)?;

        let pending = Rc::clone(&self.pending_resize);
        let sub = ctx
            .events
            .on_resize(Box::new(move |c: Canvas| pending.set(Some(c))));
        self.subscriptions.push(sub);

        self.canvas = Some(canvas);
        self.lifecycle = Lifecycle::Preparing(PreparationTask::spawn(
            Arc::clone(&self.sampler),
            self.source.clone(),
            self.config.clone(),
        ));
        tracing::debug!("preparation started");
        Ok(())
    }

    /// Resume frame production.
    pub fn start(&mut self) {
        if !self.is_torn_down() {
            self.running = true;
        }
    }

    /// Pause frame production; state is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Apply a new canvas extent now.
    ///
    /// A ready animation restarts its cycle; coefficients are kept.
    pub fn resize(&mut self, canvas: Canvas) -> FourierResult<()> {
        if self.is_torn_down() {
            return Ok(());
        }
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        self.apply_resize(canvas);
        Ok(())
    }

    /// Cancel pending preparation and release every subscription, in order.
    pub fn teardown(&mut self) {
        if let Lifecycle::Preparing(task) = &self.lifecycle {
            task.token().cancel();
        }
        if !self.is_torn_down() {
            tracing::debug!("teardown");
        }
        self.lifecycle = Lifecycle::TornDown;
        self.running = false;
        self.pending_resize.set(None);
        for sub in self.subscriptions.drain(..) {
            sub.dispose();
        }
    }

    /// Produce the next frame, or `None` when stopped, uninitialized or torn down.
    ///
    /// Queued resizes and finished preparation are applied first.
    pub fn frame(&mut self) -> Option<FramePlan> {
        if !self.running || self.is_torn_down() {
            return None;
        }
        if let Some(canvas) = self.pending_resize.take() {
            match Canvas::new(canvas.width, canvas.height) {
                Ok(canvas) => self.apply_resize(canvas),
                Err(err) => tracing::warn!(%err, "ignoring resize"),
            }
        }
        self.poll_preparation();

        let canvas = self.canvas?;
        let mut plan = FramePlan::new(canvas, self.config.style.background);
        match &mut self.lifecycle {
            Lifecycle::Idle | Lifecycle::TornDown => return None,
            Lifecycle::Preparing(_) => plan.status(LOADING_MESSAGE),
            Lifecycle::Error(message) => plan.status(message),
            Lifecycle::Ready(scene) => {
                scene.advance_frame(&self.config, &mut self.rng, &mut plan);
                tracing::trace!(
                    phase = scene.state().phase,
                    trace_len = scene.trace().len(),
                    "frame"
                );
            }
        }
        Some(plan)
    }

    /// Block until preparation resolves and commit its result.
    ///
    /// For headless hosts; the frame loop never blocks.
    pub fn finish_preparation(&mut self) -> Stage {
        let completion = match &self.lifecycle {
            Lifecycle::Preparing(task) => Some(task.wait()),
            _ => None,
        };
        if let Some(completion) = completion {
            self.commit(completion);
        }
        self.stage()
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.lifecycle.stage()
    }

    /// Whether frames are being produced.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Canvas extent in use, once initialized.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Animation state while ready.
    pub fn animation_state(&self) -> Option<&AnimationState> {
        match &self.lifecycle {
            Lifecycle::Ready(scene) => Some(scene.state()),
            _ => None,
        }
    }

    /// Trace while ready.
    pub fn trace(&self) -> Option<&Trace> {
        match &self.lifecycle {
            Lifecycle::Ready(scene) => Some(scene.trace()),
            _ => None,
        }
    }

    /// Error message after a failed preparation.
    pub fn error_message(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &FourierConfig {
        &self.config
    }

    fn is_torn_down(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::TornDown)
    }

    fn apply_resize(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
        if let Lifecycle::Ready(scene) = &mut self.lifecycle {
            scene.reset(canvas, &self.config, &mut self.rng);
        }
        tracing::debug!(width = canvas.width, height = canvas.height, "resized");
    }

    fn poll_preparation(&mut self) {
        let completion = match &self.lifecycle {
            Lifecycle::Preparing(task) => task.poll(),
            _ => None,
        };
        if let Some(completion) = completion {
            self.commit(completion);
        }
    }

    fn commit(&mut self, completion: Completion) {
        let Some(canvas) = self.canvas else {
            return;
        };
        match completion {
            Completion::Discarded => {}
            Completion::Committed(Ok(shape)) => {
                let scene = ReadyScene::new(Arc::new(shape), canvas, &self.config, &mut self.rng);
                tracing::debug!(
                    coefficients = scene.shape().low.len(),
                    reverse_index = ?scene.state().reverse_index,
                    "ready"
                );
                self.lifecycle = Lifecycle::Ready(Box::new(scene));
            }
            Completion::Committed(Err(err)) => {
                tracing::warn!(%err, "preparation failed");
                self.lifecycle = Lifecycle::Error(load_failure_message(&err));
            }
        }
    }
}

impl Drop for FourierVisualizer {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for FourierVisualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FourierVisualizer")
            .field("stage", &self.stage())
            .field("running", &self.running)
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

/// Message shown in the error stage.
pub fn load_failure_message(err: &FourierError) -> String {
    match err {
        FourierError::EmptyCoefficients => err.to_string(),
        _ => format!("Load failed: {err}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/controller.rs"]
mod tests;
