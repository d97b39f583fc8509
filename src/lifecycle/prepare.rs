use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
        mpsc,
    },
};

use crate::{
    assets::{sampler::PointSampler, source::ShapeSource},
    foundation::{
        config::FourierConfig,
        error::{FourierError, FourierResult},
        math::MIN_EXTENT,
    },
    fourier::{
        dft::{CoefficientSet, compute_dft},
        normalize::normalize_points,
    },
};

/// Immutable output of the preparation pipeline.
#[derive(Clone, Debug)]
pub struct PreparedShape {
    /// Drawn coefficient set (low resolution).
    pub low: CoefficientSet,
    /// Morph-target coefficient set (high resolution).
    pub high: CoefficientSet,
    /// Normalized bounding-box width of the low-resolution samples.
    pub norm_width: f64,
    /// Normalized bounding-box height of the low-resolution samples.
    pub norm_height: f64,
}

impl PreparedShape {
    /// Set used for morph targets: the high-resolution set, or the drawn set if empty.
    pub fn morph_target(&self) -> &CoefficientSet {
        if self.high.is_empty() {
            &self.low
        } else {
            &self.high
        }
    }
}

/// Run sampling, normalization, transform and selection for both resolutions.
#[tracing::instrument(skip(sampler, source, config))]
pub fn prepare_shape(
    sampler: &dyn PointSampler,
    source: &ShapeSource,
    config: &FourierConfig,
) -> FourierResult<PreparedShape> {
    let low_pts = sampler.sample(source, config.sample_count_low)?;
    let high_pts = sampler.sample(source, config.sample_count_high)?;
    if low_pts.len() < 2 || high_pts.len() < 2 {
        return Err(FourierError::geometry("Insufficient sampled points."));
    }

    let low_shape = normalize_points(&low_pts);
    let high_shape = normalize_points(&high_pts);

    let low = CoefficientSet::select(compute_dft(&low_shape.points), config.coefficient_budget);
    let high = CoefficientSet::select(compute_dft(&high_shape.points), config.coefficient_budget);
    if !low.has_moving_terms() {
        return Err(FourierError::EmptyCoefficients);
    }

    tracing::debug!(
        low = low.len(),
        high = high.len(),
        low_samples = low_pts.len(),
        high_samples = high_pts.len(),
        "prepared coefficient sets"
    );
    Ok(PreparedShape {
        low,
        high,
        norm_width: low_shape.width.max(MIN_EXTENT),
        norm_height: low_shape.height.max(MIN_EXTENT),
    })
}

const PENDING: u8 = 0;
const COMMITTED: u8 = 1;
const CANCELLED: u8 = 2;

/// Decides, exactly once, whether a preparation result is installed or discarded.
#[derive(Clone, Debug, Default)]
pub struct CompletionToken {
    state: Arc<AtomicU8>,
}

impl CompletionToken {
    /// Fresh pending token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the task cancelled. Returns `false` if it was already committed.
    pub fn cancel(&self) -> bool {
        self.transition(CANCELLED)
    }

    /// Claim the right to install the result. Returns `false` if cancelled first.
    pub fn commit(&self) -> bool {
        self.transition(COMMITTED)
    }

    fn transition(&self, to: u8) -> bool {
        match self
            .state
            .compare_exchange(PENDING, to, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => true,
            Err(current) => current == to,
        }
    }

    /// `true` once cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }
}

/// Resolution of a preparation task as seen by its owner.
#[derive(Debug)]
pub enum Completion {
    /// The token was committed; the result may be installed.
    Committed(FourierResult<PreparedShape>),
    /// The task was cancelled; the result was dropped.
    Discarded,
}

/// One-shot preparation running on the `rayon` pool.
pub struct PreparationTask {
    rx: mpsc::Receiver<FourierResult<PreparedShape>>,
    token: CompletionToken,
}

impl PreparationTask {
    /// Start preparing `source` in the background.
    pub fn spawn(
        sampler: Arc<dyn PointSampler>,
        source: ShapeSource,
        config: FourierConfig,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let token = CompletionToken::new();
        rayon::spawn(move || {
            let result = catch_unwind(AssertUnwindSafe(|| {
                prepare_shape(sampler.as_ref(), &source, &config)
            }))
            .unwrap_or_else(|payload| Err(worker_panicked(payload.as_ref())));
            // The receiver is gone after teardown; nothing to report then.
            let _ = tx.send(result);
        });
        Self { rx, token }
    }

    /// Handle to this task's completion token.
    pub fn token(&self) -> CompletionToken {
        self.token.clone()
    }

    /// Non-blocking check; `None` while the worker is still running.
    pub fn poll(&self) -> Option<Completion> {
        match self.rx.try_recv() {
            Ok(result) => Some(self.resolve(result)),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(self.resolve(Err(worker_lost()))),
        }
    }

    /// Block until the worker finishes.
    pub fn wait(&self) -> Completion {
        let result = self.rx.recv().unwrap_or_else(|_| Err(worker_lost()));
        self.resolve(result)
    }

    fn resolve(&self, result: FourierResult<PreparedShape>) -> Completion {
        if self.token.commit() {
            Completion::Committed(result)
        } else {
            Completion::Discarded
        }
    }
}

fn worker_panicked(payload: &(dyn std::any::Any + Send)) -> FourierError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    tracing::warn!(%detail, "preparation panicked");
    FourierError::Other(anyhow::anyhow!("preparation panicked: {detail}"))
}

fn worker_lost() -> FourierError {
    FourierError::Other(anyhow::anyhow!(
        "preparation worker exited without a result"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/prepare.rs"]
mod tests;
