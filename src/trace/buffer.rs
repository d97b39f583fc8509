use std::collections::VecDeque;

use crate::foundation::{core::Point, math::lerp};

/// One historical tip position paired with its high-resolution counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSample {
    /// Current (drifting) position.
    pub pos: Point,
    /// Morph target, fixed at creation.
    pub target: Point,
}

impl TraceSample {
    /// New sample at `pos` that will drift toward `target`.
    pub fn new(pos: Point, target: Point) -> Self {
        Self { pos, target }
    }

    /// Move `rate` of the remaining distance toward the target.
    pub fn morph(&mut self, rate: f64) {
        self.pos.x = lerp(self.pos.x, self.target.x, rate);
        self.pos.y = lerp(self.pos.y, self.target.y, rate);
    }
}

/// Bounded FIFO of trace samples, oldest first.
#[derive(Clone, Debug)]
pub struct Trace {
    samples: VecDeque<TraceSample>,
    capacity: usize,
}

impl Trace {
    /// Empty trace holding at most `capacity` samples (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample; the oldest samples are evicted once over capacity.
    pub fn push(&mut self, sample: TraceSample) {
        self.samples.push_back(sample);
        self.prune();
    }

    fn prune(&mut self) {
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Nudge every sample toward its target.
    pub fn morph(&mut self, rate: f64) {
        for s in &mut self.samples {
            s.morph(rate);
        }
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` when no sample is held.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples, oldest first.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = &TraceSample> {
        self.samples.iter()
    }

    /// Current positions, oldest first.
    pub fn positions(&self) -> Vec<Point> {
        self.samples.iter().map(|s| s.pos).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/buffer.rs"]
mod tests;
