//! Shape sources and point sampling.

/// Sampling trait and the `usvg`-backed sampler.
pub(crate) mod sampler;
pub(crate) mod source;
