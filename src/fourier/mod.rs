//! Discrete Fourier transform of closed curves and epicycle evaluation.

pub(crate) mod dft;
pub(crate) mod epicycle;
pub(crate) mod normalize;
pub(crate) mod reversal;
