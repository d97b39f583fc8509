//! Host-facing lifecycle: preparation, per-frame state and the controller.

pub(crate) mod controller;
pub(crate) mod host;
pub(crate) mod prepare;
pub(crate) mod state;
