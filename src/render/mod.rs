//! Frame plans and their backends.
//!
//! A frame is first recorded as a [`plan::FramePlan`] through the [`plan::DrawSurface`]
//! trait, then executed by any [`passes::PlanBackend`].

/// CPU backend built on `vello_cpu`.
pub(crate) mod cpu;
pub(crate) mod passes;
pub(crate) mod plan;
pub(crate) mod trace;
