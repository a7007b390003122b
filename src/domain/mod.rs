//! Domain layer - pure decision and learning logic.
//!
//! Nothing in this module performs I/O. Persistence, time, and host
//! metrics arrive through the ports layer.

pub mod context;
pub mod decision;
pub mod foundation;
pub mod patterns;
pub mod scoring;
