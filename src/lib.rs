//! Decision Engine - Adaptive decision-and-learning core
//!
//! This crate selects the best action for a user/session context using
//! multi-factor weighted scoring, estimates a confidence score, explains
//! its reasoning, and refines per-user behavioral profiles from observed
//! outcomes.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ports;

pub use config::EngineConfig;
pub use engine::{DecisionEngine, EngineHealth, EngineStatus};
