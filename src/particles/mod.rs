//! Looping particle systems.
//!
//! This module provides the procedural snow and fire systems: write-once
//! attribute fields sampled at construction, a phase clock that recovers
//! every particle's age from absolute scene time, and per-element motion
//! programs evaluated from those two alone. Nothing is integrated frame to
//! frame, so updates are idempotent and order-independent.

mod config;
mod field;
pub mod kinematics;
pub mod phase;
mod system;
mod uniforms;

pub use config::{ConfigError, EmitterConfig, MotionVariant, ParticlePreset};
pub use field::{ParticleField, ParticleSample};
pub use system::ParticleSystem;
pub use uniforms::{FireUniforms, SnowUniforms, Uniforms};
