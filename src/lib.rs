//! # Boreal - Procedural Particle Simulation Core
//!
//! Boreal is the simulation heart of an animated outdoor VR scene: snowfall,
//! a crackling torch, and a creature galloping through the haze. It times
//! and evolves fixed populations of looping particles and coordinates
//! per-object animation state across one shared render clock.
//!
//! ## Features
//!
//! - **Particles**: write-once attribute fields, a phase clock recovering
//!   every particle's age from absolute scene time, and pure fire/snow
//!   motion programs the renderer reproduces per element
//! - **Entities**: wandering-creature locomotion and a hand-held torch,
//!   composed from transforms and attached behaviors
//! - **Scheduling**: an ordered registry driven once per display refresh,
//!   with a virtual-step mode for deterministic tests
//! - **Boundaries**: `bytemuck`-packed parameter blocks for the renderer
//!   and write-once slots for asynchronously resolved textures
//!
//! ## Example
//!
//! ```
//! use std::sync::{Arc, RwLock};
//!
//! use boreal::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let context = SceneContext::outdoor(true).shared();
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let snow = ParticleSystem::from_preset(ParticlePreset::Snowfall, Arc::clone(&context), &mut rng)
//!     .expect("valid preset");
//! let creature = Creature::new(CreatureConfig::default(), context, 42).expect("valid presets");
//!
//! let mut scheduler = Scheduler::new();
//! let snow = Arc::new(RwLock::new(snow));
//! scheduler.register(snow.clone());
//! scheduler.register(Arc::new(RwLock::new(creature)));
//!
//! scheduler.step(1.0 / 90.0);
//! let _uniforms = snow.read().unwrap().uniforms();
//! ```

#![warn(missing_docs)]

pub mod animation;
pub mod core;
pub mod entity;
pub mod loaders;
pub mod math;
pub mod particles;
pub mod scene;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::animation::*;
    pub use crate::core::*;
    pub use crate::entity::*;
    pub use crate::loaders::*;
    pub use crate::math::*;
    pub use crate::particles::*;
    pub use crate::scene::*;
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "Boreal";
