//! # Core Module
//!
//! Timing utilities and the frame update scheduler that drives every
//! animated object in the scene.

mod clock;
mod id;
mod scheduler;

pub use clock::Clock;
pub use id::Id;
pub use scheduler::{FrameTiming, Scheduler, Updatable, UpdateHandle};
