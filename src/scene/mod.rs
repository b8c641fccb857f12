//! # Scene Module
//!
//! Environmental state and spatial placement shared by animated objects.
//! There is no scene-graph base type; entities own a [`Transform`] and
//! compose behaviors instead.

mod context;
mod fog;
mod transform;

pub use context::SceneContext;
pub use fog::Fog;
pub use transform::Transform;
