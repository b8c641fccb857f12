//! Animated scene entities.
//!
//! Entities hold a [`Transform`](crate::scene::Transform) and compose
//! behaviors — particle systems, morph playback — behind the
//! [`Updatable`](crate::core::Updatable) capability; there is no scene-node
//! base type.

mod creature;
mod torch;

pub use creature::{Creature, CreatureConfig};
pub use torch::{Torch, TorchLight};
