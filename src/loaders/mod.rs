//! Asset resolution boundary.
//!
//! Loading and parsing are external collaborators; this module holds the
//! types that cross the boundary — decoded textures resolving into
//! write-once slots, and loaded-model metadata for animated entities.

mod model;
mod texture;

pub use model::LoadedModel;
pub use texture::{LoadError, LoadState, LoadedTexture, TextureSlot};
