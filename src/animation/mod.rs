//! Morph-target animation playback.
//!
//! A [`MorphClip`] sequences a model's morph targets into triangular weight
//! tracks, an [`AnimationAction`] plays one clip with retiming and looping,
//! and an [`AnimationMixer`] owns the actions and blends their sampled
//! weights for the renderer.

mod action;
mod clip;
mod mixer;

pub use action::{ActionState, AnimationAction, LoopMode};
pub use clip::{AnimationError, Keyframe, MorphClip, WeightTrack};
pub use mixer::{AnimationMixer, MorphWeights};
