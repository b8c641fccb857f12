//! Animation mixer for managing and blending morph actions.

use std::collections::HashMap;
use std::sync::Arc;

use super::{ActionState, AnimationAction, MorphClip};
use crate::core::Id;

/// Blended morph weights by target name, as handed to the renderer.
pub type MorphWeights = HashMap<String, f32>;

/// Owns a set of animation actions, advances them, and blends their morph
/// weights into one output per frame.
pub struct AnimationMixer {
    /// Unique identifier.
    id: Id,
    /// Active animation actions.
    actions: Vec<AnimationAction>,
    /// Global time scale.
    pub time_scale: f32,
    /// Cached blended output.
    output: MorphWeights,
}

impl AnimationMixer {
    /// Create a new animation mixer.
    pub fn new() -> Self {
        Self {
            id: Id::new(),
            actions: Vec::new(),
            time_scale: 1.0,
            output: MorphWeights::new(),
        }
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Create and add an action for a clip.
    pub fn clip_action(&mut self, clip: Arc<MorphClip>) -> &mut AnimationAction {
        let action = AnimationAction::new(clip);
        self.actions.push(action);
        self.actions.last_mut().unwrap()
    }

    /// Get all actions.
    #[inline]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    /// Get action by index.
    pub fn get_action_mut(&mut self, index: usize) -> Option<&mut AnimationAction> {
        self.actions.get_mut(index)
    }

    /// Stop all actions.
    pub fn stop_all(&mut self) {
        for action in &mut self.actions {
            action.stop();
        }
    }

    /// Remove stopped actions.
    pub fn remove_stopped(&mut self) {
        self.actions.retain(|a| a.state() != ActionState::Stopped);
    }

    /// Advance all actions by delta time.
    pub fn update(&mut self, delta: f32) {
        let scaled_delta = delta * self.time_scale;
        for action in &mut self.actions {
            action.update(scaled_delta);
        }
    }

    /// Sample all active actions and blend their weight tracks.
    ///
    /// Targets driven by more than one action get a weighted average; the
    /// common single-action case passes weights through untouched.
    pub fn sample(&mut self) -> &MorphWeights {
        self.output.clear();

        let mut blended: HashMap<String, (f32, f32)> = HashMap::new();
        for action in &self.actions {
            if !action.is_playing() && !action.is_paused() {
                continue;
            }
            if action.weight <= 0.0 {
                continue;
            }

            let time = action.time();
            for track in action.clip().tracks() {
                let value = track.sample(time);
                if let Some((w, v)) = blended.get_mut(&track.target) {
                    let total = *w + action.weight;
                    let blend = action.weight / total;
                    *v = *v * (1.0 - blend) + value * blend;
                    *w = total;
                } else {
                    blended.insert(track.target.clone(), (action.weight, value));
                }
            }
        }

        for (target, (_, value)) in blended {
            self.output.insert(target, value);
        }
        &self.output
    }

    /// Get the last sampled output.
    #[inline]
    pub fn output(&self) -> &MorphWeights {
        &self.output
    }

    /// Check if any actions are playing.
    pub fn is_playing(&self) -> bool {
        self.actions.iter().any(|a| a.is_playing())
    }
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new()
    }
}
