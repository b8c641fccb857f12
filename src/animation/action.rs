//! Animation action - playback state over one clip.

use std::sync::Arc;

use super::MorphClip;

/// Loop mode for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play once and clamp at the end.
    #[default]
    Once,
    /// Loop continuously.
    Loop,
}

/// State of an animation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    /// Not playing.
    #[default]
    Stopped,
    /// Currently playing.
    Playing,
    /// Paused.
    Paused,
}

/// An animation action controls playback of a morph clip.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    /// The clip being played.
    clip: Arc<MorphClip>,
    /// Current playback time in seconds.
    time: f32,
    /// Playback speed multiplier (1.0 = authored speed).
    pub time_scale: f32,
    /// Weight for blending (0.0 - 1.0).
    pub weight: f32,
    /// Loop mode.
    pub loop_mode: LoopMode,
    /// Current playback state.
    state: ActionState,
}

impl AnimationAction {
    /// Create a new action for a clip.
    pub fn new(clip: Arc<MorphClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Once,
            state: ActionState::Stopped,
        }
    }

    /// Get the clip.
    #[inline]
    pub fn clip(&self) -> &MorphClip {
        &self.clip
    }

    /// Get the current time.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Set the current time.
    pub fn set_time(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.clip.duration());
    }

    /// Retime the whole clip to play over `duration` seconds.
    ///
    /// The gallop sequence is authored at 60 fps and retimed to a 1-second
    /// loop this way.
    pub fn set_duration(&mut self, duration: f32) -> &mut Self {
        if duration > 0.0 && self.clip.duration() > 0.0 {
            self.time_scale = self.clip.duration() / duration;
        }
        self
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Check if playing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == ActionState::Playing
    }

    /// Check if paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == ActionState::Paused
    }

    /// Start playing.
    pub fn play(&mut self) -> &mut Self {
        self.state = ActionState::Playing;
        self
    }

    /// Stop and reset to the start.
    pub fn stop(&mut self) {
        self.state = ActionState::Stopped;
        self.time = 0.0;
    }

    /// Pause without resetting.
    pub fn pause(&mut self) {
        if self.state == ActionState::Playing {
            self.state = ActionState::Paused;
        }
    }

    /// Resume from pause.
    pub fn resume(&mut self) {
        if self.state == ActionState::Paused {
            self.state = ActionState::Playing;
        }
    }

    /// Advance playback by delta time. Returns true while still active.
    pub fn update(&mut self, delta: f32) -> bool {
        if self.state != ActionState::Playing {
            return self.state != ActionState::Stopped;
        }

        let duration = self.clip.duration();
        if duration <= 0.0 {
            return false;
        }

        self.time += delta * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.state = ActionState::Stopped;
                    return false;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                }
            }
        }

        true
    }

    /// Get normalized time (0-1).
    pub fn normalized_time(&self) -> f32 {
        let duration = self.clip.duration();
        if duration <= 0.0 {
            0.0
        } else {
            self.time / duration
        }
    }
}
