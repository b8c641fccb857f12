//! Morph-target animation clips.

use thiserror::Error;

use crate::core::Id;

/// Error raised when morph animation data cannot be built or played.
///
/// Recovered locally by the owning entity: playback is skipped and the
/// entity keeps moving and rendering statically.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    /// The loaded model carries no morph targets to sequence.
    #[error("model '{0}' has no morph targets")]
    MissingMorphTargets(String),
    /// The sample rate must be positive to space keyframes.
    #[error("sample rate must be positive (got {0})")]
    InvalidSampleRate(f32),
}

/// A keyframe with time and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Time in seconds.
    pub time: f32,
    /// Morph weight at this keyframe.
    pub weight: f32,
}

impl Keyframe {
    /// Create a new keyframe.
    #[inline]
    pub const fn new(time: f32, weight: f32) -> Self {
        Self { time, weight }
    }
}

/// Weight track for a single morph target.
///
/// Keyframes are sorted by time; sampling clamps outside the keyframe range
/// and interpolates linearly between neighbors.
#[derive(Debug, Clone)]
pub struct WeightTrack {
    /// Morph target name this track drives.
    pub target: String,
    keyframes: Vec<Keyframe>,
}

impl WeightTrack {
    /// Create a track from parallel time and weight arrays.
    pub fn from_arrays(target: impl Into<String>, times: &[f32], weights: &[f32]) -> Self {
        let keyframes = times
            .iter()
            .zip(weights.iter())
            .map(|(&t, &w)| Keyframe::new(t, w))
            .collect();
        Self {
            target: target.into(),
            keyframes,
        }
    }

    /// Add a keyframe, keeping the track sorted by time.
    pub fn add_keyframe(&mut self, time: f32, weight: f32) {
        self.keyframes.push(Keyframe::new(time, weight));
        self.keyframes
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap());
    }

    /// Duration of this track (time of the last keyframe).
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map(|k| k.time).unwrap_or(0.0)
    }

    /// Sample the weight at a given time.
    pub fn sample(&self, time: f32) -> f32 {
        if self.keyframes.is_empty() {
            return 0.0;
        }

        if self.keyframes.len() == 1 || time <= self.keyframes[0].time {
            return self.keyframes[0].weight;
        }

        let last = self.keyframes.len() - 1;
        if time >= self.keyframes[last].time {
            return self.keyframes[last].weight;
        }

        let idx = self
            .keyframes
            .iter()
            .position(|k| k.time > time)
            .unwrap_or(last);

        let k0 = &self.keyframes[idx - 1];
        let k1 = &self.keyframes[idx];
        let t = (time - k0.time) / (k1.time - k0.time);
        crate::math::lerp(k0.weight, k1.weight, t)
    }
}

/// A morph animation clip: one weight track per morph target.
#[derive(Debug, Clone)]
pub struct MorphClip {
    /// Unique identifier.
    id: Id,
    /// Name of the animation.
    pub name: String,
    /// Duration in seconds (computed from tracks).
    duration: f32,
    /// One weight track per morph target.
    tracks: Vec<WeightTrack>,
}

impl MorphClip {
    /// Create a new empty clip.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            duration: 0.0,
            tracks: Vec::new(),
        }
    }

    /// Build a clip that plays a morph-target sequence at `fps`.
    ///
    /// Each target gets a triangular weight track peaking at its own frame
    /// and zero at its neighbors, so crossfading through the tracks steps
    /// the mesh through the sequence. This is how the wandering creature's
    /// gallop is authored: one morph target per pose, sampled at 60 fps.
    pub fn from_target_sequence(
        name: impl Into<String>,
        targets: &[String],
        fps: f32,
    ) -> Result<Self, AnimationError> {
        let name = name.into();
        if targets.is_empty() {
            return Err(AnimationError::MissingMorphTargets(name));
        }
        if fps <= 0.0 {
            return Err(AnimationError::InvalidSampleRate(fps));
        }

        let frame = 1.0 / fps;
        let mut clip = Self::new(name);
        for (i, target) in targets.iter().enumerate() {
            let peak = i as f32 * frame;
            let mut track = WeightTrack::from_arrays(target.clone(), &[], &[]);
            if i > 0 {
                track.add_keyframe(peak - frame, 0.0);
            }
            track.add_keyframe(peak, 1.0);
            track.add_keyframe(peak + frame, 0.0);
            clip.add_track(track);
        }
        Ok(clip)
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the duration in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Get the tracks.
    #[inline]
    pub fn tracks(&self) -> &[WeightTrack] {
        &self.tracks
    }

    /// Add a track, extending the clip duration if needed.
    pub fn add_track(&mut self, track: WeightTrack) {
        let track_duration = track.duration();
        if track_duration > self.duration {
            self.duration = track_duration;
        }
        self.tracks.push(track);
    }

    /// Find a track by morph target name.
    pub fn find_track(&self, target: &str) -> Option<&WeightTrack> {
        self.tracks.iter().find(|t| t.target == target)
    }

    /// Get the number of tracks.
    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the clip is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallop_targets(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("gallop_{:03}", i)).collect()
    }

    #[test]
    fn test_sequence_has_one_track_per_target() {
        let clip = MorphClip::from_target_sequence("gallop", &gallop_targets(12), 60.0).unwrap();
        assert_eq!(clip.track_count(), 12);
        // last target peaks at frame 11, track runs one frame past it
        assert!((clip.duration() - 12.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_track_peaks_at_own_frame() {
        let clip = MorphClip::from_target_sequence("gallop", &gallop_targets(4), 60.0).unwrap();
        let frame = 1.0 / 60.0;
        let track = clip.find_track("gallop_002").unwrap();
        assert_eq!(track.sample(2.0 * frame), 1.0);
        assert_eq!(track.sample(1.0 * frame), 0.0);
        assert_eq!(track.sample(3.0 * frame), 0.0);
        // halfway between frames the neighbors split the weight
        assert!((track.sample(1.5 * frame) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sample_clamps_outside_range() {
        let track = WeightTrack::from_arrays("t", &[0.1, 0.2], &[0.3, 0.9]);
        assert_eq!(track.sample(0.0), 0.3);
        assert_eq!(track.sample(1.0), 0.9);
    }

    #[test]
    fn test_empty_targets_rejected() {
        let result = MorphClip::from_target_sequence("gallop", &[], 60.0);
        assert_eq!(
            result.err(),
            Some(AnimationError::MissingMorphTargets("gallop".into()))
        );
    }

    #[test]
    fn test_zero_fps_rejected() {
        let result = MorphClip::from_target_sequence("gallop", &gallop_targets(2), 0.0);
        assert_eq!(result.err(), Some(AnimationError::InvalidSampleRate(0.0)));
    }
}
