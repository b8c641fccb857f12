//! Wandering creature locomotion.
//!
//! The creature travels a straight leg, turns around with a random jitter
//! when it runs off the far end, picks a fresh lateral offset, and gallops
//! back. Two snow-puff systems ride behind it and a morph mixer plays the
//! gallop sequence. Heading starts undefined, so the very first update
//! always fires one initialization turn.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::animation::{AnimationMixer, LoopMode, MorphClip};
use crate::core::{Id, Updatable};
use crate::loaders::LoadedModel;
use crate::math::{consts::PI, random_between, random_sign, Vector3};
use crate::particles::{ConfigError, EmitterConfig, ParticleSystem};
use crate::scene::{SceneContext, Transform};

/// Locomotion tuning for a wandering creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureConfig {
    /// Forward speed in units per second.
    pub speed: f32,
    /// Half the leg length: the creature starts a leg this far behind the
    /// turn point and turns this far past the origin.
    pub half_length: f32,
    /// Bound on the random heading jitter added to the half-turn, radians.
    pub turn_jitter: f32,
    /// Minimum lateral offset from the path line.
    pub offset_min: f32,
    /// Maximum lateral offset from the path line.
    pub offset_max: f32,
    /// Frames per second the gallop morph sequence was sampled at.
    pub gallop_fps: f32,
    /// Wall-clock seconds one gallop cycle plays over.
    pub gallop_duration: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            half_length: 20.0,
            turn_jitter: PI / 8.0,
            offset_min: 1.0,
            offset_max: 7.0,
            gallop_fps: 60.0,
            gallop_duration: 1.0,
        }
    }
}

/// A creature that gallops back and forth across the scene.
///
/// Two transforms mirror the original rig: `wrapper` carries the heading
/// rotation, `body` the lateral offset and the forward coordinate. Attached
/// snow puffs live in body space and get re-oriented after every turn so
/// their kicked-up snow keeps falling along world up.
pub struct Creature {
    /// Unique identifier.
    id: Id,
    config: CreatureConfig,
    /// Heading rotation about world up.
    wrapper: Transform,
    /// Lateral offset and forward coordinate under the wrapper.
    body: Transform,
    /// Current heading, undefined until the first turn decision.
    heading: Option<f32>,
    /// Forward distance accumulated since the last turn.
    distance: f32,
    /// Turn decisions taken so far (the initialization turn included).
    turns: u32,
    /// Snow kicked up behind the hooves.
    snow_puffs: Vec<ParticleSystem>,
    /// Gallop playback; empty until a model with morph targets arrives.
    mixer: AnimationMixer,
    /// The loaded model, if resolution has completed.
    model: Option<LoadedModel>,
    rng: SmallRng,
}

impl Creature {
    /// Create a creature with two trailing snow-puff systems.
    ///
    /// The second puff sits 1.5 units behind the first and runs 0.15
    /// seconds ahead in phase so the pair never pulses together.
    pub fn new(
        config: CreatureConfig,
        context: Arc<SceneContext>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut front = ParticleSystem::new(
            EmitterConfig::snow_puff_preset(),
            Arc::clone(&context),
            &mut rng,
        )?;
        front.set_name("puff-front");

        let mut rear = ParticleSystem::new(
            EmitterConfig::snow_puff_preset_offset(0.15),
            Arc::clone(&context),
            &mut rng,
        )?;
        rear.set_name("puff-rear");
        rear.set_position(0.0, 0.0, -1.5);

        Ok(Self {
            id: Id::new(),
            config,
            wrapper: Transform::new(),
            body: Transform::new(),
            heading: None,
            distance: 0.0,
            turns: 0,
            snow_puffs: vec![front, rear],
            mixer: AnimationMixer::new(),
            model: None,
            rng,
        })
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the locomotion tuning.
    #[inline]
    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    /// Current heading in radians, `None` before the first turn.
    #[inline]
    pub fn heading(&self) -> Option<f32> {
        self.heading
    }

    /// Forward distance accumulated since the last turn.
    #[inline]
    pub fn distance_since_turn(&self) -> f32 {
        self.distance
    }

    /// Number of turn decisions taken, the initialization turn included.
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turns
    }

    /// Heading transform (rotation about world up).
    #[inline]
    pub fn wrapper(&self) -> &Transform {
        &self.wrapper
    }

    /// Body transform under the wrapper (lateral offset + forward
    /// coordinate).
    #[inline]
    pub fn body(&self) -> &Transform {
        &self.body
    }

    /// World-space position of the body.
    pub fn position(&self) -> Vector3 {
        self.wrapper.transform_point(&self.body.position)
    }

    /// Attached snow-puff systems.
    #[inline]
    pub fn snow_puffs(&self) -> &[ParticleSystem] {
        &self.snow_puffs
    }

    /// Gallop mixer, for sampling blended morph weights.
    #[inline]
    pub fn mixer_mut(&mut self) -> &mut AnimationMixer {
        &mut self.mixer
    }

    /// The loaded model, if any.
    #[inline]
    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    /// Accept the asynchronously loaded model and start the gallop.
    ///
    /// A model without morph targets is kept for rendering but the gallop
    /// is skipped: the failure is logged and the creature keeps wandering.
    pub fn attach_model(&mut self, model: LoadedModel) {
        match MorphClip::from_target_sequence("gallop", &model.morph_targets, self.config.gallop_fps)
        {
            Ok(clip) => {
                let duration = self.config.gallop_duration;
                let action = self.mixer.clip_action(Arc::new(clip));
                action.loop_mode = LoopMode::Loop;
                action.set_duration(duration).play();
                log::debug!("creature {}: gallop started for '{}'", self.id, model.name);
            }
            Err(err) => {
                log::warn!("creature {}: {}; rendering statically", self.id, err);
            }
        }
        self.model = Some(model);
    }

    fn turn(&mut self) {
        let jitter = random_between(&mut self.rng, -self.config.turn_jitter, self.config.turn_jitter);
        let heading = self.heading.unwrap_or(0.0) + PI + jitter;
        self.heading = Some(heading);
        self.distance = 0.0;
        self.turns += 1;
        self.wrapper.set_rotation_y(heading);

        let offset = random_between(&mut self.rng, self.config.offset_min, self.config.offset_max);
        self.body.position.x = offset * random_sign(&mut self.rng);

        // the puffs inherited the new heading; keep their snow falling
        // along world up
        for puff in &mut self.snow_puffs {
            puff.orient(&self.wrapper.quaternion);
        }

        log::debug!(
            "creature {}: turn {} to heading {:.3} rad, lateral {:.2}",
            self.id,
            self.turns,
            heading,
            self.body.position.x
        );
    }

    /// Advance locomotion, gallop playback, and the attached puffs by one
    /// frame.
    pub fn update(&mut self, delta: f32, elapsed: f32) {
        self.distance += delta * self.config.speed;
        let forward = -self.config.half_length + self.distance;

        if self.heading.is_none() || forward > self.config.half_length {
            self.turn();
        }

        // the wrapper just rotated by ~pi, so keeping the stale forward
        // coordinate lands on (almost) the same world point
        self.body.position.z = forward;

        self.mixer.update(delta);
        for puff in &mut self.snow_puffs {
            puff.update(delta, elapsed);
        }
    }
}

impl Updatable for Creature {
    fn update(&mut self, delta: f32, elapsed: f32) {
        Creature::update(self, delta, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature() -> Creature {
        let config = CreatureConfig {
            half_length: 2.0,
            ..CreatureConfig::default()
        };
        Creature::new(config, SceneContext::outdoor(true).shared(), 11).unwrap()
    }

    fn gallop_model(frames: usize) -> LoadedModel {
        let targets = (0..frames).map(|i| format!("gallop_{:03}", i)).collect();
        LoadedModel::new("moose_life")
            .with_morph_targets(targets)
            .with_scale(0.01)
    }

    #[test]
    fn test_first_update_defines_heading() {
        let mut creature = creature();
        assert!(creature.heading().is_none());

        creature.update(0.016, 0.016);
        let heading = creature.heading().expect("initialization turn");
        // first turn: pi plus bounded jitter from an undefined (zero) start
        assert!((heading - PI).abs() <= PI / 8.0 + 1e-6);
        assert_eq!(creature.turn_count(), 1);
        assert!(creature.distance_since_turn() < 0.1);
    }

    #[test]
    fn test_heading_flips_by_half_turn_each_turn() {
        let mut creature = creature();
        creature.update(0.016, 0.016);
        let first = creature.heading().unwrap();

        // drive until the next turn fires
        let mut elapsed = 0.016;
        while creature.turn_count() < 2 {
            elapsed += 0.05;
            creature.update(0.05, elapsed);
        }
        let second = creature.heading().unwrap();
        assert!(((second - first) - PI).abs() <= PI / 8.0 + 1e-6);
    }

    #[test]
    fn test_turn_count_matches_leg_length() {
        let mut creature = creature();
        let leg = 2.0 * creature.config().half_length;
        let speed = creature.config().speed;

        // travel ten legs in fixed steps
        let total_time = 10.0 * leg / speed;
        let steps = 4000;
        let dt = total_time / steps as f32;
        let mut elapsed = 0.0;
        for _ in 0..steps {
            elapsed += dt;
            creature.update(dt, elapsed);
        }
        // one initialization turn plus one per completed leg, within one
        // turn of slack for step rounding
        let turns = creature.turn_count() as i64;
        assert!((turns - 11).abs() <= 1, "saw {} turns", turns);
    }

    #[test]
    fn test_lateral_offset_stays_in_band() {
        let mut creature = creature();
        let mut elapsed = 0.0;
        while creature.turn_count() < 4 {
            elapsed += 0.05;
            creature.update(0.05, elapsed);
            let lateral = creature.body().position.x.abs();
            assert!(lateral >= creature.config().offset_min);
            assert!(lateral <= creature.config().offset_max);
        }
    }

    #[test]
    fn test_puffs_receive_parent_clock() {
        let mut creature = creature();
        creature.update(0.016, 1.0);
        assert_eq!(creature.snow_puffs().len(), 2);
        assert!((creature.snow_puffs()[0].scene_time() - 1.0).abs() < 1e-6);
        // the rear puff runs 0.15s ahead
        assert!((creature.snow_puffs()[1].scene_time() - 1.15).abs() < 1e-6);
    }

    #[test]
    fn test_gallop_starts_when_model_attached() {
        let mut creature = creature();
        creature.attach_model(gallop_model(12));
        assert!(creature.mixer_mut().is_playing());

        creature.update(0.016, 0.016);
        assert!(!creature.mixer_mut().sample().is_empty());
    }

    #[test]
    fn test_missing_morph_targets_degrade_gracefully() {
        let mut creature = creature();
        creature.attach_model(LoadedModel::new("moose_life"));
        assert!(!creature.mixer_mut().is_playing());

        // locomotion is unaffected
        creature.update(0.016, 0.016);
        assert!(creature.heading().is_some());
    }

    #[test]
    fn test_moves_while_model_unloaded() {
        let mut creature = creature();
        creature.update(0.5, 0.5);
        creature.update(0.5, 1.0);
        assert!(creature.distance_since_turn() > 0.0);
        assert!(creature.position().length() > 0.0);
    }
}
