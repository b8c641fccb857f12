//! Looping particle systems driven by the scene clock.

use std::sync::Arc;

use rand::Rng;

use super::{
    kinematics, ConfigError, EmitterConfig, MotionVariant, ParticleField, ParticlePreset,
    Uniforms,
};
use super::{FireUniforms, SnowUniforms};
use crate::core::{Id, Updatable};
use crate::loaders::TextureSlot;
use crate::math::{Quaternion, Vector3};
use crate::scene::{SceneContext, Transform};

/// A fixed population of looping particles.
///
/// Construction samples the static field once; after that every frame is a
/// pure function of the scene clock, so repeated updates at the same time
/// are idempotent and systems can be evaluated in any order.
pub struct ParticleSystem {
    /// Unique identifier.
    id: Id,
    /// System name.
    name: String,
    /// Emitter configuration, immutable after construction.
    config: EmitterConfig,
    /// Write-once per-particle attributes.
    field: ParticleField,
    /// Placement of the emitter in its parent space.
    transform: Transform,
    /// World up re-expressed in emitter-local space.
    local_up: Vector3,
    /// Scene time the motion program currently sees, offset included.
    scene_time: f32,
    /// Shared environmental inputs.
    context: Arc<SceneContext>,
    /// Sprite texture, resolved asynchronously.
    texture: TextureSlot,
    /// Renderer hint; never gates updates.
    pub visible: bool,
}

impl ParticleSystem {
    /// Create a system from a configuration, sampling its field with `rng`.
    pub fn new<R: Rng + ?Sized>(
        config: EmitterConfig,
        context: Arc<SceneContext>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let field = ParticleField::generate(&config, rng)?;
        let local_up = context.up;
        let scene_time = config.time_offset;
        Ok(Self {
            id: Id::new(),
            name: String::new(),
            config,
            field,
            transform: Transform::new(),
            local_up,
            scene_time,
            context,
            texture: TextureSlot::new(),
            visible: true,
        })
    }

    /// Create a particle system from a preset.
    pub fn from_preset<R: Rng + ?Sized>(
        preset: ParticlePreset,
        context: Arc<SceneContext>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let config = match preset {
            ParticlePreset::Fire => EmitterConfig::fire_preset(),
            ParticlePreset::Snowfall => EmitterConfig::snowfall_preset(),
            ParticlePreset::SnowPuff => EmitterConfig::snow_puff_preset(),
        };
        Self::new(config, context, rng)
    }

    /// Get the system ID.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the configuration.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Get the static attribute field.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Set the system name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the system name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the emitter placement.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Get the emitter placement for mutation.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Set the emitter position in its parent space.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_position(x, y, z);
    }

    /// Get the sprite texture slot.
    pub fn texture_slot(&self) -> &TextureSlot {
        &self.texture
    }

    /// The bound sprite texture, if resolution has completed.
    pub fn texture(&self) -> Option<&crate::loaders::LoadedTexture> {
        self.texture.texture()
    }

    /// Issue the one-shot asynchronous request for this system's sprite.
    ///
    /// `loader` runs off the frame loop; success binds the texture into the
    /// slot, failure logs and the system keeps rendering untextured. At
    /// most one request is ever issued per system.
    pub fn resolve_texture<F>(
        &self,
        url: impl Into<String>,
        loader: F,
    ) -> Option<std::thread::JoinHandle<()>>
    where
        F: FnOnce(&str) -> Result<crate::loaders::LoadedTexture, crate::loaders::LoadError>
            + Send
            + 'static,
    {
        self.texture.resolve_with(url, loader)
    }

    /// Scene time the motion program currently sees.
    #[inline]
    pub fn scene_time(&self) -> f32 {
        self.scene_time
    }

    /// World up in emitter-local space, as handed to the motion program.
    #[inline]
    pub fn local_up(&self) -> Vector3 {
        self.local_up
    }

    /// Re-express world up in this system's local space.
    ///
    /// `world_rotation` is the emitter's composed world rotation. Call
    /// whenever the owner moves so gravity keeps pulling along world up
    /// however the emitter is tilted.
    pub fn orient(&mut self, world_rotation: &Quaternion) {
        self.local_up = self.context.up.apply_quaternion(&world_rotation.inverse());
    }

    /// Advance to the given scene time.
    ///
    /// Stores `elapsed` plus the configured offset; nothing is integrated,
    /// so calling twice with the same time is harmless.
    pub fn update(&mut self, _delta: f32, elapsed: f32) {
        self.scene_time = elapsed + self.config.time_offset;
    }

    /// Normalized age of particle `i` at the current scene time.
    pub fn age_of(&self, i: usize) -> Option<f32> {
        let sample = self.field.sample(i)?;
        Some(kinematics::sample_age(&self.config, &sample, self.scene_time))
    }

    /// Position of particle `i` in the emitter's parent space at the
    /// current scene time.
    pub fn particle_position(&self, i: usize) -> Option<Vector3> {
        let sample = self.field.sample(i)?;
        let local = kinematics::displacement(&self.config, &sample, &self.local_up, self.scene_time);
        Some(self.transform.transform_point(&local))
    }

    /// Pack this frame's parameter block for the renderer.
    pub fn uniforms(&self) -> Uniforms {
        match self.config.variant {
            MotionVariant::Fire => Uniforms::Fire(FireUniforms::pack(
                &self.config,
                &self.local_up,
                self.scene_time,
            )),
            MotionVariant::Snow => Uniforms::Snow(SnowUniforms::pack(
                &self.config,
                &self.context.fog,
                &self.local_up,
                self.scene_time,
            )),
        }
    }
}

impl Updatable for ParticleSystem {
    fn update(&mut self, delta: f32, elapsed: f32) {
        ParticleSystem::update(self, delta, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::consts::HALF_PI;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn small_system(config: EmitterConfig) -> ParticleSystem {
        let context = SceneContext::outdoor(true).shared();
        let mut rng = SmallRng::seed_from_u64(7);
        ParticleSystem::new(config, context, &mut rng).unwrap()
    }

    fn small_fire() -> EmitterConfig {
        EmitterConfig {
            particle_count: 64,
            ..EmitterConfig::fire_preset()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EmitterConfig {
            particle_count: 0,
            ..EmitterConfig::fire_preset()
        };
        let context = SceneContext::default().shared();
        let mut rng = SmallRng::seed_from_u64(0);
        let result = ParticleSystem::new(config, context, &mut rng);
        assert!(matches!(result, Err(ConfigError::InvalidParticleCount(0))));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut system = small_system(small_fire());
        system.update(0.016, 2.0);
        let first: Vec<_> = (0..64).map(|i| system.particle_position(i)).collect();
        system.update(0.016, 2.0);
        let second: Vec<_> = (0..64).map(|i| system.particle_position(i)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_time_offset_staggers_siblings() {
        let mut a = small_system(EmitterConfig {
            particle_count: 64,
            ..EmitterConfig::snow_puff_preset()
        });
        let mut b = small_system(EmitterConfig {
            particle_count: 64,
            ..EmitterConfig::snow_puff_preset_offset(0.15)
        });
        a.update(0.016, 1.0);
        b.update(0.016, 1.0);
        assert!((a.scene_time() - 1.0).abs() < 1e-6);
        assert!((b.scene_time() - 1.15).abs() < 1e-6);
        assert!((b.uniforms().scene_time() - 1.15).abs() < 1e-6);
    }

    #[test]
    fn test_orient_tracks_world_up() {
        let mut system = small_system(small_fire());
        // pitched a quarter turn about X: world up seen from local space
        system.orient(&Quaternion::from_rotation_x(HALF_PI));
        assert!(system
            .local_up()
            .approx_eq(&Vector3::new(0.0, 0.0, -1.0), 1e-6));

        system.orient(&Quaternion::IDENTITY);
        assert!(system.local_up().approx_eq(&Vector3::UP, 1e-6));
    }

    #[test]
    fn test_uniforms_follow_variant() {
        let fire = small_system(small_fire());
        assert!(matches!(fire.uniforms(), Uniforms::Fire(_)));

        let snow = small_system(EmitterConfig {
            particle_count: 64,
            ..EmitterConfig::snowfall_preset()
        });
        match snow.uniforms() {
            Uniforms::Snow(block) => {
                // night scene fog rides along
                assert_eq!(block.fog_range[2], 3.0);
            }
            Uniforms::Fire(_) => panic!("snow system packed a fire block"),
        }
    }

    #[test]
    fn test_texture_resolves_once_into_slot() {
        use crate::loaders::LoadedTexture;

        let system = small_system(small_fire());
        assert!(system.texture().is_none());

        let handle = system
            .resolve_texture("snowflake_16x16.png", |_| {
                Ok(LoadedTexture::new(16, 16, vec![255; 16 * 16 * 4]))
            })
            .unwrap();
        handle.join().unwrap();
        assert_eq!(system.texture().map(|t| t.width), Some(16));

        // second request is dropped
        assert!(system
            .resolve_texture("other.png", |_| Ok(LoadedTexture::new(1, 1, vec![0; 4])))
            .is_none());
    }

    #[test]
    fn test_emitter_transform_offsets_particles() {
        let mut system = small_system(small_fire());
        system.update(0.0, 0.35);
        let before = system.particle_position(0).unwrap();
        system.set_position(0.0, 5.0, 0.0);
        let after = system.particle_position(0).unwrap();
        assert!((after.y - before.y - 5.0).abs() < 1e-5);
    }
}
