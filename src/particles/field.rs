//! Static per-particle attribute generation.

use rand::Rng;

use super::{ConfigError, EmitterConfig};
use crate::math::{rand_center, random_between, Spherical, Vector3};

/// One particle's static attributes, as fed to the motion program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    /// Emission direction, magnitude included.
    pub direction: Vector3,
    /// Uniqueness scalar in [0, 1).
    pub uniqueness: f32,
    /// Sequential index in the field.
    pub index: u32,
}

/// The write-once attribute arrays backing one particle system.
///
/// Sampled once at construction and never mutated; every frame of motion is
/// derived from these plus the scene clock. Directions carry the sampled
/// emission magnitude as their length (fire presets use a degenerate 1..1
/// band, so their directions stay unit length).
#[derive(Debug, Clone)]
pub struct ParticleField {
    directions: Vec<Vector3>,
    uniqueness: Vec<f32>,
    indices: Vec<u32>,
}

impl ParticleField {
    /// Sample a field for the given configuration.
    ///
    /// Deterministic for a given rng seed. Rejects configurations that
    /// cannot describe a drawable system before sampling anything.
    pub fn generate<R: Rng + ?Sized>(
        config: &EmitterConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let count = config.particle_count as usize;
        let mut directions = Vec::with_capacity(count);
        let mut uniqueness = Vec::with_capacity(count);
        let mut indices = Vec::with_capacity(count);

        for index in 0..config.particle_count {
            let polar = rand_center(rng, config.spread);
            let azimuth = rand_center(rng, config.azimuth_spread);
            let magnitude = random_between(rng, config.magnitude_min, config.magnitude_max);
            directions.push(Spherical::new(magnitude, polar, azimuth).to_vector3());
            uniqueness.push(rng.gen::<f32>());
            indices.push(index);
        }

        Ok(Self {
            directions,
            uniqueness,
            indices,
        })
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for an empty field (never produced by `generate`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Emission direction per particle, magnitude included.
    #[inline]
    pub fn directions(&self) -> &[Vector3] {
        &self.directions
    }

    /// Directions as a flat `[x, y, z, ...]` component slice for vertex
    /// buffer upload.
    #[inline]
    pub fn direction_components(&self) -> &[f32] {
        bytemuck::cast_slice(&self.directions)
    }

    /// Uniqueness scalar per particle, in [0, 1).
    #[inline]
    pub fn uniqueness(&self) -> &[f32] {
        &self.uniqueness
    }

    /// Sequential particle index per particle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// View one particle's attributes.
    ///
    /// Returns `None` past the end of the field.
    pub fn sample(&self, i: usize) -> Option<ParticleSample> {
        Some(ParticleSample {
            direction: *self.directions.get(i)?,
            uniqueness: *self.uniqueness.get(i)?,
            index: *self.indices.get(i)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn small_fire() -> EmitterConfig {
        EmitterConfig {
            particle_count: 256,
            ..EmitterConfig::fire_preset()
        }
    }

    #[test]
    fn test_arrays_match_population() {
        let mut rng = SmallRng::seed_from_u64(1);
        let field = ParticleField::generate(&small_fire(), &mut rng).unwrap();
        assert_eq!(field.len(), 256);
        assert_eq!(field.directions().len(), 256);
        assert_eq!(field.uniqueness().len(), 256);
        assert_eq!(field.direction_components().len(), 256 * 3);
    }

    #[test]
    fn test_indices_are_sequential() {
        let mut rng = SmallRng::seed_from_u64(1);
        let field = ParticleField::generate(&small_fire(), &mut rng).unwrap();
        for (i, index) in field.indices().iter().enumerate() {
            assert_eq!(*index, i as u32);
        }
    }

    #[test]
    fn test_uniqueness_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(2);
        let field = ParticleField::generate(&small_fire(), &mut rng).unwrap();
        for u in field.uniqueness() {
            assert!((0.0..1.0).contains(u));
        }
    }

    #[test]
    fn test_directions_stay_inside_cone() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = small_fire();
        let field = ParticleField::generate(&config, &mut rng).unwrap();
        let half_angle = config.spread / 2.0;
        for dir in field.directions() {
            assert!(dir.angle_to(&Vector3::UP) <= half_angle + 1e-5);
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_snow_magnitudes_stay_in_band() {
        let mut rng = SmallRng::seed_from_u64(4);
        let config = EmitterConfig {
            particle_count: 256,
            ..EmitterConfig::snow_puff_preset()
        };
        let field = ParticleField::generate(&config, &mut rng).unwrap();
        for dir in field.directions() {
            let len = dir.length();
            assert!(len >= config.magnitude_min - 1e-6);
            assert!(len <= config.magnitude_max + 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = small_fire();
        let a = ParticleField::generate(&config, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = ParticleField::generate(&config, &mut SmallRng::seed_from_u64(9)).unwrap();
        for (da, db) in a.directions().iter().zip(b.directions()) {
            assert_eq!(da, db);
        }
        assert_eq!(a.uniqueness(), b.uniqueness());
    }

    #[test]
    fn test_zero_count_rejected_before_sampling() {
        let config = EmitterConfig {
            particle_count: 0,
            ..EmitterConfig::fire_preset()
        };
        let result = ParticleField::generate(&config, &mut SmallRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(ConfigError::InvalidParticleCount(0)));
    }
}
