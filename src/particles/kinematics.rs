//! Per-element motion programs.
//!
//! The renderer evaluates these formulas once per particle per frame on its
//! parallel per-element stage; the host never iterates the field. The
//! functions here are the reference implementation that stage must
//! reproduce, and what the unit tests drive.
//!
//! Everything is computed in the system's local space, where the emission
//! cone opens about +Y. The `up` argument is the world up re-expressed in
//! that space by the owning system (see `ParticleSystem::orient`), so
//! gravity keeps pulling along world Y however the owner is tilted.

use super::{EmitterConfig, MotionVariant, ParticleSample};
use crate::math::{consts::PI, lerp, Vector3};
use crate::particles::phase;

/// Normalized age of a sample at the given scene time.
#[inline]
pub fn sample_age(config: &EmitterConfig, sample: &ParticleSample, elapsed: f32) -> f32 {
    phase::normalized_age(
        elapsed,
        sample.index,
        config.particle_count,
        sample.uniqueness,
        config.lifetime,
    )
}

/// Displacement of a fire particle from the emitter origin.
///
/// Rise along the sampled direction with the horizontal components squeezed
/// shut toward the top of the flame, an upward heat term growing with age
/// squared, and a lateral sway orthogonal to both up and direction.
pub fn fire_position(
    config: &EmitterConfig,
    sample: &ParticleSample,
    up: &Vector3,
    elapsed: f32,
) -> Vector3 {
    let age = sample_age(config, sample, elapsed);

    let heat = *up * (config.gravity * age * age);

    let flame_height = lerp(
        config.flame_min_height,
        config.flame_max_height,
        sample.uniqueness,
    );
    let mut rise = sample.direction * (flame_height * age);
    let closure = (age * PI * config.flame_period).cos();
    rise.x *= closure;
    rise.z *= closure;

    let sway_phase = (elapsed + age * sample.uniqueness) * config.wind_frequency * sample.uniqueness;
    let wind = up.cross(&sample.direction)
        * sway_phase.sin()
        * (config.wind_strength * sample.uniqueness * age);

    rise + heat + wind
}

/// Displacement of a snow particle from the emitter origin.
///
/// Straight-line travel along the sampled velocity plus a fall that
/// accelerates with age squared. No closure term.
pub fn snow_position(
    config: &EmitterConfig,
    sample: &ParticleSample,
    up: &Vector3,
    elapsed: f32,
) -> Vector3 {
    let age = sample_age(config, sample, elapsed);
    let travel = sample.direction * (age * config.speed);
    let fall = *up * (-config.gravity * age * age);
    travel + fall
}

/// Displacement from the emitter origin for whichever variant the config
/// selects.
pub fn displacement(
    config: &EmitterConfig,
    sample: &ParticleSample,
    up: &Vector3,
    elapsed: f32,
) -> Vector3 {
    match config.variant {
        MotionVariant::Fire => fire_position(config, sample, up, elapsed),
        MotionVariant::Snow => snow_position(config, sample, up, elapsed),
    }
}

/// Point size before the perspective divide.
#[inline]
pub fn point_size(config: &EmitterConfig, age: f32) -> f32 {
    lerp(config.size_start, config.size_end, age)
}

/// Final point size for a viewer at `distance` (> 0) from the particle.
#[inline]
pub fn point_size_at_distance(config: &EmitterConfig, age: f32, distance: f32) -> f32 {
    point_size(config, age) * (config.distance_scale / distance)
}

/// Fire tint at `age`: start color fading toward the end color with
/// opacity reaching zero at end of life.
pub fn fire_color(config: &EmitterConfig, age: f32) -> [f32; 4] {
    let rgb = config.color.lerp(&config.end_color, age);
    rgb.to_rgba(lerp(config.opacity, 0.0, age))
}

/// Snow tint: constant; the renderer's fog attenuates it by depth.
#[inline]
pub fn snow_color(config: &EmitterConfig) -> [f32; 4] {
    config.color.to_rgba(config.opacity)
}
