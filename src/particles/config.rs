//! Emitter configuration and scene presets.

use crate::math::{consts::PI, Color};
use thiserror::Error;

/// Error raised when an emitter configuration cannot describe a drawable
/// system. Construction fails; there is no partially-valid system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The population must contain at least one particle.
    #[error("particle count must be positive (got {0})")]
    InvalidParticleCount(u32),
    /// Lifetimes and other durations must be positive.
    #[error("{name} must be positive (got {value})")]
    NonPositiveDuration {
        /// Which duration field was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Color components must lie in 0.0-1.0.
    #[error("{0} components must lie in 0.0-1.0")]
    ColorOutOfRange(&'static str),
    /// Opacity must lie in 0.0-1.0.
    #[error("opacity must lie in 0.0-1.0 (got {0})")]
    OpacityOutOfRange(f32),
    /// Emission magnitudes must form a non-negative band.
    #[error("magnitude band must satisfy 0 <= min <= max (got {min}..{max})")]
    InvalidMagnitudeBand {
        /// Lower bound of the band.
        min: f32,
        /// Upper bound of the band.
        max: f32,
    },
}

/// Which per-element motion program drives a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionVariant {
    /// Rising embers: cyclical closure toward the top, upward gravity,
    /// lateral wind, color fading start to end.
    Fire,
    /// Drifting flakes: straight-line travel along the sampled velocity
    /// plus downward gravity, constant color, fog-attenuated.
    Snow,
}

/// Scene preset for the systems this crate ships.
#[derive(Debug, Clone, Copy)]
pub enum ParticlePreset {
    /// Torch flame, a thousand embers closing into a tip.
    Fire,
    /// Ambient snowfall blanketing the scene.
    Snowfall,
    /// Snow kicked up behind hooves.
    SnowPuff,
}

/// Complete configuration for one particle system.
///
/// Immutable once the system is constructed; all fields participate in the
/// per-element motion program or its rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// The motion program to run.
    pub variant: MotionVariant,
    /// Fixed particle population.
    pub particle_count: u32,
    /// Base life cycle in seconds; each particle stretches this by its
    /// uniqueness into [1x, 2x).
    pub lifetime: f32,
    /// Full width of the polar emission cone about local +Y, in radians.
    pub spread: f32,
    /// Full width of the azimuth range, in radians.
    pub azimuth_spread: f32,
    /// Minimum emission magnitude (direction vector length).
    pub magnitude_min: f32,
    /// Maximum emission magnitude.
    pub magnitude_max: f32,
    /// Scales travel along the sampled velocity (snow variant).
    pub speed: f32,
    /// Gravity strength; pulls up for fire, down for snow.
    pub gravity: f32,
    /// Lateral wind amplitude (fire variant).
    pub wind_strength: f32,
    /// Lateral wind frequency (fire variant).
    pub wind_frequency: f32,
    /// Rise height for the least unique particle (fire variant).
    pub flame_min_height: f32,
    /// Rise height for the most unique particle (fire variant).
    pub flame_max_height: f32,
    /// Fraction of a half-turn the flame closes over one cycle; 0.5 closes
    /// fully at the top (fire variant).
    pub flame_period: f32,
    /// Point size at age 0.
    pub size_start: f32,
    /// Point size at end of life.
    pub size_end: f32,
    /// Perspective factor: sizes divide by viewer distance times this.
    pub distance_scale: f32,
    /// Color at age 0.
    pub color: Color,
    /// Color at end of life.
    pub end_color: Color,
    /// Opacity at age 0 (fades to 0 for fire, constant for snow).
    pub opacity: f32,
    /// Seconds added to the scene clock for this system, staggering
    /// otherwise identical siblings.
    pub time_offset: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            variant: MotionVariant::Snow,
            particle_count: 1000,
            lifetime: 1.0,
            spread: PI * 0.5,
            azimuth_spread: PI,
            magnitude_min: 0.0,
            magnitude_max: 1.0,
            speed: 1.0,
            gravity: 1.0,
            wind_strength: 0.0,
            wind_frequency: 0.0,
            flame_min_height: 0.0,
            flame_max_height: 0.0,
            flame_period: 0.5,
            size_start: 1.0,
            size_end: 1.0,
            distance_scale: 1.0,
            color: Color::WHITE,
            end_color: Color::WHITE,
            opacity: 1.0,
            time_offset: 0.0,
        }
    }
}

impl EmitterConfig {
    /// Torch flame: a thousand embers rising and closing into a flame tip.
    pub fn fire_preset() -> Self {
        Self {
            variant: MotionVariant::Fire,
            particle_count: 1000,
            lifetime: 0.7,
            // wide base, azimuth across a half turn
            spread: PI * 0.8,
            azimuth_spread: PI,
            magnitude_min: 1.0,
            magnitude_max: 1.0,
            speed: 1.0,
            gravity: 0.2,
            wind_strength: 0.14,
            wind_frequency: 0.5,
            flame_min_height: 0.02,
            flame_max_height: 0.25,
            flame_period: 0.5,
            size_start: 10.0,
            size_end: 20.0,
            distance_scale: 1.5,
            color: Color::from_hex(0xFCC648),
            end_color: Color::from_hex(0xC0561C),
            opacity: 0.7,
            time_offset: 0.0,
        }
    }

    /// Ambient snowfall: a large slow-cycling population drifting down from
    /// just above head height.
    pub fn snowfall_preset() -> Self {
        Self {
            variant: MotionVariant::Snow,
            particle_count: 100_000,
            lifetime: 8.0,
            spread: PI,
            azimuth_spread: PI * 2.0,
            magnitude_min: 0.0,
            magnitude_max: 0.15,
            speed: 1.0,
            gravity: 1.0,
            wind_strength: 0.0,
            wind_frequency: 0.0,
            flame_min_height: 0.0,
            flame_max_height: 0.0,
            flame_period: 0.5,
            size_start: 4.0,
            size_end: 4.0,
            distance_scale: 2.0,
            color: Color::WHITE,
            end_color: Color::WHITE,
            opacity: 0.5,
            time_offset: 0.0,
        }
    }

    /// Snow kicked up behind hooves: short-lived, fast, dense.
    pub fn snow_puff_preset() -> Self {
        Self {
            variant: MotionVariant::Snow,
            particle_count: 10_000,
            lifetime: 1.5,
            spread: PI * 0.66,
            azimuth_spread: PI * 0.66,
            magnitude_min: 0.0,
            magnitude_max: 0.8,
            speed: 4.0,
            gravity: 1.0,
            wind_strength: 0.0,
            wind_frequency: 0.0,
            flame_min_height: 0.0,
            flame_max_height: 0.0,
            flame_period: 0.5,
            size_start: 5.0,
            size_end: 5.0,
            distance_scale: 2.0,
            color: Color::WHITE,
            end_color: Color::WHITE,
            opacity: 0.5,
            time_offset: 0.0,
        }
    }

    /// Same puff staggered in time so sibling systems never pulse together.
    pub fn snow_puff_preset_offset(time_offset: f32) -> Self {
        Self {
            time_offset,
            ..Self::snow_puff_preset()
        }
    }

    /// Reject configurations that cannot describe a drawable system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::InvalidParticleCount(self.particle_count));
        }
        if self.lifetime <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                name: "lifetime",
                value: self.lifetime,
            });
        }
        if !self.color.is_normalized() {
            return Err(ConfigError::ColorOutOfRange("color"));
        }
        if !self.end_color.is_normalized() {
            return Err(ConfigError::ColorOutOfRange("end_color"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.opacity));
        }
        if self.magnitude_min < 0.0 || self.magnitude_max < self.magnitude_min {
            return Err(ConfigError::InvalidMagnitudeBand {
                min: self.magnitude_min,
                max: self.magnitude_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(EmitterConfig::fire_preset().validate(), Ok(()));
        assert_eq!(EmitterConfig::snowfall_preset().validate(), Ok(()));
        assert_eq!(EmitterConfig::snow_puff_preset().validate(), Ok(()));
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = EmitterConfig {
            particle_count: 0,
            ..EmitterConfig::fire_preset()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidParticleCount(0)));
    }

    #[test]
    fn test_zero_lifetime_rejected() {
        let config = EmitterConfig {
            lifetime: 0.0,
            ..EmitterConfig::fire_preset()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration { name: "lifetime", .. })
        ));
    }

    #[test]
    fn test_out_of_range_opacity_rejected() {
        let config = EmitterConfig {
            opacity: 1.5,
            ..EmitterConfig::snow_puff_preset()
        };
        assert_eq!(config.validate(), Err(ConfigError::OpacityOutOfRange(1.5)));
    }

    #[test]
    fn test_inverted_magnitude_band_rejected() {
        let config = EmitterConfig {
            magnitude_min: 1.0,
            magnitude_max: 0.5,
            ..EmitterConfig::snow_puff_preset()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMagnitudeBand { .. })
        ));
    }
}
