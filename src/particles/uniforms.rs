//! Renderer-facing parameter blocks.
//!
//! Plain-old-data snapshots of everything the per-element motion stage
//! needs for one frame. The owning system rebuilds the block each frame
//! from its config, its oriented local up, and the shared scene context;
//! the renderer uploads it as-is.

use bytemuck::{Pod, Zeroable};

use super::EmitterConfig;
use crate::math::{Color, Vector3};
use crate::scene::Fog;

/// Fire parameters, packed in 16-byte lanes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FireUniforms {
    /// Local up (xyz) + scene time in seconds (w).
    pub up_time: [f32; 4],
    /// Start color (rgb) + start opacity (a).
    pub color: [f32; 4],
    /// End color (rgb) + end opacity, always zero (a).
    pub end_color: [f32; 4],
    /// Flame shape: x=min height, y=max height, z=closure period, w=heat gain.
    pub flame: [f32; 4],
    /// x=wind strength, y=wind frequency, z=point size at birth, w=at death.
    pub wind_size: [f32; 4],
    /// x=base lifetime in seconds, y=particle count, z=distance scale, w=unused.
    pub timing: [f32; 4],
}

impl FireUniforms {
    /// Snapshot the fire parameters for one frame.
    pub fn pack(config: &EmitterConfig, up: &Vector3, elapsed: f32) -> Self {
        let [ux, uy, uz] = up.to_array();
        Self {
            up_time: [ux, uy, uz, elapsed],
            color: config.color.to_rgba(config.opacity),
            end_color: config.end_color.to_rgba(0.0),
            flame: [
                config.flame_min_height,
                config.flame_max_height,
                config.flame_period,
                config.gravity,
            ],
            wind_size: [
                config.wind_strength,
                config.wind_frequency,
                config.size_start,
                config.size_end,
            ],
            timing: [
                config.lifetime,
                config.particle_count as f32,
                config.distance_scale,
                0.0,
            ],
        }
    }
}

impl Default for FireUniforms {
    fn default() -> Self {
        Self::pack(&EmitterConfig::fire_preset(), &Vector3::UP, 0.0)
    }
}

/// Snow parameters, packed in 16-byte lanes. Carries the scene fog so deep
/// flakes dissolve into the background instead of popping.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SnowUniforms {
    /// Local up (xyz) + scene time in seconds (w).
    pub up_time: [f32; 4],
    /// Tint (rgb) + opacity (a).
    pub color: [f32; 4],
    /// x=travel speed, y=fall gain, z=point size at birth, w=at death.
    pub motion: [f32; 4],
    /// x=base lifetime in seconds, y=particle count, z=distance scale, w=unused.
    pub timing: [f32; 4],
    /// Fog color (rgb) + density (a). Density is zero for linear fog.
    pub fog_color: [f32; 4],
    /// x=fog near, y=fog far, z=fog mode (0=none, 1=linear, 2=exp, 3=exp2), w=unused.
    pub fog_range: [f32; 4],
}

impl SnowUniforms {
    /// Snapshot the snow parameters for one frame.
    pub fn pack(config: &EmitterConfig, fog: &Fog, up: &Vector3, elapsed: f32) -> Self {
        let (mode, fog_color, near, far, density) = match *fog {
            Fog::None => (0.0, Color::BLACK, 0.0, 0.0, 0.0),
            Fog::Linear { color, near, far } => (1.0, color, near, far, 0.0),
            Fog::Exponential { color, density } => (2.0, color, 0.0, 0.0, density),
            Fog::ExponentialSquared { color, density } => (3.0, color, 0.0, 0.0, density),
        };
        let [ux, uy, uz] = up.to_array();
        Self {
            up_time: [ux, uy, uz, elapsed],
            color: config.color.to_rgba(config.opacity),
            motion: [
                config.speed,
                config.gravity,
                config.size_start,
                config.size_end,
            ],
            timing: [
                config.lifetime,
                config.particle_count as f32,
                config.distance_scale,
                0.0,
            ],
            fog_color: fog_color.to_rgba(density),
            fog_range: [near, far, mode, 0.0],
        }
    }
}

impl Default for SnowUniforms {
    fn default() -> Self {
        Self::pack(
            &EmitterConfig::snowfall_preset(),
            &Fog::None,
            &Vector3::UP,
            0.0,
        )
    }
}

/// One frame's parameter block for whichever motion program a system runs.
#[derive(Debug, Clone, Copy)]
pub enum Uniforms {
    /// Fire block.
    Fire(FireUniforms),
    /// Snow block.
    Snow(SnowUniforms),
}

impl Uniforms {
    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Uniforms::Fire(block) => bytemuck::bytes_of(block),
            Uniforms::Snow(block) => bytemuck::bytes_of(block),
        }
    }

    /// Scene time the block was packed with.
    #[inline]
    pub fn scene_time(&self) -> f32 {
        match self {
            Uniforms::Fire(block) => block.up_time[3],
            Uniforms::Snow(block) => block.up_time[3],
        }
    }
}
