//! Hand-held torch with a flame particle system.

use std::sync::Arc;

use rand::Rng;

use crate::core::{Id, Updatable};
use crate::math::{Color, Quaternion};
use crate::particles::{ConfigError, EmitterConfig, ParticleSystem};
use crate::scene::{SceneContext, Transform};

/// Point-light parameters the renderer reads off a lit torch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorchLight {
    /// Light color.
    pub color: Color,
    /// Intensity when lit.
    pub intensity: f32,
    /// Maximum lit range.
    pub range: f32,
    /// Falloff exponent.
    pub decay: f32,
}

impl Default for TorchLight {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xFFCC99),
            intensity: 0.1,
            range: 20.0,
            decay: 2.0,
        }
    }
}

/// A torch the player carries: a warm point light plus a fire system.
///
/// The torch follows a hand, so its transform rotates freely; `update`
/// re-expresses world up in flame-local space every frame before advancing
/// the flame, keeping the embers rising toward the sky whatever the tilt.
pub struct Torch {
    /// Unique identifier.
    id: Id,
    /// Placement in the scene (driven externally by the hand).
    pub transform: Transform,
    light: TorchLight,
    lit: bool,
    flame: ParticleSystem,
}

impl Torch {
    /// Create a lit torch with the default fire preset.
    pub fn new<R: Rng + ?Sized>(
        context: Arc<SceneContext>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut flame = ParticleSystem::new(EmitterConfig::fire_preset(), context, rng)?;
        flame.set_name("torch-flame");
        Ok(Self {
            id: Id::new(),
            transform: Transform::new(),
            light: TorchLight::default(),
            lit: true,
            flame,
        })
    }

    /// Get the unique ID.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// The flame particle system.
    #[inline]
    pub fn flame(&self) -> &ParticleSystem {
        &self.flame
    }

    /// Whether the torch is lit.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Light the torch.
    pub fn on(&mut self) {
        self.lit = true;
    }

    /// Snuff the torch.
    pub fn off(&mut self) {
        self.lit = false;
    }

    /// Light parameters as configured.
    #[inline]
    pub fn light(&self) -> &TorchLight {
        &self.light
    }

    /// Effective light intensity this frame (zero while snuffed).
    pub fn light_intensity(&self) -> f32 {
        if self.lit {
            self.light.intensity
        } else {
            0.0
        }
    }

    /// World rotation of the flame given the torch's own placement.
    fn flame_world_rotation(&self) -> Quaternion {
        self.transform
            .quaternion
            .multiply(&self.flame.transform().quaternion)
    }

    /// Re-orient the flame and advance it by one frame.
    pub fn update(&mut self, delta: f32, elapsed: f32) {
        let rotation = self.flame_world_rotation();
        self.flame.orient(&rotation);
        self.flame.update(delta, elapsed);
    }
}

impl Updatable for Torch {
    fn update(&mut self, delta: f32, elapsed: f32) {
        Torch::update(self, delta, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{consts::HALF_PI, Vector3};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn torch() -> Torch {
        let context = SceneContext::outdoor(false).shared();
        let mut rng = SmallRng::seed_from_u64(3);
        Torch::new(context, &mut rng).unwrap()
    }

    #[test]
    fn test_starts_lit_with_warm_light() {
        let torch = torch();
        assert!(torch.is_lit());
        assert_eq!(torch.light().color.to_hex(), 0xFFCC99);
        assert!(torch.light_intensity() > 0.0);
    }

    #[test]
    fn test_off_zeroes_intensity() {
        let mut torch = torch();
        torch.off();
        assert_eq!(torch.light_intensity(), 0.0);
        torch.on();
        assert_eq!(torch.light_intensity(), torch.light().intensity);
    }

    #[test]
    fn test_update_reorients_flame_to_tilt() {
        let mut torch = torch();
        // hand tips the torch a quarter turn about X
        torch.transform.quaternion = Quaternion::from_rotation_x(HALF_PI);
        torch.update(0.016, 0.016);
        assert!(torch
            .flame()
            .local_up()
            .approx_eq(&Vector3::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn test_update_forwards_clock_to_flame() {
        let mut torch = torch();
        torch.update(0.016, 2.5);
        assert!((torch.flame().scene_time() - 2.5).abs() < 1e-6);
    }
}
