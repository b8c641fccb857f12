//! Shared environmental state.

use std::sync::Arc;

use super::Fog;
use crate::math::{Color, Vector3};

/// Read-only environmental inputs shared by every system in a scene.
///
/// Built once by the application, wrapped in an [`Arc`], and handed to
/// particle systems and entities at construction. Nothing mutates it after
/// that, so sharing needs no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneContext {
    /// Distance fog applied by the renderer to fog-aware materials.
    pub fog: Fog,
    /// World up direction.
    pub up: Vector3,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self {
            fog: Fog::None,
            up: Vector3::UP,
        }
    }
}

impl SceneContext {
    /// Create a context with the given fog and world up.
    pub fn new(fog: Fog, up: Vector3) -> Self {
        Self { fog, up }
    }

    /// Wrap in an [`Arc`] for sharing with systems.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Context for the outdoor winter scene: exponential-squared haze
    /// matching the sky color, denser-looking at night.
    pub fn outdoor(night: bool) -> Self {
        let sky = if night {
            Color::from_hex(0x111122)
        } else {
            Color::from_hex(0xC6CCFF)
        };
        Self {
            fog: Fog::ExponentialSquared {
                color: sky,
                density: 0.15,
            },
            up: Vector3::UP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_fog() {
        let ctx = SceneContext::default();
        assert!(ctx.fog.is_none());
        assert_eq!(ctx.up, Vector3::UP);
    }

    #[test]
    fn test_outdoor_fog_matches_sky() {
        let day = SceneContext::outdoor(false);
        assert_eq!(day.fog.color().map(|c| c.to_hex()), Some(0xC6CCFF));
    }
}
