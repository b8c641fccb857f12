//! Distance fog parameters.
//!
//! The simulation never evaluates fog itself; it forwards these parameters
//! to the renderer so fog-aware materials (snow, distant geometry) can
//! attenuate toward the fog color.

use crate::math::Color;

/// Fog type for the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Fog {
    /// No fog.
    None,
    /// Linear fog with near and far distances.
    Linear {
        /// Fog color.
        color: Color,
        /// Distance where fog starts.
        near: f32,
        /// Distance where fog is fully opaque.
        far: f32,
    },
    /// Exponential fog.
    Exponential {
        /// Fog color.
        color: Color,
        /// Fog density.
        density: f32,
    },
    /// Exponential squared fog.
    ExponentialSquared {
        /// Fog color.
        color: Color,
        /// Fog density.
        density: f32,
    },
}

impl Default for Fog {
    fn default() -> Self {
        Self::None
    }
}

impl Fog {
    /// True when no fog is set.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Fog::None)
    }

    /// Fog color, if any fog is set.
    pub fn color(&self) -> Option<Color> {
        match self {
            Fog::None => None,
            Fog::Linear { color, .. }
            | Fog::Exponential { color, .. }
            | Fog::ExponentialSquared { color, .. } => Some(*color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_accessor() {
        assert!(Fog::None.color().is_none());
        let fog = Fog::ExponentialSquared {
            color: Color::from_hex(0xC6CCFF),
            density: 0.15,
        };
        assert_eq!(fog.color().map(|c| c.to_hex()), Some(0xC6CCFF));
    }
}
