//! Spherical coordinates (radius, polar angle from +Y, azimuth around +Y).

use super::Vector3;
use serde::{Deserialize, Serialize};

/// A point in spherical coordinates.
///
/// `phi` is the polar angle measured from the +Y axis, `theta` the azimuthal
/// angle around +Y. `phi = 0` points straight up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y in radians.
    pub phi: f32,
    /// Azimuthal angle around +Y in radians.
    pub theta: f32,
}

impl Spherical {
    /// Create new spherical coordinates.
    #[inline]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Unit-radius coordinates.
    #[inline]
    pub const fn unit(phi: f32, theta: f32) -> Self {
        Self { radius: 1.0, phi, theta }
    }

    /// Convert to a cartesian vector.
    #[inline]
    pub fn to_vector3(&self) -> Vector3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vector3 {
            x: sin_phi_radius * self.theta.sin(),
            y: self.phi.cos() * self.radius,
            z: sin_phi_radius * self.theta.cos(),
        }
    }

    /// Build spherical coordinates from a cartesian vector.
    pub fn from_vector3(v: &Vector3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            Self { radius: 0.0, phi: 0.0, theta: 0.0 }
        } else {
            Self {
                radius,
                phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
                theta: v.x.atan2(v.z),
            }
        }
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self { radius: 1.0, phi: 0.0, theta: 0.0 }
    }
}

impl From<Spherical> for Vector3 {
    fn from(s: Spherical) -> Self {
        s.to_vector3()
    }
}
