//! Spatial placement of scene objects.
//!
//! Holds position, rotation, and scale only. Matrix assembly happens in the
//! renderer; the simulation works directly with the decomposed form.

use crate::math::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Position, rotation, and scale of an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation.
    pub position: Vector3,
    /// Rotation.
    pub quaternion: Quaternion,
    /// Per-axis scale.
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform at the origin.
    pub fn new() -> Self {
        Self {
            position: Vector3::ZERO,
            quaternion: Quaternion::IDENTITY,
            scale: Vector3::ONE,
        }
    }

    /// Identity transform at the given position.
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Set the position.
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position.set(x, y, z);
        self
    }

    /// Set the rotation.
    #[inline]
    pub fn set_quaternion(&mut self, q: Quaternion) -> &mut Self {
        self.quaternion = q;
        self
    }

    /// Replace the rotation with a yaw about +Y.
    #[inline]
    pub fn set_rotation_y(&mut self, angle: f32) -> &mut Self {
        self.quaternion = Quaternion::from_rotation_y(angle);
        self
    }

    /// Set a uniform scale.
    #[inline]
    pub fn set_uniform_scale(&mut self, s: f32) -> &mut Self {
        self.scale = Vector3::splat(s);
        self
    }

    /// Move by a parent-space offset.
    #[inline]
    pub fn translate(&mut self, delta: Vector3) -> &mut Self {
        self.position += delta;
        self
    }

    /// Apply an additional yaw about +Y on top of the current rotation.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.quaternion = self.quaternion.multiply(&Quaternion::from_rotation_y(angle));
        self
    }

    /// Transform a local-space point into this transform's parent space.
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.position + self.quaternion.rotate_vector(&point.multiply(&self.scale))
    }

    /// Compose with a parent transform, yielding the world-space transform.
    pub fn compose(&self, parent: &Transform) -> Transform {
        Transform {
            position: parent.transform_point(&self.position),
            quaternion: parent.quaternion.multiply(&self.quaternion),
            scale: parent.scale.multiply(&self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::consts::HALF_PI;

    #[test]
    fn test_identity_transform_point() {
        let t = Transform::new();
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert!(t.transform_point(&p).approx_eq(&p, 1e-6));
    }

    #[test]
    fn test_yaw_turns_forward_axis() {
        let mut t = Transform::new();
        t.set_rotation_y(HALF_PI);
        let p = t.transform_point(&Vector3::UNIT_Z);
        assert!(p.approx_eq(&Vector3::UNIT_X, 1e-6));
    }

    #[test]
    fn test_compose_applies_parent_offset_and_rotation() {
        let mut parent = Transform::from_position(Vector3::new(0.0, 1.0, 0.0));
        parent.set_rotation_y(HALF_PI);
        let child = Transform::from_position(Vector3::UNIT_Z);

        let world = child.compose(&parent);
        assert!(world.position.approx_eq(&Vector3::new(1.0, 1.0, 0.0), 1e-6));
        let forward = world.quaternion.rotate_vector(&Vector3::UNIT_Z);
        assert!(forward.approx_eq(&Vector3::UNIT_X, 1e-6));
    }
}
