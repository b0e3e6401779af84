//! 3D Transform (position, rotation, scale)
//!
//! A Transform represents the placement of an entity in its environment.

use liminal_math::{mat4, Euler, Mat4, Vec3};

/// A transform with position, Euler rotation, and per-axis scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position in world space (or parent space for child entities)
    pub position: Vec3,
    /// Rotation in radians, applied X then Y then Z
    pub rotation: Euler,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Euler) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Local-to-parent matrix: scale, then rotate, then translate
    pub fn to_matrix(&self) -> Mat4 {
        let t = mat4::translation(self.position);
        let r = self.rotation.to_matrix();
        let s = mat4::scale(self.scale);
        mat4::mul(t, mat4::mul(r, s))
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(self.to_matrix(), p)
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 0.0001
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(vec_approx_eq(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_transform_order() {
        // Transform applies: scale, then rotate, then translate
        let mut t = Transform::from_position_rotation(
            Vec3::new(10.0, 0.0, 0.0),
            Euler::about_y(FRAC_PI_2),
        );
        t.scale = Vec3::splat(2.0);

        // Z * 2 = (0, 0, 2), rotated 90° about Y = (2, 0, 0), + (10, 0, 0) = (12, 0, 0)
        let transformed = t.transform_point(Vec3::Z);
        assert!(vec_approx_eq(transformed, Vec3::new(12.0, 0.0, 0.0)),
            "Expected (12, 0, 0), got {:?}", transformed);
    }

    #[test]
    fn test_translate() {
        let mut t = Transform::identity();
        t.translate(Vec3::new(0.0, 0.5, 0.0));
        t.translate(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(t.position, Vec3::new(0.0, 1.0, 0.0));
    }
}
