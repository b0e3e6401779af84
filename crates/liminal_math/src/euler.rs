//! Euler angle rotation
//!
//! Rotations are applied in X, then Y, then Z order on the intrinsic axes,
//! so the composed matrix is `Rx * Ry * Rz`.

use crate::mat4::{self, Mat4};

/// Rotation expressed as three angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation about the X axis only
    #[inline]
    pub const fn about_x(angle: f32) -> Self {
        Self::new(angle, 0.0, 0.0)
    }

    /// Rotation about the Y axis only
    #[inline]
    pub const fn about_y(angle: f32) -> Self {
        Self::new(0.0, angle, 0.0)
    }

    /// Build the rotation matrix `Rx * Ry * Rz`
    pub fn to_matrix(self) -> Mat4 {
        let rx = mat4::plane_rotation(self.x, 1, 2);
        let ry = mat4::plane_rotation(self.y, 2, 0);
        let rz = mat4::plane_rotation(self.z, 0, 1);
        mat4::mul(rx, mat4::mul(ry, rz))
    }
}
