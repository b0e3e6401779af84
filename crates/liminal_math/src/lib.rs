//! Liminal Mathematics Library
//!
//! Small 3D math toolkit for the Liminal renderer and animator.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler`] - XYZ-ordered Euler rotation in radians
//! - [`Mat4`] - 4x4 column-major matrix for transformations

mod vec3;
mod euler;
pub mod mat4;

pub use vec3::Vec3;
pub use euler::Euler;
pub use mat4::Mat4;
