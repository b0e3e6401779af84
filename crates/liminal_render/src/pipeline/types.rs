//! GPU-compatible data types for the mesh and overlay pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// Maximum point lights per environment (rect-area lights count as points)
pub const MAX_POINT_LIGHTS: usize = 32;

/// Maximum directional lights per environment
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// A world-space mesh vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// RGBA color; alpha is the material opacity
    pub color: [f32; 4],
    /// Emissive color added after lighting
    pub emissive: [f32; 3],
    /// Padding to keep the stride a multiple of 8
    pub _padding: f32,
}

impl Default for MeshVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            color: [1.0; 4],
            emissive: [0.0; 3],
            _padding: 0.0,
        }
    }
}

/// A point light; `position.w` is the range, `color.a` the intensity
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

/// A directional light; `direction` points toward the light, `color.a` is
/// the intensity
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    pub direction: [f32; 4],
    pub color: [f32; 4],
}

/// Per-frame uniforms for the mesh pass
/// Layout: 1264 bytes total (must match mesh.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection * view (64 bytes)
    pub view_projection: [[f32; 4]; 4],
    /// Eye position + padding (16 bytes)
    pub camera_position: [f32; 4],
    /// Summed ambient light, rgb premultiplied by intensity (16 bytes)
    pub ambient: [f32; 4],
    /// x = point light count, y = directional light count (16 bytes)
    pub light_counts: [u32; 4],
    pub point_lights: [GpuPointLight; MAX_POINT_LIGHTS],
    pub directional_lights: [GpuDirectionalLight; MAX_DIRECTIONAL_LIGHTS],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_projection: liminal_math::mat4::IDENTITY,
            ..Self::zeroed()
        }
    }
}

/// A screen-space overlay vertex for the cursor glow and trail markers
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position in normalized device coordinates
    pub position: [f32; 2],
    /// Quad-local coordinates in [-1, 1], used for the radial falloff
    pub local: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
    /// Fraction of the radius that fades out (blur)
    pub softness: f32,
    pub _padding: [f32; 3],
}
