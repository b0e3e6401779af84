//! Rendering pipeline components
//!
//! The mesh pipeline draws the active environment; the overlay pipeline
//! draws the cursor glow and trail on top.

pub mod types;
pub mod mesh_pipeline;
pub mod overlay_pipeline;

// Re-export types
pub use types::{
    MeshVertex, OverlayVertex, SceneUniforms, GpuPointLight, GpuDirectionalLight,
    MAX_POINT_LIGHTS, MAX_DIRECTIONAL_LIGHTS,
};

// Re-export pipelines
pub use mesh_pipeline::{MeshPipeline, DEPTH_FORMAT};
pub use overlay_pipeline::OverlayPipeline;
