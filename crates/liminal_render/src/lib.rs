//! Liminal Rendering Library
//!
//! This crate provides the wgpu-based rendering for the active environment
//! and the pointer overlay.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::MeshPipeline`] - Lit environment meshes, opaque then transparent
//! - [`pipeline::OverlayPipeline`] - Cursor glow and trail markers
//! - [`mesh::SceneGeometry`] - Converts World/Entity to world-space vertices
//! - [`lighting::scene_uniforms`] - Packs an environment's lights for the shader

pub mod context;
pub mod pipeline;
pub mod mesh;
pub mod lighting;
pub mod overlay;

// Re-export core types for convenience
pub use liminal_core::{World, Entity, Transform, Material, Primitive};

pub use mesh::SceneGeometry;
pub use lighting::scene_uniforms;
pub use overlay::{build_overlay, CursorGlow};
