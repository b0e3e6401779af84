//! Core types for Liminal
//!
//! This crate provides the scene model and the per-frame behaviour of the
//! three liminal environments:
//!
//! - [`Transform`] - Position, Euler rotation, and scale
//! - [`Entity`] - A mesh or light with a material, tag, and optional children
//! - [`World`] - Ordered object list of one environment
//! - [`Environment`] - A world plus visibility and periodic effects
//! - [`EnvironmentManager`] - Owns all three environments, exactly one visible
//! - [`PeriodicEffect`] - Interval-driven mutation (light flicker)
//! - [`Animator`] - Per-frame rule lookup keyed by environment and tag

mod transform;
mod shapes;
mod entity;
mod world;
mod effects;
mod environment;
mod environment_manager;
mod animator;

pub use transform::Transform;
pub use shapes::{Primitive, Light, LightKind, hex_to_rgb};
pub use entity::{Entity, EntityKind, Material, DirtyFlags, ObjectTag, AnimState};
pub use world::{World, EntityHandle};
pub use effects::{PeriodicEffect, EffectAction};
pub use environment::{Environment, EnvironmentKind, EnvironmentError};
pub use environment_manager::EnvironmentManager;
pub use animator::{Animator, AnimationRule, RuleContext, RuleTable, FISH_REVERSE_CHANCE};

// Re-export commonly used math types for convenience
pub use liminal_math::{Vec3, Euler, Mat4};
