//! Scene construction utilities
//!
//! This module provides a declarative API for building environments and the
//! builders for the three liminal spaces.

mod scene_builder;
mod environments;

pub use scene_builder::SceneBuilder;
pub use environments::{build_all, build_classroom, build_corridor, build_pool};
