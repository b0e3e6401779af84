//! Application systems
//!
//! The window, frame clock, and GPU renderer, kept out of main.rs so the
//! event handler only routes events.

mod render;
mod simulation;
mod window;

pub use render::{OverlayFrame, RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
