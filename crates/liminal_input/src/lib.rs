//! Pointer input for Liminal
//!
//! This crate turns raw window pointer events into the state the rest of the
//! app reads every frame: normalized steering coordinates, the cursor trail,
//! and the smoothed look-at camera.

mod trail;
mod cursor_trail;
mod pointer;
mod look_at_controller;

pub use trail::{TrailBuffer, TrailPoint, DEFAULT_TRAIL_CAPACITY, MAX_TRAIL_CAPACITY};
pub use cursor_trail::{CursorTrail, TrailMarker, decay_factor};
pub use pointer::{PointerEvent, PointerEventMapper, PointerTracker, Viewport};
pub use look_at_controller::LookAtController;
