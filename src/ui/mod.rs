//! Menu and UI state
//!
//! The native counterpart of the menu panels: a command set, the menu
//! state machine, and deferred actions that fire from the frame loop.

mod command;
mod deferred;
mod menu;

pub use command::{Screen, UiCommand};
pub use deferred::{DeferredAction, DeferredQueue};
pub use menu::MenuController;
