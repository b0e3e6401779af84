//! Liminal - an interactive tour of three liminal spaces
//!
//! The library half of the application: configuration, the app controller
//! and its UI state, audio cues, environment construction, and the
//! window/render systems used by the binary.

pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
pub mod ui;

pub use app::{AppController, AppState, FrameStats};
pub use config::AppConfig;
