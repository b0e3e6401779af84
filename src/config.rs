//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`LIM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Look-at camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Cursor trail configuration
    #[serde(default)]
    pub trail: TrailConfig,
    /// Cursor glow configuration
    #[serde(default)]
    pub cursor: CursorConfig,
    /// Menu and audio configuration
    #[serde(default)]
    pub ui: UiConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`LIM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // LIM_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("LIM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (state is appended at runtime)
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Liminal Spaces".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Look-at camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed eye position [x, y, z]
    pub eye: [f32; 3],
    /// Initial and reset look-at point [x, y, z]
    pub look_at: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Fraction of the remaining distance covered per frame
    pub easing: f32,
    /// Look-at travel at the horizontal window edge
    pub range_x: f32,
    /// Look-at travel at the vertical window edge
    pub range_y: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.6, 5.0],
            look_at: [0.0, 1.6, 0.0],
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            easing: 0.05,
            range_x: 5.0,
            range_y: 2.0,
        }
    }
}

/// Cursor trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Number of retained pointer samples (and pooled markers)
    pub capacity: usize,
    /// Per-slot falloff of size, opacity and blur
    pub decay: f32,
    /// Minimum milliseconds between marker updates
    pub throttle_ms: f64,
    /// Blur radius of the newest marker in pixels
    pub base_blur: f32,
    /// Opacity of the newest marker
    pub base_opacity: f32,
    /// Marker color [r, g, b]
    pub color: [f32; 3],
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            decay: 0.8,
            throttle_ms: 16.0,
            base_blur: 10.0,
            base_opacity: 0.6,
            color: [1.0, 0.95, 0.85],
        }
    }
}

/// Cursor glow configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Glow and trail shown at startup
    pub enabled: bool,
    /// Initial glow diameter in pixels
    pub size: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Size change per key press
    pub size_step: f32,
    /// Glow color [r, g, b, a]
    pub glow_color: [f32; 4],
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 100.0,
            min_size: 20.0,
            max_size: 300.0,
            size_step: 10.0,
            glow_color: [1.0, 0.95, 0.8, 0.35],
        }
    }
}

/// Menu and audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before the menu panel expands after startup
    pub expand_delay_ms: f64,
    /// Delay after the first pointer move before the panel collapses
    pub collapse_delay_ms: f64,
    /// Play audio cues
    pub sound: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            expand_delay_ms: 500.0,
            collapse_delay_ms: 1000.0,
            sound: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let grey = 0x0a as f32 / 255.0;
        Self {
            background_color: [grey, grey, grey, 1.0],
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seed for scene jitter and animation randomness (entropy when unset)
    pub seed: Option<u64>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Append frame statistics to the window title
    pub title_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            title_stats: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
