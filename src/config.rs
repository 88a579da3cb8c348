//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SPK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::num::NonZeroUsize;
use std::path::Path;

use sparkle_core::{BurstSpawn, CanvasSettings};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// View resources
    #[serde(default)]
    pub views: ViewsConfig,
    /// Particle bursts on the canvas
    #[serde(default)]
    pub particles: ParticlesConfig,
    /// Cursor marker and hint text
    #[serde(default)]
    pub cursor: CursorConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
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
    /// 3. Environment variables (`SPK_*`)
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SPK_PARTICLES__BURST_COUNT=50 -> particles.burst_count = 50
        figment = figment.merge(Env::prefixed("SPK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Settings handed to every canvas the navigator creates
    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            burst: BurstSpawn {
                count: self.particles.burst_count,
                max_speed: self.particles.max_speed,
                lifetime: self.particles.lifetime_frames,
            },
            particle_size: self.particles.size,
            marker_size: self.cursor.marker_size,
            hint_offset: self.cursor.hint_offset,
            idle_hint: self.cursor.idle_hint.clone(),
            click_hint: self.cursor.click_hint.clone(),
            max_particles: self.particles.max_particles,
            seed: self.particles.seed,
            ..CanvasSettings::default()
        }
    }
}

/// Window configuration
///
/// The window is resized and retitled by every view it shows; these values
/// only apply until the first view is up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sparkle".to_string(),
            width: 320,
            height: 240,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// View resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Directory holding `<name>.ron` view descriptions
    pub resource_dir: String,
    /// View shown at startup
    pub initial: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            resource_dir: "assets/views".to_string(),
            initial: "welcome".to_string(),
        }
    }
}

/// Particle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Particles spawned per click
    pub burst_count: usize,
    /// Frames a particle lives
    pub lifetime_frames: u32,
    /// Maximum speed per axis (pixels per frame)
    pub max_speed: f32,
    /// Edge length of a particle square
    pub size: f32,
    /// Cap on active particles (oldest dropped first); zero is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_particles: Option<NonZeroUsize>,
    /// Fixed RNG seed for reproducible bursts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        let burst = BurstSpawn::default();
        Self {
            burst_count: burst.count,
            lifetime_frames: burst.lifetime,
            max_speed: burst.max_speed,
            size: 3.0,
            max_particles: None,
            seed: None,
        }
    }
}

/// Cursor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Diameter of the dot drawn at the cursor
    pub marker_size: f32,
    /// Distance below the cursor of the hint baseline
    pub hint_offset: f32,
    /// Hint shown before the first click
    pub idle_hint: String,
    /// Hint shown after a click
    pub click_hint: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        let canvas = CanvasSettings::default();
        Self {
            marker_size: canvas.marker_size,
            hint_offset: canvas.hint_offset,
            idle_hint: canvas.idle_hint,
            click_hint: canvas.click_hint,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Simulation frames per second
    pub frame_rate: f32,
    /// Most frames run for a single redraw
    pub max_frames_per_redraw: u32,
    /// TrueType/OpenType font for labels and hints
    pub font_path: String,
    /// Text size in logical pixels
    pub text_size: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            max_frames_per_redraw: 4,
            font_path: "assets/fonts/DejaVuSans.ttf".to_string(),
            text_size: 16.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
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
