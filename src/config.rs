//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tesseract4d_core::ProjectionMode;
use tesseract4d_input::{default_bindings, BindingSpec, DEFAULT_RESET_CONTROL};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Orbit camera and 3D lens
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rotating object and 4D projection
    #[serde(default)]
    pub object: ObjectConfig,
    /// Key bindings
    #[serde(default)]
    pub input: InputConfig,
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
    /// 3. Environment variables (`T4D_*`)
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

        // T4D_OBJECT__CAMERA_DISTANCE=4.5 -> object.camera_distance = 4.5
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
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
            title: "Tesseract Viewer".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting distance from the origin
    pub distance: f32,
    /// Degrees of orbit per pixel dragged
    pub sensitivity: f32,
    /// Distance change per scroll line
    pub zoom_sensitivity: f32,
    /// Fraction of the zoom gap closed per frame
    pub zoom_speed: f32,
    /// Closest allowed distance
    pub min_distance: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 3.0,
            sensitivity: 0.25,
            zoom_sensitivity: 0.25,
            zoom_speed: 0.1,
            min_distance: 1.0,
            fov: 45.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

/// Rotating object configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Position of the 4D eye on the W axis; must exceed the circumradius (2)
    pub camera_distance: f64,
    /// Radians applied per tick while a rotation key is held
    pub rotation_speed: f64,
    /// Simulation ticks per second, 1 to 1000
    pub tick_rate: f64,
    /// 4D to 3D projection
    pub projection: ProjectionMode,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            camera_distance: 3.0,
            rotation_speed: 0.02,
            tick_rate: 60.0,
            projection: ProjectionMode::Perspective,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Rotation bindings, applied in this order
    pub bindings: Vec<BindingSpec>,
    /// Control that resets the orientation
    pub reset_control: String,
    /// Control that zeroes the orbit angles
    pub camera_reset_control: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
            reset_control: DEFAULT_RESET_CONTROL.to_string(),
            camera_reset_control: "KeyZ".to_string(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Wireframe color [r, g, b]
    pub line_color: [f32; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.05, 0.05, 0.08, 1.0],
            line_color: [0.4, 0.8, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.object.camera_distance, 3.0);
        assert_eq!(config.object.rotation_speed, 0.02);
        assert_eq!(config.input.bindings.len(), 12);
        assert_eq!(config.input.reset_control, "KeyX");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("camera_distance"));
        assert!(toml.contains("projection = \"perspective\""));
        assert!(toml.contains("[[input.bindings]]"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[object]\nrotation_speed = 0.05\n").unwrap();
        assert_eq!(config.object.rotation_speed, 0.05);
        assert_eq!(config.object.camera_distance, 3.0);
        assert_eq!(config.window.title, "Tesseract Viewer");
    }

    #[test]
    fn test_projection_parses_lowercase() {
        let config: AppConfig = toml::from_str("[object]\nprojection = \"orthographic\"\n").unwrap();
        assert_eq!(config.object.projection, ProjectionMode::Orthographic);
    }

    #[test]
    fn test_custom_bindings() {
        let config: AppConfig = toml::from_str(
            "[input]\nbindings = [{ control = \"ArrowLeft\", plane = \"xw\", sign = 1.0 }]\n",
        )
        .unwrap();
        assert_eq!(config.input.bindings, vec![BindingSpec::new("ArrowLeft", "xw", 1.0)]);
        assert_eq!(config.input.camera_reset_control, "KeyZ");
    }

    #[test]
    fn test_missing_directory_gives_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.height, 600);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError { message: "bad value".to_string() };
        assert_eq!(format!("{}", err), "Configuration error: bad value");
    }
}
