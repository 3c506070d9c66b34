//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ROTCONV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use rotconv_core::{AngleUnit, EulerOrder, InputState, Representation};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial input values and active representation
    #[serde(default)]
    pub input: InputConfig,
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            display: DisplayConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ROTCONV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ROTCONV_INPUT__REPRESENTATION=quaternion -> input.representation = "quaternion"
        figment = figment.merge(Env::prefixed("ROTCONV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Initial input values and the active representation
///
/// Angle-valued fields (rotation vector components, the axis-angle angle,
/// Euler angles) are interpreted in the unit selected by `display.degrees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Which representation feeds the conversion
    pub representation: Representation,
    /// 3x3 rotation matrix, row major
    pub rotation_matrix: [f32; 9],
    /// Rotation vector: axis scaled by angle
    pub rotation_vector: [f32; 3],
    /// Axis (x, y, z) then angle
    pub axis_angle: [f32; 4],
    /// Quaternion (x, y, z, w)
    pub quaternion: [f32; 4],
    /// Axis order for the mobile (intrinsic) Euler input
    pub mobile_euler_order: EulerOrder,
    /// Mobile Euler angles, one per axis of the order
    pub mobile_euler_angle: [f32; 3],
    /// Axis order for the fixed (extrinsic) Euler input
    pub fixed_euler_order: EulerOrder,
    /// Fixed Euler angles, one per axis of the order
    pub fixed_euler_angle: [f32; 3],
    /// Re-orthonormalize a hand-entered rotation matrix before converting
    pub normalize: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            representation: Representation::RotationMatrix,
            rotation_matrix: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            rotation_vector: [0.0, 0.0, 0.0],
            axis_angle: [0.0, 0.0, 0.0, 0.0],
            quaternion: [0.0, 0.0, 0.0, 1.0],
            mobile_euler_order: EulerOrder::Xyz,
            mobile_euler_angle: [0.0, 0.0, 0.0],
            fixed_euler_order: EulerOrder::Xyz,
            fixed_euler_angle: [0.0, 0.0, 0.0],
            normalize: true,
        }
    }
}

impl InputConfig {
    /// Build the runtime input state, converting angle-valued fields from
    /// the configured display unit to radians.
    pub fn to_input_state(&self, unit: AngleUnit) -> InputState {
        let mut input = InputState::default();
        input.active = self.representation;
        for i in 0..9 {
            input.rotation_matrix[i] = self.rotation_matrix[i];
        }
        for i in 0..3 {
            input.rotation_vector[i] = unit.store_angle(self.rotation_vector[i]);
            input.mobile_euler_angle[i] = unit.store_angle(self.mobile_euler_angle[i]);
            input.fixed_euler_angle[i] = unit.store_angle(self.fixed_euler_angle[i]);
            input.axis_angle[i] = self.axis_angle[i];
        }
        input.axis_angle[3] = unit.store_angle(self.axis_angle[3]);
        for i in 0..4 {
            input.quaternion[i] = self.quaternion[i];
        }
        input.mobile_euler_order = self.mobile_euler_order;
        input.fixed_euler_order = self.fixed_euler_order;
        input
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show angles in degrees (false = radians)
    pub degrees: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { degrees: true }
    }
}

impl DisplayConfig {
    pub fn angle_unit(&self) -> AngleUnit {
        AngleUnit {
            is_degree: self.degrees,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
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
