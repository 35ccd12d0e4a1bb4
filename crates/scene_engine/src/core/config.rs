//! # Unified Configuration System
//!
//! All configuration structures for the editor host in one place. Every
//! struct is `#[serde(default)]`, so a config file only needs the keys it
//! wants to override.
//!
//! ```toml
//! log_level = "debug"
//!
//! [physics]
//! gravity = 9.8
//!
//! [export]
//! package_name = "my_scene"
//! launch_build = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};

/// Folder created under the user's documents directory for export output
pub const DEFAULT_EXPORT_DIR_NAME: &str = "SceneEngine";

/// # Editor Configuration
///
/// Root configuration loaded by the editor host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,
    /// Host window settings
    pub window: WindowConfig,
    /// Simulation constants
    pub physics: PhysicsConfig,
    /// Exporter settings
    pub export: ExportConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config for EditorConfig {}

impl EditorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.physics.validate()?;
        self.export.validate()
    }
}

/// # Window Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Back buffer width in pixels
    pub width: u32,
    /// Back buffer height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// # Physics Configuration
///
/// Constants of the penalty-style simulation. The same values are baked
/// into exported programs so both runtimes behave alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration applied per second
    pub gravity: f32,
    /// Lowest `position.y` a dynamic body may reach
    pub floor_height: f32,
    /// Upward push applied once per overlapping pair per frame
    pub overlap_nudge: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            floor_height: 0.5,
            overlap_nudge: 0.1,
        }
    }
}

impl PhysicsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("floor_height", self.floor_height),
            ("overlap_nudge", self.overlap_nudge),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("physics.{name} must be finite")));
            }
        }
        if self.gravity < 0.0 || self.overlap_nudge < 0.0 {
            return Err(ConfigError::Invalid(
                "physics.gravity and physics.overlap_nudge must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// # Export Configuration
///
/// Package identity and output location for generated programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Root directory for export output; `None` resolves to the user's
    /// documents directory
    pub export_root: Option<PathBuf>,
    /// Title of the exported program's window
    pub window_title: String,
    /// Cargo package name of the exported program
    pub package_name: String,
    /// Reverse-domain identifier used by mobile targets
    pub application_id: String,
    /// Whether to launch the generated build script after writing
    pub launch_build: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_root: None,
            window_title: "Exported Scene".to_string(),
            package_name: "exported_scene".to_string(),
            application_id: "com.sceneengine.exported_scene".to_string(),
            launch_build: true,
        }
    }
}

impl ExportConfig {
    /// Resolve the directory profile folders are written under.
    ///
    /// Falls back to the current directory when the platform reports no
    /// documents directory.
    pub fn resolve_export_root(&self) -> PathBuf {
        if let Some(root) = &self.export_root {
            return root.clone();
        }
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_EXPORT_DIR_NAME)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let valid_package = !self.package_name.is_empty()
            && self
                .package_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && self.package_name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !valid_package {
            return Err(ConfigError::Invalid(format!(
                "export.package_name '{}' is not a valid cargo package name",
                self.package_name
            )));
        }
        if self.application_id.split('.').count() < 2 || self.application_id.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "export.application_id '{}' must be a dotted identifier",
                self.application_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EditorConfig = toml::from_str(
            r#"
            log_level = "debug"

            [physics]
            gravity = 3.0

            [export]
            package_name = "demo"
            launch_build = false
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.physics.gravity, 3.0);
        assert_eq!(config.physics.floor_height, 0.5);
        assert_eq!(config.export.package_name, "demo");
        assert!(!config.export.launch_build);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_package_name_rejected() {
        let mut config = EditorConfig::default();
        config.export.package_name = "9 lives".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_physics_rejected() {
        let mut config = EditorConfig::default();
        config.physics.gravity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.ron");
        let mut config = EditorConfig::default();
        config.export.export_root = Some(dir.path().to_path_buf());
        config.save_to_file(&path).unwrap();

        let loaded = EditorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            EditorConfig::load_from_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_explicit_export_root_wins() {
        let config = ExportConfig {
            export_root: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };
        assert_eq!(config.resolve_export_root(), PathBuf::from("/tmp/out"));
    }
}
