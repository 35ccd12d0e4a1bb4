//! # Core Engine Module
//!
//! Shared configuration for every subsystem of the editor and runtime.
//!
//! ## Organization
//!
//! - **Config**: editor, window, physics and export settings

pub mod config;

pub use config::{Config, ConfigError, EditorConfig, ExportConfig, PhysicsConfig, WindowConfig};
