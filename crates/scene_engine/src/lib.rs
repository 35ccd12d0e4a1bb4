//! # Scene Engine
//!
//! A component-based scene runtime with an in-process editor controller and
//! a source exporter that turns a live scene into a standalone program.
//!
//! ## Features
//!
//! - **Entity Store**: named entities with transforms and append-only components
//! - **Component Runtime**: tagged variants dispatched through a capability table
//! - **Physics & Picking**: gravity, floor clamp, overlap nudging and ray picking
//! - **Scene Container**: insertion-ordered update and draw orchestration
//! - **Exporter**: deterministic code generation for desktop and Android targets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut editor = EditorState::new(EditorConfig::default());
//!     let mut backend = RecordingBackend::new();
//!
//!     editor.toggle_play();
//!     for _ in 0..60 {
//!         editor.tick(RawInput::default(), 1.0 / 60.0);
//!         editor.draw(&mut backend);
//!     }
//!
//!     let bundle = Exporter::default().generate(&editor.scene().snapshot(), TargetPlatform::Desktop)?;
//!     println!("{} documents", bundle.documents.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::must_use_candidate
)]

// Core engine modules
pub mod config;
pub mod core;

pub mod assets;
pub mod ecs;
pub mod editor;
pub mod export;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::{Config, EditorConfig, ExportConfig, PhysicsConfig},
        ecs::{BoxCollider, Component, ComponentKind, Entity, EntityId, MeshRenderer, PlayerController2D, Rotator},
        editor::{Console, EditorState},
        export::{ExportBundle, ExportError, Exporter, TargetPlatform},
        foundation::{
            math::{Transform, Vec2, Vec3},
            time::Timer,
        },
        input::{InputState, KeyCode, MouseButton, RawInput},
        physics::{raycast, PhysicsSystem},
        render::{Camera, Color, RecordingBackend, RenderBackend, Viewport},
        scene::{build_physics_scene, Scene, SceneSnapshot},
    };
}
