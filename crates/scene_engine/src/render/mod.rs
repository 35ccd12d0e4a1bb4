//! Rendering collaborator
//!
//! The scene never talks to a graphics API directly. It computes camera
//! matrices, viewports and draw commands here and hands them to a
//! [`RenderBackend`] supplied by the host.

pub mod backend;
pub mod camera;
pub mod color;
pub mod debug_lines;
pub mod viewport;

pub use backend::{DrawCommand, LineSegment, MeshHandle, RecordedCall, RecordingBackend, RenderBackend, TextureHandle};
pub use camera::{Camera, CameraState};
pub use color::Color;
pub use viewport::Viewport;
