//! Backend abstraction for the scene renderer
//!
//! The scene, editor and debug overlays describe what to draw through
//! [`RenderBackend`]; the host supplies the implementation that actually
//! talks to a GPU. [`RecordingBackend`] keeps every call in memory for
//! headless runs and tests.

use super::color::Color;
use crate::foundation::math::{Mat4, Vec2, Vec3};

/// Built-in mesh a renderer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeshHandle {
    /// Unit cube centered on the origin
    #[default]
    Cube,
}

/// Built-in texture a renderer can sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureHandle {
    /// Gray checkerboard used as the default surface
    Checkerboard,
}

/// One mesh draw in world space
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Mesh to draw
    pub mesh: MeshHandle,
    /// Model-to-world transform
    pub world: Mat4,
    /// Color multiplied with the texture
    pub tint: Color,
    /// Optional surface texture
    pub texture: Option<TextureHandle>,
}

/// Line between two world-space points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point
    pub start: Vec3,
    /// End point
    pub end: Vec3,
    /// Line color
    pub color: Color,
}

impl LineSegment {
    /// Create a line segment
    pub fn new(start: Vec3, end: Vec3, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// Drawing surface the scene renders through
pub trait RenderBackend {
    /// Install the camera matrices for subsequent 3D draws
    fn set_camera(&mut self, view: &Mat4, projection: &Mat4);

    /// Draw a mesh
    fn draw_mesh(&mut self, command: &DrawCommand);

    /// Draw world-space lines
    fn draw_lines(&mut self, lines: &[LineSegment]);

    /// Draw screen-space text at pixel position `at`
    fn draw_text(&mut self, text: &str, at: Vec2, color: Color);
}

/// Single recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `set_camera`
    Camera {
        /// View matrix
        view: Mat4,
        /// Projection matrix
        projection: Mat4,
    },
    /// `draw_mesh`
    Mesh(DrawCommand),
    /// `draw_lines`
    Lines(Vec<LineSegment>),
    /// `draw_text`
    Text(String),
}

/// Backend that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<RecordedCall>,
}

impl RecordingBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call since the last [`clear`](Self::clear)
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Mesh draws since the last clear
    pub fn meshes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.calls.iter().filter_map(|call| match call {
            RecordedCall::Mesh(command) => Some(command),
            _ => None,
        })
    }

    /// Total line segments since the last clear
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .map(|call| match call {
                RecordedCall::Lines(lines) => lines.len(),
                _ => 0,
            })
            .sum()
    }

    /// Forget recorded calls, typically once per frame
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn set_camera(&mut self, view: &Mat4, projection: &Mat4) {
        self.calls.push(RecordedCall::Camera {
            view: *view,
            projection: *projection,
        });
    }

    fn draw_mesh(&mut self, command: &DrawCommand) {
        self.calls.push(RecordedCall::Mesh(command.clone()));
    }

    fn draw_lines(&mut self, lines: &[LineSegment]) {
        self.calls.push(RecordedCall::Lines(lines.to_vec()));
    }

    fn draw_text(&mut self, text: &str, _at: Vec2, _color: Color) {
        self.calls.push(RecordedCall::Text(text.to_owned()));
    }
}
