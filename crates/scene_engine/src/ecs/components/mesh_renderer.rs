//! Mesh renderer component

use crate::foundation::math::Transform;
use crate::render::{Color, DrawCommand, MeshHandle, RenderBackend, TextureHandle};

/// Draws a mesh with a tint and optional texture at the owning entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRenderer {
    /// Mesh to draw; filled with the cube on awake when left empty
    pub mesh: Option<MeshHandle>,

    /// Tint multiplied with the texture (white by default)
    pub color: Color,

    /// Optional surface texture
    pub texture: Option<TextureHandle>,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self {
            mesh: None,
            color: Color::WHITE,
            texture: None,
        }
    }
}

impl MeshRenderer {
    /// Builder: tint
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: texture
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    pub(crate) fn awake(&mut self) {
        if self.mesh.is_none() {
            self.mesh = Some(MeshHandle::Cube);
        }
    }

    pub(crate) fn draw_3d(&self, transform: &Transform, backend: &mut dyn RenderBackend) {
        let Some(mesh) = self.mesh else {
            return;
        };
        backend.draw_mesh(&DrawCommand {
            mesh,
            world: transform.to_matrix(),
            tint: self.color,
            texture: self.texture,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::RecordingBackend;

    #[test]
    fn test_awake_assigns_cube() {
        let mut renderer = MeshRenderer::default();
        renderer.awake();
        assert_eq!(renderer.mesh, Some(MeshHandle::Cube));
    }

    #[test]
    fn test_draw_without_mesh_is_skipped() {
        let mut backend = RecordingBackend::new();
        MeshRenderer::default().draw_3d(&Transform::default(), &mut backend);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_draw_uses_world_matrix() {
        let mut backend = RecordingBackend::new();
        let mut renderer = MeshRenderer::default().with_color(Color::RED);
        renderer.awake();
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        renderer.draw_3d(&transform, &mut backend);

        let draw = backend.meshes().next().unwrap();
        assert_eq!(draw.world, transform.to_matrix());
        assert_eq!(draw.tint, Color::RED);
        assert_eq!(draw.texture, None);
    }
}
