//! Built-in assets
//!
//! The editor ships without an asset pipeline: every scene is drawn with one
//! procedurally generated cube mesh and one checkerboard texture. Both are
//! created once at startup and shared by reference.

use crate::render::{Color, MeshHandle, TextureHandle};
use image::{Rgba, RgbaImage};

pub use image::ImageError;
use std::path::Path;

/// Checkerboard texture edge length in pixels
pub const CHECKERBOARD_SIZE: u32 = 64;

/// Edge length of one checkerboard cell in pixels
pub const CHECKERBOARD_CELL: u32 = 8;

/// 3D vertex with position, normal and texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Model-space position
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }
}

/// Indexed triangle mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Unit cube centered on the origin, four vertices per face so each face
    /// carries its own normal and full UV square.
    pub fn cube() -> Self {
        let p = [
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
        ];
        let uv = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let faces: [([usize; 4], [f32; 3]); 6] = [
            ([0, 1, 2, 3], [0.0, 0.0, -1.0]),
            ([5, 4, 7, 6], [0.0, 0.0, 1.0]),
            ([4, 5, 0, 1], [0.0, 1.0, 0.0]),
            ([2, 3, 6, 7], [0.0, -1.0, 0.0]),
            ([4, 0, 6, 2], [-1.0, 0.0, 0.0]),
            ([1, 5, 3, 7], [1.0, 0.0, 0.0]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (corners, normal) in faces {
            let base = vertices.len() as u32;
            for (corner, tex) in corners.iter().zip(uv) {
                vertices.push(Vertex::new(p[*corner], normal, tex));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
        }

        Self { vertices, indices }
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Procedural gray checkerboard
pub fn checkerboard_image() -> RgbaImage {
    let light = Rgba(Color::LIGHT_GRAY.to_array());
    let dark = Rgba(Color::DARK_GRAY.to_array());
    RgbaImage::from_fn(CHECKERBOARD_SIZE, CHECKERBOARD_SIZE, |x, y| {
        if (x / CHECKERBOARD_CELL + y / CHECKERBOARD_CELL) % 2 == 0 {
            light
        } else {
            dark
        }
    })
}

/// Shared assets every scene draws with
#[derive(Debug, Clone)]
pub struct BuiltinAssets {
    /// Cube geometry behind [`MeshHandle::Cube`]
    pub cube: Mesh,
    /// Pixels behind [`TextureHandle::Checkerboard`]
    pub checkerboard: RgbaImage,
}

impl Default for BuiltinAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinAssets {
    /// Generate the built-in mesh and texture
    pub fn new() -> Self {
        let assets = Self {
            cube: Mesh::cube(),
            checkerboard: checkerboard_image(),
        };
        log::debug!(
            "Built-in assets ready: cube ({} triangles), checkerboard {}x{}",
            assets.cube.triangle_count(),
            assets.checkerboard.width(),
            assets.checkerboard.height()
        );
        assets
    }

    /// Geometry for a mesh handle
    pub fn mesh(&self, handle: MeshHandle) -> &Mesh {
        match handle {
            MeshHandle::Cube => &self.cube,
        }
    }

    /// Pixels for a texture handle
    pub fn texture(&self, handle: TextureHandle) -> &RgbaImage {
        match handle {
            TextureHandle::Checkerboard => &self.checkerboard,
        }
    }

    /// Write the checkerboard to an image file, format chosen by extension
    pub fn save_checkerboard(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        self.checkerboard.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
        for v in &cube.vertices {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn test_checkerboard_cells() {
        let img = checkerboard_image();
        assert_eq!(img.dimensions(), (64, 64));
        assert_eq!(img.get_pixel(0, 0).0, [211, 211, 211, 255]);
        assert_eq!(img.get_pixel(8, 0).0, [169, 169, 169, 255]);
        assert_eq!(img.get_pixel(8, 8).0, [211, 211, 211, 255]);
        assert_eq!(img.get_pixel(63, 0).0, [169, 169, 169, 255]);
    }

    #[test]
    fn test_save_checkerboard_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");
        BuiltinAssets::new().save_checkerboard(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.get_pixel(9, 1).0, [169, 169, 169, 255]);
    }
}
