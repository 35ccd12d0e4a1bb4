//! Screen-space viewport and unprojection

use crate::foundation::math::{Mat4, Vec3, Vec4};

/// Rectangle of the window the 3D view is rendered into, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Full-window viewport
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Width over height; 1.0 for a degenerate viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 && self.width > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Whether a window-pixel position lies inside the viewport
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Map a screen point back into world space.
    ///
    /// `screen.z` is a depth in [0, 1]: 0 lands on the near plane, 1 on the
    /// far plane. Returns `None` when the combined matrix is singular or the
    /// point projects to infinity.
    pub fn unproject(&self, screen: Vec3, projection: &Mat4, view: &Mat4, world: &Mat4) -> Option<Vec3> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let inverse = (projection * view * world).try_inverse()?;

        // Screen Y grows downwards, NDC Y grows upwards.
        let ndc = Vec4::new(
            (screen.x - self.x) / self.width * 2.0 - 1.0,
            -((screen.y - self.y) / self.height * 2.0 - 1.0),
            screen.z * 2.0 - 1.0,
            1.0,
        );
        let world_h = inverse * ndc;
        if world_h.w.abs() <= f32::EPSILON {
            return None;
        }
        Some(Vec3::new(world_h.x, world_h.y, world_h.z) / world_h.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4Ext;
    use approx::assert_relative_eq;

    #[test]
    fn test_contains_is_half_open() {
        let vp = Viewport::new(300.0, 50.0, 1000.0, 600.0);
        assert!(vp.contains(300.0, 50.0));
        assert!(!vp.contains(1300.0, 100.0));
        assert!(!vp.contains(299.0, 100.0));
    }

    #[test]
    fn test_unproject_center_hits_near_and_far_planes() {
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros(), Vec3::y());
        let proj = Mat4::perspective(std::f32::consts::FRAC_PI_4, vp.aspect_ratio(), 0.1, 100.0);

        let near = vp.unproject(Vec3::new(400.0, 300.0, 0.0), &proj, &view, &Mat4::identity()).unwrap();
        let far = vp.unproject(Vec3::new(400.0, 300.0, 1.0), &proj, &view, &Mat4::identity()).unwrap();

        assert_relative_eq!(near, Vec3::new(0.0, 0.0, 4.9), epsilon = 1e-4);
        assert_relative_eq!(far, Vec3::new(0.0, 0.0, -95.0), epsilon = 0.5);
    }

    #[test]
    fn test_unproject_singular_matrix() {
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let zero = Mat4::zeros();
        assert!(vp.unproject(Vec3::zeros(), &zero, &Mat4::identity(), &Mat4::identity()).is_none());
    }
}
