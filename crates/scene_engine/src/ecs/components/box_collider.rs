//! Axis-aligned box collider

use crate::foundation::math::{Transform, Vec3};
use crate::physics::Aabb;

/// Collision volume sized relative to the entity scale
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCollider {
    /// Full box size before scaling (unit cube by default)
    pub size: Vec3,

    /// Static colliders are never moved by the simulation
    pub is_static: bool,
}

impl Default for BoxCollider {
    fn default() -> Self {
        Self {
            size: Vec3::new(1.0, 1.0, 1.0),
            is_static: false,
        }
    }
}

impl BoxCollider {
    /// Static collider of unit size
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }

    /// World bounds: `position ± size * scale / 2`. Rotation is ignored.
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        let half = self.size.component_mul(&transform.scale) * 0.5;
        Aabb::new(transform.position - half, transform.position + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_scale() {
        let transform = Transform::default().with_scale(Vec3::new(10.0, 1.0, 10.0));
        let bounds = BoxCollider::fixed().world_bounds(&transform);
        assert_eq!(bounds.min, Vec3::new(-5.0, -0.5, -5.0));
        assert_eq!(bounds.max, Vec3::new(5.0, 0.5, 5.0));
    }

    #[test]
    fn test_bounds_ignore_rotation() {
        let transform = Transform {
            position: Vec3::new(0.0, 2.0, 0.0),
            rotation: Vec3::new(0.3, 1.2, 0.0),
            ..Default::default()
        };
        let bounds = BoxCollider::default().world_bounds(&transform);
        assert_eq!(bounds.center(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(bounds.extents(), Vec3::new(0.5, 0.5, 0.5));
    }
}
