//! Axis-aligned bounding boxes

use super::ray::Ray;
use crate::foundation::math::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half-extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB intersects another AABB. Touching faces count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Distance along the ray to the entry point, using the slab method.
    ///
    /// Returns `Some(0.0)` when the origin is inside the box and `None` when
    /// the ray misses or the box lies entirely behind the origin. Bounds are
    /// inclusive, so a ray running along a face still hits.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if direction == 0.0 {
                // Parallel to this slab: it never narrows the interval.
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let (near, far) = {
                let t1 = (min - origin) * inv;
                let t2 = (max - origin) * inv;
                if t1 <= t2 {
                    (t1, t2)
                } else {
                    (t2, t1)
                }
            };
            tmin = tmin.max(near);
            tmax = tmax.min(far);
            if tmin > tmax {
                return None;
            }
        }

        if tmax >= 0.0 {
            Some(tmin.max(0.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::from_center_extents(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_from_above_hits_top_face() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(unit_box().intersect_ray(&ray).unwrap(), 9.0);
    }

    #[test]
    fn test_ray_misses_and_behind() {
        let miss = Ray::new(Vec3::new(3.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(unit_box().intersect_ray(&miss).is_none());

        let behind = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(unit_box().intersect_ray(&behind).is_none());
    }

    #[test]
    fn test_origin_inside_reports_zero() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(unit_box().intersect_ray(&ray), Some(0.0));
    }

    #[test]
    fn test_ray_along_face_hits() {
        let slab = Aabb::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
        for x in [0.0, 1.0, 2.0] {
            let ray = Ray::new(Vec3::new(x, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
            assert_relative_eq!(slab.intersect_ray(&ray).unwrap(), 9.0);
        }

        let outside = Ray::new(Vec3::new(2.01, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(slab.intersect_ray(&outside).is_none());
    }

    #[test]
    fn test_touching_boxes_intersect() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let c = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
