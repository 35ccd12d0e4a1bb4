//! Screen-point picking
//!
//! A click is unprojected at depth 0 and depth 1 to build a world-space ray.
//! Each entity is tested against its collider bounds, or a unit cube at its
//! position when it only has a mesh renderer. The closest hit wins; ties go
//! to the entity earliest in scene order.

use super::aabb::Aabb;
use super::ray::Ray;
use crate::ecs::{BoxCollider, Entity, EntityId, MeshRenderer};
use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::render::{Camera, Viewport};
use crate::scene::Scene;

/// Closest entity under a screen point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The entity that was hit
    pub entity: EntityId,
    /// The distance from the ray origin to the entry point
    pub distance: f32,
}

/// World-space ray through a window-pixel position
pub fn screen_ray(screen: Vec2, camera: &Camera, viewport: &Viewport) -> Option<Ray> {
    let world = Mat4::identity();
    let near = viewport.unproject(Vec3::new(screen.x, screen.y, 0.0), camera.projection(), camera.view(), &world)?;
    let far = viewport.unproject(Vec3::new(screen.x, screen.y, 1.0), camera.projection(), camera.view(), &world)?;
    let direction = far - near;
    if direction.norm_squared() <= f32::EPSILON {
        return None;
    }
    Some(Ray::new(near, direction))
}

/// Bounds used for picking, or `None` when the entity is not pickable
pub fn pick_bounds(entity: &Entity) -> Option<Aabb> {
    if let Some(collider) = entity.get_component::<BoxCollider>() {
        return Some(collider.world_bounds(&entity.transform));
    }
    entity.get_component::<MeshRenderer>().map(|_| {
        Aabb::from_center_extents(entity.transform.position, Vec3::new(0.5, 0.5, 0.5))
    })
}

/// Closest pickable entity under `screen`
pub fn raycast_hit(screen: Vec2, camera: &Camera, viewport: &Viewport, scene: &Scene) -> Option<RayHit> {
    let ray = screen_ray(screen, camera, viewport)?;

    let mut closest: Option<RayHit> = None;
    for (id, entity) in scene.iter() {
        let Some(distance) = pick_bounds(entity).and_then(|bounds| bounds.intersect_ray(&ray)) else {
            continue;
        };
        if closest.map_or(true, |hit| distance < hit.distance) {
            closest = Some(RayHit { entity: id, distance });
        }
    }
    closest
}

/// Entity under `screen`, if any
pub fn raycast(screen: Vec2, camera: &Camera, viewport: &Viewport, scene: &Scene) -> Option<EntityId> {
    raycast_hit(screen, camera, viewport, scene).map(|hit| hit.entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use approx::assert_relative_eq;

    fn top_down_camera(aspect: f32) -> Camera {
        let mut camera = Camera::new(Vec3::new(0.0, 10.0, 0.0));
        camera.rotation.x = -std::f32::consts::FRAC_PI_2;
        camera.recompute(aspect);
        camera
    }

    #[test]
    fn test_pick_from_directly_above() {
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let camera = top_down_camera(viewport.aspect_ratio());
        let mut scene = Scene::new();
        let mut target = Entity::new("Target");
        target.attach(BoxCollider {
            size: Vec3::new(2.0, 2.0, 2.0),
            is_static: true,
        });
        let id = scene.add(target);

        let hit = raycast_hit(Vec2::new(400.0, 300.0), &camera, &viewport, &scene).unwrap();
        assert_eq!(hit.entity, id);
        // Ray starts on the near plane, 0.1 below the camera; box top is at y = 1.
        assert_relative_eq!(hit.distance, 8.9, epsilon = 1e-2);
    }

    #[test]
    fn test_mesh_only_entity_uses_unit_cube() {
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let camera = top_down_camera(viewport.aspect_ratio());
        let mut scene = Scene::new();
        let mut entity = Entity::new("Visual")
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 0.0)).with_scale(Vec3::new(10.0, 10.0, 10.0)));
        entity.add_component::<MeshRenderer>();
        scene.add(entity);

        let hit = raycast_hit(Vec2::new(400.0, 300.0), &camera, &viewport, &scene).unwrap();
        assert_relative_eq!(hit.distance, 9.4, epsilon = 1e-2);
    }

    #[test]
    fn test_unpickable_and_empty() {
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let camera = top_down_camera(viewport.aspect_ratio());
        let mut scene = Scene::new();
        assert!(raycast(Vec2::new(400.0, 300.0), &camera, &viewport, &scene).is_none());

        scene.add(Entity::new("Empty"));
        assert!(raycast(Vec2::new(400.0, 300.0), &camera, &viewport, &scene).is_none());
    }

    #[test]
    fn test_closest_wins_and_ties_go_first() {
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let camera = top_down_camera(viewport.aspect_ratio());
        let mut scene = Scene::new();

        let mut low = Entity::new("Low");
        low.add_component::<BoxCollider>();
        scene.add(low);

        let mut twin_a = Entity::new("TwinA").with_transform(Transform::from_position(Vec3::new(0.0, 3.0, 0.0)));
        twin_a.add_component::<BoxCollider>();
        let first = scene.add(twin_a);

        let mut twin_b = Entity::new("TwinB").with_transform(Transform::from_position(Vec3::new(0.0, 3.0, 0.0)));
        twin_b.add_component::<BoxCollider>();
        scene.add(twin_b);

        assert_eq!(raycast(Vec2::new(400.0, 300.0), &camera, &viewport, &scene), Some(first));
    }
}
