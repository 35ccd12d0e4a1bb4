//! Gravity, floor clamp and pairwise overlap nudging
//!
//! This is a penalty-style approximation, not rigid-body dynamics. For each
//! non-static collider in scene order:
//!
//! 1. `y -= gravity * dt`, then clamp `y` to the floor height.
//! 2. Compute its world bounds once.
//! 3. For every other entity with a collider whose bounds intersect, raise
//!    `y` by the nudge. Only the entity being processed moves, so results
//!    depend on scene order, and stacked overlaps accumulate one nudge per
//!    offending pair per frame.

use crate::core::PhysicsConfig;
use crate::ecs::{BoxCollider, EntityId};
use crate::scene::Scene;

/// Per-frame physics step over a scene
#[derive(Debug, Clone, Default)]
pub struct PhysicsSystem {
    config: PhysicsConfig,
}

impl PhysicsSystem {
    /// Create a physics system with the given constants
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    /// Constants in use
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance every dynamic collider by `delta_time` seconds
    pub fn simulate(&self, scene: &mut Scene, delta_time: f32) {
        let order: Vec<EntityId> = scene.ids().to_vec();

        for &id in &order {
            let Some(entity) = scene.get_mut(id) else {
                continue;
            };
            let Some(collider) = entity.get_component::<BoxCollider>() else {
                continue;
            };
            if collider.is_static {
                continue;
            }
            let collider = collider.clone();

            let position = &mut entity.transform.position;
            position.y -= self.config.gravity * delta_time;
            if position.y < self.config.floor_height {
                position.y = self.config.floor_height;
            }
            let bounds = collider.world_bounds(&entity.transform);

            let overlaps = order
                .iter()
                .filter(|&&other| other != id)
                .filter_map(|&other| scene.get(other))
                .filter_map(|other| {
                    other
                        .get_component::<BoxCollider>()
                        .map(|c| c.world_bounds(&other.transform))
                })
                .filter(|other_bounds| bounds.intersects(other_bounds))
                .count();

            if overlaps > 0 {
                if let Some(entity) = scene.get_mut(id) {
                    for _ in 0..overlaps {
                        entity.transform.position.y += self.config.overlap_nudge;
                    }
                    log::trace!("{} nudged by {} overlap(s)", entity.name, overlaps);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;
    use crate::foundation::math::{Transform, Vec3};
    use approx::assert_relative_eq;

    fn body(name: &str, position: Vec3, is_static: bool) -> Entity {
        let mut entity = Entity::new(name).with_transform(Transform::from_position(position));
        entity.attach(BoxCollider {
            is_static,
            ..BoxCollider::default()
        });
        entity
    }

    #[test]
    fn test_gravity_without_overlap() {
        let mut scene = Scene::new();
        let id = scene.add(body("Falling", Vec3::new(0.0, 4.0, 0.0), false));
        PhysicsSystem::default().simulate(&mut scene, 0.1);
        assert_relative_eq!(scene.get(id).unwrap().transform.position.y, 3.02, epsilon = 1e-5);
    }

    #[test]
    fn test_floor_clamp_is_exact() {
        let mut scene = Scene::new();
        let id = scene.add(body("Low", Vec3::new(0.0, 0.6, 0.0), false));
        PhysicsSystem::default().simulate(&mut scene, 0.1);
        assert_eq!(scene.get(id).unwrap().transform.position.y, 0.5);
    }

    #[test]
    fn test_static_and_colliderless_entities_do_not_fall() {
        let mut scene = Scene::new();
        let fixed = scene.add(body("Fixed", Vec3::new(0.0, 4.0, 0.0), true));
        let plain = scene.add(Entity::new("Plain").with_transform(Transform::from_position(Vec3::new(5.0, 4.0, 0.0))));
        PhysicsSystem::default().simulate(&mut scene, 0.1);
        assert_eq!(scene.get(fixed).unwrap().transform.position.y, 4.0);
        assert_eq!(scene.get(plain).unwrap().transform.position.y, 4.0);
    }

    #[test]
    fn test_nudge_moves_only_first_of_pair() {
        let mut scene = Scene::new();
        let first = scene.add(body("First", Vec3::new(0.0, 5.0, 0.0), false));
        let second = scene.add(body("Second", Vec3::new(0.0, 4.05, 0.0), false));

        PhysicsSystem::default().simulate(&mut scene, 0.0);

        assert_relative_eq!(scene.get(first).unwrap().transform.position.y, 5.1, epsilon = 1e-6);
        assert_eq!(scene.get(second).unwrap().transform.position.y, 4.05);
    }

    #[test]
    fn test_nudge_accumulates_per_pair() {
        let mut scene = Scene::new();
        let mover = scene.add(body("Mover", Vec3::new(0.0, 5.0, 0.0), false));
        scene.add(body("A", Vec3::new(0.0, 5.5, 0.0), true));
        scene.add(body("B", Vec3::new(0.0, 4.5, 0.0), true));

        PhysicsSystem::default().simulate(&mut scene, 0.0);

        assert_relative_eq!(scene.get(mover).unwrap().transform.position.y, 5.2, epsilon = 1e-6);
    }
}
