//! Default demo scene

use super::container::Scene;
use crate::ecs::{BoxCollider, Entity, MeshRenderer, PlayerController2D};
use crate::foundation::math::{Transform, Vec3};
use crate::render::{Color, TextureHandle};

/// Populate `scene` with the physics demo: a static floor, a player cube and
/// a falling obstacle.
pub fn build_physics_scene(scene: &mut Scene) {
    let mut floor = Entity::new("Floor").with_transform(Transform::default().with_scale(Vec3::new(10.0, 1.0, 10.0)));
    floor.attach(
        MeshRenderer::default()
            .with_color(Color::DARK_GRAY)
            .with_texture(TextureHandle::Checkerboard),
    );
    floor.attach(BoxCollider::fixed());
    scene.add(floor);

    let mut player = Entity::new("PlayerCube").with_transform(Transform::from_position(Vec3::new(0.0, 4.0, 0.0)));
    player.attach(MeshRenderer::default().with_color(Color::CORNFLOWER_BLUE));
    player.add_component::<BoxCollider>();
    player.add_component::<PlayerController2D>();
    scene.add(player);

    let mut obstacle = Entity::new("Obstacle").with_transform(Transform::from_position(Vec3::new(2.0, 2.0, 0.0)));
    obstacle.attach(
        MeshRenderer::default()
            .with_color(Color::RED)
            .with_texture(TextureHandle::Checkerboard),
    );
    obstacle.add_component::<BoxCollider>();
    scene.add(obstacle);

    log::info!("Built physics scene with {} entities", scene.len());
}
