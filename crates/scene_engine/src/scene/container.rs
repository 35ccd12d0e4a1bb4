//! Ordered entity container plus camera

use super::snapshot::SceneSnapshot;
use crate::ecs::{Entity, EntityId, FrameContext};
use crate::input::InputState;
use crate::render::{Camera, RenderBackend};
use slotmap::SlotMap;

/// Entities in insertion order plus the scene camera.
///
/// Insertion order is observable: hooks run in it, physics iterates it and
/// the exporter emits it. Entities are never removed.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: SlotMap<EntityId, Entity>,
    order: Vec<EntityId>,

    /// The scene camera
    pub camera: Camera,
}

impl Scene {
    /// Empty scene with the default camera
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Its components were already awoken when attached.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        log::debug!("Scene add: {} ({} components)", entity.name, entity.components().len());
        let id = self.entities.insert(entity);
        self.order.push(id);
        id
    }

    /// Entity ids in scene order
    pub fn ids(&self) -> &[EntityId] {
        &self.order
    }

    /// Entities with their ids, in scene order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.entities.get(id).map(|entity| (id, entity)))
    }

    /// Look up an entity
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity mutably
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// First entity with the given name, case-insensitive
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.iter()
            .find(|(_, entity)| entity.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| id)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no entities
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Play-mode update: camera first, then every entity in scene order
    pub fn update(&mut self, ctx: &FrameContext<'_>, aspect: f32) {
        self.camera.update(ctx.input, ctx.delta_time, aspect);
        for id in &self.order {
            if let Some(entity) = self.entities.get_mut(*id) {
                entity.update(ctx);
            }
        }
    }

    /// Edit-mode update: only the camera advances
    pub fn editor_update(&mut self, input: &InputState, delta_time: f32, aspect: f32) {
        self.camera.update(input, delta_time, aspect);
    }

    /// Push camera matrices, then draw every entity in scene order
    pub fn draw_3d(&self, backend: &mut dyn RenderBackend) {
        backend.set_camera(self.camera.view(), self.camera.projection());
        for (_, entity) in self.iter() {
            entity.draw_3d(backend);
        }
    }

    /// Screen-space pass in scene order
    pub fn draw_2d(&self, backend: &mut dyn RenderBackend) {
        for (_, entity) in self.iter() {
            entity.draw_2d(backend);
        }
    }

    /// Deep copy of the entities and camera pose at this instant
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            entities: self.iter().map(|(_, entity)| entity.clone()).collect(),
            camera: self.camera.state(),
        }
    }
}
