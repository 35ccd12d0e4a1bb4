//! Point-in-time copy of a scene, as consumed by the exporter

use crate::ecs::Entity;
use crate::render::CameraState;

/// Name reserved for the editor's free-look camera; never exported
pub const EDITOR_CAMERA_SENTINEL: &str = "EditorCamera";

/// Owned copy of a scene's entities (in scene order) and camera pose.
///
/// Taken on the interactive thread before an export is dispatched, so the
/// live scene can keep changing while code generation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    /// Entities in scene order
    pub entities: Vec<Entity>,
    /// Camera pose at capture time
    pub camera: CameraState,
}

impl SceneSnapshot {
    /// Entities the exporter should emit, skipping the editor-only sentinel
    pub fn exported_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|entity| entity.name != EDITOR_CAMERA_SENTINEL)
    }
}
