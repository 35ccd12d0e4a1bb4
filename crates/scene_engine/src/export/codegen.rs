//! Scene body generation
//!
//! The scene-construction body is built as a small tree of blocks first and
//! only then rendered to text. Field values always pass through [`Literal`],
//! so formatting and escaping are decided in one place.

use super::literal::Literal;
use crate::ecs::{Component, Entity};
use crate::foundation::math::Vec3;
use crate::render::CameraState;
use crate::scene::SceneSnapshot;
use std::fmt::{self, Write};

const INDENT: &str = "    ";

/// Construction of one component on the generated side
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBlock {
    /// Local variable name
    pub binding: String,
    /// Generated runtime type name
    pub type_name: &'static str,
    /// Public fields assigned after `Default::default()`, in order
    pub fields: Vec<(&'static str, Literal)>,
}

/// Construction of one entity on the generated side
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBlock {
    /// Local variable name
    pub binding: String,
    /// Display name
    pub name: String,
    /// Position
    pub position: Vec3,
    /// Euler rotation
    pub rotation: Vec3,
    /// Scale
    pub scale: Vec3,
    /// Exportable components, in attachment order
    pub components: Vec<ComponentBlock>,
}

/// Fixed camera pose for the generated scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBlock {
    /// Position
    pub position: Vec3,
    /// Pitch in radians
    pub pitch: f32,
    /// Yaw in radians
    pub yaw: f32,
}

/// Entire scene-construction body
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBody {
    /// Entities in scene order
    pub entities: Vec<EntityBlock>,
    /// Camera pose
    pub camera: CameraBlock,
}

impl SceneBody {
    /// Build from a snapshot, skipping the editor camera sentinel and any
    /// component the capability table marks as not exportable.
    pub fn from_snapshot(snapshot: &SceneSnapshot) -> Self {
        let entities = snapshot
            .exported_entities()
            .enumerate()
            .map(|(index, entity)| entity_block(index, entity))
            .collect();

        Self {
            entities,
            camera: camera_block(&snapshot.camera),
        }
    }
}

fn camera_block(state: &CameraState) -> CameraBlock {
    CameraBlock {
        position: Vec3::from(state.position),
        pitch: state.rotation[0],
        yaw: state.rotation[1],
    }
}

fn entity_block(index: usize, entity: &Entity) -> EntityBlock {
    let components = entity
        .components()
        .iter()
        .filter_map(|component| {
            let block = component_block(index, component);
            if block.is_none() {
                log::debug!(
                    "Export: {} on '{}' has no generated equivalent, skipped",
                    component.kind().name(),
                    entity.name
                );
            }
            block
        })
        .collect();

    EntityBlock {
        binding: format!("e{index}"),
        name: entity.name.clone(),
        position: entity.transform.position,
        rotation: entity.transform.rotation,
        scale: entity.transform.scale,
        components,
    }
}

/// Serialization row for one component, or `None` when it is not exportable
pub fn component_block(index: usize, component: &Component) -> Option<ComponentBlock> {
    let kind = component.kind();
    if !kind.capabilities().exportable {
        return None;
    }

    let (prefix, fields) = match component {
        Component::MeshRenderer(mesh) => {
            let mut fields = vec![("color", Literal::Color(mesh.color))];
            if let Some(texture) = mesh.texture {
                fields.push(("texture", Literal::Texture(texture)));
            }
            ("mesh", fields)
        }
        Component::BoxCollider(collider) => (
            "collider",
            vec![
                ("size", Literal::Vec3(collider.size)),
                ("is_static", Literal::Bool(collider.is_static)),
            ],
        ),
        Component::PlayerController2D(controller) => (
            "controller",
            vec![("move_speed", Literal::Float(controller.move_speed))],
        ),
        Component::Rotator(_) => return None,
    };

    Some(ComponentBlock {
        binding: format!("{prefix}{index}"),
        type_name: kind.name(),
        fields,
    })
}

impl fmt::Display for ComponentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDENT}let mut {} = {}::default();", self.binding, self.type_name)?;
        for (field, value) in &self.fields {
            writeln!(f, "{INDENT}{}.{field} = {value};", self.binding)?;
        }
        Ok(())
    }
}

impl fmt::Display for EntityBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.binding;
        writeln!(f, "{INDENT}let mut {b} = Entity::new({});", Literal::Str(self.name.clone()))?;
        writeln!(f, "{INDENT}{b}.position = {};", Literal::Vec3(self.position))?;
        writeln!(f, "{INDENT}{b}.rotation = {};", Literal::Vec3(self.rotation))?;
        writeln!(f, "{INDENT}{b}.scale = {};", Literal::Vec3(self.scale))?;
        for component in &self.components {
            write!(f, "{component}")?;
            writeln!(f, "{INDENT}{b}.add_component({});", component.binding)?;
        }
        writeln!(f, "{INDENT}scene.add({b});")?;
        writeln!(f)
    }
}

impl fmt::Display for CameraBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{INDENT}scene.camera = SceneCamera::fixed({}, {}, {});",
            Literal::Vec3(self.position),
            Literal::Float(self.pitch),
            Literal::Float(self.yaw)
        )
    }
}

impl SceneBody {
    /// Render to source text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entity in &self.entities {
            // Writing into a String cannot fail.
            let _ = write!(out, "{entity}");
        }
        let _ = write!(out, "{}", self.camera);
        out
    }
}
