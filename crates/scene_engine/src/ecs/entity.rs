//! Entities: named transforms owning an ordered component list

use super::component::{Component, ComponentVariant, FrameContext};
use crate::foundation::math::Transform;
use crate::render::RenderBackend;

slotmap::new_key_type! {
    /// Stable handle to an entity inside a scene
    pub struct EntityId;
}

/// A named, positioned object holding zero or more components.
///
/// Components are append-only and keep attachment order, which is also the
/// order hooks run in and the order the exporter emits them.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Display name; not required to be unique
    pub name: String,

    /// Position, Euler rotation and scale
    pub transform: Transform,

    components: Vec<Component>,
}

impl Entity {
    /// Create an entity at the origin with no components
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            components: Vec::new(),
        }
    }

    /// Builder: initial transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Construct a default `T`, fire its awake hook and attach it.
    ///
    /// Returns the entity for chaining; reach the new instance through
    /// [`Entity::get_component_mut`].
    pub fn add_component<T: ComponentVariant>(&mut self) -> &mut Self {
        self.attach(T::default())
    }

    /// Fire the awake hook on a pre-configured component, then attach it
    pub fn attach<T: ComponentVariant>(&mut self, component: T) -> &mut Self {
        let mut component: Component = component.into();
        component.awake();
        self.components.push(component);
        self
    }

    /// First attached component of variant `T`
    pub fn get_component<T: ComponentVariant>(&self) -> Option<&T> {
        self.components.iter().find_map(T::from_component)
    }

    /// First attached component of variant `T`, mutably
    pub fn get_component_mut<T: ComponentVariant>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(T::from_component_mut)
    }

    /// All components in attachment order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Run update hooks in attachment order
    pub fn update(&mut self, ctx: &FrameContext<'_>) {
        let Self { transform, components, .. } = self;
        for component in components.iter_mut() {
            component.update(transform, ctx);
        }
    }

    /// Run 3D draw hooks in attachment order
    pub fn draw_3d(&self, backend: &mut dyn RenderBackend) {
        for component in &self.components {
            component.draw_3d(&self.transform, backend);
        }
    }

    /// Run 2D draw hooks in attachment order
    pub fn draw_2d(&self, backend: &mut dyn RenderBackend) {
        for component in &self.components {
            component.draw_2d(&self.transform, backend);
        }
    }
}
