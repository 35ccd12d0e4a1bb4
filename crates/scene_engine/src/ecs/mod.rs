//! Entity store and component runtime
//!
//! Entities own their transform and an append-only list of tagged
//! [`Component`] variants. Hook dispatch is driven by the capability table in
//! [`component`], which the exporter also reads.

pub mod component;
pub mod components;
pub mod entity;

pub use component::{Capabilities, Component, ComponentKind, ComponentVariant, FrameContext, Hooks};
pub use components::{BoxCollider, MeshRenderer, PlayerController2D, Rotator};
pub use entity::{Entity, EntityId};
