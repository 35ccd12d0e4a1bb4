//! Built-in component variants
//!
//! Each variant is plain data plus the hooks its capability row declares.

pub mod box_collider;
pub mod mesh_renderer;
pub mod player_controller;
pub mod rotator;

pub use box_collider::BoxCollider;
pub use mesh_renderer::MeshRenderer;
pub use player_controller::PlayerController2D;
pub use rotator::Rotator;
