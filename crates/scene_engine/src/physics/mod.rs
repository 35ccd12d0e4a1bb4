//! Physics & picking
//!
//! [`PhysicsSystem::simulate`] integrates gravity and resolves overlaps for
//! dynamic box colliders; [`picking`] turns a screen point into the nearest
//! entity under it.

pub mod aabb;
pub mod picking;
pub mod ray;
pub mod simulate;

pub use aabb::Aabb;
pub use picking::{raycast, raycast_hit, RayHit};
pub use ray::Ray;
pub use simulate::PhysicsSystem;
