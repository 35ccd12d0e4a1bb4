//! Scene container
//!
//! A [`Scene`] aggregates entities (in insertion order) and one camera, and
//! orchestrates per-frame update and draw ordering. It holds no physics
//! logic; the host runs [`crate::physics::PhysicsSystem`] between update and
//! draw.
//!
//! ```text
//! pick → Scene::update (camera, then entities) → PhysicsSystem::simulate
//!      → Scene::draw_3d → Scene::draw_2d
//! ```

mod builder;
mod container;
mod snapshot;

pub use builder::build_physics_scene;
pub use container::Scene;
pub use snapshot::{SceneSnapshot, EDITOR_CAMERA_SENTINEL};
