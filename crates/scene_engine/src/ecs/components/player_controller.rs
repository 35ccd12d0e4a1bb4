//! Arrow-key planar movement

use crate::ecs::component::FrameContext;
use crate::foundation::math::{Transform, Vec3};
use crate::input::KeyCode;

/// Moves the entity on the XZ plane from the arrow keys.
///
/// Up and down drive -Z and +Z, left and right drive -X and +X. Opposing keys
/// cancel. Diagonals are not normalized, so they move √2 times faster.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController2D {
    /// Units per second along each held axis
    pub move_speed: f32,
}

impl Default for PlayerController2D {
    fn default() -> Self {
        Self { move_speed: 5.0 }
    }
}

impl PlayerController2D {
    pub(crate) fn update(&self, transform: &mut Transform, ctx: &FrameContext<'_>) {
        let mut direction = Vec3::zeros();
        if ctx.input.key_held(KeyCode::Up) {
            direction.z -= 1.0;
        }
        if ctx.input.key_held(KeyCode::Down) {
            direction.z += 1.0;
        }
        if ctx.input.key_held(KeyCode::Left) {
            direction.x -= 1.0;
        }
        if ctx.input.key_held(KeyCode::Right) {
            direction.x += 1.0;
        }
        transform.position += direction * self.move_speed * ctx.delta_time;
    }
}
