//! Constant spin, used by demo scenes

use crate::ecs::component::FrameContext;
use crate::foundation::math::{Transform, Vec3};

/// Adds `angular_velocity * dt` to the entity rotation every frame, without wrapping
#[derive(Debug, Clone, PartialEq)]
pub struct Rotator {
    /// Radians per second around each axis
    pub angular_velocity: Vec3,
}

impl Default for Rotator {
    fn default() -> Self {
        Self {
            angular_velocity: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl Rotator {
    pub(crate) fn update(&self, transform: &mut Transform, ctx: &FrameContext<'_>) {
        transform.rotation += self.angular_velocity * ctx.delta_time;
    }
}
