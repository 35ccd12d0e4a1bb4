//! # Free-look editor camera
//!
//! Euler-driven perspective camera. Pitch lives in `rotation.x`, yaw in
//! `rotation.y`; roll is unused. View and projection are recomputed once per
//! [`Camera::update`] and cached for the rest of the frame so that picking and
//! drawing see the same matrices.

use crate::foundation::math::{constants::QUARTER_PI, Mat4, Mat4Ext, Vec3};
use crate::input::{InputState, KeyCode, MouseButton};
use serde::{Deserialize, Serialize};

/// Radians of rotation per pixel of pointer movement
pub const LOOK_SENSITIVITY: f32 = 0.005;

/// Base fly speed in world units per second
pub const FLY_SPEED: f32 = 10.0;

/// Multiplier applied while left shift is held
pub const SPRINT_MULTIPLIER: f32 = 2.0;

/// Near clipping plane distance
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane distance
pub const FAR_PLANE: f32 = 1000.0;

/// Position and orientation of a camera, detached from its cached matrices.
///
/// This is what gets copied into a scene snapshot and baked into exports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// World-space position
    pub position: [f32; 3],
    /// Pitch (X) and yaw (Y) in radians
    pub rotation: [f32; 3],
}

/// Perspective camera with right-button free-look controls
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Euler angles in radians: X is pitch, Y is yaw
    pub rotation: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    view: Mat4,
    projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 5.0, 10.0))
    }
}

impl Camera {
    /// Create a camera at `position` looking down -Z
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            rotation: Vec3::zeros(),
            fov: QUARTER_PI,
            view: Mat4::identity(),
            projection: Mat4::identity(),
        };
        camera.recompute(1.0);
        camera
    }

    /// Rotation matrix built from pitch then yaw
    fn orientation(&self) -> Mat4 {
        Mat4::rotation_y(self.rotation.y) * Mat4::rotation_x(self.rotation.x)
    }

    /// Unit vector the camera looks along
    pub fn forward(&self) -> Vec3 {
        self.orientation().transform_vector(&-Vec3::z())
    }

    /// Unit vector to the camera's right
    pub fn right(&self) -> Vec3 {
        self.orientation().transform_vector(&Vec3::x())
    }

    /// Apply free-look controls and refresh the cached matrices.
    ///
    /// Controls are live only while the right pointer button is held:
    /// pointer movement turns the camera, W/S/A/D fly along the view axes,
    /// Q/E drop and raise along world Y, left shift doubles the speed.
    pub fn update(&mut self, input: &InputState, delta_time: f32, aspect: f32) {
        if input.button_held(MouseButton::Right) {
            let delta = input.pointer_delta();
            self.rotation.y -= delta.x * LOOK_SENSITIVITY;
            self.rotation.x -= delta.y * LOOK_SENSITIVITY;

            let sprint = if input.key_held(KeyCode::LeftShift) { SPRINT_MULTIPLIER } else { 1.0 };
            let speed = FLY_SPEED * delta_time * sprint;
            let forward = self.forward();
            let right = self.right();

            if input.key_held(KeyCode::W) {
                self.position += forward * speed;
            }
            if input.key_held(KeyCode::S) {
                self.position -= forward * speed;
            }
            if input.key_held(KeyCode::A) {
                self.position -= right * speed;
            }
            if input.key_held(KeyCode::D) {
                self.position += right * speed;
            }
            if input.key_held(KeyCode::Q) {
                self.position -= Vec3::y() * speed;
            }
            if input.key_held(KeyCode::E) {
                self.position += Vec3::y() * speed;
            }
        }

        self.recompute(aspect);
    }

    /// Rebuild view and projection for the current pose.
    ///
    /// The up vector follows the camera's own orientation so that looking
    /// straight down never produces a degenerate look-at basis.
    pub fn recompute(&mut self, aspect: f32) {
        let orientation = self.orientation();
        let forward = orientation.transform_vector(&-Vec3::z());
        let up = orientation.transform_vector(&Vec3::y());
        self.view = Mat4::look_at(self.position, self.position + forward, up);
        self.projection = Mat4::perspective(self.fov, aspect, NEAR_PLANE, FAR_PLANE);
    }

    /// View matrix from the last update
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix from the last update
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Pose without the cached matrices
    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position.into(),
            rotation: self.rotation.into(),
        }
    }

    /// Rebuild a camera from a captured pose
    pub fn from_state(state: &CameraState, aspect: f32) -> Self {
        let mut camera = Self::new(Vec3::from(state.position));
        camera.rotation = Vec3::from(state.rotation);
        camera.recompute(aspect);
        camera
    }
}
