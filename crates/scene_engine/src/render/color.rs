//! 8-bit RGBA colors

use serde::{Deserialize, Serialize};

/// RGBA color with 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white, the default tint
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Light gray checkerboard cell
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    /// Dark gray checkerboard cell and floor tint
    pub const DARK_GRAY: Self = Self::rgb(169, 169, 169);
    /// Player tint
    pub const CORNFLOWER_BLUE: Self = Self::rgb(100, 149, 237);
    /// Obstacle tint, X gizmo axis
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Y gizmo axis
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// Z gizmo axis
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Collider wireframes
    pub const LIME_GREEN: Self = Self::rgb(50, 205, 50);
    /// Editor grid lines
    pub const GRID: Self = Self::rgb(80, 80, 80);

    /// Opaque color from three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color from four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an `[r, g, b, a]` array
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
