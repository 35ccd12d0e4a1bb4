//! Editor overlay geometry: ground grid, collider boxes and the selection gizmo

use super::backend::LineSegment;
use super::color::Color;
use crate::foundation::math::Vec3;
use crate::physics::Aabb;

/// Half-width of the ground grid in cells
pub const GRID_HALF_CELLS: i32 = 10;

/// Length of each gizmo axis
pub const GIZMO_AXIS_LENGTH: f32 = 2.0;

/// Square grid on the XZ plane, `2 * GRID_HALF_CELLS` cells across
pub fn grid_lines(spacing: f32) -> Vec<LineSegment> {
    let extent = GRID_HALF_CELLS as f32 * spacing;
    (-GRID_HALF_CELLS..=GRID_HALF_CELLS)
        .flat_map(|i| {
            let offset = i as f32 * spacing;
            [
                LineSegment::new(Vec3::new(offset, 0.0, -extent), Vec3::new(offset, 0.0, extent), Color::GRID),
                LineSegment::new(Vec3::new(-extent, 0.0, offset), Vec3::new(extent, 0.0, offset), Color::GRID),
            ]
        })
        .collect()
}

/// The twelve edges of an axis-aligned box
pub fn box_lines(bounds: &Aabb, color: Color) -> Vec<LineSegment> {
    let (lo, hi) = (bounds.min, bounds.max);
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { hi.x } else { lo.x },
            if y { hi.y } else { lo.y },
            if z { hi.z } else { lo.z },
        )
    };

    let mut lines = Vec::with_capacity(12);
    for a in [false, true] {
        for b in [false, true] {
            lines.push(LineSegment::new(corner(false, a, b), corner(true, a, b), color));
            lines.push(LineSegment::new(corner(a, false, b), corner(a, true, b), color));
            lines.push(LineSegment::new(corner(a, b, false), corner(a, b, true), color));
        }
    }
    lines
}

/// Red/green/blue axis lines rooted at `origin`
pub fn gizmo_lines(origin: Vec3) -> [LineSegment; 3] {
    [
        LineSegment::new(origin, origin + Vec3::x() * GIZMO_AXIS_LENGTH, Color::RED),
        LineSegment::new(origin, origin + Vec3::y() * GIZMO_AXIS_LENGTH, Color::GREEN),
        LineSegment::new(origin, origin + Vec3::z() * GIZMO_AXIS_LENGTH, Color::BLUE),
    ]
}
