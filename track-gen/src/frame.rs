//! Cursor and frame math
//!
//! The track lives on the XZ plane with +Y up. The canonical start pose
//! faces -Z. Lateral offsets use `cross(direction, UP)`, which points to
//! the driver's right.

use glam::Vec3;
use rainbow_shared::Vec3f;
use serde::Serialize;

/// World up axis
pub const UP: Vec3 = Vec3::Y;

/// Canonical forward heading of the start pose
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// Running position and heading used to chain segments
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Cursor {
    pub position: Vec3,
    /// Unit heading
    pub direction: Vec3,
}

impl Cursor {
    /// Origin, facing -Z
    pub const START: Self = Self {
        position: Vec3::ZERO,
        direction: FORWARD,
    };

    /// Create a cursor, normalizing the heading
    ///
    /// A zero heading falls back to [`FORWARD`].
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: direction.try_normalize().unwrap_or(FORWARD),
        }
    }

    /// Unit vector to the right of the heading
    pub fn right(&self) -> Vec3 {
        right_of(self.direction)
    }

    /// Point `distance` units ahead
    pub fn ahead(&self, distance: f32) -> Vec3 {
        self.position + self.direction * distance
    }

    /// Point `offset` units to the side (positive = right)
    pub fn lateral(&self, offset: f32) -> Vec3 {
        self.position + self.right() * offset
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::START
    }
}

/// Unit perpendicular `normalize(cross(direction, UP))`
///
/// Points right of travel. Returns zero for vertical or zero headings.
pub fn right_of(direction: Vec3) -> Vec3 {
    direction.cross(UP).normalize_or_zero()
}

/// Unit vector on the XZ plane for an angle in the `atan2(x, z)` convention
pub fn planar_unit(angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(sin, 0.0, cos)
}

/// Convert an authored coordinate into the generator's vector type
pub fn to_vec3(v: Vec3f) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_start_right_is_positive_x() {
        let right = Cursor::START.right();
        assert!((right - Vec3::X).length() < EPS);
    }

    #[test]
    fn test_new_normalizes_direction() {
        let cursor = Cursor::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert!((cursor.direction - FORWARD).length() < EPS);

        let fallback = Cursor::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(fallback.direction, FORWARD);
    }

    #[test]
    fn test_ahead_and_lateral() {
        let cursor = Cursor::START;
        assert!((cursor.ahead(10.0) - Vec3::new(0.0, 0.0, -10.0)).length() < EPS);
        assert!((cursor.lateral(-3.0) - Vec3::new(-3.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_planar_unit_matches_heading() {
        let cursor = Cursor::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        let unit = planar_unit(cursor.direction.x.atan2(cursor.direction.z));
        assert!((unit - cursor.direction).length() < EPS);
    }

    #[test]
    fn test_right_of_vertical_is_zero() {
        assert_eq!(right_of(Vec3::Y), Vec3::ZERO);
    }
}
