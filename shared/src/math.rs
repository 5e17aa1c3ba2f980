//! Math types for course descriptors
//!
//! Provides POD (Plain Old Data) math types that are serializable and
//! can be shared across crates without requiring glam as a dependency.

use serde::{Deserialize, Serialize};

/// World-space 3D coordinate as authored in a course file
///
/// This is the POD version for serialization. The generator converts it
/// to its native vector type at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec3f {
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_y_defaults_to_zero() {
        let v: Vec3f = serde_json::from_str(r#"{"x": 1.0, "z": -2.0}"#).unwrap();
        assert_eq!(v, Vec3f::new(1.0, 0.0, -2.0));
    }
}
