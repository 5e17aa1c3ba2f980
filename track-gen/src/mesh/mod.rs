//! Road surface meshes
//!
//! Roads are emitted as real world-space triangle meshes with per-vertex
//! colors, so a renderer can upload them without re-deriving any geometry.

mod road;

pub use road::{
    PANEL_COLUMNS, PANEL_ROW_LENGTH, TUBE_MIN_SEGMENTS, TUBE_RADIAL_SEGMENTS, generate_road_panel,
    generate_road_tube,
};

use glam::Vec3;
use rainbow_shared::Rgb;
use serde::Serialize;

/// Trait for mesh construction - lets road generators stay format-agnostic
pub trait MeshBuilder: Default {
    /// Add a vertex with position, normal and packed `0xRRGGBB` color, returning its index
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, color: Rgb) -> u32;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);
}

/// Unpacked f32 mesh with vertex colors
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TrackMesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors as [r, g, b, a]
    pub colors: Vec<[u8; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl TrackMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

impl MeshBuilder for TrackMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, color: Rgb) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.colors.push([
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
            255,
        ]);
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}
