//! Road panel (straights) and road tube (turns)

use std::f32::consts::TAU;

use glam::Vec3;
use rainbow_shared::Rgb;
use rainbow_shared::palettes::band_color;
use tracing::warn;

use super::MeshBuilder;
use crate::frame::{UP, right_of};
use crate::path::PathSample;
use crate::polyline::point_along;

/// Lateral subdivisions of a straight road panel
pub const PANEL_COLUMNS: u32 = 10;

/// Length units per panel row
pub const PANEL_ROW_LENGTH: f32 = 10.0;

/// Ring subdivisions of a turn tube
pub const TUBE_RADIAL_SEGMENTS: u32 = 12;

/// Minimum sweep subdivisions of a turn tube
pub const TUBE_MIN_SEGMENTS: u32 = 12;

/// Generate a flat road panel spanning the first to last owned sample
///
/// The panel is `width` wide and as long as the distance between the
/// endpoint samples, colored in palette bands along its length.
///
/// # Returns
/// `None` when fewer than 2 samples are given
pub fn generate_road_panel<M: MeshBuilder>(
    samples: &[PathSample],
    width: f32,
    palette: &[Rgb],
) -> Option<M> {
    let (first, last) = match samples {
        [first, .., last] => (first, last),
        _ => {
            warn!("generate_road_panel: need at least 2 samples, got {}", samples.len());
            return None;
        }
    };

    let span = last.position - first.position;
    let length = span.length();
    let forward = if length > f32::EPSILON {
        span / length
    } else {
        first.direction
    };
    let right = right_of(forward);
    let half = width * 0.5;

    let rows = ((length / PANEL_ROW_LENGTH).ceil() as u32).max(1);
    let cols = PANEL_COLUMNS;

    let mut mesh = M::default();
    for r in 0..=rows {
        let v = r as f32 / rows as f32;
        let center = first.position + forward * (length * v);
        let color = band_color(palette, v);

        for c in 0..=cols {
            let u = c as f32 / cols as f32;
            let position = center + right * (-half + width * u);
            mesh.add_vertex(position, UP, color);
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let i0 = r * (cols + 1) + c;
            let i1 = i0 + 1;
            let i2 = (r + 1) * (cols + 1) + c;
            let i3 = i2 + 1;

            // (right, forward) spans the plane with +Y normal
            mesh.add_triangle(i0, i1, i2);
            mesh.add_triangle(i1, i3, i2);
        }
    }

    Some(mesh)
}

/// Generate a tube swept along the owned samples of a turn
///
/// The tube diameter equals the track width. Rings are placed by arc-length
/// interpolation along the samples and colored in palette bands along the sweep.
///
/// # Returns
/// `None` when fewer than 2 samples are given
pub fn generate_road_tube<M: MeshBuilder>(
    samples: &[PathSample],
    width: f32,
    palette: &[Rgb],
) -> Option<M> {
    if samples.len() < 2 {
        warn!("generate_road_tube: need at least 2 samples, got {}", samples.len());
        return None;
    }

    let radius = width * 0.5;
    let radial = TUBE_RADIAL_SEGMENTS;
    let tubular = (samples.len() as u32 * 2).max(TUBE_MIN_SEGMENTS);

    let mut mesh = M::default();
    for j in 0..=tubular {
        let t = j as f32 / tubular as f32;
        let frame = point_along(samples, t)?;
        let right = right_of(frame.direction);
        let color = band_color(palette, t);

        for k in 0..=radial {
            let theta = k as f32 / radial as f32 * TAU;
            let normal: Vec3 = right * theta.cos() + UP * theta.sin();
            mesh.add_vertex(frame.position + normal * radius, normal, color);
        }
    }

    for j in 0..tubular {
        for k in 0..radial {
            let a = j * (radial + 1) + k;
            let b = (j + 1) * (radial + 1) + k;
            let c = b + 1;
            let d = a + 1;

            // Outward-facing winding
            mesh.add_triangle(a, b, d);
            mesh.add_triangle(b, c, d);
        }
    }

    Some(mesh)
}
