//! Side decorations
//!
//! Decorations are spread evenly by sampled arc length, one on each side
//! of the road just inside the edge. Placement is shared by every variant;
//! only the shape and paint differ.

use glam::Vec3;
use rainbow_shared::{DecorationKind, Rgb};

use super::PlacementSink;
use crate::artifact::{ArtifactDraft, ArtifactKind, Paint, Pose, Shape};
use crate::config::DecorationConfig;
use crate::frame::{UP, right_of};
use crate::path::PathSample;
use crate::polyline::{point_along, sampled_length};

/// Decorations per side for a segment of sampled length `length`
pub fn decoration_count(length: f32, spacing: f32) -> usize {
    if spacing <= 0.0 {
        return 2;
    }
    ((length / spacing).floor() as usize).max(2)
}

/// Place decorations along one segment's owned samples
///
/// Returns the number of decorations per side.
pub fn place_decorations(
    segment: usize,
    kind: &DecorationKind,
    width: f32,
    samples: &[PathSample],
    palette: &[Rgb],
    config: &DecorationConfig,
    sink: &mut dyn PlacementSink,
) -> usize {
    if samples.len() < 2 {
        return 0;
    }

    let count = decoration_count(sampled_length(samples), config.spacing);
    let edge = width * 0.5 - config.edge_inset;

    for i in 0..count {
        let t = i as f32 / (count - 1) as f32;
        let Some(point) = point_along(samples, t) else {
            continue;
        };
        for side in [-1.0, 1.0] {
            let base = point.lateral(side * edge);
            let (pose, shape, paint) = decoration(kind, i, base, point.direction, palette);
            sink.emit(
                ArtifactDraft::new(ArtifactKind::Decoration, pose, shape, paint).in_segment(segment),
            );
        }
    }

    count
}

/// Shape, paint and pose for decoration `index` standing at `base`
fn decoration(
    kind: &DecorationKind,
    index: usize,
    base: Vec3,
    direction: Vec3,
    palette: &[Rgb],
) -> (Pose, Shape, Paint) {
    let i = index as f32;
    let pick = pick_color(palette, index);

    match kind {
        DecorationKind::Cones => cone(base, direction, 10.0 + (i * 0.2).sin() * 3.0, palette),
        DecorationKind::Pillars => {
            let height = 15.0 + (i * 0.3).sin() * 5.0;
            (
                Pose::new(base + UP * (height * 0.5), direction),
                Shape::Box {
                    size: Vec3::new(3.0, height, 3.0),
                },
                Paint::HeightBands {
                    palette: palette.to_vec(),
                },
            )
        }
        DecorationKind::Crystals => {
            let height = 8.0 + (i * 0.4).sin() * 4.0;
            (
                Pose::new(base + UP * (height * 0.5), direction),
                Shape::Octahedron {
                    radius: height / 3.0,
                    stretch_y: 3.0,
                },
                Paint::Solid {
                    color: pick,
                    opacity: 0.8,
                    emissive: 0.3,
                },
            )
        }
        DecorationKind::NeonLines => {
            let height = 8.0 + (i * 0.2).cos() * 3.0;
            (
                Pose::new(base + UP * (height * 0.5), direction),
                Shape::Cylinder { radius: 0.2, height },
                Paint::Solid {
                    color: pick,
                    opacity: 1.0,
                    emissive: 1.0,
                },
            )
        }
        DecorationKind::EnergyRings => (
            // Ring axis points across the track so the ring faces the road
            Pose::new(base, right_of(direction)),
            Shape::Torus {
                radius: 6.0 + (i * 0.5).sin() * 2.0,
                tube: 0.5,
            },
            Paint::Solid {
                color: pick,
                opacity: 0.7,
                emissive: 0.5,
            },
        ),
        DecorationKind::Other(_) => cone(base, direction, 10.0, palette),
    }
}

fn cone(base: Vec3, direction: Vec3, height: f32, palette: &[Rgb]) -> (Pose, Shape, Paint) {
    (
        Pose::new(base, direction),
        Shape::Cone {
            radius: 2.0,
            height,
            sides: 3,
        },
        Paint::HeightBands {
            palette: palette.to_vec(),
        },
    )
}

fn pick_color(palette: &[Rgb], index: usize) -> Rgb {
    if palette.is_empty() {
        0xffffff
    } else {
        palette[index % palette.len()]
    }
}
