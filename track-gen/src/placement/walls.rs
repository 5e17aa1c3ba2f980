//! Boundary walls and warning stripes
//!
//! Walks consecutive sample pairs along the whole path. A pair belongs to
//! the segment owning its second sample; pairs ending on the start sample
//! get nothing. The pair's chord gives the local frame.

use glam::Vec3;

use super::PlacementSink;
use crate::artifact::{ArtifactDraft, ArtifactKind, Paint, Pose, Shape};
use crate::config::BoundaryConfig;
use crate::frame::{UP, right_of};
use crate::polyline::Polyline;

const STRIPE_HEIGHT: f32 = 0.1;

/// Stripes per side for one pair of length `pair_length`
pub fn stripe_count(pair_length: f32, spacing: f32) -> usize {
    if spacing <= 0.0 {
        return 0;
    }
    (pair_length / spacing).floor() as usize
}

/// Place walls and stripes for every owned sample pair
///
/// Returns the number of walls placed.
pub fn place_boundary(
    polyline: &Polyline,
    config: &BoundaryConfig,
    sink: &mut dyn PlacementSink,
) -> usize {
    let mut walls = 0;

    for pair in polyline.samples().windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let Some(segment) = curr.segment else {
            continue;
        };
        let Some(width) = polyline.width_of(segment) else {
            continue;
        };

        let chord = curr.position - prev.position;
        let length = chord.length();
        if length <= f32::EPSILON {
            continue;
        }
        let direction = chord / length;
        let perpendicular = right_of(direction);
        let half = width * 0.5;

        for side in [-1.0, 1.0] {
            let offset = perpendicular * (side * half);
            place_wall(
                segment,
                prev.position + offset,
                curr.position + offset,
                config,
                sink,
            );
            walls += 1;
        }

        place_stripes(segment, prev.position, direction, perpendicular, half, length, config, sink);
    }

    walls
}

fn place_wall(
    segment: usize,
    start: Vec3,
    end: Vec3,
    config: &BoundaryConfig,
    sink: &mut dyn PlacementSink,
) {
    let span = end - start;
    let midpoint = (start + end) * 0.5;

    sink.emit(
        ArtifactDraft::new(
            ArtifactKind::Wall,
            Pose::new(midpoint + UP * (config.wall_height * 0.5), span.normalize_or_zero()),
            Shape::Box {
                size: Vec3::new(config.wall_thickness, config.wall_height, span.length()),
            },
            Paint::Solid {
                color: config.wall_color,
                opacity: config.wall_opacity,
                emissive: 0.3,
            },
        )
        .in_segment(segment),
    );
}

#[allow(clippy::too_many_arguments)]
fn place_stripes(
    segment: usize,
    start: Vec3,
    direction: Vec3,
    perpendicular: Vec3,
    half_width: f32,
    length: f32,
    config: &BoundaryConfig,
    sink: &mut dyn PlacementSink,
) {
    let count = stripe_count(length, config.stripe_spacing);
    let edge = half_width - config.stripe_width * 0.5;

    for i in 0..count {
        let t = i as f32 / count as f32;
        let along = start + direction * (t * length) - UP * config.stripe_drop;

        for side in [-1.0, 1.0] {
            sink.emit(
                ArtifactDraft::new(
                    ArtifactKind::WarningStripe,
                    Pose::new(along + perpendicular * (side * edge), direction),
                    Shape::Box {
                        size: Vec3::new(
                            config.stripe_width,
                            STRIPE_HEIGHT,
                            config.stripe_spacing * 0.5,
                        ),
                    },
                    Paint::Solid {
                        color: config.stripe_color,
                        opacity: 1.0,
                        emissive: 0.5,
                    },
                )
                .in_segment(segment),
            );
        }
    }
}
