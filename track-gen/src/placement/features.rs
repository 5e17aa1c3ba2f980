//! Point features: obstacles, boost pads, checkpoints and the finish line
//!
//! These sit at author-specified world positions. Each one emits a visual
//! artifact and then hands an anchor to the sink.

use glam::Vec3;
use rainbow_shared::{BoostPad, Checkpoint, Obstacle};

use super::PlacementSink;
use crate::artifact::{
    ArtifactDraft, ArtifactKind, BoostPadAnchor, CheckpointAnchor, FeatureAnchor,
    FinishLineAnchor, ObstacleAnchor, Paint, Pose, Shape,
};
use crate::config::FeatureConfig;
use crate::frame::{FORWARD, UP, to_vec3};
use crate::polyline::Polyline;

pub fn place_obstacle(
    segment: usize,
    obstacle: &Obstacle,
    config: &FeatureConfig,
    sink: &mut dyn PlacementSink,
) {
    let position = to_vec3(obstacle.position);
    let artifact = sink.emit(
        ArtifactDraft::new(
            ArtifactKind::Obstacle,
            Pose::new(position + UP * (config.obstacle_height * 0.5), FORWARD),
            Shape::Box {
                size: Vec3::new(obstacle.width, config.obstacle_height, config.obstacle_depth),
            },
            Paint::Solid {
                color: config.obstacle_color,
                opacity: 1.0,
                emissive: 0.5,
            },
        )
        .in_segment(segment),
    );

    sink.anchor(FeatureAnchor::Obstacle(ObstacleAnchor {
        kind: obstacle.kind.clone(),
        position,
        width: obstacle.width,
        segment,
        artifact,
    }));
}

pub fn place_boost_pad(
    segment: usize,
    pad: &BoostPad,
    config: &FeatureConfig,
    sink: &mut dyn PlacementSink,
) {
    let position = to_vec3(pad.position);
    let artifact = sink.emit(
        ArtifactDraft::new(
            ArtifactKind::BoostPad,
            Pose::new(position - UP * config.surface_drop, FORWARD),
            Shape::Plane {
                width: config.boost_pad_width,
                length: pad.length,
            },
            Paint::Solid {
                color: config.boost_pad_color,
                opacity: 0.7,
                emissive: 0.0,
            },
        )
        .in_segment(segment),
    );

    sink.anchor(FeatureAnchor::BoostPad(BoostPadAnchor {
        position,
        length: pad.length,
        width: config.boost_pad_width,
        segment,
        artifact,
    }));
}

pub fn place_checkpoint(
    index: usize,
    checkpoint: &Checkpoint,
    config: &FeatureConfig,
    sink: &mut dyn PlacementSink,
) {
    let position = to_vec3(checkpoint.position);
    let artifact = sink.emit(ArtifactDraft::new(
        ArtifactKind::Checkpoint,
        // Ring lies flat, axis up
        Pose::new(position, UP),
        Shape::Torus {
            radius: checkpoint.radius,
            tube: config.checkpoint_tube,
        },
        Paint::Solid {
            color: config.checkpoint_color,
            opacity: 0.7,
            emissive: 0.0,
        },
    ));

    sink.anchor(FeatureAnchor::Checkpoint(CheckpointAnchor {
        index,
        position,
        radius: checkpoint.radius,
        artifact,
    }));
}

/// Place the checkered finish line at `position`, aligned with the nearest track heading
pub fn place_finish_line(
    position: Vec3,
    polyline: &Polyline,
    config: &FeatureConfig,
    sink: &mut dyn PlacementSink,
) {
    let forward = polyline
        .nearest(position)
        .map(|hit| hit.direction)
        .unwrap_or(FORWARD);

    let artifact = sink.emit(ArtifactDraft::new(
        ArtifactKind::FinishLine,
        Pose::new(position - UP * config.surface_drop, forward),
        Shape::Plane {
            width: config.finish_width,
            length: config.finish_depth,
        },
        Paint::Checker {
            squares: config.finish_checks,
            colors: [0xffffff, 0x000000],
        },
    ));

    sink.anchor(FeatureAnchor::FinishLine(FinishLineAnchor {
        position,
        width: config.finish_width,
        artifact,
    }));
}
