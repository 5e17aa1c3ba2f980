//! Feature placement engine
//!
//! Turns a built polyline plus the course's segment metadata into artifacts.
//! Per segment, in course order: road surface, side decorations, obstacles,
//! boost pads. Then boundary walls along the whole path, then checkpoints
//! and the finish line.

mod decorations;
mod features;
mod road;
mod walls;

pub use decorations::{decoration_count, place_decorations};
pub use features::{place_boost_pad, place_checkpoint, place_finish_line, place_obstacle};
pub use road::place_road;
pub use walls::{place_boundary, stripe_count};

use rainbow_shared::{ColorSchemes, Course, Segment};
use tracing::warn;

use crate::artifact::{ArtifactDraft, ArtifactId, FeatureAnchor};
use crate::config::GeneratorConfig;
use crate::frame::to_vec3;
use crate::path::MIN_SEGMENT_SAMPLES;
use crate::polyline::Polyline;

/// Receiver for placed artifacts and anchors
pub trait PlacementSink {
    /// Take ownership of an artifact, returning its id
    fn emit(&mut self, draft: ArtifactDraft) -> ArtifactId;

    /// Hand a gameplay anchor to the game loop
    fn anchor(&mut self, anchor: FeatureAnchor);
}

/// Sink that keeps everything in memory, in arrival order
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub artifacts: Vec<ArtifactDraft>,
    pub anchors: Vec<FeatureAnchor>,
}

impl PlacementSink for CollectingSink {
    fn emit(&mut self, draft: ArtifactDraft) -> ArtifactId {
        self.artifacts.push(draft);
        ArtifactId(self.artifacts.len() as u32 - 1)
    }

    fn anchor(&mut self, anchor: FeatureAnchor) {
        self.anchors.push(anchor);
    }
}

/// Places every artifact for one course
pub struct FeaturePlacer<'a> {
    pub config: &'a GeneratorConfig,
    pub schemes: &'a ColorSchemes,
}

impl<'a> FeaturePlacer<'a> {
    pub fn new(config: &'a GeneratorConfig, schemes: &'a ColorSchemes) -> Self {
        Self { config, schemes }
    }

    pub fn place(&self, course: &Course, polyline: &Polyline, sink: &mut dyn PlacementSink) {
        for (index, segment) in course.segments.iter().enumerate() {
            self.place_segment(index, segment, polyline, sink);
        }

        place_boundary(polyline, &self.config.boundary, sink);

        for (index, checkpoint) in course.checkpoints.iter().enumerate() {
            place_checkpoint(index, checkpoint, &self.config.features, sink);
        }

        let finish = course
            .finish_position
            .map(to_vec3)
            .unwrap_or(polyline.last().position);
        place_finish_line(finish, polyline, &self.config.features, sink);
    }

    fn place_segment(
        &self,
        index: usize,
        segment: &Segment,
        polyline: &Polyline,
        sink: &mut dyn PlacementSink,
    ) {
        let (Some(features), Some(width)) = (segment.features(), segment.width()) else {
            // Unknown segment types carry nothing to place
            return;
        };

        let samples = polyline.segment_samples(index);
        if samples.len() < MIN_SEGMENT_SAMPLES {
            warn!(
                "Segment {} ({}) owns {} samples, skipping road and decorations",
                index,
                segment.type_name(),
                samples.len()
            );
        } else {
            let palette = self.schemes.resolve(features.color_scheme.as_deref());
            place_road(index, segment, samples, palette, sink);
            place_decorations(
                index,
                &features.decoration,
                width,
                samples,
                palette,
                &self.config.decorations,
                sink,
            );
        }

        // Point features use absolute coordinates, so they survive a skipped segment
        for obstacle in &features.obstacles {
            place_obstacle(index, obstacle, &self.config.features, sink);
        }
        for pad in &features.boost_pads {
            place_boost_pad(index, pad, &self.config.features, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;
    use crate::path::build_path;
    use rainbow_shared::{BoostPad, Obstacle, SegmentFeatures, TurnDirection, Vec3f};

    fn place(course: &Course) -> CollectingSink {
        let config = GeneratorConfig::default();
        let schemes = config.color_schemes();
        let polyline = build_path(&course.segments);
        let mut sink = CollectingSink::default();
        FeaturePlacer::new(&config, &schemes).place(course, &polyline, &mut sink);
        sink
    }

    fn course(segments: Vec<Segment>) -> Course {
        Course::from_toml_str("name = \"test\"")
            .map(|mut c| {
                c.segments = segments;
                c
            })
            .unwrap()
    }

    fn count(sink: &CollectingSink, kind: ArtifactKind) -> usize {
        sink.artifacts.iter().filter(|a| a.kind == kind).count()
    }

    #[test]
    fn test_one_road_per_valid_segment() {
        let sink = place(&course(vec![
            Segment::straight(100.0, 30.0),
            Segment::turn(40.0, 90.0, TurnDirection::Left, 30.0),
            Segment::Unknown,
            Segment::straight(0.0, 30.0),
        ]));
        assert_eq!(count(&sink, ArtifactKind::Road), 2);
        assert_eq!(count(&sink, ArtifactKind::FinishLine), 1);
    }

    #[test]
    fn test_skipped_segment_keeps_point_features() {
        let features = SegmentFeatures {
            obstacles: vec![Obstacle {
                kind: "barrier".to_string(),
                position: Vec3f::new(0.0, 0.0, -50.0),
                width: 10.0,
            }],
            boost_pads: vec![BoostPad {
                position: Vec3f::new(0.0, 0.0, -20.0),
                length: 20.0,
            }],
            ..Default::default()
        };
        let sink = place(&course(vec![
            Segment::straight(-5.0, 30.0).with_features(features),
        ]));

        assert_eq!(count(&sink, ArtifactKind::Road), 0);
        assert_eq!(count(&sink, ArtifactKind::Decoration), 0);
        assert_eq!(count(&sink, ArtifactKind::Obstacle), 1);
        assert_eq!(count(&sink, ArtifactKind::BoostPad), 1);
        // Obstacle, boost pad and finish line anchors
        assert_eq!(sink.anchors.len(), 3);
    }

    #[test]
    fn test_finish_falls_back_to_last_sample() {
        let sink = place(&course(vec![Segment::straight(100.0, 30.0)]));
        let finish = sink
            .anchors
            .iter()
            .find_map(|a| match a {
                FeatureAnchor::FinishLine(f) => Some(f.position),
                _ => None,
            })
            .unwrap();
        assert!((finish - glam::Vec3::new(0.0, 0.0, -100.0)).length() < 1e-3);
    }

    #[test]
    fn test_placement_order() {
        let sink = place(&course(vec![Segment::straight(40.0, 30.0)]));
        let kinds: Vec<ArtifactKind> = sink.artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds.first(), Some(&ArtifactKind::Road));
        assert_eq!(kinds.last(), Some(&ArtifactKind::FinishLine));
        let first_wall = kinds.iter().position(|k| *k == ArtifactKind::Wall).unwrap();
        let last_decoration = kinds
            .iter()
            .rposition(|k| *k == ArtifactKind::Decoration)
            .unwrap();
        assert!(last_decoration < first_wall);
    }
}
