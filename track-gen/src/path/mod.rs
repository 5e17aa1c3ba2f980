//! Path builder
//!
//! Turns an ordered segment list into one continuous polyline by threading
//! a cursor through the segment samplers. Each segment's samples are tagged
//! with the segment's index; the leading start sample has no owner.

mod straight;
mod turn;

pub use straight::{STRAIGHT_SAMPLE_SPACING, sample_straight, straight_sample_count};
pub use turn::{TURN_SAMPLE_DEGREES, sample_turn, turn_center, turn_sample_count};

use glam::Vec3;
use rainbow_shared::Segment;
use serde::Serialize;
use tracing::{debug, warn};

use crate::frame::Cursor;
use crate::polyline::Polyline;

/// Minimum samples any valid segment emits
pub const MIN_SEGMENT_SAMPLES: usize = 2;

/// One point on the track centerline
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PathSample {
    pub position: Vec3,
    /// Unit tangent
    pub direction: Vec3,
    /// Index of the owning segment; `None` for the start sample
    pub segment: Option<usize>,
}

impl PathSample {
    pub fn cursor(&self) -> Cursor {
        Cursor {
            position: self.position,
            direction: self.direction,
        }
    }
}

/// Samples produced by one segment sampler, plus the cursor it hands on
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRun {
    pub points: Vec<Cursor>,
    pub end: Cursor,
}

impl SegmentRun {
    /// A run that emits nothing and leaves the cursor where it was
    pub fn empty(at: Cursor) -> Self {
        Self {
            points: Vec::new(),
            end: at,
        }
    }
}

/// Sample a single segment from `cursor`
///
/// Unknown or degenerate segments yield an empty run and the cursor is
/// left unchanged, so the next segment continues from the same pose.
pub fn sample_segment(cursor: Cursor, index: usize, segment: &Segment) -> SegmentRun {
    if let Err(defect) = segment.check() {
        warn!(
            "Skipping segment {} ({}): {}",
            index,
            segment.type_name(),
            defect
        );
        return SegmentRun::empty(cursor);
    }

    match segment {
        Segment::Straight(s) => sample_straight(cursor, s.length),
        Segment::Turn(t) => sample_turn(cursor, t.radius, t.angle, t.direction),
        Segment::Unknown => SegmentRun::empty(cursor),
    }
}

/// Build the polyline for `segments` from the canonical start pose
pub fn build_path(segments: &[Segment]) -> Polyline {
    build_path_from(Cursor::START, segments)
}

/// Build the polyline for `segments` from an arbitrary start pose
pub fn build_path_from(start: Cursor, segments: &[Segment]) -> Polyline {
    let mut samples = Vec::with_capacity(1 + segments.len() * 16);
    samples.push(PathSample {
        position: start.position,
        direction: start.direction,
        segment: None,
    });

    let mut cursor = start;
    for (index, segment) in segments.iter().enumerate() {
        let run = sample_segment(cursor, index, segment);
        samples.extend(run.points.iter().map(|p| PathSample {
            position: p.position,
            direction: p.direction,
            segment: Some(index),
        }));
        cursor = run.end;
    }

    debug!(
        "Built path: {} segments, {} samples, ends at {:?}",
        segments.len(),
        samples.len(),
        cursor.position
    );

    let widths = segments.iter().map(|s| s.width().unwrap_or(0.0)).collect();
    Polyline::new(samples, widths, cursor)
}
