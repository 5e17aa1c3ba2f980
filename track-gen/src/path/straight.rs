//! Straight-segment sampler (linear interpolation)

use super::{MIN_SEGMENT_SAMPLES, SegmentRun};
use crate::frame::Cursor;

/// Length units between consecutive samples on a straight
pub const STRAIGHT_SAMPLE_SPACING: f32 = 10.0;

/// Samples emitted for a straight of `length`: one per 10 units, at least 2
pub fn straight_sample_count(length: f32) -> usize {
    ((length / STRAIGHT_SAMPLE_SPACING).floor() as usize).max(MIN_SEGMENT_SAMPLES)
}

/// Sample a straight starting at `start`
///
/// Samples sit at `length * i / steps` for `i = 1..=steps`; the heading
/// never changes along a straight.
pub fn sample_straight(start: Cursor, length: f32) -> SegmentRun {
    let steps = straight_sample_count(length);

    let points = (1..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            Cursor {
                position: start.ahead(length * t),
                direction: start.direction,
            }
        })
        .collect();

    SegmentRun {
        points,
        end: Cursor {
            position: start.ahead(length),
            direction: start.direction,
        },
    }
}
