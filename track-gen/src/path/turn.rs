//! Turn-segment sampler (circular arc interpolation)
//!
//! The arc center sits `radius` units to the inside of the turn. Angles on
//! the circle use the `atan2(x, z)` convention, so a point at angle `a` is
//! `center + radius * (sin a, 0, cos a)` and its tangent is the same unit
//! vector rotated by a quarter turn in the sweep direction.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rainbow_shared::TurnDirection;

use super::{MIN_SEGMENT_SAMPLES, SegmentRun};
use crate::frame::{Cursor, planar_unit};

/// Degrees of arc between consecutive samples on a turn
pub const TURN_SAMPLE_DEGREES: f32 = 5.0;

/// Samples emitted for a turn of `angle_degrees`: one per 5 degrees, at least 2
pub fn turn_sample_count(angle_degrees: f32) -> usize {
    ((angle_degrees / TURN_SAMPLE_DEGREES).floor() as usize).max(MIN_SEGMENT_SAMPLES)
}

/// Center of the turn circle for a turn starting at `start`
pub fn turn_center(start: Cursor, radius: f32, direction: TurnDirection) -> Vec3 {
    let inward = match direction {
        TurnDirection::Right => start.right(),
        TurnDirection::Left => -start.right(),
    };
    start.position + inward * radius
}

/// Sample a circular turn starting at `start`
///
/// This is a pure angular sweep, so half circles and near-full circles
/// need no special handling. Heights stay at the start height.
pub fn sample_turn(
    start: Cursor,
    radius: f32,
    angle_degrees: f32,
    direction: TurnDirection,
) -> SegmentRun {
    let steps = turn_sample_count(angle_degrees);
    let center = turn_center(start, radius, direction);

    let offset = start.position - center;
    let start_angle = offset.x.atan2(offset.z);

    let sign = direction.sweep_sign();
    let sweep = sign * angle_degrees.to_radians();
    let tangent_shift = sign * FRAC_PI_2;

    let at = |angle: f32| {
        let radial = planar_unit(angle);
        Cursor {
            position: Vec3::new(
                center.x + radius * radial.x,
                start.position.y,
                center.z + radius * radial.z,
            ),
            direction: planar_unit(angle + tangent_shift),
        }
    };

    let points = (1..=steps)
        .map(|i| at(start_angle + sweep * (i as f32 / steps as f32)))
        .collect();

    SegmentRun {
        points,
        end: at(start_angle + sweep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_sample_count_density_and_floor() {
        assert_eq!(turn_sample_count(90.0), 18);
        assert_eq!(turn_sample_count(45.0), 9);
        assert_eq!(turn_sample_count(3.0), 2);
        assert_eq!(turn_sample_count(360.0), 72);
    }

    #[test]
    fn test_right_quarter_turn_closure() {
        let radius = 40.0;
        let run = sample_turn(Cursor::START, radius, 90.0, TurnDirection::Right);

        // Center at (40, 0, 0); quarter sweep lands at (40, 0, -40)
        let expected = Vec3::new(radius, 0.0, -radius);
        assert!((run.end.position - expected).length() < EPS);
        assert!((run.end.position.length() - radius * 2f32.sqrt()).abs() < EPS);

        // Heading rotated clockwise (seen from above) by 90 degrees: -Z -> +X
        assert!(run.end.direction.dot(Cursor::START.direction).abs() < EPS);
        assert!((run.end.direction - Vec3::X).length() < EPS);
    }

    #[test]
    fn test_left_quarter_turn_closure() {
        let run = sample_turn(Cursor::START, 40.0, 90.0, TurnDirection::Left);
        assert!((run.end.position - Vec3::new(-40.0, 0.0, -40.0)).length() < EPS);
        assert!((run.end.direction - Vec3::NEG_X).length() < EPS);
    }

    #[test]
    fn test_samples_stay_on_circle_and_tangent() {
        let start = Cursor::new(Vec3::new(10.0, 2.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        let radius = 35.0;
        let center = turn_center(start, radius, TurnDirection::Left);
        let run = sample_turn(start, radius, 180.0, TurnDirection::Left);

        assert_eq!(run.points.len(), 36);
        for point in &run.points {
            let radial = point.position - center;
            assert!((radial.length() - radius).abs() < EPS);
            assert!(radial.normalize().dot(point.direction).abs() < EPS);
            assert_eq!(point.position.y, 2.0);
        }

        // Half circle reverses heading and lands on the far side of the circle
        assert!((run.end.direction + start.direction).length() < EPS);
        assert!(((run.end.position - start.position).length() - 2.0 * radius).abs() < EPS);
    }

    #[test]
    fn test_full_circle_returns_to_start() {
        let run = sample_turn(Cursor::START, 50.0, 360.0, TurnDirection::Right);
        assert!(run.end.position.length() < 1e-2);
        assert!((run.end.direction - Cursor::START.direction).length() < EPS);
    }

    #[test]
    fn test_first_sample_heading_continues_start_heading() {
        // A tiny first step must bend only slightly away from the start heading
        let run = sample_turn(Cursor::START, 40.0, 90.0, TurnDirection::Right);
        let first = run.points[0];
        assert!(first.direction.dot(Cursor::START.direction) > 0.99);
        assert!(first.position.x > 0.0);
    }

    #[test]
    fn test_tiny_turn_has_two_samples() {
        let run = sample_turn(Cursor::START, 40.0, 3.0, TurnDirection::Left);
        assert_eq!(run.points.len(), 2);
    }
}
