//! Track centerline and path-relative queries
//!
//! The polyline is rebuilt wholesale for every generation and never mutated
//! afterwards. Boundary checks are path-relative: a point is on the track
//! when its lateral distance from the nearest centerline chord is within
//! half the owning segment's width.

use std::ops::Range;

use glam::Vec3;
use serde::Serialize;

use crate::frame::{Cursor, right_of};
use crate::path::PathSample;

/// Ordered centerline samples for one loaded course
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    samples: Vec<PathSample>,
    /// Track width per course segment (0 for unknown segments)
    widths: Vec<f32>,
    /// Cursor after the final segment
    end: Cursor,
    #[serde(skip)]
    ranges: Vec<Range<usize>>,
}

/// Closest centerline point to a query position
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CenterlineHit {
    /// Index of the chord's end sample
    pub sample: usize,
    pub segment: Option<usize>,
    pub closest: Vec3,
    /// Unit chord direction at the hit
    pub direction: Vec3,
    /// Signed distance from the centerline, positive to the right of travel
    pub lateral_offset: f32,
    /// Distance travelled along the polyline to the hit
    pub distance_along: f32,
}

impl Polyline {
    pub(crate) fn new(samples: Vec<PathSample>, widths: Vec<f32>, end: Cursor) -> Self {
        let mut ranges = vec![0..0; widths.len()];
        let mut i = 0;
        while i < samples.len() {
            let Some(owner) = samples[i].segment else {
                i += 1;
                continue;
            };
            let start = i;
            while i < samples.len() && samples[i].segment == Some(owner) {
                i += 1;
            }
            if let Some(range) = ranges.get_mut(owner) {
                *range = start..i;
            }
        }

        Self {
            samples,
            widths,
            end,
            ranges,
        }
    }

    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Final sample (the start sample for an empty course)
    pub fn last(&self) -> &PathSample {
        // The start sample is always present
        &self.samples[self.samples.len() - 1]
    }

    /// Cursor handed on by the final segment
    pub fn end(&self) -> Cursor {
        self.end
    }

    /// Number of course segments the polyline was built from
    pub fn segment_count(&self) -> usize {
        self.widths.len()
    }

    /// Track width of a segment, if known
    pub fn width_of(&self, segment: usize) -> Option<f32> {
        self.widths.get(segment).copied().filter(|w| *w > 0.0)
    }

    /// Samples owned by `segment` (empty for skipped or out-of-range segments)
    pub fn segment_samples(&self, segment: usize) -> &[PathSample] {
        self.ranges
            .get(segment)
            .map(|r| &self.samples[r.clone()])
            .unwrap_or(&[])
    }

    /// Total centerline length over all samples
    pub fn total_length(&self) -> f32 {
        sampled_length(&self.samples)
    }

    /// Closest point on the centerline to `point`
    pub fn nearest(&self, point: Vec3) -> Option<CenterlineHit> {
        if self.samples.len() == 1 {
            let only = &self.samples[0];
            return Some(CenterlineHit {
                sample: 0,
                segment: only.segment,
                closest: only.position,
                direction: only.direction,
                lateral_offset: (point - only.position).dot(right_of(only.direction)),
                distance_along: 0.0,
            });
        }

        let mut best: Option<(f32, CenterlineHit)> = None;
        let mut travelled = 0.0;

        for (i, pair) in self.samples.windows(2).enumerate() {
            let (a, b) = (&pair[0], &pair[1]);
            let chord = b.position - a.position;
            let chord_len = chord.length();

            let (t, direction) = if chord_len > f32::EPSILON {
                let t = ((point - a.position).dot(chord) / (chord_len * chord_len)).clamp(0.0, 1.0);
                (t, chord / chord_len)
            } else {
                (0.0, b.direction)
            };

            let closest = a.position + chord * t;
            let distance = closest.distance_squared(point);

            if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                best = Some((
                    distance,
                    CenterlineHit {
                        sample: i + 1,
                        segment: b.segment,
                        closest,
                        direction,
                        lateral_offset: (point - closest).dot(right_of(direction)),
                        distance_along: travelled + chord_len * t,
                    },
                ));
            }
            travelled += chord_len;
        }

        best.map(|(_, hit)| hit)
    }

    /// Path-relative boundary check
    ///
    /// True when `point` is within half the owning segment's width of the
    /// centerline. Points nearest to a skipped segment are out of bounds.
    pub fn is_within_bounds(&self, point: Vec3) -> bool {
        self.nearest(point)
            .and_then(|hit| {
                let width = self.width_of(hit.segment?)?;
                Some(hit.lateral_offset.abs() <= width * 0.5)
            })
            .unwrap_or(false)
    }

    /// Centerline height below/above `point`
    pub fn height_at(&self, point: Vec3) -> Option<f32> {
        self.nearest(point).map(|hit| hit.closest.y)
    }
}

/// Sum of distances between consecutive samples
pub fn sampled_length(samples: &[PathSample]) -> f32 {
    samples
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .sum()
}

/// Interpolate a pose at fraction `t` of the sampled arc length
///
/// Position and direction are interpolated linearly between the two
/// samples that bracket the target distance; the direction is renormalized.
/// Returns `None` for an empty slice.
pub fn point_along(samples: &[PathSample], t: f32) -> Option<Cursor> {
    let first = samples.first()?;
    let last = samples.last()?;

    if samples.len() < 2 || t <= 0.0 {
        return Some(first.cursor());
    }
    if t >= 1.0 {
        return Some(last.cursor());
    }

    let lengths: Vec<f32> = samples
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .collect();
    let target = lengths.iter().sum::<f32>() * t;

    let mut covered = 0.0;
    for (i, len) in lengths.iter().enumerate() {
        if covered + len >= target {
            let local = if *len > 0.0 { (target - covered) / len } else { 0.0 };
            let (a, b) = (&samples[i], &samples[i + 1]);
            return Some(Cursor::new(
                a.position.lerp(b.position, local),
                a.direction.lerp(b.direction, local),
            ));
        }
        covered += len;
    }

    Some(last.cursor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::build_path;
    use rainbow_shared::{Segment, TurnDirection};

    const EPS: f32 = 1e-3;

    fn straight_course() -> Polyline {
        build_path(&[Segment::straight(100.0, 30.0), Segment::straight(100.0, 20.0)])
    }

    #[test]
    fn test_segment_ranges() {
        let polyline = straight_course();
        assert_eq!(polyline.segment_count(), 2);
        assert_eq!(polyline.segment_samples(0).len(), 10);
        assert_eq!(polyline.segment_samples(1).len(), 10);
        assert!(polyline.segment_samples(2).is_empty());
        assert!(polyline.segment_samples(0).iter().all(|s| s.segment == Some(0)));
    }

    #[test]
    fn test_total_length() {
        assert!((straight_course().total_length() - 200.0).abs() < EPS);

        let turn = build_path(&[Segment::turn(40.0, 90.0, TurnDirection::Left, 30.0)]);
        let arc = 40.0 * std::f32::consts::FRAC_PI_2;
        // Chords slightly undercut the true arc
        assert!(turn.total_length() < arc);
        assert!(turn.total_length() > arc * 0.99);
    }

    #[test]
    fn test_nearest_lateral_offset_sign() {
        let polyline = straight_course();
        let right = polyline.nearest(Vec3::new(5.0, 0.0, -50.0)).unwrap();
        assert!((right.lateral_offset - 5.0).abs() < EPS);
        assert!((right.distance_along - 50.0).abs() < EPS);
        assert_eq!(right.segment, Some(0));

        let left = polyline.nearest(Vec3::new(-7.0, 0.0, -150.0)).unwrap();
        assert!((left.lateral_offset + 7.0).abs() < EPS);
        assert_eq!(left.segment, Some(1));
    }

    #[test]
    fn test_bounds_use_owning_segment_width() {
        let polyline = straight_course();
        // Segment 0 is 30 wide, segment 1 is 20 wide
        assert!(polyline.is_within_bounds(Vec3::new(14.0, 0.0, -50.0)));
        assert!(!polyline.is_within_bounds(Vec3::new(16.0, 0.0, -50.0)));
        assert!(!polyline.is_within_bounds(Vec3::new(14.0, 0.0, -150.0)));
        assert!(polyline.is_within_bounds(Vec3::new(-9.0, 0.0, -150.0)));
    }

    #[test]
    fn test_bounds_follow_turns() {
        // After a right quarter turn the track runs along +X at z = -40
        let polyline = build_path(&[
            Segment::turn(40.0, 90.0, TurnDirection::Right, 30.0),
            Segment::straight(100.0, 30.0),
        ]);
        assert!(polyline.is_within_bounds(Vec3::new(90.0, 0.0, -40.0)));
        assert!(polyline.is_within_bounds(Vec3::new(90.0, 0.0, -52.0)));
        assert!(!polyline.is_within_bounds(Vec3::new(90.0, 0.0, -60.0)));
        // An axis-aligned |x| check would wrongly reject this on-track point
        assert!(polyline.is_within_bounds(Vec3::new(120.0, 0.0, -40.0)));
    }

    #[test]
    fn test_height_at() {
        let polyline = straight_course();
        assert_eq!(polyline.height_at(Vec3::new(0.0, 7.0, -20.0)), Some(0.0));
    }

    #[test]
    fn test_single_sample_polyline() {
        let polyline = build_path(&[]);
        let hit = polyline.nearest(Vec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(hit.segment, None);
        assert!((hit.lateral_offset - 3.0).abs() < EPS);
        assert!(!polyline.is_within_bounds(Vec3::ZERO));
    }

    #[test]
    fn test_point_along_endpoints_and_middle() {
        let polyline = straight_course();
        let samples = polyline.segment_samples(0);

        let start = point_along(samples, 0.0).unwrap();
        assert_eq!(start.position, samples[0].position);

        let end = point_along(samples, 1.0).unwrap();
        assert_eq!(end.position, samples[samples.len() - 1].position);

        // Owned samples span z = -10..-100, so the midpoint is z = -55
        let mid = point_along(samples, 0.5).unwrap();
        assert!((mid.position - Vec3::new(0.0, 0.0, -55.0)).length() < EPS);
        assert!((mid.direction - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_point_along_empty() {
        assert!(point_along(&[], 0.5).is_none());
    }
}
