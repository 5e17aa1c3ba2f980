//! Centralized constants for course descriptors.
//!
//! Single source of truth for the defaults applied when a course file
//! leaves optional fields out.

/// Track width used when a segment omits `width`.
pub const DEFAULT_TRACK_WIDTH: f32 = 30.0;

/// Color scheme used when a segment omits `color_scheme` or names an
/// unknown one.
pub const DEFAULT_COLOR_SCHEME: &str = "rainbow1";

/// Boost pad length used when a boost pad omits `length`.
pub const DEFAULT_BOOST_LENGTH: f32 = 20.0;

/// Checkpoint trigger radius used when a checkpoint omits `radius`.
pub const DEFAULT_CHECKPOINT_RADIUS: f32 = 5.0;

/// Difficulty assigned to courses that do not rate themselves (1-5 scale).
pub const DEFAULT_DIFFICULTY: u8 = 1;

/// Longest centerline a single segment may span. Longer segments are
/// treated as defective instead of being sampled.
pub const MAX_SEGMENT_LENGTH: f32 = 100_000.0;
