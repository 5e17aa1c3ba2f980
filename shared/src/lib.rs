//! Shared types for the Rainbow Racer track generator.
//!
//! Course descriptors are authored content: the generator reads them and
//! never mutates them. This crate holds the descriptor data model, the
//! built-in courses and color schemes, and course file loading.

pub mod builtin;
pub mod constants;
pub mod course;
pub mod math;
pub mod palettes;
pub mod segment;

pub use builtin::{builtin_course, builtin_ids};
pub use course::{Checkpoint, Course, CourseError, CourseIssue, Environment, Lighting};
pub use math::Vec3f;
pub use palettes::{ColorSchemes, Rgb};
pub use segment::{
    BoostPad, DecorationKind, Obstacle, Segment, SegmentDefect, SegmentFeatures,
    StraightSegment, TurnDirection, TurnSegment,
};
