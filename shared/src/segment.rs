//! Track segment descriptors
//!
//! A course is an ordered list of segments. Each segment is either a
//! straight or a circular turn, with optional decoration, color scheme,
//! obstacle and boost pad metadata.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOOST_LENGTH, DEFAULT_TRACK_WIDTH, MAX_SEGMENT_LENGTH};
use crate::math::Vec3f;

/// One authored piece of track
///
/// Course files tag segments with `type = "straight" | "turn"`.
/// `"finish"` is accepted as a straight. Any other tag deserializes to
/// [`Segment::Unknown`], which the generator skips without aborting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    #[serde(alias = "finish")]
    Straight(StraightSegment),
    Turn(TurnSegment),
    #[serde(other)]
    Unknown,
}

/// Straight piece of track
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StraightSegment {
    pub length: f32,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(flatten)]
    pub features: SegmentFeatures,
}

/// Circular arc of track
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnSegment {
    pub radius: f32,
    /// Swept angle in degrees (magnitude, 0-360)
    pub angle: f32,
    pub direction: TurnDirection,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(flatten)]
    pub features: SegmentFeatures,
}

/// Which way a turn bends, seen from the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Sweep sign on the turn circle: +1 for left, -1 for right
    pub fn sweep_sign(self) -> f32 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        }
    }
}

/// Optional per-segment metadata
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentFeatures {
    #[serde(default)]
    pub decoration: DecorationKind,
    #[serde(default, alias = "colorScheme", skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obstacles: Vec<Obstacle>,
    #[serde(default, alias = "boost", skip_serializing_if = "Vec::is_empty")]
    pub boost_pads: Vec<BoostPad>,
}

/// Side decoration variant
///
/// Unrecognized tags are kept as [`DecorationKind::Other`] and rendered as
/// the generic default decoration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecorationKind {
    #[default]
    Cones,
    Pillars,
    Crystals,
    NeonLines,
    EnergyRings,
    Other(String),
}

impl DecorationKind {
    pub fn as_str(&self) -> &str {
        match self {
            DecorationKind::Cones => "cones",
            DecorationKind::Pillars => "pillars",
            DecorationKind::Crystals => "crystals",
            DecorationKind::NeonLines => "neon_lines",
            DecorationKind::EnergyRings => "energy_rings",
            DecorationKind::Other(tag) => tag,
        }
    }
}

impl From<String> for DecorationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "cones" => DecorationKind::Cones,
            "pillars" => DecorationKind::Pillars,
            "crystals" => DecorationKind::Crystals,
            "neon_lines" => DecorationKind::NeonLines,
            "energy_rings" => DecorationKind::EnergyRings,
            _ => DecorationKind::Other(tag),
        }
    }
}

impl From<DecorationKind> for String {
    fn from(kind: DecorationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Author-placed obstacle (absolute world position)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(default = "default_obstacle_kind", rename = "type")]
    pub kind: String,
    pub position: Vec3f,
    pub width: f32,
}

/// Author-placed boost pad (absolute world position)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoostPad {
    pub position: Vec3f,
    #[serde(default = "default_boost_length")]
    pub length: f32,
}

fn default_width() -> f32 {
    DEFAULT_TRACK_WIDTH
}

fn default_obstacle_kind() -> String {
    "barrier".to_string()
}

fn default_boost_length() -> f32 {
    DEFAULT_BOOST_LENGTH
}

/// Reason a segment cannot be synthesized
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentDefect {
    #[error("unknown segment type")]
    UnknownType,

    #[error("straight length must be positive and finite, got {0}")]
    InvalidLength(f32),

    #[error("turn radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("turn angle must be in (0, 360] degrees, got {0}")]
    InvalidAngle(f32),

    #[error("width must be positive and finite, got {0}")]
    InvalidWidth(f32),

    #[error("centerline length {0} exceeds the {max} unit limit", max = MAX_SEGMENT_LENGTH)]
    TooLong(f32),
}

impl Segment {
    /// Convenience constructor for a straight with default metadata
    pub fn straight(length: f32, width: f32) -> Self {
        Segment::Straight(StraightSegment {
            length,
            width,
            features: SegmentFeatures::default(),
        })
    }

    /// Convenience constructor for a turn with default metadata
    pub fn turn(radius: f32, angle: f32, direction: TurnDirection, width: f32) -> Self {
        Segment::Turn(TurnSegment {
            radius,
            angle,
            direction,
            width,
            features: SegmentFeatures::default(),
        })
    }

    /// Attach metadata, builder-style (no-op on unknown segments)
    pub fn with_features(mut self, features: SegmentFeatures) -> Self {
        match &mut self {
            Segment::Straight(s) => s.features = features,
            Segment::Turn(t) => t.features = features,
            Segment::Unknown => {}
        }
        self
    }

    /// Tag name as written in course files
    pub fn type_name(&self) -> &'static str {
        match self {
            Segment::Straight(_) => "straight",
            Segment::Turn(_) => "turn",
            Segment::Unknown => "unknown",
        }
    }

    /// Track width, if the segment is known
    pub fn width(&self) -> Option<f32> {
        match self {
            Segment::Straight(s) => Some(s.width),
            Segment::Turn(t) => Some(t.width),
            Segment::Unknown => None,
        }
    }

    /// Optional metadata, if the segment is known
    pub fn features(&self) -> Option<&SegmentFeatures> {
        match self {
            Segment::Straight(s) => Some(&s.features),
            Segment::Turn(t) => Some(&t.features),
            Segment::Unknown => None,
        }
    }

    /// Centerline length: straight length or turn arc length
    pub fn centerline_length(&self) -> f32 {
        match self {
            Segment::Straight(s) => s.length,
            Segment::Turn(t) => t.radius * t.angle.to_radians(),
            Segment::Unknown => 0.0,
        }
    }

    /// Validate the segment's geometric parameters
    pub fn check(&self) -> Result<(), SegmentDefect> {
        let width = match self {
            Segment::Straight(s) => {
                if !(s.length.is_finite() && s.length > 0.0) {
                    return Err(SegmentDefect::InvalidLength(s.length));
                }
                s.width
            }
            Segment::Turn(t) => {
                if !(t.radius.is_finite() && t.radius > 0.0) {
                    return Err(SegmentDefect::InvalidRadius(t.radius));
                }
                if !(t.angle.is_finite() && t.angle > 0.0 && t.angle <= 360.0) {
                    return Err(SegmentDefect::InvalidAngle(t.angle));
                }
                t.width
            }
            Segment::Unknown => return Err(SegmentDefect::UnknownType),
        };

        if !(width.is_finite() && width > 0.0) {
            return Err(SegmentDefect::InvalidWidth(width));
        }
        let length = self.centerline_length();
        if length > MAX_SEGMENT_LENGTH {
            return Err(SegmentDefect::TooLong(length));
        }
        Ok(())
    }
}
