//! Course descriptors
//!
//! A course is authored content: an ordered segment list plus
//! checkpoints, a finish anchor and presentation settings that are
//! passed through to the renderer untouched.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_CHECKPOINT_RADIUS, DEFAULT_DIFFICULTY};
use crate::math::Vec3f;
use crate::segment::{Segment, SegmentDefect};

/// Complete course description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 1-5 scale
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default, alias = "startPosition")]
    pub start_position: Vec3f,
    /// Finish line anchor; the end of the track when absent
    #[serde(default, alias = "finishPosition", skip_serializing_if = "Option::is_none")]
    pub finish_position: Option<Vec3f>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub lighting: Lighting,
}

/// Checkpoint ring the player must pass through
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub position: Vec3f,
    #[serde(default = "default_checkpoint_radius")]
    pub radius: f32,
}

/// Scene atmosphere, consumed by the renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default = "default_sky_color", alias = "skyColor")]
    pub sky_color: String,
    #[serde(default = "default_fog_density", alias = "fogDensity")]
    pub fog_density: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centerpiece: Option<Centerpiece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<Particles>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centerpiece {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec3f,
    pub size: f32,
    #[serde(default, alias = "rotationSpeed")]
    pub rotation_speed: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particles {
    pub count: u32,
    pub size: f32,
    /// Color scheme name, or "rainbow"
    pub color: String,
}

/// Scene lighting, consumed by the renderer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient: Option<Light>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directional: Option<Light>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Light>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub color: String,
    pub intensity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3f>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

fn default_checkpoint_radius() -> f32 {
    DEFAULT_CHECKPOINT_RADIUS
}

fn default_sky_color() -> String {
    "#000000".to_string()
}

fn default_fog_density() -> f32 {
    0.02
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            sky_color: default_sky_color(),
            fog_density: default_fog_density(),
            centerpiece: None,
            particles: None,
        }
    }
}

/// A defect found in one segment of a course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseIssue {
    pub segment: usize,
    pub defect: SegmentDefect,
}

impl std::fmt::Display for CourseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "segment {}: {}", self.segment, self.defect)
    }
}

/// Error type for loading course files.
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Failed to read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML course: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON course: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported course file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("No built-in course named '{0}'")]
    UnknownCourse(String),
}

impl Course {
    /// Parse a course from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, CourseError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a course from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, CourseError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a course file, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self, CourseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| CourseError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(CourseError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Every segment defect in the course, in segment order
    pub fn issues(&self) -> Vec<CourseIssue> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(segment, seg)| {
                seg.check()
                    .err()
                    .map(|defect| CourseIssue { segment, defect })
            })
            .collect()
    }

    /// Sum of centerline lengths of all valid segments
    pub fn centerline_length(&self) -> f32 {
        self.segments
            .iter()
            .filter(|s| s.check().is_ok())
            .map(Segment::centerline_length)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::TurnDirection;
    use std::io::Write;

    const MINIMAL_TOML: &str = r#"
name = "Test Loop"

[[segments]]
type = "straight"
length = 100

[[segments]]
type = "turn"
direction = "left"
angle = 90
radius = 40

[[checkpoints]]
position = { x = 0, y = 1, z = -50 }
"#;

    #[test]
    fn test_parse_minimal_toml() {
        let course = Course::from_toml_str(MINIMAL_TOML).unwrap();
        assert_eq!(course.name, "Test Loop");
        assert_eq!(course.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(course.segments.len(), 2);
        assert!(course.finish_position.is_none());
        assert_eq!(course.checkpoints[0].radius, DEFAULT_CHECKPOINT_RADIUS);
        assert_eq!(course.environment, Environment::default());
        assert!(course.issues().is_empty());
    }

    #[test]
    fn test_parse_camel_case_json() {
        let json = r##"{
            "name": "Json Course",
            "startPosition": {"x": 0, "y": 1, "z": 0},
            "finishPosition": {"x": 0, "y": 0, "z": -800},
            "segments": [{"type": "straight", "length": 200, "width": 30}],
            "checkpoints": [],
            "environment": {"skyColor": "#0a001a", "fogDensity": 0.025}
        }"##;
        let course = Course::from_json_str(json).unwrap();
        assert_eq!(course.start_position, Vec3f::new(0.0, 1.0, 0.0));
        assert_eq!(course.finish_position, Some(Vec3f::new(0.0, 0.0, -800.0)));
        assert_eq!(course.environment.sky_color, "#0a001a");
    }

    #[test]
    fn test_issues_report_segment_index() {
        let mut course = Course::from_toml_str(MINIMAL_TOML).unwrap();
        course.segments.insert(1, Segment::Unknown);
        course.segments.push(Segment::turn(40.0, 0.0, TurnDirection::Right, 30.0));

        let issues = course.issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].segment, 1);
        assert_eq!(issues[0].defect, SegmentDefect::UnknownType);
        assert_eq!(issues[1].segment, 3);
        assert_eq!(issues[1].to_string(), "segment 3: turn angle must be in (0, 360] degrees, got 0");
    }

    #[test]
    fn test_centerline_length_skips_defects() {
        let mut course = Course::from_toml_str(MINIMAL_TOML).unwrap();
        course.segments.push(Segment::straight(-10.0, 30.0));
        let expected = 100.0 + 40.0 * std::f32::consts::FRAC_PI_2;
        assert!((course.centerline_length() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("loop.toml");
        std::fs::File::create(&toml_path)
            .unwrap()
            .write_all(MINIMAL_TOML.as_bytes())
            .unwrap();
        assert_eq!(Course::load(&toml_path).unwrap().name, "Test Loop");

        let txt_path = dir.path().join("loop.txt");
        std::fs::write(&txt_path, MINIMAL_TOML).unwrap();
        assert!(matches!(
            Course::load(&txt_path),
            Err(CourseError::UnsupportedFormat(_))
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(Course::load(&missing), Err(CourseError::Io { .. })));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = Course::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, CourseError::Toml(_)));
    }
}
