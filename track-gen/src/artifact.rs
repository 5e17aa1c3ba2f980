//! Generated track artifacts and gameplay anchors
//!
//! Artifacts are renderer-agnostic descriptions: a pose, a shape and a
//! paint. The scene collaborator turns them into whatever it draws with.

use std::fmt;

use glam::Vec3;
use rainbow_shared::Rgb;
use serde::Serialize;

use crate::mesh::TrackMesh;

/// Registry-assigned artifact handle, unique within one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ArtifactId(pub u32);

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Road,
    Wall,
    WarningStripe,
    Decoration,
    Obstacle,
    BoostPad,
    Checkpoint,
    FinishLine,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 8] = [
        ArtifactKind::Road,
        ArtifactKind::Wall,
        ArtifactKind::WarningStripe,
        ArtifactKind::Decoration,
        ArtifactKind::Obstacle,
        ArtifactKind::BoostPad,
        ArtifactKind::Checkpoint,
        ArtifactKind::FinishLine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Road => "road",
            ArtifactKind::Wall => "wall",
            ArtifactKind::WarningStripe => "warning_stripe",
            ArtifactKind::Decoration => "decoration",
            ArtifactKind::Obstacle => "obstacle",
            ArtifactKind::BoostPad => "boost_pad",
            ArtifactKind::Checkpoint => "checkpoint",
            ArtifactKind::FinishLine => "finish_line",
        }
    }
}

/// World placement of an artifact
///
/// `forward` is the shape's local +Z axis on the XZ plane. For rings it is
/// the ring axis instead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }
}

/// Geometry of an artifact, in local units around its pose
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// World-space mesh; the pose is informational
    Mesh(TrackMesh),
    /// Box of `size` = (lateral, height, along forward)
    Box { size: Vec3 },
    /// Flat rectangle on the ground
    Plane { width: f32, length: f32 },
    Cone { radius: f32, height: f32, sides: u32 },
    Cylinder { radius: f32, height: f32 },
    /// Octahedron scaled by `stretch_y` vertically
    Octahedron { radius: f32, stretch_y: f32 },
    Torus { radius: f32, tube: f32 },
}

/// Surface coloring of an artifact
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Colors are baked into the mesh
    VertexColors,
    Solid {
        color: Rgb,
        opacity: f32,
        emissive: f32,
    },
    /// Palette split into equal bands from bottom to top
    HeightBands { palette: Vec<Rgb> },
    /// Alternating squares, `squares` per side
    Checker { squares: u32, colors: [Rgb; 2] },
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid {
            color,
            opacity: 1.0,
            emissive: 0.0,
        }
    }
}

/// An artifact before the registry has assigned it an id
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtifactDraft {
    pub kind: ArtifactKind,
    /// Owning segment, if the artifact belongs to one
    pub segment: Option<usize>,
    pub pose: Pose,
    pub shape: Shape,
    pub paint: Paint,
}

impl ArtifactDraft {
    pub fn new(kind: ArtifactKind, pose: Pose, shape: Shape, paint: Paint) -> Self {
        Self {
            kind,
            segment: None,
            pose,
            shape,
            paint,
        }
    }

    pub fn in_segment(mut self, segment: usize) -> Self {
        self.segment = Some(segment);
        self
    }
}

/// A generated artifact owned by the registry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackArtifact {
    pub id: ArtifactId,
    #[serde(flatten)]
    pub draft: ArtifactDraft,
}

impl TrackArtifact {
    pub fn kind(&self) -> ArtifactKind {
        self.draft.kind
    }

    pub fn segment(&self) -> Option<usize> {
        self.draft.segment
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObstacleAnchor {
    pub kind: String,
    /// Author-specified position (ground level)
    pub position: Vec3,
    pub width: f32,
    pub segment: usize,
    pub artifact: ArtifactId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoostPadAnchor {
    pub position: Vec3,
    pub length: f32,
    pub width: f32,
    pub segment: usize,
    pub artifact: ArtifactId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckpointAnchor {
    /// Order in the course's checkpoint list
    pub index: usize,
    pub position: Vec3,
    pub radius: f32,
    pub artifact: ArtifactId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinishLineAnchor {
    pub position: Vec3,
    pub width: f32,
    pub artifact: ArtifactId,
}

/// Gameplay anchor handed to the game loop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureAnchor {
    Obstacle(ObstacleAnchor),
    BoostPad(BoostPadAnchor),
    Checkpoint(CheckpointAnchor),
    FinishLine(FinishLineAnchor),
}

impl FeatureAnchor {
    pub fn position(&self) -> Vec3 {
        match self {
            FeatureAnchor::Obstacle(a) => a.position,
            FeatureAnchor::BoostPad(a) => a.position,
            FeatureAnchor::Checkpoint(a) => a.position,
            FeatureAnchor::FinishLine(a) => a.position,
        }
    }

    pub fn artifact(&self) -> ArtifactId {
        match self {
            FeatureAnchor::Obstacle(a) => a.artifact,
            FeatureAnchor::BoostPad(a) => a.artifact,
            FeatureAnchor::Checkpoint(a) => a.artifact,
            FeatureAnchor::FinishLine(a) => a.artifact,
        }
    }
}
