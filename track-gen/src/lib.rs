//! Procedural track generator for Rainbow Racer
//!
//! Turns a course descriptor (an ordered list of straights and turns) into a
//! continuous centerline polyline, then places the road surface, boundary
//! walls, decorations and gameplay features along it.
//!
//! # Example
//! ```no_run
//! use track_gen::{GeneratorConfig, TrackGenerator};
//!
//! let course = rainbow_shared::builtin_course("rainbow_speedway")?;
//! let mut generator = TrackGenerator::new(GeneratorConfig::default());
//! generator.on_checkpoint_created(|cp| println!("checkpoint {} at {}", cp.index, cp.position));
//!
//! let polyline = generator.generate_track(&course);
//! assert!(polyline.is_within_bounds(glam::Vec3::new(0.0, 0.0, -50.0)));
//! # Ok::<(), rainbow_shared::CourseError>(())
//! ```

pub mod artifact;
pub mod config;
pub mod export;
pub mod frame;
pub mod generator;
pub mod mesh;
pub mod path;
pub mod placement;
pub mod polyline;
pub mod registry;

pub use artifact::{
    ArtifactDraft, ArtifactId, ArtifactKind, BoostPadAnchor, CheckpointAnchor, FeatureAnchor,
    FinishLineAnchor, ObstacleAnchor, Paint, Pose, Shape, TrackArtifact,
};
pub use config::{ConfigError, GeneratorConfig};
pub use export::TrackSnapshot;
pub use frame::Cursor;
pub use generator::TrackGenerator;
pub use mesh::{MeshBuilder, TrackMesh};
pub use path::{PathSample, build_path};
pub use polyline::{CenterlineHit, Polyline};
pub use registry::{DetachedScene, Scene};
