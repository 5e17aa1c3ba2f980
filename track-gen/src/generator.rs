//! Track generator lifecycle
//!
//! `generate_track` always tears down the previous track first, so at most
//! one generation's artifacts exist at a time. Generation is synchronous
//! and never fails: bad segments degrade to gaps in the track.

use rainbow_shared::{ColorSchemes, Course};
use tracing::{debug, info};

use crate::artifact::{
    ArtifactKind, BoostPadAnchor, CheckpointAnchor, FeatureAnchor, FinishLineAnchor,
    ObstacleAnchor, TrackArtifact,
};
use crate::config::GeneratorConfig;
use crate::path::build_path;
use crate::placement::FeaturePlacer;
use crate::polyline::Polyline;
use crate::registry::{DetachedScene, Registry, Scene};

/// Procedural track generator
///
/// Owns the artifacts of the currently loaded course. The scene receives
/// every artifact on creation and again on teardown.
pub struct TrackGenerator<S: Scene = DetachedScene> {
    config: GeneratorConfig,
    schemes: ColorSchemes,
    registry: Registry<S>,
}

impl TrackGenerator<DetachedScene> {
    /// Generator without a rendering collaborator
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_scene(config, DetachedScene)
    }
}

impl Default for TrackGenerator<DetachedScene> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<S: Scene> TrackGenerator<S> {
    pub fn with_scene(config: GeneratorConfig, scene: S) -> Self {
        let schemes = config.color_schemes();
        Self {
            config,
            schemes,
            registry: Registry::new(scene),
        }
    }

    /// Build the course's centerline and every artifact along it
    ///
    /// Returns the polyline so callers can run boundary and height
    /// queries against it for as long as the course stays loaded.
    pub fn generate_track(&mut self, course: &Course) -> Polyline {
        self.clear_track();

        let polyline = build_path(&course.segments);
        FeaturePlacer::new(&self.config, &self.schemes).place(
            course,
            &polyline,
            &mut self.registry,
        );

        info!(
            "Generated '{}': {} segments, {} samples, {:.1} units, {} artifacts, {} anchors",
            course.name,
            course.segments.len(),
            polyline.len(),
            polyline.total_length(),
            self.registry.artifacts().len(),
            self.registry.anchors().len()
        );
        for kind in ArtifactKind::ALL {
            debug!("  {}: {}", kind.as_str(), self.registry.count_of(kind));
        }

        polyline
    }

    /// Release every artifact of the current track
    ///
    /// Returns the number of artifacts released.
    pub fn clear_track(&mut self) -> usize {
        let released = self.registry.clear();
        if released > 0 {
            debug!("Cleared {} track artifacts", released);
        }
        released
    }

    pub fn on_obstacle_created(&mut self, callback: impl FnMut(&ObstacleAnchor) + 'static) {
        self.registry.callbacks.obstacle = Some(Box::new(callback));
    }

    pub fn on_boost_pad_created(&mut self, callback: impl FnMut(&BoostPadAnchor) + 'static) {
        self.registry.callbacks.boost_pad = Some(Box::new(callback));
    }

    pub fn on_checkpoint_created(&mut self, callback: impl FnMut(&CheckpointAnchor) + 'static) {
        self.registry.callbacks.checkpoint = Some(Box::new(callback));
    }

    pub fn on_finish_line_created(&mut self, callback: impl FnMut(&FinishLineAnchor) + 'static) {
        self.registry.callbacks.finish_line = Some(Box::new(callback));
    }

    pub fn artifacts(&self) -> &[TrackArtifact] {
        self.registry.artifacts()
    }

    pub fn anchors(&self) -> &[FeatureAnchor] {
        self.registry.anchors()
    }

    pub fn count_of(&self, kind: ArtifactKind) -> usize {
        self.registry.count_of(kind)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn color_schemes(&self) -> &ColorSchemes {
        &self.schemes
    }

    pub fn scene(&self) -> &S {
        self.registry.scene()
    }

    pub fn scene_mut(&mut self) -> &mut S {
        self.registry.scene_mut()
    }
}
