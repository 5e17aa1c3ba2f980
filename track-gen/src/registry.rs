//! Track registry
//!
//! Owns every artifact of the current generation and forwards them to the
//! scene. Anchors are handed to the registered creation callbacks as they
//! arrive.

use crate::artifact::{
    ArtifactDraft, ArtifactId, ArtifactKind, BoostPadAnchor, CheckpointAnchor, FeatureAnchor,
    FinishLineAnchor, ObstacleAnchor, TrackArtifact,
};
use crate::placement::PlacementSink;

/// Rendering collaborator
pub trait Scene {
    /// Called once for every artifact as it is created
    fn attach(&mut self, artifact: &TrackArtifact);

    /// Called on teardown; the scene takes the artifact and releases whatever it built for it
    fn detach(&mut self, artifact: TrackArtifact);
}

/// Scene that draws nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedScene;

impl Scene for DetachedScene {
    fn attach(&mut self, _artifact: &TrackArtifact) {}

    fn detach(&mut self, _artifact: TrackArtifact) {}
}

pub type Callback<T> = Box<dyn FnMut(&T)>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub obstacle: Option<Callback<ObstacleAnchor>>,
    pub boost_pad: Option<Callback<BoostPadAnchor>>,
    pub checkpoint: Option<Callback<CheckpointAnchor>>,
    pub finish_line: Option<Callback<FinishLineAnchor>>,
}

pub struct Registry<S> {
    scene: S,
    artifacts: Vec<TrackArtifact>,
    anchors: Vec<FeatureAnchor>,
    pub(crate) callbacks: Callbacks,
    next_id: u32,
}

impl<S: Scene> Registry<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            artifacts: Vec::new(),
            anchors: Vec::new(),
            callbacks: Callbacks::default(),
            next_id: 0,
        }
    }

    pub fn artifacts(&self) -> &[TrackArtifact] {
        &self.artifacts
    }

    pub fn anchors(&self) -> &[FeatureAnchor] {
        &self.anchors
    }

    pub fn get(&self, id: ArtifactId) -> Option<&TrackArtifact> {
        self.artifacts.iter().find(|a| a.id == id)
    }

    pub fn count_of(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind() == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty() && self.anchors.is_empty()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Detach every artifact and drop every anchor
    ///
    /// Returns the number of artifacts released. Safe to call repeatedly.
    pub fn clear(&mut self) -> usize {
        let released = self.artifacts.len();
        for artifact in self.artifacts.drain(..) {
            self.scene.detach(artifact);
        }
        self.anchors.clear();
        self.next_id = 0;
        released
    }
}

impl<S: Scene> PlacementSink for Registry<S> {
    fn emit(&mut self, draft: ArtifactDraft) -> ArtifactId {
        let id = ArtifactId(self.next_id);
        self.next_id += 1;

        let artifact = TrackArtifact { id, draft };
        self.scene.attach(&artifact);
        self.artifacts.push(artifact);
        id
    }

    fn anchor(&mut self, anchor: FeatureAnchor) {
        let callbacks = &mut self.callbacks;
        match &anchor {
            FeatureAnchor::Obstacle(a) => {
                if let Some(cb) = callbacks.obstacle.as_mut() {
                    cb(a);
                }
            }
            FeatureAnchor::BoostPad(a) => {
                if let Some(cb) = callbacks.boost_pad.as_mut() {
                    cb(a);
                }
            }
            FeatureAnchor::Checkpoint(a) => {
                if let Some(cb) = callbacks.checkpoint.as_mut() {
                    cb(a);
                }
            }
            FeatureAnchor::FinishLine(a) => {
                if let Some(cb) = callbacks.finish_line.as_mut() {
                    cb(a);
                }
            }
        }
        self.anchors.push(anchor);
    }
}
