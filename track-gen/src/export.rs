//! JSON export of a generated track

use std::path::Path;

use serde::Serialize;

use crate::artifact::{FeatureAnchor, TrackArtifact};
use crate::polyline::Polyline;

/// Everything one generation produced, borrowed for serialization
#[derive(Debug, Serialize)]
pub struct TrackSnapshot<'a> {
    pub course: &'a str,
    pub total_length: f32,
    pub polyline: &'a Polyline,
    pub anchors: &'a [FeatureAnchor],
    pub artifacts: &'a [TrackArtifact],
}

impl<'a> TrackSnapshot<'a> {
    pub fn new(
        course: &'a str,
        polyline: &'a Polyline,
        anchors: &'a [FeatureAnchor],
        artifacts: &'a [TrackArtifact],
    ) -> Self {
        Self {
            course,
            total_length: polyline.total_length(),
            polyline,
            anchors,
            artifacts,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the snapshot as pretty JSON, creating parent directories
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = self.to_json_pretty().map_err(std::io::Error::other)?;
        std::fs::write(path, text)
    }
}
