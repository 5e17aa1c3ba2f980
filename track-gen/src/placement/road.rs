use rainbow_shared::{Rgb, Segment};
use tracing::warn;

use super::PlacementSink;
use crate::artifact::{ArtifactDraft, ArtifactKind, Paint, Pose, Shape};
use crate::mesh::{TrackMesh, generate_road_panel, generate_road_tube};
use crate::path::PathSample;

/// Place the road surface for one segment from its owned samples
///
/// Straights get a flat panel between their endpoint samples, turns a tube
/// swept along their samples. Returns the emitted mesh's triangle count.
pub fn place_road(
    index: usize,
    segment: &Segment,
    samples: &[PathSample],
    palette: &[Rgb],
    sink: &mut dyn PlacementSink,
) -> Option<usize> {
    let mesh: Option<TrackMesh> = match segment {
        Segment::Straight(s) => generate_road_panel(samples, s.width, palette),
        Segment::Turn(t) => generate_road_tube(samples, t.width, palette),
        Segment::Unknown => None,
    };

    let Some(mesh) = mesh else {
        warn!("No road surface for segment {} ({})", index, segment.type_name());
        return None;
    };

    let first = samples.first()?;
    let triangles = mesh.triangle_count();
    sink.emit(
        ArtifactDraft::new(
            ArtifactKind::Road,
            Pose::new(first.position, first.direction),
            Shape::Mesh(mesh),
            Paint::VertexColors,
        )
        .in_segment(index),
    );
    Some(triangles)
}
