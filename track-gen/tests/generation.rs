//! End-to-end generation tests against the public generator API.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use rainbow_shared::{Course, Segment, builtin_course, builtin_ids};
use track_gen::{
    ArtifactKind, GeneratorConfig, Scene, TrackArtifact, TrackGenerator, build_path,
    placement::decoration_count, polyline::sampled_length,
};

const EPS: f32 = 1e-3;

#[derive(Default)]
struct RecordingScene {
    attached: usize,
    detached: usize,
}

impl Scene for RecordingScene {
    fn attach(&mut self, _artifact: &TrackArtifact) {
        self.attached += 1;
    }

    fn detach(&mut self, _artifact: TrackArtifact) {
        self.detached += 1;
    }
}

const GAPPED_COURSE: &str = r#"
name = "Gapped"

[[segments]]
type = "straight"
length = 100
width = 30

[[segments]]
type = "corkscrew"
length = 60

[[segments]]
type = "straight"
length = 50
width = 30
"#;

#[test]
fn test_regeneration_is_idempotent() {
    let course = builtin_course("rainbow_speedway").unwrap();
    let mut generator = TrackGenerator::with_scene(GeneratorConfig::default(), RecordingScene::default());

    let first = generator.generate_track(&course);
    let first_artifacts = generator.artifacts().to_vec();
    let per_generation = first_artifacts.len();

    let second = generator.generate_track(&course);

    assert_eq!(first, second);
    assert_eq!(generator.artifacts().len(), per_generation);
    assert_eq!(generator.artifacts(), first_artifacts.as_slice());

    // The first generation was fully torn down before the second began
    assert_eq!(generator.scene().detached, per_generation);
    assert_eq!(generator.scene().attached, per_generation * 2);
}

#[test]
fn test_unknown_segment_between_straights() {
    let course = Course::from_toml_str(GAPPED_COURSE).unwrap();
    assert!(matches!(course.segments[1], Segment::Unknown));

    let mut generator = TrackGenerator::new(GeneratorConfig::default());
    let polyline = generator.generate_track(&course);

    assert_eq!(polyline.segment_samples(0).len(), 10);
    assert!(polyline.segment_samples(1).is_empty());
    assert_eq!(polyline.segment_samples(2).len(), 5);

    // Second straight picks up where the first ended
    let resumed = polyline.segment_samples(2)[0].position;
    assert!((resumed - Vec3::new(0.0, 0.0, -110.0)).length() < EPS);
    assert!((polyline.last().position - Vec3::new(0.0, 0.0, -150.0)).length() < EPS);

    // Both straights still get road
    assert_eq!(generator.count_of(ArtifactKind::Road), 2);
    assert!(
        generator
            .artifacts()
            .iter()
            .all(|a| a.segment() != Some(1))
    );
}

#[test]
fn test_decoration_count_matches_sampled_length() {
    for length in [30.0, 100.0, 250.0, 500.0] {
        let mut course = Course::from_toml_str("name = \"Deco\"").unwrap();
        course.segments = vec![Segment::straight(length, 30.0)];

        let mut generator = TrackGenerator::new(GeneratorConfig::default());
        let polyline = generator.generate_track(&course);

        let sampled = sampled_length(polyline.segment_samples(0));
        let expected = ((sampled / 20.0).floor() as usize).max(2);
        assert_eq!(decoration_count(sampled, 20.0), expected);
        // One per side
        assert_eq!(generator.count_of(ArtifactKind::Decoration), expected * 2);
    }
}

#[test]
fn test_all_builtins_generate() {
    for id in builtin_ids() {
        let course = builtin_course(id).unwrap();
        let mut generator = TrackGenerator::new(GeneratorConfig::default());
        let polyline = generator.generate_track(&course);

        let valid = course.segments.iter().filter(|s| s.check().is_ok()).count();
        assert_eq!(generator.count_of(ArtifactKind::Road), valid, "{id}");
        assert_eq!(
            generator.count_of(ArtifactKind::Checkpoint),
            course.checkpoints.len(),
            "{id}"
        );
        assert_eq!(generator.count_of(ArtifactKind::FinishLine), 1, "{id}");
        assert!(generator.count_of(ArtifactKind::Wall) > 0, "{id}");

        // Both built-ins open with a straight down -Z
        assert!(polyline.total_length() > 0.0);
        assert!(polyline.is_within_bounds(Vec3::new(0.0, 0.0, -50.0)), "{id}");
    }
}

#[test]
fn test_callbacks_fire_per_generation() {
    let course = builtin_course("rainbow_speedway").unwrap();
    let mut generator = TrackGenerator::new(GeneratorConfig::default());

    let obstacles = Rc::new(RefCell::new(Vec::new()));
    let boosts = Rc::new(RefCell::new(0));
    let checkpoints = Rc::new(RefCell::new(Vec::new()));
    let finishes = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&obstacles);
    generator.on_obstacle_created(move |a| sink.borrow_mut().push(a.width));
    let sink = Rc::clone(&boosts);
    generator.on_boost_pad_created(move |_| *sink.borrow_mut() += 1);
    let sink = Rc::clone(&checkpoints);
    generator.on_checkpoint_created(move |a| sink.borrow_mut().push(a.index));
    let sink = Rc::clone(&finishes);
    generator.on_finish_line_created(move |a| sink.borrow_mut().push(a.position));

    generator.generate_track(&course);

    assert_eq!(*obstacles.borrow(), vec![10.0, 10.0]);
    assert_eq!(*boosts.borrow(), 1);
    assert_eq!(*checkpoints.borrow(), vec![0, 1, 2, 3, 4]);
    assert_eq!(*finishes.borrow(), vec![Vec3::new(0.0, 0.0, -800.0)]);

    // Anchors point at artifacts the registry actually holds
    for anchor in generator.anchors() {
        assert!(generator.artifacts().iter().any(|a| a.id == anchor.artifact()));
    }

    generator.generate_track(&course);
    assert_eq!(checkpoints.borrow().len(), 10);
}

#[test]
fn test_polyline_matches_standalone_path() {
    let course = builtin_course("neon_circuit").unwrap();
    let mut generator = TrackGenerator::new(GeneratorConfig::default());
    assert_eq!(generator.generate_track(&course), build_path(&course.segments));
}

#[test]
fn test_camel_case_json_course() {
    let json = r#"{
        "name": "Legacy",
        "startPosition": {"x": 0, "y": 1, "z": 0},
        "finishPosition": {"x": 0, "y": 0, "z": -80},
        "segments": [
            {"type": "straight", "length": 80, "width": 30, "colorScheme": "fire",
             "boost": [{"position": {"x": 0, "y": 0, "z": -40}}]},
            {"type": "finish", "length": 20, "width": 30, "decoration": "checkered"}
        ],
        "checkpoints": [{"position": {"x": 0, "y": 1, "z": -40}}]
    }"#;
    let course = Course::from_json_str(json).unwrap();

    let mut generator = TrackGenerator::new(GeneratorConfig::default());
    let polyline = generator.generate_track(&course);

    assert_eq!(generator.count_of(ArtifactKind::Road), 2);
    assert_eq!(generator.count_of(ArtifactKind::BoostPad), 1);
    assert!((polyline.end().position - Vec3::new(0.0, 0.0, -100.0)).length() < EPS);
}
