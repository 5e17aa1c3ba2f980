//! Built-in courses shipped with the game
//!
//! Course files live in `shared/courses/` and are embedded at compile time.

use crate::course::{Course, CourseError};

/// (id, TOML source) for each built-in course, in menu order
pub const BUILTIN_COURSES: &[(&str, &str)] = &[
    (
        "rainbow_speedway",
        include_str!("../courses/rainbow_speedway.toml"),
    ),
    ("neon_circuit", include_str!("../courses/neon_circuit.toml")),
];

/// Ids of all built-in courses, in menu order
pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_COURSES.iter().map(|(id, _)| *id)
}

/// Parse a built-in course by id
pub fn builtin_course(id: &str) -> Result<Course, CourseError> {
    let (_, source) = BUILTIN_COURSES
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .ok_or_else(|| CourseError::UnknownCourse(id.to_string()))?;
    Course::from_toml_str(source)
}
