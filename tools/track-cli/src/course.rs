//! Course lookup shared by every command

use std::path::Path;

use anyhow::{Context, Result};
use rainbow_shared::{Course, builtin_course, builtin_ids};
use track_gen::GeneratorConfig;

/// Resolve a built-in id or a course file path
pub fn resolve_course(name_or_path: &str) -> Result<Course> {
    if builtin_ids().any(|id| id == name_or_path) {
        return builtin_course(name_or_path)
            .with_context(|| format!("Failed to load built-in course '{name_or_path}'"));
    }

    let path = Path::new(name_or_path);
    if !path.exists() {
        let known: Vec<&str> = builtin_ids().collect();
        anyhow::bail!(
            "'{}' is neither a built-in course ({}) nor an existing file",
            name_or_path,
            known.join(", ")
        );
    }
    Course::load(path).with_context(|| format!("Failed to load course {}", path.display()))
}

/// Explicit config file, or the user config (defaults when absent)
pub fn resolve_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load_from(path)
            .with_context(|| format!("Failed to load generator config {}", path.display())),
        None => Ok(track_gen::config::load()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_builtin() {
        let course = resolve_course("neon_circuit").unwrap();
        assert_eq!(course.name, "Neon Circuit");
    }

    #[test]
    fn test_resolve_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "name = \"Tiny\"\n[[segments]]\ntype = \"straight\"\nlength = 20\nwidth = 30"
        )
        .unwrap();
        let course = resolve_course(file.path().to_str().unwrap()).unwrap();
        assert_eq!(course.segments.len(), 1);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve_course("no_such_course").unwrap_err();
        assert!(err.to_string().contains("rainbow_speedway"));
    }

    #[test]
    fn test_resolve_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[boundary]\nwall_height = 7.0").unwrap();
        let config = resolve_config(Some(file.path())).unwrap();
        assert_eq!(config.boundary.wall_height, 7.0);
    }
}
