//! Generator configuration (~/.config/RainbowRacer/config.toml)
//!
//! Holds the tunable placement constants. Every field has a default, so a
//! partial file (or no file at all) is always valid.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use rainbow_shared::constants::DEFAULT_COLOR_SCHEME;
use rainbow_shared::{ColorSchemes, Rgb};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Error loading a generator configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid generator config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("color scheme '{0}' is empty")]
    EmptyScheme(String),
    #[error("default color scheme '{0}' is not defined")]
    UnknownDefaultScheme(String),
}

/// Generator configuration.
///
/// Serialized to/from TOML, one table per concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Road surface settings
    #[serde(default)]
    pub road: RoadConfig,
    /// Boundary wall and warning stripe settings
    #[serde(default)]
    pub boundary: BoundaryConfig,
    /// Side decoration settings
    #[serde(default)]
    pub decorations: DecorationConfig,
    /// Obstacle, boost pad, checkpoint and finish line visuals
    #[serde(default)]
    pub features: FeatureConfig,
    /// Extra named color schemes (override built-ins of the same name)
    #[serde(default)]
    pub palettes: HashMap<String, Vec<Rgb>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadConfig {
    /// Scheme used when a segment names none, or an unknown one (default: rainbow1)
    #[serde(default = "default_color_scheme")]
    pub default_color_scheme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Wall height (default: 5)
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    /// Wall thickness (default: 0.5)
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
    /// Wall opacity (default: 0.2)
    #[serde(default = "default_wall_opacity")]
    pub wall_opacity: f32,
    #[serde(default = "default_wall_color")]
    pub wall_color: Rgb,
    /// Warning stripe width (default: 0.5)
    #[serde(default = "default_stripe_width")]
    pub stripe_width: f32,
    /// Distance between warning stripes along the edge (default: 4)
    #[serde(default = "default_stripe_spacing")]
    pub stripe_spacing: f32,
    #[serde(default = "default_stripe_color")]
    pub stripe_color: Rgb,
    /// How far stripes sit below the centerline (default: 0.9)
    #[serde(default = "default_surface_drop")]
    pub stripe_drop: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationConfig {
    /// Sampled length per decoration (default: 20)
    #[serde(default = "default_decoration_spacing")]
    pub spacing: f32,
    /// Distance inside the track edge (default: 2)
    #[serde(default = "default_edge_inset")]
    pub edge_inset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Obstacle box height (default: 5)
    #[serde(default = "default_obstacle_height")]
    pub obstacle_height: f32,
    /// Obstacle box depth (default: 2)
    #[serde(default = "default_obstacle_depth")]
    pub obstacle_depth: f32,
    #[serde(default = "default_obstacle_color")]
    pub obstacle_color: Rgb,
    /// Boost pad width across the track (default: 15)
    #[serde(default = "default_boost_pad_width")]
    pub boost_pad_width: f32,
    #[serde(default = "default_marker_color")]
    pub boost_pad_color: Rgb,
    /// Checkpoint ring tube radius (default: 0.5)
    #[serde(default = "default_ring_tube")]
    pub checkpoint_tube: f32,
    #[serde(default = "default_marker_color")]
    pub checkpoint_color: Rgb,
    /// Finish line plane width (default: 30)
    #[serde(default = "default_finish_width")]
    pub finish_width: f32,
    /// Finish line plane depth (default: 10)
    #[serde(default = "default_finish_depth")]
    pub finish_depth: f32,
    /// Checker squares per side (default: 8)
    #[serde(default = "default_finish_checks")]
    pub finish_checks: u32,
    /// How far boost pads and the finish line sit below the centerline (default: 0.9)
    #[serde(default = "default_surface_drop")]
    pub surface_drop: f32,
}

fn default_color_scheme() -> String {
    DEFAULT_COLOR_SCHEME.to_string()
}

fn default_wall_height() -> f32 {
    5.0
}
fn default_wall_thickness() -> f32 {
    0.5
}
fn default_wall_opacity() -> f32 {
    0.2
}
fn default_wall_color() -> Rgb {
    0xffffff
}
fn default_stripe_width() -> f32 {
    0.5
}
fn default_stripe_spacing() -> f32 {
    4.0
}
fn default_stripe_color() -> Rgb {
    0xff0000
}
fn default_surface_drop() -> f32 {
    0.9
}

fn default_decoration_spacing() -> f32 {
    20.0
}
fn default_edge_inset() -> f32 {
    2.0
}

fn default_obstacle_height() -> f32 {
    5.0
}
fn default_obstacle_depth() -> f32 {
    2.0
}
fn default_obstacle_color() -> Rgb {
    0xff0000
}
fn default_boost_pad_width() -> f32 {
    15.0
}
fn default_marker_color() -> Rgb {
    0x00ffff
}
fn default_ring_tube() -> f32 {
    0.5
}
fn default_finish_width() -> f32 {
    30.0
}
fn default_finish_depth() -> f32 {
    10.0
}
fn default_finish_checks() -> u32 {
    8
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            default_color_scheme: default_color_scheme(),
        }
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            wall_height: default_wall_height(),
            wall_thickness: default_wall_thickness(),
            wall_opacity: default_wall_opacity(),
            wall_color: default_wall_color(),
            stripe_width: default_stripe_width(),
            stripe_spacing: default_stripe_spacing(),
            stripe_color: default_stripe_color(),
            stripe_drop: default_surface_drop(),
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            spacing: default_decoration_spacing(),
            edge_inset: default_edge_inset(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            obstacle_height: default_obstacle_height(),
            obstacle_depth: default_obstacle_depth(),
            obstacle_color: default_obstacle_color(),
            boost_pad_width: default_boost_pad_width(),
            boost_pad_color: default_marker_color(),
            checkpoint_tube: default_ring_tube(),
            checkpoint_color: default_marker_color(),
            finish_width: default_finish_width(),
            finish_depth: default_finish_depth(),
            finish_checks: default_finish_checks(),
            surface_drop: default_surface_drop(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Strictly load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// defines an empty or dangling color scheme.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, _)) = self.palettes.iter().find(|(_, colors)| colors.is_empty()) {
            return Err(ConfigError::EmptyScheme(name.clone()));
        }
        if !self.color_schemes().contains(&self.road.default_color_scheme) {
            return Err(ConfigError::UnknownDefaultScheme(
                self.road.default_color_scheme.clone(),
            ));
        }
        Ok(())
    }

    /// Built-in schemes merged with the configured extras
    pub fn color_schemes(&self) -> ColorSchemes {
        let mut schemes = ColorSchemes::builtin();
        for (name, colors) in &self.palettes {
            if !schemes.insert(name.clone(), colors.clone()) {
                warn!("Ignoring empty color scheme '{}'", name);
            }
        }
        if !schemes.set_default(&self.road.default_color_scheme) {
            warn!(
                "Unknown default color scheme '{}', keeping '{}'",
                self.road.default_color_scheme,
                schemes.default_name()
            );
        }
        schemes
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/RainbowRacer`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.rainbowracer", "", "RainbowRacer")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of the user config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Loads the generator configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> GeneratorConfig {
    let Some(path) = config_path() else {
        return GeneratorConfig::default();
    };
    if !path.exists() {
        return GeneratorConfig::default();
    }
    match GeneratorConfig::load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default generator config: {}", e);
            GeneratorConfig::default()
        }
    }
}
