//! Color schemes for road surfaces and decorations
//!
//! A color scheme is an ordered list of `0xRRGGBB` colors. Road surfaces
//! cycle through the scheme along the segment; decorations pick from it
//! by index.

use hashbrown::HashMap;

use crate::constants::DEFAULT_COLOR_SCHEME;

/// Packed `0xRRGGBB` color
pub type Rgb = u32;

const RAINBOW1: &[Rgb] = &[
    0xff0000, 0xff7700, 0xffff00, 0x00ff00, 0x0000ff, 0x8a2be2, 0xff00ff,
];
const RAINBOW2: &[Rgb] = &[
    0xff00ff, 0x8a2be2, 0x0000ff, 0x00ff00, 0xffff00, 0xff7700, 0xff0000,
];
const BLUE_PURPLE: &[Rgb] = &[0x0000ff, 0x4b0082, 0x8a2be2, 0x9400d3, 0x800080];
const FIRE: &[Rgb] = &[0xff0000, 0xff3300, 0xff6600, 0xff9900, 0xffcc00];
const GREEN_CYAN: &[Rgb] = &[0x00ff00, 0x00ff33, 0x00ff66, 0x00ff99, 0x00ffcc];
const YELLOW_ORANGE: &[Rgb] = &[0xffff00, 0xffcc00, 0xff9900, 0xff6600, 0xff3300];
const FINISH: &[Rgb] = &[0xffffff, 0x000000, 0xffffff, 0x000000];

/// Built-in schemes, in declaration order
pub const BUILTIN_SCHEMES: &[(&str, &[Rgb])] = &[
    ("rainbow1", RAINBOW1),
    ("rainbow2", RAINBOW2),
    ("blue_purple", BLUE_PURPLE),
    ("fire", FIRE),
    ("green_cyan", GREEN_CYAN),
    ("yellow_orange", YELLOW_ORANGE),
    ("finish", FINISH),
];

/// Named color scheme registry
///
/// Always contains the built-in schemes; extra schemes can be registered
/// (or built-ins overridden) from generator configuration.
#[derive(Clone, Debug)]
pub struct ColorSchemes {
    schemes: HashMap<String, Vec<Rgb>>,
    default_name: String,
}

impl ColorSchemes {
    /// Registry holding only the built-in schemes
    pub fn builtin() -> Self {
        let schemes = BUILTIN_SCHEMES
            .iter()
            .map(|(name, colors)| (name.to_string(), colors.to_vec()))
            .collect();
        Self {
            schemes,
            default_name: DEFAULT_COLOR_SCHEME.to_string(),
        }
    }

    /// Register or replace a scheme. Empty schemes are ignored.
    pub fn insert(&mut self, name: impl Into<String>, colors: Vec<Rgb>) -> bool {
        if colors.is_empty() {
            return false;
        }
        self.schemes.insert(name.into(), colors);
        true
    }

    /// Change which scheme unknown/missing names resolve to.
    ///
    /// Returns false (and keeps the current default) if `name` is not registered.
    pub fn set_default(&mut self, name: &str) -> bool {
        if self.schemes.contains_key(name) {
            self.default_name = name.to_string();
            true
        } else {
            false
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    /// Look up a scheme by name, without fallback
    pub fn get(&self, name: &str) -> Option<&[Rgb]> {
        self.schemes.get(name).map(Vec::as_slice)
    }

    /// Look up a scheme, falling back to the default scheme
    pub fn resolve(&self, name: Option<&str>) -> &[Rgb] {
        name.and_then(|n| self.get(n))
            .or_else(|| self.get(&self.default_name))
            .unwrap_or(RAINBOW1)
    }

    /// Registered scheme names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ColorSchemes {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick the palette entry for a normalized parameter `t` in `[0, 1]`
///
/// The palette is split into equal bands; `t = 1.0` wraps back to the first band.
pub fn band_color(palette: &[Rgb], t: f32) -> Rgb {
    if palette.is_empty() {
        return 0xffffff;
    }
    let n = palette.len();
    let band = (t.max(0.0) * n as f32).floor() as usize % n;
    palette[band]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_all_schemes() {
        let schemes = ColorSchemes::builtin();
        for (name, _) in BUILTIN_SCHEMES {
            assert!(schemes.contains(name), "missing {}", name);
        }
        assert_eq!(schemes.names().len(), BUILTIN_SCHEMES.len());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let schemes = ColorSchemes::builtin();
        assert_eq!(schemes.resolve(Some("fire")), FIRE);
        assert_eq!(schemes.resolve(Some("nope")), RAINBOW1);
        assert_eq!(schemes.resolve(None), RAINBOW1);
    }

    #[test]
    fn test_insert_and_default_override() {
        let mut schemes = ColorSchemes::builtin();
        assert!(!schemes.insert("empty", vec![]));
        assert!(schemes.insert("mono", vec![0x123456]));
        assert!(schemes.set_default("mono"));
        assert_eq!(schemes.resolve(None), &[0x123456]);
        assert!(!schemes.set_default("missing"));
        assert_eq!(schemes.default_name(), "mono");
    }

    #[test]
    fn test_band_color_cycles() {
        let palette = [1, 2, 3, 4];
        assert_eq!(band_color(&palette, 0.0), 1);
        assert_eq!(band_color(&palette, 0.3), 2);
        assert_eq!(band_color(&palette, 0.99), 4);
        assert_eq!(band_color(&palette, 1.0), 1);
        assert_eq!(band_color(&[], 0.5), 0xffffff);
    }
}
