//! Seven-color palettes and the read-only palette registry
//!
//! Index 0 of every palette is the background tone. Palettes are validated
//! on construction and never change afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::io::configuration::PALETTE_SIZE;
use crate::io::error::{PatternError, Result, invalid_palette};

/// Palettes shipped with the crate
pub const BUILTIN_PALETTES: [(&str, [&str; PALETTE_SIZE]); 6] = [
    (
        "jewel-bazaar",
        [
            "#F7F0E8", "#1B4F72", "#7D3C98", "#117A65", "#B03A2E", "#AF601A", "#5D4037",
        ],
    ),
    (
        "forest-copper",
        [
            "#FBF6EF", "#1E2D24", "#2E6B4F", "#7A8F3A", "#B76E3A", "#6B3E26", "#2A7FAA",
        ],
    ),
    (
        "ocean-coral",
        [
            "#F5FBFF", "#0B3954", "#087E8B", "#BFD7EA", "#FF5A5F", "#C81D25", "#4E8098",
        ],
    ),
    (
        "night-neon",
        [
            "#0A0A0B", "#00E5FF", "#FF2EEA", "#FFD400", "#00FF6A", "#7C4DFF", "#FFFFFF",
        ],
    ),
    (
        "antique-sampler",
        [
            "#FAF5EA", "#2E2A24", "#6C4B3B", "#A77B5A", "#C2A46B", "#6E7F63", "#9B4F4F",
        ],
    ),
    (
        "mono",
        [
            "#FFFFFF", "#000000", "#262626", "#4D4D4D", "#737373", "#999999", "#BFBFBF",
        ],
    ),
];

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Parse `#RRGGBB` or `RRGGBB`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if `hex` is not six hexadecimal digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_palette(&format!(
                "'{hex}' is not a #RRGGBB color"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid_palette(&format!("'{hex}' is not a #RRGGBB color")))
        };

        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    /// Channels as `[r, g, b]`
    pub const fn channels(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Ordered seven-color palette, index 0 is the background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Build a palette from exactly seven colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if `colors` does not hold exactly seven entries
    pub fn new(colors: &[Rgb]) -> Result<Self> {
        let Ok(colors) = <[Rgb; PALETTE_SIZE]>::try_from(colors) else {
            return Err(invalid_palette(&format!(
                "expected {PALETTE_SIZE} colors, got {}",
                colors.len()
            )));
        };
        Ok(Self { colors })
    }

    /// Build a palette from seven hex color strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if there are not exactly seven entries or an
    /// entry is not a `#RRGGBB` color
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        if entries.len() != PALETTE_SIZE {
            return Err(invalid_palette(&format!(
                "expected {PALETTE_SIZE} colors, got {}",
                entries.len()
            )));
        }
        let colors = entries
            .iter()
            .map(|entry| Rgb::from_hex(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&colors)
    }

    /// Color for a palette index, `None` above the last index
    pub fn color(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Background tone at index 0
    pub const fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// All colors in index order
    pub const fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }
}

/// Named palettes, populated at startup and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, Palette>,
}

impl PaletteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in palette
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, colors) in BUILTIN_PALETTES {
            // Built-in entries are seven well-formed hex strings
            if let Ok(palette) = Palette::from_hex(&colors) {
                registry.insert(name, palette);
            }
        }
        registry
    }

    /// Register a palette from hex strings, replacing any previous entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if the colors do not form a valid palette;
    /// the registry is left unchanged in that case
    pub fn register<S: AsRef<str>>(&mut self, name: impl Into<String>, colors: &[S]) -> Result<()> {
        let palette = Palette::from_hex(colors)?;
        self.insert(name, palette);
        Ok(())
    }

    /// Register an already validated palette, replacing any previous entry
    pub fn insert(&mut self, name: impl Into<String>, palette: Palette) {
        self.palettes.insert(name.into(), palette);
    }

    /// Look up a palette by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownPalette` if no palette is registered under `name`
    pub fn resolve(&self, name: &str) -> Result<&Palette> {
        self.palettes
            .get(name)
            .ok_or_else(|| PatternError::UnknownPalette {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    /// Number of registered palettes
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether no palette is registered
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
