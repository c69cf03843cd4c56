//! Generation engine: registries plus the folding pipeline
//!
//! The engine is a pure function of its inputs. Registries are filled before
//! the engine is built and are never mutated afterwards, so one engine can
//! serve any number of concurrent callers.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::catalog::builtin::builtin_designs;
use crate::catalog::{DesignRegistry, Palette, PaletteRegistry};
use crate::generation::folding::fold;
use crate::io::configuration::{DEFAULT_DESIGN, DEFAULT_GRID_SIZE, DEFAULT_PALETTE, DEFAULT_SEED};
use crate::io::error::Result;
use crate::spatial::Grid;
use crate::symmetry::validate;

static BUILTIN: LazyLock<Engine> = LazyLock::new(Engine::builtin);

/// Process-wide engine holding the built-in designs and palettes
pub fn builtin() -> &'static Engine {
    &BUILTIN
}

/// Everything needed to reproduce one chart
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternRequest {
    /// Design name
    pub design: String,
    /// Palette name
    pub palette: String,
    /// Seed for the design's random choices
    pub seed: u64,
    /// Chart side length in stitches
    pub size: usize,
}

impl Default for PatternRequest {
    fn default() -> Self {
        Self {
            design: DEFAULT_DESIGN.to_string(),
            palette: DEFAULT_PALETTE.to_string(),
            seed: DEFAULT_SEED,
            size: DEFAULT_GRID_SIZE,
        }
    }
}

impl PatternRequest {
    /// Request for the given design and palette at the default size and seed
    pub fn new(design: impl Into<String>, palette: impl Into<String>) -> Self {
        Self {
            design: design.into(),
            palette: palette.into(),
            ..Self::default()
        }
    }

    /// Replace the seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the grid size
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Short title such as `starburst / mono / seed 7`
    pub fn title(&self) -> String {
        format!("{} / {} / seed {}", self.design, self.palette, self.seed)
    }
}

/// Generated grid together with its authoritative palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Request that produced this pattern
    pub request: PatternRequest,
    /// Symmetric grid of color indices
    pub grid: Grid,
    /// Index to color mapping for `grid`
    pub palette: Palette,
}

/// Symmetric pattern generator over a fixed set of designs and palettes
#[derive(Debug, Default)]
pub struct Engine {
    designs: DesignRegistry,
    palettes: PaletteRegistry,
}

impl Engine {
    /// Build an engine from populated registries
    pub const fn new(designs: DesignRegistry, palettes: PaletteRegistry) -> Self {
        Self { designs, palettes }
    }

    /// Engine holding every built-in design and palette
    pub fn builtin() -> Self {
        Self::new(builtin_designs(), PaletteRegistry::builtin())
    }

    /// Generate a validated grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no design is registered under `design` (`UnknownDesign`)
    /// - `size` is zero, even, or above the limit (`InvalidGridSize`)
    /// - the design returns a value outside the palette (`InvalidColorIndex`)
    /// - the finished grid fails validation
    pub fn generate(&self, design: &str, size: usize, seed: u64) -> Result<Grid> {
        let generator = self.designs.resolve(design)?;
        let grid = fold(generator, size, seed)?;
        validate(grid.view(), size)?;
        Ok(grid)
    }

    /// Look up a palette by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownPalette` if no palette is registered under `name`
    pub fn resolve_palette(&self, name: &str) -> Result<&Palette> {
        self.palettes.resolve(name)
    }

    /// Generate a grid and resolve its palette
    ///
    /// The design and palette are both resolved before any generation work.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDesign` or `UnknownPalette` for unregistered names,
    /// and any error of [`Engine::generate`]
    pub fn pattern(&self, request: &PatternRequest) -> Result<Pattern> {
        self.designs.resolve(&request.design)?;
        let palette = self.resolve_palette(&request.palette)?.clone();
        let grid = self.generate(&request.design, request.size, request.seed)?;
        Ok(Pattern {
            request: request.clone(),
            grid,
            palette,
        })
    }

    /// Registered design names
    pub fn list_designs(&self) -> BTreeSet<&str> {
        self.designs.names().collect()
    }

    /// Registered palette names
    pub fn list_palettes(&self) -> BTreeSet<&str> {
        self.palettes.names().collect()
    }

    /// Design registry
    pub const fn designs(&self) -> &DesignRegistry {
        &self.designs
    }

    /// Palette registry
    pub const fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }
}
