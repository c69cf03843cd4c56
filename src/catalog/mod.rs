//! Named palettes and designs available to the generation engine

/// Built-in design generators
pub mod builtin;
/// Design generator capability and registry
pub mod design;
/// Palettes and the palette registry
pub mod palette;

pub use design::{CellRule, DesignGenerator, DesignRegistry};
pub use palette::{Palette, PaletteRegistry, Rgb};
