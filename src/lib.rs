//! Kaleidoscopic cross-stitch chart generation with enforced D8 symmetry
//!
//! A design fills one octant of an odd square grid; the engine folds that
//! octant out under the eight symmetries of the square, so every chart is
//! symmetric by construction. Output is a grid of palette indices plus the
//! seven-color palette that maps them to colors.

#![forbid(unsafe_code)]

/// Named palettes and design generators
pub mod catalog;
/// Folding pipeline and the generation engine
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Random source and quantization helpers
pub mod math;
/// Grid and fundamental domain data structures
pub mod spatial;
/// D8 transforms and grid validation
pub mod symmetry;

pub use generation::{Engine, Pattern, PatternRequest};
pub use io::error::{PatternError, Result};
