//! Pattern generation pipeline

/// Engine facade over the registries and folding
pub mod engine;
/// Domain sampling and D8 unfolding
pub mod folding;

pub use engine::{Engine, Pattern, PatternRequest};
