//! Mathematical utilities for pattern generation

/// Threshold quantization of continuous fields
pub mod quantize;
/// Seeded random source for design generators
pub mod random;

pub use random::RandomSource;
