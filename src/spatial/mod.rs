//! Spatial data structures for symmetric charts
//!
//! This module contains spatial-related functionality including:
//! - The immutable chart grid
//! - Fundamental domain cells and their traversal order

/// Fundamental domain cells and traversal
pub mod domain;
/// Immutable grid of palette indices
pub mod grid;

pub use domain::{DomainCell, FundamentalDomain};
pub use grid::Grid;
