//! Design generator capability and the name-keyed design registry

use std::collections::BTreeMap;

use crate::io::error::{PatternError, Result};
use crate::math::RandomSource;
use crate::spatial::DomainCell;

/// Per-cell rule produced by a design for one generation
///
/// Called exactly once per fundamental domain cell, in traversal order, with
/// the same random source the design was prepared with.
pub type CellRule<'a> = Box<dyn FnMut(DomainCell, &mut RandomSource) -> i32 + 'a>;

/// Procedural fill of one octant of a symmetric chart
///
/// Implementations must be deterministic given the random source: no clock,
/// environment or other ambient state.
pub trait DesignGenerator: Send + Sync {
    /// Draw per-pattern parameters and return the per-cell rule
    ///
    /// `octant_size` is `c + 1` for a grid with center index `c`. The rule
    /// should return a palette index in `0..=6`; anything else fails the
    /// generation.
    fn prepare(&self, rng: &mut RandomSource, octant_size: usize) -> CellRule<'_>;
}

/// Design backed by a plain per-cell function
#[derive(Debug, Clone, Copy)]
pub struct FnDesign<F>(F);

/// Adapt a function of `(cell, octant_size, rng)` into a design
pub fn from_fn<F>(f: F) -> FnDesign<F>
where
    F: Fn(DomainCell, usize, &mut RandomSource) -> i32 + Send + Sync,
{
    FnDesign(f)
}

impl<F> DesignGenerator for FnDesign<F>
where
    F: Fn(DomainCell, usize, &mut RandomSource) -> i32 + Send + Sync,
{
    fn prepare(&self, _rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        Box::new(move |cell: DomainCell, rng: &mut RandomSource| {
            (self.0)(cell, octant_size, rng)
        })
    }
}

/// Named designs, populated at startup and read-only afterwards
#[derive(Default)]
pub struct DesignRegistry {
    designs: BTreeMap<String, Box<dyn DesignGenerator>>,
}

impl DesignRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a design, replacing any previous entry under the same name
    pub fn register(&mut self, name: impl Into<String>, design: impl DesignGenerator + 'static) {
        self.designs.insert(name.into(), Box::new(design));
    }

    /// Look up a design by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownDesign` if no design is registered under `name`
    pub fn resolve(&self, name: &str) -> Result<&dyn DesignGenerator> {
        match self.designs.get(name) {
            Some(design) => Ok(&**design),
            None => Err(PatternError::UnknownDesign {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.designs.keys().map(String::as_str)
    }

    /// Whether a design is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.designs.contains_key(name)
    }

    /// Number of registered designs
    pub fn len(&self) -> usize {
        self.designs.len()
    }

    /// Whether no design is registered
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

impl std::fmt::Debug for DesignRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignRegistry")
            .field("designs", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
