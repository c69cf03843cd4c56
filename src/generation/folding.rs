//! Octant folding: fill the fundamental domain, then unfold under D8
//!
//! Generation is split in two phases. Sampling walks the domain in a fixed
//! order and owns every draw from the random source; unfolding only scatters
//! finished samples, so any scatter strategy yields the same grid.

use ndarray::Array2;

use crate::catalog::DesignGenerator;
use crate::io::configuration::MAX_COLOR_INDEX;
use crate::io::error::{PatternError, Result};
use crate::math::RandomSource;
use crate::spatial::{DomainCell, Grid};
use crate::symmetry::Frame;

/// Color index produced for one domain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Canonical cell the value belongs to
    pub cell: DomainCell,
    /// Palette index in `0..=MAX_COLOR_INDEX`
    pub value: u8,
}

/// Generate a fully symmetric grid from a design
///
/// # Errors
///
/// Returns an error if:
/// - `size` is zero, even, or above the size limit (`InvalidGridSize`)
/// - the design returns a value outside the palette (`InvalidColorIndex`)
pub fn fold(design: &dyn DesignGenerator, size: usize, seed: u64) -> Result<Grid> {
    let frame = Frame::new(size)?;
    let samples = sample_domain(design, &frame, seed)?;
    Ok(unfold(&frame, &samples))
}

/// Evaluate the design once per domain cell in row-major domain order
///
/// # Errors
///
/// Returns `InvalidColorIndex` for the first out-of-range value; no partial
/// result is returned
pub fn sample_domain(design: &dyn DesignGenerator, frame: &Frame, seed: u64) -> Result<Vec<Sample>> {
    let domain = frame.domain();
    let mut rng = RandomSource::from_seed(seed);
    let mut rule = design.prepare(&mut rng, domain.octant_size());

    let mut samples = Vec::with_capacity(domain.len());
    for cell in domain.cells() {
        let value = checked_color_index(rule(cell, &mut rng), cell)?;
        samples.push(Sample { cell, value });
    }
    Ok(samples)
}

/// Write every sample to all eight of its symmetric images
///
/// Axis, diagonal and center cells hit the same position more than once with
/// the same value; those writes are idempotent.
pub fn unfold(frame: &Frame, samples: &[Sample]) -> Grid {
    let size = frame.size();
    let mut cells = Array2::<u8>::zeros((size, size));

    for sample in samples {
        for position in frame.orbit(sample.cell) {
            if let Some(slot) = cells.get_mut(position) {
                *slot = sample.value;
            }
        }
    }

    Grid::from_cells(cells)
}

fn checked_color_index(value: i32, cell: DomainCell) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|index| *index <= MAX_COLOR_INDEX)
        .ok_or(PatternError::InvalidColorIndex {
            value,
            cell: [cell.x, cell.y],
        })
}
