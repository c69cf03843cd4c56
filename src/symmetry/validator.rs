//! Shape, range and symmetry checks run before a grid leaves the engine

use bitvec::prelude::{BitVec, bitvec};
use ndarray::ArrayView2;

use crate::io::configuration::MAX_COLOR_INDEX;
use crate::io::error::{PatternError, Result};
use crate::symmetry::transform::{Frame, Transform};

/// Check a chart against the grid invariants
///
/// Checks, in order, that the grid is `size` x `size`, that every value is a
/// palette index, and that every cell equals all of its images under D8.
///
/// # Errors
///
/// Returns the first failure found:
/// - `InvalidGridSize` if `size` has no center cell
/// - `ShapeMismatch` if the grid is not `size` x `size`
/// - `ValueOutOfRange` for a value above `MAX_COLOR_INDEX`
/// - `SymmetryViolation` for a cell differing from one of its images
pub fn validate(grid: ArrayView2<'_, u8>, size: usize) -> Result<()> {
    let frame = Frame::new(size)?;
    check_shape(grid, size)?;
    check_range(grid)?;
    check_symmetry(grid, &frame)
}

fn check_shape(grid: ArrayView2<'_, u8>, size: usize) -> Result<()> {
    let actual = grid.dim();
    if actual == (size, size) {
        Ok(())
    } else {
        Err(PatternError::ShapeMismatch {
            expected: size,
            actual,
        })
    }
}

fn check_range(grid: ArrayView2<'_, u8>) -> Result<()> {
    match grid
        .indexed_iter()
        .find(|(_, value)| **value > MAX_COLOR_INDEX)
    {
        Some(((row, col), &value)) => Err(PatternError::ValueOutOfRange {
            value,
            position: [row, col],
        }),
        None => Ok(()),
    }
}

// Each orbit is compared once; every member is marked visited afterwards
fn check_symmetry(grid: ArrayView2<'_, u8>, frame: &Frame) -> Result<()> {
    let size = frame.size();
    let mut visited: BitVec = bitvec![0; size * size];

    for ((row, col), &value) in grid.indexed_iter() {
        if visited.get(row * size + col).is_some_and(|bit| *bit) {
            continue;
        }

        for transform in Transform::ALL {
            let Some(image) = frame.image(transform, [row, col]) else {
                continue;
            };
            if grid.get(image).copied() != Some(value) {
                return Err(PatternError::SymmetryViolation {
                    position: [row, col],
                    image,
                    transform: transform.name(),
                });
            }
            let [image_row, image_col] = image;
            visited.set(image_row * size + image_col, true);
        }
    }

    Ok(())
}

/// Count of distinct symmetry orbits in a grid of side `size`
///
/// # Errors
///
/// Returns `InvalidGridSize` if `size` has no center cell
pub fn orbit_count(size: usize) -> Result<usize> {
    Ok(Frame::new(size)?.domain().len())
}
