//! Immutable square grid of palette indices handed to rendering collaborators

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::io::configuration::PALETTE_SIZE;

/// Finished chart of color indices
///
/// Only the generation engine constructs grids, so a `Grid` in caller hands
/// has already passed validation. There are no mutable accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u8>,
}

impl Grid {
    pub(crate) const fn from_cells(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Side length in stitches
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Center position `[c, c]`
    pub fn center(&self) -> [usize; 2] {
        let c = self.size() / 2;
        [c, c]
    }

    /// Color index at `[row, col]`, `None` outside the grid
    pub fn get(&self, position: [usize; 2]) -> Option<u8> {
        self.cells.get(position).copied()
    }

    /// Read-only view of the underlying matrix
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, u8>> {
        self.cells.rows().into_iter()
    }

    /// Number of stitches of each color index
    pub fn stitch_counts(&self) -> [usize; PALETTE_SIZE] {
        let mut counts = [0; PALETTE_SIZE];
        for &value in &self.cells {
            if let Some(count) = counts.get_mut(value as usize) {
                *count += 1;
            }
        }
        counts
    }

    /// Consume the grid, returning the underlying matrix
    pub fn into_inner(self) -> Array2<u8> {
        self.cells
    }
}
