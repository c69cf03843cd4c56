//! The dihedral group D8 acting on an odd square grid
//!
//! Transforms act on offsets `[dx, dy]` measured from the grid center, with
//! `dx` along columns and `dy` along rows. A [`Frame`] converts between grid
//! positions `[row, col]` and offsets, and enumerates symmetry orbits.

use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{PatternError, Result};
use crate::spatial::{DomainCell, FundamentalDomain};

/// Offset `[dx, dy]` from the grid center
pub type Offset = [i64; 2];

/// One of the eight symmetries of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Leaves every cell in place
    Identity,
    /// Quarter turn
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three-quarter turn
    Rotate270,
    /// Mirror across the vertical center line (`dx -> -dx`)
    ReflectHorizontal,
    /// Mirror across the horizontal center line (`dy -> -dy`)
    ReflectVertical,
    /// Mirror across the main diagonal (swap offsets)
    ReflectDiagonal,
    /// Mirror across the anti-diagonal (swap and negate offsets)
    ReflectAntiDiagonal,
}

impl Transform {
    /// All group elements, identity first
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::ReflectHorizontal,
        Self::ReflectVertical,
        Self::ReflectDiagonal,
        Self::ReflectAntiDiagonal,
    ];

    /// Apply to an offset from the center
    pub const fn apply(self, offset: Offset) -> Offset {
        let [dx, dy] = offset;
        match self {
            Self::Identity => [dx, dy],
            Self::Rotate90 => [-dy, dx],
            Self::Rotate180 => [-dx, -dy],
            Self::Rotate270 => [dy, -dx],
            Self::ReflectHorizontal => [-dx, dy],
            Self::ReflectVertical => [dx, -dy],
            Self::ReflectDiagonal => [dy, dx],
            Self::ReflectAntiDiagonal => [-dy, -dx],
        }
    }

    /// Transform undoing this one
    pub const fn inverse(self) -> Self {
        match self {
            Self::Rotate90 => Self::Rotate270,
            Self::Rotate270 => Self::Rotate90,
            other => other,
        }
    }

    /// Transform equal to applying `first`, then `self`
    pub fn compose(self, first: Self) -> Self {
        // Two asymmetric probes pin down a group element uniquely
        let probes: [Offset; 2] = [[1, 2], [3, -5]];
        Self::ALL
            .into_iter()
            .find(|candidate| {
                probes
                    .iter()
                    .all(|&probe| candidate.apply(probe) == self.apply(first.apply(probe)))
            })
            .unwrap_or(Self::Identity)
    }

    /// Rotation rather than reflection
    pub const fn is_rotation(self) -> bool {
        matches!(
            self,
            Self::Identity | Self::Rotate90 | Self::Rotate180 | Self::Rotate270
        )
    }

    /// Human-readable name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::ReflectHorizontal => "reflect-horizontal",
            Self::ReflectVertical => "reflect-vertical",
            Self::ReflectDiagonal => "reflect-diagonal",
            Self::ReflectAntiDiagonal => "reflect-anti-diagonal",
        }
    }
}

/// Coordinate frame of an odd square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    size: usize,
    half: usize,
}

impl Frame {
    /// Frame for a grid of side `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridSize` if `size` is zero, even, or larger than
    /// `MAX_GRID_SIZE`
    pub const fn new(size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 || size > MAX_GRID_SIZE {
            return Err(PatternError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            half: (size - 1) / 2,
        })
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Center position `[c, c]`
    pub const fn center(&self) -> [usize; 2] {
        [self.half, self.half]
    }

    /// Fundamental domain of this grid
    pub const fn domain(&self) -> FundamentalDomain {
        FundamentalDomain::new(self.half)
    }

    /// Offset of a grid position from the center
    pub const fn offset(&self, position: [usize; 2]) -> Offset {
        let [row, col] = position;
        let c = self.half as i64;
        [col as i64 - c, row as i64 - c]
    }

    /// Grid position of an offset, `None` if it falls outside the grid
    pub const fn position(&self, offset: Offset) -> Option<[usize; 2]> {
        let c = self.half as i64;
        let [dx, dy] = offset;
        if dx < -c || dx > c || dy < -c || dy > c {
            return None;
        }
        Some([(dy + c) as usize, (dx + c) as usize])
    }

    /// Image of a grid position under `transform`
    pub const fn image(&self, transform: Transform, position: [usize; 2]) -> Option<[usize; 2]> {
        self.position(transform.apply(self.offset(position)))
    }

    /// Canonical domain cell of a grid position
    pub const fn canonical(&self, position: [usize; 2]) -> DomainCell {
        let [dx, dy] = self.offset(position);
        DomainCell::fold(dx, dy)
    }

    /// Grid positions of all eight images of a domain cell
    ///
    /// Cells on an axis or diagonal repeat positions; the center yields the
    /// same position eight times.
    pub fn orbit(&self, cell: DomainCell) -> impl Iterator<Item = [usize; 2]> + use<> {
        let frame = *self;
        let offset = [cell.x as i64, cell.y as i64];
        Transform::ALL
            .into_iter()
            .filter_map(move |transform| frame.position(transform.apply(offset)))
    }

    /// Distinct grid positions of a domain cell's orbit, sorted
    pub fn distinct_orbit(&self, cell: DomainCell) -> Vec<[usize; 2]> {
        let mut positions: Vec<[usize; 2]> = self.orbit(cell).collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}
