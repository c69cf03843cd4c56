//! Fundamental domain of the D8 group on an odd square grid
//!
//! A domain cell is a pair of absolute offsets from the grid center with
//! `0 <= y <= x <= c`. Every grid position folds to exactly one such cell,
//! so filling the domain determines the whole grid.

/// Canonical representative of a symmetry orbit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainCell {
    /// Larger absolute offset from the center
    pub x: usize,
    /// Smaller absolute offset from the center
    pub y: usize,
}

impl DomainCell {
    /// Create a domain cell, callers keep `y <= x`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Fold a center offset into the domain
    ///
    /// Reflects across both axes (absolute values) and then across the main
    /// diagonal so that `y <= x`.
    pub const fn fold(dx: i64, dy: i64) -> Self {
        let ax = dx.unsigned_abs() as usize;
        let ay = dy.unsigned_abs() as usize;
        if ay > ax {
            Self { x: ay, y: ax }
        } else {
            Self { x: ax, y: ay }
        }
    }

    /// The grid center
    pub const fn is_center(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Lies on a diagonal of the grid
    pub const fn on_diagonal(self) -> bool {
        self.x == self.y
    }

    /// Lies on the horizontal or vertical center line
    pub const fn on_axis(self) -> bool {
        self.y == 0
    }

    /// Number of distinct grid positions in this cell's orbit
    pub const fn orbit_len(self) -> usize {
        if self.is_center() {
            1
        } else if self.on_axis() || self.on_diagonal() {
            4
        } else {
            8
        }
    }

    /// Offsets as floats for continuous design fields
    pub const fn as_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }

    /// Distance from the center, nudged away from zero
    pub fn radius(self) -> f64 {
        let (fx, fy) = self.as_f64();
        fx.hypot(fy) + 1e-6
    }

    /// Exact distance from the center
    pub fn distance(self) -> f64 {
        let (fx, fy) = self.as_f64();
        fx.hypot(fy)
    }

    /// Polar angle within the octant, in `[0, PI/4]`
    pub fn angle(self) -> f64 {
        let (fx, fy) = self.as_f64();
        fy.atan2(fx + 1e-6)
    }
}

/// Fundamental domain of a grid with center index `c`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundamentalDomain {
    half: usize,
}

impl FundamentalDomain {
    /// Domain for the given center index `c = (N - 1) / 2`
    pub const fn new(half: usize) -> Self {
        Self { half }
    }

    /// Largest offset from the center
    pub const fn half(&self) -> usize {
        self.half
    }

    /// Side length of the octant, `c + 1`
    pub const fn octant_size(&self) -> usize {
        self.half + 1
    }

    /// Number of cells in the domain
    pub const fn len(&self) -> usize {
        (self.half + 1) * (self.half + 2) / 2
    }

    /// Always false, a domain holds at least the center
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` satisfies `0 <= y <= x <= c`
    pub const fn contains(&self, cell: DomainCell) -> bool {
        cell.y <= cell.x && cell.x <= self.half
    }

    /// Cells in row-major order: `y` ascending, then `x` from `y` to `c`
    pub fn cells(&self) -> impl Iterator<Item = DomainCell> + use<> {
        let half = self.half;
        (0..=half).flat_map(move |y| (y..=half).map(move |x| DomainCell { x, y }))
    }
}
