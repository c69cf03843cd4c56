//! Built-in kaleidoscope designs
//!
//! Each design fills one octant. Continuous designs evaluate a field over the
//! octant and quantize it into seven bins; lattice designs score integer
//! residues. All of them except `solid-ring` keep the outermost ring of the
//! chart as background so the finished piece has a clean border.

use crate::catalog::design::{CellRule, DesignGenerator, DesignRegistry};
use crate::io::configuration::{BACKGROUND_INDEX, PALETTE_SIZE};
use crate::math::RandomSource;
use crate::math::quantize::{Thresholds, color_bin};
use crate::spatial::DomainCell;

/// Names of all built-in designs
pub const BUILTIN_DESIGNS: [&str; 8] = [
    "rings-spokes",
    "petal-vault",
    "starburst",
    "mosaic-steps",
    "knotwork",
    "lattice-garden",
    "confetti",
    "solid-ring",
];

/// Registry holding every built-in design
pub fn builtin_designs() -> DesignRegistry {
    let mut registry = DesignRegistry::new();
    registry.register("rings-spokes", RingsSpokes);
    registry.register("petal-vault", PetalVault);
    registry.register("starburst", Starburst);
    registry.register("mosaic-steps", MosaicSteps);
    registry.register("knotwork", Knotwork);
    registry.register("lattice-garden", LatticeGarden);
    registry.register("confetti", Confetti);
    registry.register("solid-ring", SolidRing);
    registry
}

const BACKGROUND: i32 = BACKGROUND_INDEX as i32;

// The outer ring of the chart (x == c) stays background
const fn inside_border(cell: DomainCell, octant_size: usize) -> bool {
    cell.x + 1 < octant_size
}

/// Concentric rings crossed by angular spokes
#[derive(Debug, Clone, Copy, Default)]
pub struct RingsSpokes;

impl DesignGenerator for RingsSpokes {
    fn prepare(&self, rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [-0.55, -0.25, -0.05, 0.10, 0.28, 0.52];
        let ring_frequency = rng.uniform(0.55, 0.9);
        let spoke_frequency = rng.uniform(4.5, 7.0);
        let wobble = rng.uniform(0.15, 0.35);

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let (fx, fy) = cell.as_f64();
            let rings = (cell.radius() * ring_frequency).sin();
            let spokes = (cell.angle() * spoke_frequency).cos();
            let ripple = ((fx - fy) * 0.7).sin() * wobble;
            color_bin(rings.mul_add(0.65, spokes.mul_add(0.55, ripple)), &THRESHOLDS)
        })
    }
}

/// Eight-lobed petals around a solid hub
#[derive(Debug, Clone, Copy, Default)]
pub struct PetalVault;

impl DesignGenerator for PetalVault {
    fn prepare(&self, rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [-0.4, -0.15, 0.05, 0.20, 0.38, 0.60];
        let radial_frequency = rng.uniform(0.35, 0.55);
        let weave_frequency = rng.uniform(1.2, 1.8);

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let (fx, fy) = cell.as_f64();
            let r = cell.radius();
            let lobes = (cell.angle() * 8.0).cos().mul_add(0.35, 0.65);
            let weave = ((fx + fy) * weave_frequency).sin();
            let mut value = (r * radial_frequency).cos().mul_add(lobes, 0.35 * weave);
            if r < 2.2 {
                value += 0.7;
            }
            color_bin(value, &THRESHOLDS)
        })
    }
}

/// Twelve-ray burst with highlighted axes and diagonals
#[derive(Debug, Clone, Copy, Default)]
pub struct Starburst;

impl DesignGenerator for Starburst {
    fn prepare(&self, rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [-0.45, -0.2, 0.0, 0.18, 0.35, 0.55];
        let ring_frequency = rng.uniform(0.85, 1.15);

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let (fx, fy) = cell.as_f64();
            let rays = (cell.angle() * 12.0).cos();
            let rings = (cell.radius() * ring_frequency).cos();
            let ripple = ((fx - fy) * 0.9).sin();
            let mut value = rays.mul_add(0.7, rings.mul_add(0.6, ripple * 0.25));
            if cell.on_axis() || cell.on_diagonal() {
                value += 0.35;
            }
            color_bin(value, &THRESHOLDS)
        })
    }
}

/// Stepped mosaic from overlapping modular stripes
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicSteps;

impl DesignGenerator for MosaicSteps {
    fn prepare(&self, _rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [0.6, 1.15, 1.7, 2.2, 2.8, 3.4];

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let DomainCell { x, y } = cell;
            let mut value = 0.0;
            if (x + y) % 4 < 2 {
                value += 1.1;
            }
            if (x - y) % 5 < 2 {
                value += 1.0;
            }
            if x % 3 == 0 || y % 3 == 0 {
                value += 0.9;
            }
            let ring = cell.distance().floor() as usize;
            value = ((ring % 6) as f64).mul_add(0.35, value);
            if (x * y) % 11 == 0 {
                value += 0.8;
            }
            color_bin(value, &THRESHOLDS)
        })
    }
}

/// Interlaced bands resembling Celtic knotwork
#[derive(Debug, Clone, Copy, Default)]
pub struct Knotwork;

impl DesignGenerator for Knotwork {
    fn prepare(&self, _rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [0.7, 1.35, 2.0, 2.55, 3.2, 3.9];

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let DomainCell { x, y } = cell;
            let (fx, fy) = cell.as_f64();
            let mut value = 0.0;
            if matches!(x % 4, 1 | 2) && matches!(y % 6, 2 | 3) {
                value += 1.8;
            }
            if matches!(y % 4, 1 | 2) && matches!(x % 6, 2 | 3) {
                value += 1.6;
            }
            if (cell.distance().floor() as usize) % 5 == 0 {
                value += 1.5;
            }
            if x % 7 == 0 && y % 7 == 0 {
                value += 0.8;
            }
            let weave = ((fx + 1.0) * 0.8).sin() + ((fy + 1.0) * 0.7).cos();
            value = weave.mul_add(0.6, value);
            color_bin(value, &THRESHOLDS)
        })
    }
}

/// Soft trellis of crossing waves
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeGarden;

impl DesignGenerator for LatticeGarden {
    fn prepare(&self, _rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        const THRESHOLDS: Thresholds = [-0.4, -0.15, 0.05, 0.22, 0.40, 0.62];

        Box::new(move |cell: DomainCell, _: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            let (fx, fy) = cell.as_f64();
            let waves = (fx * 0.9).sin().mul_add(0.45, (fy * 1.05).cos() * 0.45);
            let rings = (cell.radius() * 0.55).cos();
            let cross = ((fx - fy) * 1.7).cos();
            color_bin(rings.mul_add(0.55, cross.mul_add(0.25, waves)), &THRESHOLDS)
        })
    }
}

/// Scattered stitches drawn cell by cell from seeded color weights
///
/// The only built-in design consuming randomness per cell, so its output
/// depends on the traversal order of the fundamental domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Confetti;

impl DesignGenerator for Confetti {
    fn prepare(&self, rng: &mut RandomSource, octant_size: usize) -> CellRule<'_> {
        let mut weights = [0.0; PALETTE_SIZE];
        for weight in &mut weights {
            *weight = rng.uniform(0.2, 1.0);
        }
        // Background dominates so the scatter stays readable
        if let Some(background) = weights.first_mut() {
            *background *= 4.0;
        }

        Box::new(move |cell: DomainCell, rng: &mut RandomSource| {
            if !inside_border(cell, octant_size) {
                return BACKGROUND;
            }
            rng.weighted_choice(&weights) as i32
        })
    }
}

/// Background center surrounded by a single solid color
///
/// Kept for exact-value regression checks: every cell is 1 except the
/// center, which is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidRing;

impl DesignGenerator for SolidRing {
    fn prepare(&self, _rng: &mut RandomSource, _octant_size: usize) -> CellRule<'_> {
        Box::new(|cell: DomainCell, _: &mut RandomSource| {
            if cell.is_center() { BACKGROUND } else { 1 }
        })
    }
}
