//! Tests for the immutable grid returned by the engine

#[cfg(test)]
mod tests {
    use kaleidostitch::Engine;
    use kaleidostitch::catalog::design::from_fn;
    use kaleidostitch::catalog::{DesignRegistry, PaletteRegistry};
    use kaleidostitch::spatial::DomainCell;

    fn ring_engine() -> Engine {
        let mut designs = DesignRegistry::new();
        // Value equals the ring distance from the center, capped at 6
        designs.register(
            "rings",
            from_fn(|cell: DomainCell, _, _| cell.x.min(6) as i32),
        );
        Engine::new(designs, PaletteRegistry::builtin())
    }

    // Tests grid dimensions and center
    #[test]
    fn test_grid_size_and_center() {
        let grid = ring_engine().generate("rings", 9, 0).unwrap();

        assert_eq!(grid.size(), 9);
        assert_eq!(grid.center(), [4, 4]);
        assert_eq!(grid.view().dim(), (9, 9));
        assert_eq!(grid.rows().count(), 9);
    }

    // Tests cell access inside and outside the grid
    #[test]
    fn test_grid_get() {
        let grid = ring_engine().generate("rings", 9, 0).unwrap();

        assert_eq!(grid.get([4, 4]), Some(0));
        assert_eq!(grid.get([4, 6]), Some(2));
        assert_eq!(grid.get([0, 0]), Some(4));
        assert_eq!(grid.get([9, 0]), None);
        assert_eq!(grid.get([0, 9]), None);
    }

    // Tests stitch counts form a histogram over all cells
    #[test]
    fn test_stitch_counts() {
        let grid = ring_engine().generate("rings", 9, 0).unwrap();
        let counts = grid.stitch_counts();

        assert_eq!(counts.iter().sum::<usize>(), 81);
        // Ring k of a square holds 8k cells
        assert_eq!(counts, [1, 8, 16, 24, 32, 0, 0]);
    }

    // Tests consuming the grid returns the same matrix
    #[test]
    fn test_into_inner() {
        let grid = ring_engine().generate("rings", 5, 0).unwrap();
        let view_copy = grid.view().to_owned();
        assert_eq!(grid.into_inner(), view_copy);
    }
}
