//! Tests for the generation engine and pattern requests

#[cfg(test)]
mod tests {
    use kaleidostitch::catalog::design::from_fn;
    use kaleidostitch::catalog::{DesignRegistry, PaletteRegistry};
    use kaleidostitch::generation::engine::builtin;
    use kaleidostitch::spatial::DomainCell;
    use kaleidostitch::{Engine, PatternError, PatternRequest};

    fn small_engine() -> Engine {
        let mut designs = DesignRegistry::new();
        designs.register("steps", from_fn(|cell: DomainCell, _, _| (cell.x % 7) as i32));
        designs.register("broken", from_fn(|_: DomainCell, _, _| 9));

        let mut palettes = PaletteRegistry::new();
        palettes
            .register(
                "plain",
                &["#FFFFFF", "#111111", "#222222", "#333333", "#444444", "#555555", "#666666"],
            )
            .unwrap();

        Engine::new(designs, palettes)
    }

    // Tests request defaults and builders
    #[test]
    fn test_request_builders() {
        let request = PatternRequest::default();
        assert_eq!(request.design, "rings-spokes");
        assert_eq!(request.palette, "jewel-bazaar");
        assert_eq!(request.seed, 0);
        assert_eq!(request.size, 35);

        let custom = PatternRequest::new("starburst", "mono").with_seed(7).with_size(9);
        assert_eq!(custom.size, 9);
        assert_eq!(custom.title(), "starburst / mono / seed 7");
    }

    // Tests identical inputs give identical grids
    #[test]
    fn test_generation_is_deterministic() {
        let engine = builtin();
        let first = engine.generate("petal-vault", 35, 42).unwrap();
        let second = engine.generate("petal-vault", 35, 42).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.size(), 35);
    }

    // Tests patterns carry their grid, palette and request
    #[test]
    fn test_pattern_bundles_palette() {
        let engine = small_engine();
        let request = PatternRequest::new("steps", "plain").with_size(7).with_seed(3);
        let pattern = engine.pattern(&request).unwrap();

        assert_eq!(pattern.request, request);
        assert_eq!(pattern.grid.get([3, 3]), Some(0));
        assert_eq!(pattern.grid.get([0, 0]), Some(3));
        assert_eq!(pattern.palette.color(1).unwrap().to_string(), "#111111");
    }

    // Tests unknown names fail with the matching error
    #[test]
    fn test_unknown_names() {
        let engine = small_engine();

        let unknown_design = engine.pattern(&PatternRequest::new("plaid", "plain"));
        assert!(matches!(unknown_design, Err(PatternError::UnknownDesign { .. })));

        let unknown_palette = engine.pattern(&PatternRequest::new("steps", "sepia"));
        assert!(matches!(unknown_palette, Err(PatternError::UnknownPalette { .. })));

        // The design is checked first when both are unknown
        let both = engine.pattern(&PatternRequest::new("plaid", "sepia"));
        assert!(matches!(both, Err(PatternError::UnknownDesign { .. })));
    }

    // Tests invalid sizes and faulty designs are reported
    #[test]
    fn test_generation_failures() {
        let engine = small_engine();
        assert!(matches!(
            engine.generate("steps", 34, 0),
            Err(PatternError::InvalidGridSize { size: 34 })
        ));
        assert!(matches!(
            engine.generate("broken", 5, 0),
            Err(PatternError::InvalidColorIndex { value: 9, .. })
        ));
    }

    // Tests name listings are sorted and complete
    #[test]
    fn test_listings() {
        let engine = small_engine();
        assert_eq!(
            engine.list_designs().into_iter().collect::<Vec<_>>(),
            vec!["broken", "steps"]
        );
        assert_eq!(
            engine.list_palettes().into_iter().collect::<Vec<_>>(),
            vec!["plain"]
        );

        let shared = builtin();
        assert_eq!(shared.list_designs().len(), 8);
        assert_eq!(shared.list_palettes().len(), 6);
        assert!(shared.resolve_palette("night-neon").is_ok());
    }

    // Tests the shared engine serves concurrent callers consistently
    #[test]
    fn test_concurrent_generation() {
        let expected = builtin().generate("confetti", 25, 5).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| builtin().generate("confetti", 25, 5).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
