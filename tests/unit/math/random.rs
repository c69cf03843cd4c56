//! Tests for the seeded random source used by design generators

#[cfg(test)]
mod tests {
    use kaleidostitch::math::RandomSource;

    fn sample_sequence(rng: &mut RandomSource) -> Vec<f64> {
        vec![
            rng.uniform(0.0, 1.0),
            rng.uniform_int(-5, 5) as f64,
            f64::from(u8::from(rng.chance(0.5))),
            rng.weighted_choice(&[1.0, 2.0, 3.0]) as f64,
            rng.uniform(10.0, 20.0),
        ]
    }

    // Tests identical seeds produce identical sequences for identical calls
    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = RandomSource::from_seed(1234);
        let mut second = RandomSource::from_seed(1234);

        assert_eq!(sample_sequence(&mut first), sample_sequence(&mut second));
        assert_eq!(first.draws(), second.draws());
    }

    // Tests different seeds diverge
    #[test]
    fn test_different_seeds_differ() {
        let mut first = RandomSource::from_seed(1);
        let mut second = RandomSource::from_seed(2);

        let a: Vec<f64> = (0..16).map(|_| first.uniform(0.0, 1.0)).collect();
        let b: Vec<f64> = (0..16).map(|_| second.uniform(0.0, 1.0)).collect();
        assert_ne!(a, b);
    }

    // Tests every primitive advances the stream
    #[test]
    fn test_draw_counter_advances() {
        let mut rng = RandomSource::from_seed(7);
        assert_eq!(rng.draws(), 0);

        let first = rng.uniform(0.0, 1.0);
        let second = rng.uniform(0.0, 1.0);
        assert_eq!(rng.draws(), 2);
        assert_ne!(first, second);

        rng.uniform_int(0, 10);
        rng.chance(0.3);
        rng.weighted_choice(&[1.0, 1.0]);
        assert_eq!(rng.draws(), 5);
    }

    // Tests degenerate ranges return the lower bound but still consume a draw
    #[test]
    fn test_degenerate_ranges() {
        let mut rng = RandomSource::from_seed(3);
        assert!((rng.uniform(2.5, 2.5) - 2.5).abs() < f64::EPSILON);
        assert_eq!(rng.uniform_int(4, 4), 4);
        assert_eq!(rng.uniform_int(9, 1), 9);
        assert_eq!(rng.draws(), 3);

        // Draw counts match a source that made non-degenerate calls
        let mut aligned = RandomSource::from_seed(3);
        aligned.uniform(0.0, 1.0);
        aligned.uniform_int(0, 100);
        aligned.uniform_int(0, 100);
        assert_eq!(aligned.draws(), rng.draws());
    }

    // Tests uniform values stay inside their bounds
    #[test]
    fn test_uniform_bounds() {
        let mut rng = RandomSource::from_seed(99);
        for _ in 0..1000 {
            let value = rng.uniform(0.55, 0.9);
            assert!((0.55..0.9).contains(&value));

            let int = rng.uniform_int(0, 6);
            assert!((0..=6).contains(&int));
        }
    }

    // Tests uniform_int reaches both inclusive endpoints
    #[test]
    fn test_uniform_int_inclusive() {
        let mut rng = RandomSource::from_seed(5);
        let values: Vec<i64> = (0..500).map(|_| rng.uniform_int(0, 2)).collect();
        assert!(values.contains(&0));
        assert!(values.contains(&2));
    }

    // Tests weighted choice never selects zero-weight entries
    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = RandomSource::from_seed(11);
        for _ in 0..500 {
            let index = rng.weighted_choice(&[0.0, 1.0, 0.0, 2.0, 0.0]);
            assert!(index == 1 || index == 3, "selected zero-weight index {index}");
        }
    }

    // Tests weighted choice falls back to the first index without positive weight
    #[test]
    fn test_weighted_choice_all_zero() {
        let mut rng = RandomSource::from_seed(11);
        assert_eq!(rng.weighted_choice(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(rng.weighted_choice(&[]), 0);
    }

    // Tests weighted choice roughly follows its weights
    #[test]
    fn test_weighted_choice_distribution() {
        let mut rng = RandomSource::from_seed(2024);
        let mut counts = [0usize; 2];
        for _ in 0..4000 {
            let index = rng.weighted_choice(&[1.0, 3.0]);
            counts[index] += 1;
        }
        let ratio = counts[1] as f64 / counts[0] as f64;
        assert!((2.0..4.5).contains(&ratio), "ratio {ratio} far from 3");
    }

    // Tests chance respects certain and impossible events
    #[test]
    fn test_chance_extremes() {
        let mut rng = RandomSource::from_seed(8);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
            assert!(!rng.chance(-3.0));
        }
    }

    // Tests choose handles empty and non-empty slices
    #[test]
    fn test_choose() {
        let mut rng = RandomSource::from_seed(4);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.draws(), 0);

        let items = ["a", "b", "c"];
        for _ in 0..50 {
            let picked = rng.choose(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    // Tests cloned sources continue identically
    #[test]
    fn test_clone_continues_stream() {
        let mut original = RandomSource::from_seed(77);
        original.uniform(0.0, 1.0);
        let mut copy = original.clone();

        assert_eq!(sample_sequence(&mut original), sample_sequence(&mut copy));
    }
}
