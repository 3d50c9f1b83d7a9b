mod tests {
    use proptest::prelude::*;
    use stream_illusion::ModeId;
    use stream_illusion::selector::{CONTROL_INPUT_MAX, ModeSelector, map_range};

    #[test]
    fn test_extremes() {
        assert_eq!(ModeSelector::resolve(0), ModeId::Off);
        assert_eq!(ModeSelector::resolve(CONTROL_INPUT_MAX), ModeId::Flux);
        assert_eq!(ModeSelector::resolve(u16::MAX), ModeId::Flux);
    }

    #[test]
    fn test_every_mode_gets_an_equal_slice() {
        let mut counts = [0u32; ModeId::COUNT as usize];
        for raw in 0..=CONTROL_INPUT_MAX {
            counts[ModeSelector::resolve(raw) as usize] += 1;
        }
        for (mode, count) in counts.iter().enumerate() {
            assert!(
                (78..=79).contains(count),
                "mode {mode} owns {count} samples"
            );
        }
    }

    #[test]
    fn test_map_range_widens_spans() {
        assert_eq!(map_range(0, 0, 1023, 0, 12), 0);
        assert_eq!(map_range(1023, 0, 1023, 0, 12), 12);
        // The naive formula would still be at 11 here
        assert_eq!(map_range(1000, 0, 1023, 0, 12), 12);
        assert_eq!(map_range(5, 0, 10, 0, 100), 50);
        assert_eq!(map_range(7, 3, 3, 0, 12), 0);
    }

    #[test]
    fn test_select_reports_changes() {
        let mut selector = ModeSelector::new();
        assert_eq!(selector.current(), None);

        let first = selector.select(0);
        assert_eq!(first.mode, ModeId::Off);
        assert!(first.changed);

        let again = selector.select(5);
        assert_eq!(again.mode, ModeId::Off);
        assert!(!again.changed);

        let next = selector.select(CONTROL_INPUT_MAX);
        assert_eq!(next.mode, ModeId::Flux);
        assert!(next.changed);
        assert_eq!(selector.current(), Some(ModeId::Flux));
    }

    proptest! {
        #[test]
        fn resolved_mode_in_range(raw in any::<u16>()) {
            let mode = ModeSelector::resolve(raw);
            prop_assert!((mode as u8) < ModeId::COUNT);
        }

        #[test]
        fn resolution_is_monotonic(a in 0..=CONTROL_INPUT_MAX, b in 0..=CONTROL_INPUT_MAX) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ModeSelector::resolve(low) as u8 <= ModeSelector::resolve(high) as u8);
        }
    }
}
