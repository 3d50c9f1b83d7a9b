mod tests {
    use stream_illusion::pattern::{FLUX_SEQUENCE, FluxDispatcher};
    use stream_illusion::{Duration, Instant, ModeId};

    const INTERVAL: Duration = Duration::from_secs(20);

    fn at(d: Duration) -> Instant {
        Instant::from_ticks(0) + d
    }

    #[test]
    fn test_holds_each_mode_for_the_interval() {
        let mut flux = FluxDispatcher::new(INTERVAL, 10);
        assert_eq!(flux.select(at(Duration::from_ticks(0))), ModeId::Helix);
        assert_eq!(flux.select(at(Duration::from_secs(10))), ModeId::Helix);
        assert_eq!(
            flux.select(at(INTERVAL - Duration::from_micros(1))),
            ModeId::Helix
        );
        assert_eq!(flux.select(at(INTERVAL)), ModeId::Ghost);
        assert_eq!(
            flux.select(at(INTERVAL + Duration::from_secs(5))),
            ModeId::Ghost
        );
    }

    #[test]
    fn test_visits_modes_strictly_in_order_and_wraps() {
        let mut flux = FluxDispatcher::new(INTERVAL, 10);
        let mut visited = Vec::new();
        for step in 0..=FLUX_SEQUENCE.len() as u32 {
            visited.push(flux.select(at(INTERVAL * step)));
        }
        assert_eq!(&visited[..FLUX_SEQUENCE.len()], &FLUX_SEQUENCE[..]);
        assert_eq!(visited[FLUX_SEQUENCE.len()], ModeId::Helix);
        assert_eq!(flux.index(), 0);
    }

    #[test]
    fn test_shorter_tour() {
        let mut flux = FluxDispatcher::new(INTERVAL, 3);
        let visited: Vec<ModeId> = (0..4u32)
            .map(|step| flux.select(at(INTERVAL * step)))
            .collect();
        assert_eq!(
            visited,
            [ModeId::Helix, ModeId::Ghost, ModeId::Spectrum, ModeId::Helix]
        );
    }

    #[test]
    fn test_long_gap_advances_one_step() {
        let mut flux = FluxDispatcher::new(INTERVAL, 10);
        flux.select(at(Duration::from_ticks(0)));
        assert_eq!(flux.select(at(Duration::from_secs(3600))), ModeId::Ghost);
        assert_eq!(flux.select(at(Duration::from_secs(3601))), ModeId::Ghost);
    }

    #[test]
    fn test_count_is_clamped() {
        assert_eq!(FluxDispatcher::new(INTERVAL, 0).count(), 1);
        assert_eq!(
            FluxDispatcher::new(INTERVAL, 200).count(),
            FLUX_SEQUENCE.len()
        );
    }

    #[test]
    fn test_sequence_never_includes_idle_modes() {
        assert!(!FLUX_SEQUENCE.contains(&ModeId::Off));
        assert!(!FLUX_SEQUENCE.contains(&ModeId::Ambient));
        assert!(!FLUX_SEQUENCE.contains(&ModeId::Flux));
    }
}
