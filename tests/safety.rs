mod tests {
    use stream_illusion::{Duration, FountainConfig, Instant, ShutdownTimer};

    const HOUR: Duration = Duration::from_secs(3600);

    fn at(d: Duration) -> Instant {
        Instant::from_ticks(0) + d
    }

    #[test]
    fn test_expires_at_ceiling_and_latches() {
        let mut timer = ShutdownTimer::new(HOUR * 3, at(Duration::from_ticks(0)));
        assert_eq!(timer.ceiling(), HOUR * 3);

        assert!(!timer.update(at(HOUR), true));
        assert!(!timer.update(at(HOUR * 3 - Duration::from_micros(1)), true));
        assert!(timer.update(at(HOUR * 3), true));
        assert!(timer.update(at(HOUR * 5), true));
        // Latched even when the mode stops asking for actuators
        assert!(timer.update(at(HOUR * 6), false));
        assert!(timer.is_expired());
    }

    #[test]
    fn test_mode_change_clears_and_restarts() {
        let mut timer = ShutdownTimer::new(HOUR * 3, at(Duration::from_ticks(0)));
        assert!(timer.update(at(HOUR * 4), true));

        timer.on_mode_change(at(HOUR * 4));
        assert!(!timer.is_expired());
        assert!(!timer.update(at(HOUR * 5), true));
        assert_eq!(timer.elapsed(at(HOUR * 5)), HOUR);
        assert!(timer.update(at(HOUR * 7), true));
    }

    #[test]
    fn test_idle_mode_never_expires() {
        let mut timer = ShutdownTimer::new(HOUR, at(Duration::from_ticks(0)));
        assert!(!timer.update(at(HOUR * 10), false));
        assert!(!timer.is_expired());
    }

    #[test]
    fn test_elapsed_before_reset_is_zero() {
        let timer = ShutdownTimer::new(HOUR, at(HOUR));
        assert_eq!(
            timer.elapsed(at(Duration::from_ticks(0))),
            Duration::from_ticks(0)
        );
    }

    #[test]
    fn test_fractional_ceiling() {
        let config = FountainConfig {
            runtime_ceiling_hours: 0.5,
            ..FountainConfig::default()
        };
        assert_eq!(config.runtime_ceiling(), Duration::from_secs(1800));
        assert_eq!(FountainConfig::default().runtime_ceiling(), HOUR * 3);
    }
}
