mod tests {
    use stream_illusion::{Clock, Duration, EmbassyClock, Instant, VirtualClock};

    #[test]
    fn test_virtual_clock_never_goes_back() {
        let mut clock = VirtualClock::new(Instant::from_ticks(1_000));
        clock.wait_until(Instant::from_ticks(500));
        assert_eq!(clock.now(), Instant::from_ticks(1_000));

        clock.delay(Duration::from_micros(250));
        assert_eq!(clock.now(), Instant::from_ticks(1_250));

        clock.advance(Duration::from_micros(750));
        assert_eq!(clock.now(), Instant::from_ticks(2_000));
    }

    #[test]
    fn test_embassy_clock_blocks_until_deadline() {
        let mut clock = EmbassyClock;
        let start = clock.now();

        // Past deadlines return at once
        clock.wait_until(Instant::from_ticks(0));

        let deadline = start + Duration::from_millis(2);
        clock.wait_until(deadline);
        assert!(clock.now() >= deadline);
    }
}
