mod common;

mod tests {
    use stream_illusion::actuator::PUMP_CRUISE_DUTY;
    use stream_illusion::pattern::HELIX_COLOR;
    use stream_illusion::{
        ActuatorState, Clock, ConfigError, Duration, Fountain, FountainConfig, ModeId,
        PwmChannel, VirtualClock,
    };

    use super::common::{BLACK, MockBus, MockPwm, raw_for};

    fn fountain(config: &FountainConfig) -> Fountain<MockPwm, MockBus, VirtualClock> {
        Fountain::new(config, MockPwm::new(), MockBus::new(), VirtualClock::default()).unwrap()
    }

    #[test]
    fn test_knob_at_zero_is_dark_and_idle() {
        let mut fountain = fountain(&FountainConfig::default());
        assert_eq!(fountain.tick(0), ModeId::Off);

        let status = fountain.status();
        assert_eq!(status.mode, Some(ModeId::Off));
        assert_eq!(status.actuator_state, ActuatorState::Off);
        assert_eq!(status.pump_duty, 0);
        assert_eq!(status.magnet_duty, 0);
        assert!(fountain.strobe().buffer().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn test_knob_at_max_selects_flux() {
        let mut fountain = fountain(&FountainConfig::default());
        assert_eq!(fountain.tick(1023), ModeId::Flux);
        assert_eq!(fountain.status().actuator_state, ActuatorState::PumpOn);
        assert_eq!(fountain.patterns().flux().current(), ModeId::Helix);
        assert!(
            fountain
                .strobe()
                .output()
                .frames
                .iter()
                .any(|frame| frame.iter().all(|c| *c == HELIX_COLOR))
        );
    }

    #[test]
    fn test_raw_helper_matches_selector() {
        for raw in 0..ModeId::COUNT {
            let mode = ModeId::from_raw(raw).unwrap();
            assert_eq!(stream_illusion::ModeSelector::resolve(raw_for(mode)), mode);
        }
    }

    #[test]
    fn test_stream_mode_from_cold() {
        let mut fountain = fountain(&FountainConfig::default());
        let raw = raw_for(ModeId::Helix);

        fountain.tick(raw);
        let status = fountain.status();
        assert_eq!(status.actuator_state, ActuatorState::PumpOn);
        assert_eq!(status.pump_duty, PUMP_CRUISE_DUTY);
        assert_eq!(status.magnet_duty, 0);

        let mut states = vec![status.actuator_state];
        let mut last_duty = 0;
        for _ in 0..500 {
            fountain.tick(raw);
            let status = fountain.status();
            assert!(status.magnet_duty >= last_duty);
            last_duty = status.magnet_duty;
            if states.last() != Some(&status.actuator_state) {
                states.push(status.actuator_state);
            }
        }

        assert_eq!(
            states,
            [ActuatorState::PumpOn, ActuatorState::PumpAndMagOn]
        );
        assert_eq!(last_duty, FountainConfig::default().magnet_duty_cap);
    }

    #[test]
    fn test_switching_to_off_shuts_actuators_down() {
        let mut fountain = fountain(&FountainConfig::default());
        for _ in 0..40 {
            fountain.tick(raw_for(ModeId::Chrome));
        }
        assert!(fountain.status().magnet_duty > 0);

        fountain.tick(0);
        let status = fountain.status();
        assert_eq!(status.actuator_state, ActuatorState::Off);
        assert_eq!(status.pump_duty, 0);
        assert_eq!(status.magnet_duty, 0);
        assert!(!fountain.actuators().pwm().magnet_enabled);
    }

    #[test]
    fn test_ambient_keeps_actuators_off() {
        let mut fountain = fountain(&FountainConfig::default());
        for _ in 0..10 {
            fountain.tick(raw_for(ModeId::Ambient));
        }
        assert_eq!(fountain.status().actuator_state, ActuatorState::Off);
        assert!(
            fountain
                .actuators()
                .pwm()
                .duties(PwmChannel::Pump)
                .iter()
                .all(|duty| *duty == 0)
        );
        assert!(fountain.strobe().buffer().iter().any(|c| *c != BLACK));
    }

    #[test]
    fn test_runtime_ceiling_forces_shutdown_until_mode_changes() {
        let config = FountainConfig {
            runtime_ceiling_hours: 1.0 / 3600.0,
            ..FountainConfig::default()
        };
        let mut fountain = fountain(&config);
        let raw = raw_for(ModeId::Ghost);

        let mut ticks = 0;
        while !fountain.status().shutdown_expired {
            fountain.tick(raw);
            ticks += 1;
            assert!(ticks < 1_000, "runtime ceiling never reached");
        }
        let status = fountain.status();
        assert_eq!(status.actuator_state, ActuatorState::Off);
        assert_eq!(status.pump_duty, 0);
        assert_eq!(status.magnet_duty, 0);

        // Same mode: stays latched however long it runs
        fountain.clock_mut().advance(Duration::from_secs(3600));
        for _ in 0..10 {
            fountain.tick(raw);
        }
        assert!(fountain.status().shutdown_expired);
        assert_eq!(fountain.status().actuator_state, ActuatorState::Off);

        // A new mode clears the latch and restarts the pump
        fountain.tick(raw_for(ModeId::Spectrum));
        let status = fountain.status();
        assert!(!status.shutdown_expired);
        assert_eq!(status.actuator_state, ActuatorState::PumpOn);
    }

    #[test]
    fn test_tick_takes_one_frame_period() {
        let mut fountain = fountain(&FountainConfig::default());
        fountain.tick(raw_for(ModeId::VolcanicLightning));

        // Second tick: actuators only ramp, so time moves by one strobe period
        let before = fountain.clock().now();
        fountain.tick(raw_for(ModeId::VolcanicLightning));
        assert_eq!(fountain.clock().now() - before, Duration::from_millis(12));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = FountainConfig {
            magnet_duty_cap: 240,
            ..FountainConfig::default()
        };
        let result = Fountain::new(
            &config,
            MockPwm::new(),
            MockBus::new(),
            VirtualClock::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::MagnetDutyCapTooHigh(240))
        ));
    }
}
