mod tests {
    use stream_illusion::config::DEFAULT_MAGNET_DUTY_CAP;
    use stream_illusion::{ConfigError, Duration, FountainConfig};

    #[test]
    fn test_default_is_valid() {
        let config = FountainConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.magnet_duty_cap, DEFAULT_MAGNET_DUTY_CAP);
        assert_eq!(config.flux_interval, Duration::from_secs(20));
        assert_eq!(config.flux_mode_count, 10);
    }

    #[test]
    fn test_rejects_out_of_domain_values() {
        let base = FountainConfig::default();

        let config = FountainConfig {
            magnet_duty_cap: 226,
            ..base
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MagnetDutyCapTooHigh(226))
        );

        for hours in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = FountainConfig {
                runtime_ceiling_hours: hours,
                ..base
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidRuntimeCeiling));
        }

        for count in [0, 11] {
            let config = FountainConfig {
                flux_mode_count: count,
                ..base
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidFluxModeCount(count))
            );
        }

        let config = FountainConfig {
            flux_interval: Duration::from_ticks(0),
            ..base
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFluxInterval));
    }

    #[test]
    fn test_cap_at_magnet_max_is_accepted() {
        let config = FountainConfig {
            magnet_duty_cap: 225,
            ..FountainConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::MagnetDutyCapTooHigh(230).to_string(),
            "magnet duty cap 230 exceeds 225"
        );
        assert_eq!(
            ConfigError::InvalidFluxModeCount(0).to_string(),
            "flux mode count 0 outside 1..=10"
        );
    }
}
