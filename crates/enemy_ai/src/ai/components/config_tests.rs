//! Tests for enemy config and patrol route validation.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::config::{ConfigError, EnemyAIConfig, PatrolRoute};
    use super::super::controller::EnemyController;

    #[test]
    fn test_config_default() {
        let config = EnemyAIConfig::default();
        assert_eq!(config.detection_range, 10.0);
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.idle_duration, 2.0);
        assert_eq!(config.attack_cooldown, 1.5);
        assert_eq!(config.patrol_speed, 1.0);
        assert_eq!(config.chase_speed, None);
        assert_eq!(config.rotation_slerp_rate, 8.0);
        assert_eq!(config.arrival_tolerance, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_attack_range_must_be_inside_detection() {
        let config = EnemyAIConfig {
            attack_range: 10.0,
            detection_range: 10.0,
            ..EnemyAIConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::AttackRangeOutsideDetection {
                attack_range: 10.0,
                detection_range: 10.0,
            })
        );
    }

    #[test]
    fn test_non_positive_durations_rejected() {
        let zero_idle = EnemyAIConfig {
            idle_duration: 0.0,
            ..EnemyAIConfig::default()
        };
        assert_eq!(
            zero_idle.validate(),
            Err(ConfigError::NotPositive {
                field: "idle_duration",
                value: 0.0,
            })
        );

        let negative_cooldown = EnemyAIConfig {
            attack_cooldown: -1.0,
            ..EnemyAIConfig::default()
        };
        assert!(matches!(
            negative_cooldown.validate(),
            Err(ConfigError::NotPositive { field: "attack_cooldown", .. })
        ));

        let nan_range = EnemyAIConfig {
            detection_range: f32::NAN,
            ..EnemyAIConfig::default()
        };
        assert!(matches!(
            nan_range.validate(),
            Err(ConfigError::NotPositive { field: "detection_range", .. })
        ));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = EnemyAIConfig {
            arrival_tolerance: -0.1,
            ..EnemyAIConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "arrival_tolerance", .. })
        ));

        // Нулевой допуск валиден (точное прибытие)
        let exact = EnemyAIConfig {
            arrival_tolerance: 0.0,
            ..EnemyAIConfig::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_chase_speed_validated_when_set() {
        let config = EnemyAIConfig {
            chase_speed: Some(0.0),
            ..EnemyAIConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "chase_speed", .. })
        ));
    }

    #[test]
    fn test_stopping_distance() {
        let config = EnemyAIConfig::default();
        assert!((config.stopping_distance() - 1.9).abs() < 1e-6);

        let tiny = EnemyAIConfig {
            attack_range: 0.05,
            ..EnemyAIConfig::default()
        };
        assert_eq!(tiny.stopping_distance(), 0.0);
    }

    #[test]
    fn test_patrol_route_rejects_empty_and_non_finite() {
        assert_eq!(
            PatrolRoute::new(Vec::<Vec3>::new()),
            Err(ConfigError::EmptyPatrolRoute)
        );

        let bad = PatrolRoute::new(vec![Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0)]);
        assert!(matches!(bad, Err(ConfigError::InvalidWaypoint { index: 1, .. })));
    }

    #[test]
    fn test_patrol_route_wraps() {
        let route = PatrolRoute::new(vec![Vec3::X, Vec3::Y, Vec3::Z]).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.next_index(0), 1);
        assert_eq!(route.next_index(2), 0);
        assert_eq!(route.waypoint(4), Vec3::Y);
    }

    #[test]
    fn test_controller_rejects_invalid_config() {
        let config = EnemyAIConfig {
            attack_range: 12.0,
            ..EnemyAIConfig::default()
        };
        let result = EnemyController::with_waypoints(config, vec![Vec3::ZERO]);
        assert!(matches!(
            result,
            Err(ConfigError::AttackRangeOutsideDetection { .. })
        ));

        let result = EnemyController::with_waypoints(EnemyAIConfig::default(), Vec::<Vec3>::new());
        assert!(matches!(result, Err(ConfigError::EmptyPatrolRoute)));
    }

    #[test]
    fn test_config_from_json_uses_defaults_for_missing_fields() {
        let json = r#"{ "detection_range": 15.0, "attack_cooldown": 0.75, "chase_speed": 4.5 }"#;
        let config: EnemyAIConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.detection_range, 15.0);
        assert_eq!(config.attack_cooldown, 0.75);
        assert_eq!(config.chase_speed, Some(4.5));
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.arrival_tolerance, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NotPositive {
            field: "idle_duration",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "idle_duration must be a finite positive number, got -2"
        );
        assert_eq!(
            ConfigError::EmptyPatrolRoute.to_string(),
            "patrol route must contain at least one waypoint"
        );
    }
}
