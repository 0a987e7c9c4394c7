//! Конфигурация врага: дистанции, таймеры, патрульный маршрут.
//!
//! Всё проверяется один раз при создании EnemyController.
//! tick() считает что конфиг валиден и не перепроверяет его.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Насколько navigation collaborator останавливается ближе attack_range (метры)
pub const STOPPING_DISTANCE_MARGIN: f32 = 0.1;

/// Ошибка конструирования контроллера (невалидный конфиг или маршрут)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a finite non-negative number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("attack_range ({attack_range}) must be smaller than detection_range ({detection_range})")]
    AttackRangeOutsideDetection {
        attack_range: f32,
        detection_range: f32,
    },

    #[error("patrol route must contain at least one waypoint")]
    EmptyPatrolRoute,

    #[error("patrol waypoint #{index} is not a finite point: {point}")]
    InvalidWaypoint { index: usize, point: Vec3 },
}

/// Параметры поведения врага
///
/// Загружается из data файлов хоста (serde), недостающие поля берутся из Default.
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyAIConfig {
    /// Радиус обнаружения цели (метры)
    pub detection_range: f32,
    /// Радиус атаки (метры), строго меньше detection_range
    pub attack_range: f32,
    /// Сколько стоим в Idle перед патрулём (секунды)
    pub idle_duration: f32,
    /// Пауза между атаками (секунды)
    pub attack_cooldown: f32,
    /// Скорость ходьбы по патрулю (m/s)
    pub patrol_speed: f32,
    /// Скорость погони; None = скорость navigation агента по умолчанию
    pub chase_speed: Option<f32>,
    /// Множитель slerp поворота (rate = delta * rotation_slerp_rate)
    pub rotation_slerp_rate: f32,
    /// remaining_distance при которой waypoint считается достигнутым
    pub arrival_tolerance: f32,
}

impl Default for EnemyAIConfig {
    fn default() -> Self {
        Self {
            detection_range: 10.0,
            attack_range: 2.0,
            idle_duration: 2.0,
            attack_cooldown: 1.5,
            patrol_speed: 1.0,
            chase_speed: None,
            rotation_slerp_rate: 8.0,
            arrival_tolerance: 0.3,
        }
    }
}

impl EnemyAIConfig {
    /// Проверка контракта конфига (fail fast при создании контроллера)
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("detection_range", self.detection_range)?;
        require_positive("attack_range", self.attack_range)?;
        require_positive("idle_duration", self.idle_duration)?;
        require_positive("attack_cooldown", self.attack_cooldown)?;
        require_positive("patrol_speed", self.patrol_speed)?;
        if let Some(chase_speed) = self.chase_speed {
            require_positive("chase_speed", chase_speed)?;
        }
        require_non_negative("rotation_slerp_rate", self.rotation_slerp_rate)?;
        require_non_negative("arrival_tolerance", self.arrival_tolerance)?;

        if self.attack_range >= self.detection_range {
            return Err(ConfigError::AttackRangeOutsideDetection {
                attack_range: self.attack_range,
                detection_range: self.detection_range,
            });
        }

        Ok(())
    }

    /// Дистанция остановки для navigation: чуть внутри attack_range
    pub fn stopping_distance(&self) -> f32 {
        (self.attack_range - STOPPING_DISTANCE_MARGIN).max(0.0)
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Упорядоченный патрульный маршрут (минимум одна точка)
///
/// Patrol достижим из Idle по таймеру всегда, поэтому пустой маршрут запрещён.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(waypoints: impl Into<Vec<Vec3>>) -> Result<Self, ConfigError> {
        let waypoints = waypoints.into();

        if waypoints.is_empty() {
            return Err(ConfigError::EmptyPatrolRoute);
        }

        if let Some((index, point)) = waypoints
            .iter()
            .enumerate()
            .find(|(_, point)| !point.is_finite())
        {
            return Err(ConfigError::InvalidWaypoint {
                index,
                point: *point,
            });
        }

        Ok(Self { waypoints })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Никогда не true (инвариант конструктора), нужен для clippy::len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint по индексу (индекс берётся по модулю длины маршрута)
    pub fn waypoint(&self, index: usize) -> Vec3 {
        self.waypoints[index % self.waypoints.len()]
    }

    /// Индекс следующей точки с wrap-around
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }
}
