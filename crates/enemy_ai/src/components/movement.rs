//! Movement компоненты: intent для navigation collaborator и обратная связь от него

use bevy::prelude::*;

/// Куда и как двигаться в этом тике (пишет AI, читает navigation)
///
/// Архитектура:
/// - EnemyController выдаёт MovementIntent каждый tick
/// - Navigation collaborator строит путь до destination и двигает актора
/// - stopped == true → сбросить путь и стоять (destination всегда None)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementIntent {
    /// Точка назначения (world coordinates), None = путь сброшен
    pub destination: Option<Vec3>,
    /// Скорость (m/s), None = скорость navigation агента по умолчанию
    pub speed: Option<f32>,
    /// Стоять на месте
    pub stopped: bool,
    /// На каком расстоянии от destination агент останавливается
    pub stopping_distance: f32,
}

impl Default for MovementIntent {
    fn default() -> Self {
        Self::hold()
    }
}

impl MovementIntent {
    /// Стоять на месте, путь сброшен
    pub fn hold() -> Self {
        Self {
            destination: None,
            speed: None,
            stopped: true,
            stopping_distance: 0.0,
        }
    }

    /// Двигаться к точке
    pub fn move_to(destination: Vec3, speed: Option<f32>, stopping_distance: f32) -> Self {
        Self {
            destination: Some(destination),
            speed,
            stopped: false,
            stopping_distance,
        }
    }

    pub fn is_moving(&self) -> bool {
        !self.stopped && self.destination.is_some()
    }
}

/// Прогресс по пути (пишет navigation, читает AI в Patrol)
///
/// Default = "ничего не достигнуто": путь не pending, но remaining бесконечен,
/// поэтому патрульная точка не засчитается пока navigation не ответит.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PathFeedback {
    /// Путь ещё считается (remaining_distance недостоверен)
    pub path_pending: bool,
    /// Остаток пути до destination (метры)
    pub remaining_distance: f32,
    /// Желаемая скорость агента вдоль пути (для поворота в Patrol)
    pub desired_velocity: Vec3,
}

impl Default for PathFeedback {
    fn default() -> Self {
        Self {
            path_pending: false,
            remaining_distance: f32::INFINITY,
            desired_velocity: Vec3::ZERO,
        }
    }
}

impl PathFeedback {
    /// Путь запрошен, но ещё не построен
    pub fn pending() -> Self {
        Self {
            path_pending: true,
            ..Self::default()
        }
    }

    /// Идём по пути
    pub fn en_route(remaining_distance: f32, desired_velocity: Vec3) -> Self {
        Self {
            path_pending: false,
            remaining_distance,
            desired_velocity,
        }
    }

    /// Стоим в конце пути (или путь сброшен)
    pub fn arrived() -> Self {
        Self::en_route(0.0, Vec3::ZERO)
    }

    /// Достигнута ли точка с данным допуском
    pub fn has_arrived(&self, tolerance: f32) -> bool {
        !self.path_pending && self.remaining_distance <= tolerance
    }
}
