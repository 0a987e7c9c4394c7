//! Facing: куда повернуть актора и с какой скоростью
//!
//! AI выдаёт только направление + blend rate.
//! Сам slerp применяет presentation слой (или FacingPlugin в headless режиме).

use bevy::prelude::*;

/// Направления короче этого (квадрат длины) считаются вырожденными
pub const MIN_FACING_SQR_MAGNITUDE: f32 = 0.01;

/// Запрос поворота в горизонтальной плоскости
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct FacingRequest {
    /// Направление взгляда (y == 0, не нормализовано)
    pub direction: Vec3,
    /// Доля slerp за этот tick (delta * rotation_slerp_rate)
    pub slerp_rate: f32,
}

impl FacingRequest {
    /// Построить запрос из сырого направления
    ///
    /// Вертикаль обнуляется. None если направление вырождено
    /// (уже смотрим на цель или направление не определено).
    pub fn toward(direction: Vec3, delta: f32, rotation_slerp_rate: f32) -> Option<Self> {
        let flat = Vec3::new(direction.x, 0.0, direction.z);

        if flat.length_squared() < MIN_FACING_SQR_MAGNITUDE {
            return None;
        }

        Some(Self {
            direction: flat,
            slerp_rate: delta * rotation_slerp_rate,
        })
    }

    /// Целевая ориентация: forward (-Z) смотрит вдоль direction, up = +Y
    pub fn target_rotation(&self) -> Quat {
        Quat::from_rotation_y(f32::atan2(-self.direction.x, -self.direction.z))
    }

    /// Один шаг shortest-arc slerp от текущей ориентации к целевой
    pub fn apply(&self, current: Quat) -> Quat {
        current.slerp(self.target_rotation(), self.slerp_rate.clamp(0.0, 1.0))
    }
}

/// Текущий facing запрос врага (None = не поворачиваться)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FacingIntent {
    pub request: Option<FacingRequest>,
}
