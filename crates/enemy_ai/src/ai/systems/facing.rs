//! Facing system: применение FacingIntent к Transform (headless / без рендера).

use bevy::prelude::*;

use crate::ai::EnemyController;
use crate::components::FacingIntent;

/// Система: поворот врагов к FacingRequest
///
/// Shortest-arc slerp на slerp_rate за tick, только вокруг Y.
/// Хост с собственным presentation слоем (анимация, физика) эту систему не подключает.
pub fn apply_facing_requests(mut enemies: Query<(&FacingIntent, &mut Transform), With<EnemyController>>) {
    for (facing, mut transform) in enemies.iter_mut() {
        let Some(request) = facing.request else {
            continue;
        };

        transform.rotation = request.apply(transform.rotation);
    }
}
