//! Прямолинейная navigation (без navmesh и коллизий).

use bevy::prelude::*;

use crate::components::{MovementIntent, PathFeedback};

/// Скорость когда MovementIntent.speed == None (m/s)
pub const DEFAULT_NAVIGATION_SPEED: f32 = 3.5;

/// Система: движение к MovementIntent.destination по прямой
///
/// - stopped / нет destination → путь сброшен, PathFeedback::arrived()
/// - иначе шаг speed * delta, но не ближе stopping_distance
/// - path_pending всегда false (путь "строится" мгновенно)
pub fn follow_movement_intents(
    mut agents: Query<(&MovementIntent, &mut PathFeedback, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (intent, mut feedback, mut transform) in agents.iter_mut() {
        let new_feedback = match intent.destination {
            Some(destination) if !intent.stopped => {
                let speed = intent.speed.unwrap_or(DEFAULT_NAVIGATION_SPEED);
                step_towards(&mut transform.translation, destination, speed, intent.stopping_distance, delta)
            }
            _ => PathFeedback::arrived(),
        };

        if *feedback != new_feedback {
            *feedback = new_feedback;
        }
    }
}

/// Один шаг к destination, возвращает прогресс после шага
pub fn step_towards(
    position: &mut Vec3,
    destination: Vec3,
    speed: f32,
    stopping_distance: f32,
    delta: f32,
) -> PathFeedback {
    let to_destination = destination - *position;
    let remaining = to_destination.length();

    if remaining <= stopping_distance || remaining <= f32::EPSILON {
        return PathFeedback::en_route(remaining, Vec3::ZERO);
    }

    let direction = to_destination / remaining;
    let step = (speed * delta).min(remaining - stopping_distance);
    *position += direction * step;

    let remaining_after = remaining - step;
    let desired_velocity = if remaining_after > stopping_distance {
        direction * speed
    } else {
        Vec3::ZERO
    };

    PathFeedback::en_route(remaining_after, desired_velocity)
}
