//! Wanderer: цель, которая бродит вокруг дома (headless "игрок").

use bevy::prelude::*;
use rand::Rng;

use super::navigation::step_towards;
use crate::DeterministicRng;

/// Случайное блуждание в радиусе от home
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Wanderer {
    /// Центр блуждания
    pub home: Vec3,
    /// Радиус блуждания (метры)
    pub radius: f32,
    /// Скорость (m/s)
    pub speed: f32,
    /// Текущая точка (генерируется когда достигнута предыдущая)
    pub destination: Option<Vec3>,
}

impl Wanderer {
    pub fn new(home: Vec3, radius: f32, speed: f32) -> Self {
        Self {
            home,
            radius,
            speed,
            destination: None,
        }
    }
}

/// Дистанция при которой точка блуждания считается достигнутой
const WANDER_ARRIVAL: f32 = 0.2;

/// Система: блуждание Wanderer
///
/// Новая точка: случайный угол + дистанция от home (DeterministicRng, детерминизм по seed).
pub fn wander_targets(
    mut wanderers: Query<(&mut Wanderer, &mut Transform)>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut wanderer, mut transform) in wanderers.iter_mut() {
        let destination = match wanderer.destination {
            Some(destination) => destination,
            None => {
                let angle = rng.rng.gen::<f32>() * std::f32::consts::TAU;
                let distance = rng.rng.gen::<f32>() * wanderer.radius;
                let offset = Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);
                let destination = wanderer.home + offset;
                wanderer.destination = Some(destination);
                destination
            }
        };

        let feedback = step_towards(&mut transform.translation, destination, wanderer.speed, 0.0, delta);
        if feedback.has_arrived(WANDER_ARRIVAL) {
            wanderer.destination = None;
        }
    }
}
