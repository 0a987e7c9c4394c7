//! Animation сигналы (читает animation collaborator, AI никогда не читает обратно)

use bevy::prelude::*;

/// Флаги анимации врага
///
/// Инвариант: walking и running никогда не true одновременно.
/// attack_triggered edge-triggered, true ровно один tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AnimationSignal {
    pub walking: bool,
    pub running: bool,
    pub attack_triggered: bool,
}

impl AnimationSignal {
    /// Стоим (Idle / Attack)
    pub fn still() -> Self {
        Self::default()
    }

    pub fn walk() -> Self {
        Self {
            walking: true,
            ..Self::default()
        }
    }

    pub fn run() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    pub fn with_attack(mut self, triggered: bool) -> Self {
        self.attack_triggered = triggered;
        self
    }
}
