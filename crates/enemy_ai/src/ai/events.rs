//! AI Events: уведомления для внешних collaborators
//!
//! EnemyAttackTriggered → combat/damage слой (урон считает он, не AI)
//! EnemyModeChanged → animation/debug слои

use bevy::prelude::*;

use super::EnemyMode;

/// Враг нанёс удар (cooldown истёк в Attack)
///
/// Ровно одно событие на срабатывание cooldown.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyAttackTriggered {
    /// Кто бьёт
    pub attacker: Entity,
    /// Кого (ChaseTarget на момент удара)
    pub target: Entity,
}

/// Враг сменил режим FSM
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyModeChanged {
    pub entity: Entity,
    pub from: EnemyMode,
    pub to: EnemyMode,
}
