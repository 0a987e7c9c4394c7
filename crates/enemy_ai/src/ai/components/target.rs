//! Tracked target: кого видит/преследует враг

use bevy::prelude::*;

/// Цель врага (обычно игрок)
///
/// Host резолвит цель сам (tag lookup, spawn order) и вешает компонент.
/// Без ChaseTarget (или если у цели нет Transform) контроллер не тикается.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ChaseTarget {
    pub entity: Entity,
}

impl ChaseTarget {
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }
}
