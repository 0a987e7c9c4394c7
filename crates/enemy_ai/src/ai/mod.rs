//! AI decision-making module
//!
//! FSM врага: Idle → Patrol → Chase → Attack, по дистанции до цели и таймерам.
//! AI только решает ЧТО делать: movement/facing/animation intents + события,
//! navigation, анимация и урон: внешние collaborators.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::{EnemyAttackTriggered, EnemyModeChanged};
pub use systems::PausedEnemies;

/// Порядок AI систем внутри FixedUpdate
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AISet {
    /// Тик FSM, запись intents
    Decision,
    /// Применение intents (facing, headless navigation)
    Presentation,
}

/// AI Plugin
///
/// Регистрирует события и FSM систему в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. AISet::Decision: tick_enemy_controllers
/// 2. AISet::Presentation: системы других плагинов (FacingPlugin, SimpleNavigationPlugin)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EnemyModeChanged>()
            .add_event::<EnemyAttackTriggered>()
            .register_type::<EnemyAIConfig>()
            .register_type::<ChaseTarget>()
            .init_resource::<PausedEnemies>()
            .configure_sets(FixedUpdate, (AISet::Decision, AISet::Presentation).chain())
            .add_systems(
                FixedUpdate,
                systems::tick_enemy_controllers.in_set(AISet::Decision),
            );
    }
}

/// Facing Plugin
///
/// Применяет FacingIntent к Transform.rotation после решения FSM.
pub struct FacingPlugin;

impl Plugin for FacingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            systems::apply_facing_requests.in_set(AISet::Presentation),
        );
    }
}
