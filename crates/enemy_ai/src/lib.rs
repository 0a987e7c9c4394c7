//! Enemy AI Core
//!
//! FSM поведения врага на Bevy 0.16 ECS.
//! AI решает ЧТО делать (движение, поворот, анимация, удар),
//! КАК это исполнить решают collaborators хоста:
//! - navigation (navmesh): MovementIntent → PathFeedback
//! - animation: AnimationSignal
//! - combat: EnemyAttackTriggered

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod logger;
pub mod movement;

// Re-export базовых компонентов для удобства
pub use ai::{
    AIPlugin, AISet, ChaseTarget, ConfigError, EnemyAIConfig, EnemyAttackTriggered, EnemyController,
    EnemyMode, EnemyModeChanged, FacingPlugin, ModeTransition, PatrolRoute, PausedEnemies, TickOutput,
};
pub use components::{AnimationSignal, FacingIntent, FacingRequest, MovementIntent, PathFeedback};
pub use logger::{log, log_error, log_info, log_warning};
pub use movement::{SimpleNavigationPlugin, Wanderer};

/// Частота simulation tick
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (FSM + применение facing)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick
        app.insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));

        // Не перетираем seed если его уже задал create_headless_app
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_plugins((AIPlugin, FacingPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый app.update() = ровно один fixed step
/// (кроме самого первого update, который только инициализирует часы).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты сортируются по Entity index и сериализуются через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
