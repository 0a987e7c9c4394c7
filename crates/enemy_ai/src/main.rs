//! Headless симуляция врагов
//!
//! Цель (Wanderer) бродит по арене, три врага патрулируют и реагируют на неё.
//! Без рендера: прямолинейная navigation, статистика режимов в stdout.

use bevy::prelude::*;
use enemy_ai::{
    create_headless_app, ChaseTarget, EnemyAIConfig, EnemyAttackTriggered, EnemyController,
    EnemyMode, SimpleNavigationPlugin, SimulationPlugin, Wanderer,
};

/// Счётчик ударов за прогон
#[derive(Resource, Default)]
struct AttackCounter {
    total: usize,
}

fn count_attacks(mut events: EventReader<EnemyAttackTriggered>, mut counter: ResMut<AttackCounter>) {
    counter.total += events.read().count();
}

fn main() {
    let seed = 42;
    println!("Starting enemy AI headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, SimpleNavigationPlugin))
        .init_resource::<AttackCounter>()
        .add_systems(FixedPostUpdate, count_attacks);

    let player = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::ZERO),
            Wanderer::new(Vec3::ZERO, 25.0, 2.5),
        ))
        .id();

    let routes = [
        vec![Vec3::new(-20.0, 0.0, -20.0), Vec3::new(20.0, 0.0, -20.0)],
        vec![Vec3::new(20.0, 0.0, 20.0), Vec3::new(20.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 20.0)],
        vec![Vec3::new(-25.0, 0.0, 15.0)],
    ];

    for route in routes {
        let start = route[0];
        let controller = match EnemyController::with_waypoints(EnemyAIConfig::default(), route) {
            Ok(controller) => controller,
            Err(err) => {
                eprintln!("Invalid enemy config: {}", err);
                std::process::exit(1);
            }
        };

        app.world_mut().spawn((
            Transform::from_translation(start),
            controller,
            ChaseTarget::new(player),
        ));
    }

    // 3000 тиков = 50 секунд при 60Hz
    for tick in 0..3000 {
        app.update();

        if tick % 300 == 0 {
            let world = app.world_mut();
            let mut query = world.query::<&EnemyController>();
            let modes: Vec<EnemyMode> = query.iter(world).map(|c| c.mode()).collect();
            println!("Tick {}: modes {:?}", tick, modes);
        }
    }

    let attacks = app.world().resource::<AttackCounter>().total;
    println!("Simulation complete! {} attacks", attacks);
}
