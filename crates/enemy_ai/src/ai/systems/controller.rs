//! Enemy FSM system: тикает EnemyController каждый fixed step.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::ai::{ChaseTarget, EnemyAttackTriggered, EnemyController, EnemyModeChanged};
use crate::components::{AnimationSignal, FacingIntent, MovementIntent, PathFeedback};

/// Враги без резолвнутой цели (контроллер на паузе, warning уже выведен)
#[derive(Resource, Debug, Default)]
pub struct PausedEnemies {
    entities: HashSet<Entity>,
}

impl PausedEnemies {
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Система: tick всех EnemyController
///
/// Для каждого врага:
/// - резолвит ChaseTarget → Transform цели (нет цели = контроллер не тикается,
///   intents сбрасываются в hold/still)
/// - tick() с Time<Fixed> delta
/// - пишет MovementIntent / FacingIntent / AnimationSignal только при изменении
///   (иначе Changed<T> у collaborators срабатывает каждый кадр)
/// - EnemyModeChanged на переход, EnemyAttackTriggered на удар
pub fn tick_enemy_controllers(
    mut enemies: Query<(
        Entity,
        &mut EnemyController,
        &Transform,
        Option<&ChaseTarget>,
        &PathFeedback,
        &mut MovementIntent,
        &mut FacingIntent,
        &mut AnimationSignal,
    )>,
    targets: Query<&Transform>,
    mut mode_events: EventWriter<EnemyModeChanged>,
    mut attack_events: EventWriter<EnemyAttackTriggered>,
    mut paused: ResMut<PausedEnemies>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    // Враги, despawned без цели
    paused.entities.retain(|entity| enemies.contains(*entity));

    for (entity, mut controller, transform, chase_target, path, mut movement, mut facing, mut animation) in
        enemies.iter_mut()
    {
        // Precondition: без цели дистанцию не посчитать
        let Some(target) = chase_target else {
            if paused.entities.insert(entity) {
                crate::log_warning(&format!(
                    "AI: {:?} has no ChaseTarget, controller paused",
                    entity
                ));
            }
            hold_without_target(&mut movement, &mut facing, &mut animation);
            continue;
        };

        let Ok(target_transform) = targets.get(target.entity) else {
            if paused.entities.insert(entity) {
                crate::log_warning(&format!(
                    "AI: {:?} target {:?} has no Transform (despawned?), controller paused",
                    entity, target.entity
                ));
            }
            hold_without_target(&mut movement, &mut facing, &mut animation);
            continue;
        };
        paused.entities.remove(&entity);

        let output = controller.tick(
            delta,
            transform.translation,
            target_transform.translation,
            path,
        );

        if let Some(transition) = output.transition {
            crate::log(&format!(
                "AI: {:?} {} → {}",
                entity,
                transition.from.as_str(),
                transition.to.as_str()
            ));
            mode_events.write(EnemyModeChanged {
                entity,
                from: transition.from,
                to: transition.to,
            });
        }

        if output.attack_triggered() {
            crate::log_info(&format!("⚔️ AI: enemy {:?} attacks target {:?}", entity, target.entity));
            attack_events.write(EnemyAttackTriggered {
                attacker: entity,
                target: target.entity,
            });
        }

        if *movement != output.movement {
            *movement = output.movement;
        }
        if facing.request != output.facing {
            facing.request = output.facing;
        }
        if *animation != output.animation {
            *animation = output.animation;
        }
    }
}

/// Без цели враг стоит: старые intents (погоня к исчезнувшей цели) не исполняются
fn hold_without_target(
    movement: &mut Mut<MovementIntent>,
    facing: &mut Mut<FacingIntent>,
    animation: &mut Mut<AnimationSignal>,
) {
    if **movement != MovementIntent::hold() {
        **movement = MovementIntent::hold();
    }
    if facing.request.is_some() {
        facing.request = None;
    }
    if **animation != AnimationSignal::still() {
        **animation = AnimationSignal::still();
    }
}
