//! EnemyController: FSM врага (Idle → Patrol → Chase → Attack).
//!
//! Один контроллер на врага. tick() вызывается раз в simulation step:
//! 1. guards текущего режима сверху вниз, первый сработавший побеждает
//! 2. максимум один переход за tick
//! 3. выходы (movement/facing/animation) считаются для уже нового режима

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{ConfigError, EnemyAIConfig, PatrolRoute};
use crate::components::{AnimationSignal, FacingIntent, FacingRequest, MovementIntent, PathFeedback};

/// Режим поведения врага (ровно один активен)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum EnemyMode {
    /// Стоим, ждём idle_duration
    #[default]
    Idle,
    /// Идём к текущей патрульной точке
    Patrol,
    /// Бежим к цели
    Chase,
    /// Стоим рядом с целью, бьём по cooldown
    Attack,
}

impl EnemyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyMode::Idle => "Idle",
            EnemyMode::Patrol => "Patrol",
            EnemyMode::Chase => "Chase",
            EnemyMode::Attack => "Attack",
        }
    }

    /// Рёбра графа переходов
    pub fn can_transition_to(self, next: EnemyMode) -> bool {
        matches!(
            (self, next),
            (EnemyMode::Idle, EnemyMode::Chase)
                | (EnemyMode::Idle, EnemyMode::Patrol)
                | (EnemyMode::Patrol, EnemyMode::Chase)
                | (EnemyMode::Patrol, EnemyMode::Idle)
                | (EnemyMode::Chase, EnemyMode::Patrol)
                | (EnemyMode::Chase, EnemyMode::Attack)
                | (EnemyMode::Attack, EnemyMode::Chase)
        )
    }
}

/// Переход, случившийся в этом tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: EnemyMode,
    pub to: EnemyMode,
}

/// Результат одного tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub movement: MovementIntent,
    pub facing: Option<FacingRequest>,
    pub animation: AnimationSignal,
    pub transition: Option<ModeTransition>,
}

impl TickOutput {
    /// Атака сработала в этом tick (уведомить combat collaborator)
    pub fn attack_triggered(&self) -> bool {
        self.animation.attack_triggered
    }
}

/// FSM врага
///
/// Конфиг и маршрут неизменны после new(). Таймеры сбрасываются в 0
/// при входе в свой режим (idle_timer → Idle, attack_timer → Attack).
///
/// Без Reflect: собрать контроллер можно только через new().
#[derive(Component, Debug, Clone)]
#[require(MovementIntent, FacingIntent, AnimationSignal, PathFeedback)]
pub struct EnemyController {
    config: EnemyAIConfig,
    route: PatrolRoute,
    mode: EnemyMode,
    idle_timer: f32,
    attack_timer: f32,
    patrol_cursor: usize,
}

impl EnemyController {
    /// Создать контроллер (стартует в Idle)
    ///
    /// Невалидный конфиг отклоняется здесь, tick() его не перепроверяет.
    pub fn new(config: EnemyAIConfig, route: PatrolRoute) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            route,
            mode: EnemyMode::Idle,
            idle_timer: 0.0,
            attack_timer: 0.0,
            patrol_cursor: 0,
        })
    }

    /// Shortcut: конфиг + список точек маршрута
    pub fn with_waypoints(
        config: EnemyAIConfig,
        waypoints: impl Into<Vec<Vec3>>,
    ) -> Result<Self, ConfigError> {
        Self::new(config, PatrolRoute::new(waypoints)?)
    }

    pub fn mode(&self) -> EnemyMode {
        self.mode
    }

    pub fn idle_timer(&self) -> f32 {
        self.idle_timer
    }

    pub fn attack_timer(&self) -> f32 {
        self.attack_timer
    }

    pub fn patrol_cursor(&self) -> usize {
        self.patrol_cursor
    }

    pub fn config(&self) -> &EnemyAIConfig {
        &self.config
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn current_waypoint(&self) -> Vec3 {
        self.route.waypoint(self.patrol_cursor)
    }

    /// Один simulation step
    ///
    /// Preconditions (контракт вызывающего): delta >= 0, цель существует,
    /// позиции конечны. `path` читается только в Patrol.
    pub fn tick(
        &mut self,
        delta: f32,
        self_position: Vec3,
        target_position: Vec3,
        path: &PathFeedback,
    ) -> TickOutput {
        debug_assert!(delta >= 0.0, "negative delta time: {}", delta);
        debug_assert!(
            self_position.is_finite() && target_position.is_finite(),
            "non-finite positions: self {:?}, target {:?}",
            self_position,
            target_position
        );

        let distance = self_position.distance(target_position);

        let (next_mode, attack_triggered) = match self.mode {
            EnemyMode::Idle => (self.evaluate_idle(delta, distance), false),
            EnemyMode::Patrol => (self.evaluate_patrol(distance, path), false),
            EnemyMode::Chase => (self.evaluate_chase(distance), false),
            EnemyMode::Attack => self.evaluate_attack(delta, distance),
        };

        let transition = next_mode.map(|to| self.change_mode(to));

        let (movement, facing, animation) =
            self.mode_output(delta, self_position, target_position, path);

        TickOutput {
            movement,
            facing,
            animation: animation.with_attack(attack_triggered),
            transition,
        }
    }

    // ---------------- GUARDS ----------------

    fn evaluate_idle(&mut self, delta: f32, distance: f32) -> Option<EnemyMode> {
        // Обнаружение важнее таймера
        if distance <= self.config.detection_range {
            return Some(EnemyMode::Chase);
        }

        self.idle_timer += delta;
        if self.idle_timer >= self.config.idle_duration {
            self.idle_timer = 0.0;
            return Some(EnemyMode::Patrol);
        }

        None
    }

    fn evaluate_patrol(&mut self, distance: f32, path: &PathFeedback) -> Option<EnemyMode> {
        if distance <= self.config.detection_range {
            return Some(EnemyMode::Chase);
        }

        if path.has_arrived(self.config.arrival_tolerance) {
            self.patrol_cursor = self.route.next_index(self.patrol_cursor);
            return Some(EnemyMode::Idle);
        }

        None
    }

    fn evaluate_chase(&self, distance: f32) -> Option<EnemyMode> {
        // Потеря цели проверяется раньше входа в атаку
        if distance > self.config.detection_range {
            return Some(EnemyMode::Patrol);
        }

        if distance <= self.config.attack_range {
            return Some(EnemyMode::Attack);
        }

        None
    }

    /// Cooldown считается до проверки дистанции: удар в tick выхода из радиуса
    /// всё равно засчитывается.
    fn evaluate_attack(&mut self, delta: f32, distance: f32) -> (Option<EnemyMode>, bool) {
        self.attack_timer += delta;

        // Сброс в 0, остаток не переносится
        let triggered = self.attack_timer >= self.config.attack_cooldown;
        if triggered {
            self.attack_timer = 0.0;
        }

        if distance > self.config.attack_range {
            return (Some(EnemyMode::Chase), triggered);
        }

        (None, triggered)
    }

    fn change_mode(&mut self, to: EnemyMode) -> ModeTransition {
        let from = self.mode;
        self.mode = to;

        match to {
            EnemyMode::Idle => self.idle_timer = 0.0,
            EnemyMode::Attack => self.attack_timer = 0.0,
            EnemyMode::Patrol | EnemyMode::Chase => {}
        }

        ModeTransition { from, to }
    }

    // ---------------- OUTPUTS ----------------

    fn mode_output(
        &self,
        delta: f32,
        self_position: Vec3,
        target_position: Vec3,
        path: &PathFeedback,
    ) -> (MovementIntent, Option<FacingRequest>, AnimationSignal) {
        let slerp = self.config.rotation_slerp_rate;
        let to_target = target_position - self_position;

        match self.mode {
            EnemyMode::Idle => (MovementIntent::hold(), None, AnimationSignal::still()),

            EnemyMode::Patrol => (
                // Патруль идёт точно в точку: stopping distance только для погони
                MovementIntent::move_to(self.current_waypoint(), Some(self.config.patrol_speed), 0.0),
                // Смотрим вдоль пути (desired velocity), а не прямо на точку
                FacingRequest::toward(path.desired_velocity, delta, slerp),
                AnimationSignal::walk(),
            ),

            EnemyMode::Chase => (
                MovementIntent::move_to(
                    target_position,
                    self.config.chase_speed,
                    self.config.stopping_distance(),
                ),
                FacingRequest::toward(to_target, delta, slerp),
                AnimationSignal::run(),
            ),

            EnemyMode::Attack => (
                MovementIntent::hold(),
                FacingRequest::toward(to_target, delta, slerp),
                AnimationSignal::still(),
            ),
        }
    }
}
