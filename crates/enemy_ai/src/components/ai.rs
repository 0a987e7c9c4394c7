//! AI компоненты: FSM контроллер, конфиг, цель

// Живут в crate::ai (components/), здесь только re-export для единообразия
pub use crate::ai::{ChaseTarget, EnemyAIConfig, EnemyController, EnemyMode, PatrolRoute};
