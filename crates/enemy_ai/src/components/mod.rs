//! ECS Components для врагов
//!
//! Организация по доменам:
//! - movement: MovementIntent (AI → navigation), PathFeedback (navigation → AI)
//! - facing: FacingRequest / FacingIntent (AI → presentation)
//! - animation: AnimationSignal (AI → animation)
//! - ai: EnemyController, EnemyAIConfig, ChaseTarget (re-export из crate::ai)

pub mod ai;
pub mod animation;
pub mod facing;
pub mod movement;

// Re-exports для удобного импорта
pub use ai::*;
pub use animation::*;
pub use facing::*;
pub use movement::*;
