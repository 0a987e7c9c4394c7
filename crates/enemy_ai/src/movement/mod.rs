//! Movement domain: headless stand-ins для navigation collaborator
//!
//! Содержит:
//! - SimpleNavigation: прямолинейное движение к MovementIntent.destination + PathFeedback
//! - Wanderer: случайное блуждание цели (детерминированный RNG)
//!
//! В игре navigation делает движок (navmesh), эти системы: для headless симуляции и тестов.

use bevy::prelude::*;

use crate::ai::AISet;

pub mod navigation;
pub mod wander;

// Re-export all components and systems
pub use navigation::*;
pub use wander::*;

/// Headless navigation Plugin
///
/// Работает после FSM (AISet::Presentation), чтобы PathFeedback
/// следующего tick отражал уже новый MovementIntent.
pub struct SimpleNavigationPlugin;

impl Plugin for SimpleNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (follow_movement_intents, wander_targets).in_set(AISet::Presentation),
        );
    }
}
