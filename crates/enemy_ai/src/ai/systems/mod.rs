//! AI systems (decision + presentation)

pub mod controller;
pub mod facing;

// Re-export all systems
pub use controller::*;
pub use facing::*;
