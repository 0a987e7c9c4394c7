//! AI components

pub mod config;
pub mod controller;
pub mod target;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod config_tests;

// Re-export all components
pub use config::*;
pub use controller::*;
pub use target::*;
