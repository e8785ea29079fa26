//! Tumble Engine - rotating-gravity puzzle core in WASM
//!
//! The player turns the whole level a quarter turn at a time and gravity
//! follows. Physics pauses while the canvas animates and resumes with the
//! new gravity once the canvas has landed on its target angle.
//!
//! Architecture:
//! - core/        - logging macros, clock, Direction, Interpolation
//! - domain/      - levels and configuration (serde JSON)
//! - systems/     - physics boundary + built-in rigid body system
//! - simulation/  - Renderer, World, GameManager, wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod error;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps short internal paths working)
pub use systems::engine;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Tumble engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Direction, Interpolation};
pub use domain::{BodySpec, GameConfig, Level, LevelBundle, RenderConfig};
pub use engine::PhysicsEngine;
pub use error::GameError;
pub use rigid_body::{RigidBody, Vec2};
pub use rigid_body_system::RigidBodySystem;
pub use simulation::{
    Canvas2d, DrawCommand, Game, GameManager, RecordingCanvas, Renderer, RotationState, World,
};
