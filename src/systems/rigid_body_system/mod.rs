//! RigidBodySystem - Minimal rigid bodies behind the `PhysicsEngine` boundary
//!
//! This is intentionally simple (no SAT / no impulse solver).
//! Current behavior:
//! - Axis-aligned rectangles, no rotation.
//! - Gravity integration with a speed clamp.
//! - Per-axis collision against every other body, resolved by moving flush
//!   to the obstacle.

mod collision;
mod system;

pub use system::{RigidBodySystem, DEFAULT_GRAVITY_STRENGTH, DEFAULT_MAX_SPEED};
