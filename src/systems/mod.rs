//! Physics boundary and the built-in rigid body system

pub mod engine;
pub mod rigid_body;
pub mod rigid_body_system;
