//! Physics boundary
//!
//! Everything the world and the renderer need from a rigid-body simulation.
//! The rotation logic only ever touches gravity and the enabled flag.

use crate::rigid_body::{RigidBody, Vec2};

pub trait PhysicsEngine {
    /// Add a body; returns the id the engine assigned to it.
    fn add_body(&mut self, body: RigidBody) -> u32;

    /// Remove a body by id. Returns false if no such body exists.
    fn remove_body(&mut self, id: u32) -> bool;

    /// All bodies, static ones included.
    fn bodies(&self) -> &[RigidBody];

    /// Advance the simulation by one fixed step. No-op while disabled.
    fn step(&mut self);

    fn gravity(&self) -> Vec2;

    fn set_gravity(&mut self, gravity: Vec2);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Remove every body.
    fn clear(&mut self);
}
