use crate::engine::PhysicsEngine;
use crate::rigid_body::{RigidBody, Vec2};

use super::collision::{collides_at, furthest_free};

/// Gravity acceleration per step at unit gravity (pixels / step²)
pub const DEFAULT_GRAVITY_STRENGTH: f64 = 0.3;

/// Per-axis speed clamp (pixels / step)
pub const DEFAULT_MAX_SPEED: f64 = 10.0;

/// Shortest sub-step length (pixels); bounds the sub-step count for tiny bodies
const MIN_SUBSTEP: f64 = 0.5;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec2,
    gravity_strength: f64,
    max_speed: f64,
    enabled: bool,
    steps: u64,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self::with_tuning(DEFAULT_GRAVITY_STRENGTH, DEFAULT_MAX_SPEED)
    }

    pub fn with_tuning(gravity_strength: f64, max_speed: f64) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: Vec2::new(0.0, 1.0),
            gravity_strength,
            max_speed: max_speed.abs(),
            enabled: true,
            steps: 0,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Steps actually simulated (disabled steps are not counted)
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn integrate(&mut self, index: usize) {
        let accel = self.gravity * self.gravity_strength;
        let max = self.max_speed;

        let body = &mut self.bodies[index];
        body.velocity = body.velocity + accel;
        body.velocity.x = body.velocity.x.clamp(-max, max);
        body.velocity.y = body.velocity.y.clamp(-max, max);

        // Sub-step so no single move is longer than the body's half extent;
        // otherwise small bodies skip over thin walls.
        let extent = body.half_width.min(body.half_height).max(MIN_SUBSTEP);
        let travel = body.velocity.x.abs().max(body.velocity.y.abs());
        let substeps = (travel / extent).ceil().max(1.0) as u32;
        let delta = body.velocity * (1.0 / substeps as f64);

        // Resolve per-axis (cheap + deterministic).
        let mut pos = body.pos;
        let mut blocked_x = false;
        let mut blocked_y = false;

        for _ in 0..substeps {
            if !blocked_x {
                let try_x = Vec2::new(pos.x + delta.x, pos.y);
                if collides_at(&self.bodies, index, try_x) {
                    pos = furthest_free(&self.bodies, index, pos, try_x);
                    blocked_x = true;
                } else {
                    pos = try_x;
                }
            }
            if !blocked_y {
                let try_y = Vec2::new(pos.x, pos.y + delta.y);
                if collides_at(&self.bodies, index, try_y) {
                    pos = furthest_free(&self.bodies, index, pos, try_y);
                    blocked_y = true;
                } else {
                    pos = try_y;
                }
            }
            if blocked_x && blocked_y {
                break;
            }
        }

        let body = &mut self.bodies[index];
        body.pos = pos;

        if blocked_x {
            body.velocity.x = -body.velocity.x * body.restitution;
            body.velocity.y *= 1.0 - body.friction;
        }
        if blocked_y {
            body.velocity.y = -body.velocity.y * body.restitution;
            body.velocity.x *= 1.0 - body.friction;
        }
    }
}

impl PhysicsEngine for RigidBodySystem {
    fn add_body(&mut self, mut body: RigidBody) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        body.active = true;
        self.bodies.push(body);
        id
    }

    fn remove_body(&mut self, id: u32) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Main update (one fixed step).
    fn step(&mut self) {
        if !self.enabled {
            return;
        }

        for index in 0..self.bodies.len() {
            let body = &self.bodies[index];
            if !body.active || body.is_static {
                continue;
            }
            self.integrate(index);
        }

        self.steps += 1;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
