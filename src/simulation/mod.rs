//! World - one level's physics, renderer and rotation state machine
//!
//! The world only orchestrates:
//! - physics is behind `PhysicsEngine` (stepped by the Runner)
//! - drawing and the rotation animation live in the Renderer
//! - rotate() is the handshake between the two
//!
//! Rotation handshake:
//!   Idle --rotate()--> Rotating   (stepping disabled, canvas animates)
//!   Rotating --animation done--> Idle   (direction + gravity updated, stepping re-enabled)

use std::f64::consts::FRAC_PI_2;

use crate::core::Direction;
use crate::domain::{GameConfig, Level};
use crate::engine::PhysicsEngine;
use crate::error::GameError;
use crate::rigid_body::{RigidBody, Vec2};
use crate::rigid_body_system::RigidBodySystem;

#[path = "render/canvas.rs"]
mod canvas;
#[path = "render/web_canvas.rs"]
mod web_canvas;
#[path = "render/animation.rs"]
mod animation;
#[path = "render/renderer.rs"]
mod renderer;
#[path = "step/runner.rs"]
mod runner;
#[path = "init/walls.rs"]
mod walls;
#[path = "manager/manager.rs"]
mod manager;
mod facade;

pub use animation::{AnimationStep, AnimationTiming, RotationAnimation, RotationFinished, RotationTicket};
pub use canvas::{Canvas2d, DrawCommand, RecordingCanvas};
pub use facade::Game;
pub use manager::GameManager;
pub use renderer::Renderer;
pub use runner::Runner;
pub use walls::LevelFrame;
pub use web_canvas::WebCanvas;

/// Where the world is in the rotation handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationState {
    Idle,
    Rotating {
        ticket: RotationTicket,
        clockwise: bool,
    },
}

impl RotationState {
    pub fn is_rotating(&self) -> bool {
        matches!(self, RotationState::Rotating { .. })
    }
}

/// The simulation world for one level
pub struct World<C: Canvas2d, E: PhysicsEngine = RigidBodySystem> {
    engine: E,
    renderer: Renderer<C>,
    runner: Runner,
    frame: LevelFrame,

    // State
    direction: Direction,
    state: RotationState,
    gravity_enabled: bool,
}

impl<C: Canvas2d> World<C, RigidBodySystem> {
    /// Create a world for `level` using the built-in rigid body system.
    pub fn new(canvas: C, level: &Level, config: &GameConfig) -> Self {
        let engine = RigidBodySystem::with_tuning(config.gravity_strength, config.max_speed);
        Self::with_engine(canvas, engine, level, config)
    }
}

impl<C: Canvas2d, E: PhysicsEngine> World<C, E> {
    /// Create a world on top of any physics engine. The engine is cleared first.
    pub fn with_engine(canvas: C, mut engine: E, level: &Level, config: &GameConfig) -> Self {
        let frame = LevelFrame::for_canvas(canvas.width(), canvas.height(), config);

        engine.clear();
        for wall in frame.walls(config.wall_thickness).iter() {
            engine.add_body(RigidBody::from_spec(wall, 0));
        }
        for spec in level.bodies.iter() {
            engine.add_body(RigidBody::from_spec(&frame.place(spec), 0));
        }

        let direction = Direction::Down;
        engine.set_gravity(direction.to_vector());
        engine.set_enabled(true);

        let timing = AnimationTiming {
            duration_ms: config.rotation_duration_ms,
            tick_ms: config.rotation_tick_ms,
        };

        Self {
            engine,
            renderer: Renderer::new(canvas, config.render.clone(), timing),
            runner: Runner::new(config.physics_step_ms, config.max_steps_per_frame),
            frame,
            direction,
            state: RotationState::Idle,
            gravity_enabled: true,
        }
    }

    /// Starts the physics runner and the render loop.
    pub fn start(&mut self) {
        self.runner.start();
        self.renderer.run();
    }

    /// Rotate the world a quarter turn.
    ///
    /// Fails with [`GameError::AlreadyRotating`] (and changes nothing) while a
    /// rotation is in flight.
    pub fn rotate(&mut self, clockwise: bool, now_ms: f64) -> Result<RotationTicket, GameError> {
        if self.state.is_rotating() {
            console_warn!("rotation rejected: already rotating");
            return Err(GameError::AlreadyRotating);
        }

        // Freeze bodies while the canvas turns.
        self.engine.set_enabled(false);

        let delta = if clockwise { FRAC_PI_2 } else { -FRAC_PI_2 };
        let ticket = self.renderer.rotate_by(delta, now_ms);
        self.state = RotationState::Rotating { ticket, clockwise };

        console_debug!("rotation {:?} started (clockwise: {})", ticket, clockwise);
        Ok(ticket)
    }

    /// Advance the animation and the physics to `now_ms`.
    ///
    /// The rotation completes before any physics step of the same frame.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        if let Some(finished) = self.renderer.advance(now_ms) {
            self.finish_rotation(finished);
        }
        self.runner.update(&mut self.engine, now_ms)
    }

    /// Draw the current frame while the world is running.
    pub fn render(&mut self) {
        if !self.renderer.is_running() {
            return;
        }
        self.renderer.render(&self.engine);
    }

    /// Enable or zero gravity. While rotating the change lands with the
    /// rotation's completion.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
        if !self.state.is_rotating() {
            self.apply_gravity();
        }
    }

    /// Stop stepping and rendering and hand the canvas back.
    pub fn dispose(mut self) -> C {
        self.runner.stop();
        self.renderer.stop();
        self.engine.set_enabled(false);
        self.engine.clear();
        self.renderer.into_canvas()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating()
    }

    pub fn gravity(&self) -> Vec2 {
        self.engine.gravity()
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Is physics stepping currently allowed?
    pub fn stepping_enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    pub fn canvas_rotation(&self) -> f64 {
        self.renderer.canvas_rotation()
    }

    pub fn pending_rotation_target(&self) -> Option<f64> {
        self.renderer.pending_target()
    }

    pub fn is_running(&self) -> bool {
        self.renderer.is_running()
    }

    pub fn level_frame(&self) -> LevelFrame {
        self.frame
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn renderer(&self) -> &Renderer<C> {
        &self.renderer
    }

    fn finish_rotation(&mut self, finished: RotationFinished) {
        let RotationState::Rotating { ticket, clockwise } = self.state else {
            console_warn!("rotation {:?} finished while idle", finished.ticket);
            return;
        };
        if ticket != finished.ticket {
            console_warn!(
                "rotation {:?} finished but {:?} is pending",
                finished.ticket,
                ticket
            );
            return;
        }

        self.direction = if clockwise {
            self.direction.next_clockwise()
        } else {
            self.direction.next_counter_clockwise()
        };
        self.apply_gravity();
        self.engine.set_enabled(true);
        self.state = RotationState::Idle;

        console_debug!(
            "rotation {:?} done at {:.4} rad, gravity {}",
            ticket,
            finished.angle,
            self.direction
        );
    }

    fn apply_gravity(&mut self) {
        let gravity = if self.gravity_enabled {
            self.direction.to_vector()
        } else {
            Vec2::zero()
        };
        self.engine.set_gravity(gravity);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
