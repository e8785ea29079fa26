use crate::domain::RenderConfig;
use crate::engine::PhysicsEngine;

use super::animation::{AnimationStep, AnimationTiming, RotationAnimation, RotationFinished, RotationTicket};
use super::canvas::Canvas2d;

/// Draws body outlines under a global canvas rotation and animates that rotation.
pub struct Renderer<C: Canvas2d> {
    canvas: C,
    config: RenderConfig,
    timing: AnimationTiming,
    /// Rotation of the scene around the canvas centre, radians, clockwise
    canvas_rotation: f64,
    animation: Option<RotationAnimation>,
    next_ticket: u64,
    running: bool,
    frames: u64,
}

impl<C: Canvas2d> Renderer<C> {
    pub fn new(canvas: C, config: RenderConfig, timing: AnimationTiming) -> Self {
        Self {
            canvas,
            config,
            timing,
            canvas_rotation: 0.0,
            animation: None,
            next_ticket: 1,
            running: false,
            frames: 0,
        }
    }

    /// Draws the current bodies onto the canvas.
    pub fn render<E: PhysicsEngine + ?Sized>(&mut self, engine: &E) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let canvas = &mut self.canvas;

        canvas.save();
        // Rotate around the centre of the canvas.
        canvas.translate(width / 2.0, height / 2.0);
        canvas.rotate(self.canvas_rotation);
        canvas.translate(-width / 2.0, -height / 2.0);

        canvas.set_fill_style(&self.config.background_colour);
        canvas.fill_rect(0.0, 0.0, width, height);

        canvas.begin_path();
        for body in engine.bodies() {
            if !body.active {
                continue;
            }
            let vertices = body.vertices();
            let first = vertices[0];
            canvas.move_to(first.x, first.y);
            for v in &vertices[1..] {
                canvas.line_to(v.x, v.y);
            }
            // Close back at the first vertex.
            canvas.line_to(first.x, first.y);
        }

        canvas.set_line_width(self.config.shape_line_width);
        canvas.set_stroke_style(&self.config.shape_stroke_colour);
        canvas.stroke();
        canvas.set_fill_style(&self.config.shape_fill_colour);
        canvas.fill();

        canvas.restore();
        self.frames += 1;
    }

    /// Mark the render loop live; the frame driver renders while this holds.
    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start a smooth rotation to `theta` (radians, clockwise).
    ///
    /// Completion is reported once by [`Renderer::advance`] under the returned
    /// ticket. Calling again before that replaces the in-flight animation,
    /// starting from wherever the canvas currently is.
    pub fn rotate_to(&mut self, theta: f64, now_ms: f64) -> RotationTicket {
        let ticket = RotationTicket(self.next_ticket);
        self.next_ticket += 1;

        if let Some(prev) = &self.animation {
            console_debug!(
                "rotation {:?} superseded by {:?} before completing",
                prev.ticket,
                ticket
            );
        }

        self.animation = Some(RotationAnimation::new(
            ticket,
            self.canvas_rotation,
            theta,
            now_ms,
            self.timing,
        ));
        ticket
    }

    /// Smoothly rotate the scene by `delta` radians (clockwise).
    pub fn rotate_by(&mut self, delta: f64, now_ms: f64) -> RotationTicket {
        self.rotate_to(self.canvas_rotation + delta, now_ms)
    }

    /// Drive the rotation animation. Returns the completion exactly once.
    pub fn advance(&mut self, now_ms: f64) -> Option<RotationFinished> {
        let step = self.animation.as_mut()?.tick(now_ms)?;
        match step {
            AnimationStep::InProgress(angle) => {
                self.canvas_rotation = angle;
                None
            }
            AnimationStep::Done(angle) => {
                self.canvas_rotation = angle;
                self.animation.take().map(|anim| RotationFinished {
                    ticket: anim.ticket,
                    angle,
                })
            }
        }
    }

    pub fn canvas_rotation(&self) -> f64 {
        self.canvas_rotation
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the in-flight animation, if any.
    pub fn pending_target(&self) -> Option<f64> {
        self.animation.as_ref().map(|a| a.target())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
