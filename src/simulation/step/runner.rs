use crate::engine::PhysicsEngine;

/// Fixed-timestep driver for the physics engine.
///
/// Frames arrive at whatever rate the display gives us; the engine always
/// advances in `step_ms` increments. Nothing is stepped while the engine is
/// disabled, and the clock restarts when it comes back so there is no
/// catch-up burst after a rotation.
pub struct Runner {
    step_ms: f64,
    max_steps_per_frame: u32,
    accumulator: f64,
    last_time: Option<f64>,
    running: bool,
}

impl Runner {
    pub fn new(step_ms: f64, max_steps_per_frame: u32) -> Self {
        Self {
            step_ms,
            max_steps_per_frame: max_steps_per_frame.max(1),
            accumulator: 0.0,
            last_time: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.reset_clock();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Step the engine for the time elapsed since the previous call.
    /// Returns the number of steps taken.
    pub fn update<E: PhysicsEngine + ?Sized>(&mut self, engine: &mut E, now_ms: f64) -> u32 {
        if !self.running || !engine.is_enabled() {
            self.reset_clock();
            return 0;
        }

        // First frame after (re)start only primes the clock.
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };
        self.accumulator += (now_ms - last).max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step_ms && steps < self.max_steps_per_frame {
            engine.step();
            self.accumulator -= self.step_ms;
            steps += 1;
        }

        // Too far behind (tab in background, debugger): drop the backlog.
        if self.accumulator >= self.step_ms {
            self.accumulator = 0.0;
        }

        steps
    }

    fn reset_clock(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body_system::RigidBodySystem;

    #[test]
    fn steps_at_fixed_rate() {
        let mut engine = RigidBodySystem::new();
        let mut runner = Runner::new(10.0, 5);
        runner.start();

        assert_eq!(runner.update(&mut engine, 0.0), 0);
        assert_eq!(runner.update(&mut engine, 25.0), 2);
        assert_eq!(runner.update(&mut engine, 30.0), 1);
        assert_eq!(engine.steps(), 3);
    }

    #[test]
    fn caps_catch_up_and_drops_backlog() {
        let mut engine = RigidBodySystem::new();
        let mut runner = Runner::new(10.0, 3);
        runner.start();

        runner.update(&mut engine, 0.0);
        assert_eq!(runner.update(&mut engine, 1000.0), 3);
        assert_eq!(runner.update(&mut engine, 1005.0), 0);
    }

    #[test]
    fn idle_while_engine_disabled_and_no_burst_after() {
        let mut engine = RigidBodySystem::new();
        let mut runner = Runner::new(10.0, 5);
        runner.start();
        runner.update(&mut engine, 0.0);

        engine.set_enabled(false);
        assert_eq!(runner.update(&mut engine, 500.0), 0);

        engine.set_enabled(true);
        assert_eq!(runner.update(&mut engine, 510.0), 0);
        assert_eq!(runner.update(&mut engine, 520.0), 1);
    }

    #[test]
    fn stopped_runner_never_steps() {
        let mut engine = RigidBodySystem::new();
        let mut runner = Runner::new(10.0, 5);
        runner.update(&mut engine, 0.0);
        assert_eq!(runner.update(&mut engine, 100.0), 0);
        assert!(!runner.is_running());
    }
}
