use crate::core::Interpolation;

/// Duration and sampling cadence of a rotation animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    pub duration_ms: f64,
    pub tick_ms: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            tick_ms: 30.0,
        }
    }
}

/// Identifies one `rotate_to` call; reported back exactly once on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationTicket(pub u64);

/// Completion of the animation started under `ticket`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFinished {
    pub ticket: RotationTicket,
    /// Exact target angle the canvas was snapped to.
    pub angle: f64,
}

/// Result of sampling an animation at some elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStep {
    InProgress(f64),
    Done(f64),
}

/// A canvas rotation from `start` to `end` radians.
#[derive(Clone, Debug)]
pub struct RotationAnimation {
    pub(crate) ticket: RotationTicket,
    start: f64,
    end: f64,
    started_at: f64,
    timing: AnimationTiming,
    last_sample_at: f64,
}

impl RotationAnimation {
    pub fn new(ticket: RotationTicket, start: f64, end: f64, started_at: f64, timing: AnimationTiming) -> Self {
        Self {
            ticket,
            start,
            end,
            started_at,
            timing,
            last_sample_at: started_at,
        }
    }

    pub fn target(&self) -> f64 {
        self.end
    }

    /// Angle after `elapsed_ms`. Pure: depends only on the arguments.
    pub fn sample(&self, elapsed_ms: f64) -> AnimationStep {
        if elapsed_ms > self.timing.duration_ms {
            return AnimationStep::Done(self.end);
        }
        let progress = elapsed_ms / self.timing.duration_ms;
        AnimationStep::InProgress(Interpolation::log2(self.start, self.end, progress))
    }

    /// Sample at `now_ms` if a tick has passed since the last sample.
    pub(crate) fn tick(&mut self, now_ms: f64) -> Option<AnimationStep> {
        if now_ms - self.last_sample_at < self.timing.tick_ms {
            return None;
        }
        self.last_sample_at = now_ms;
        Some(self.sample(now_ms - self.started_at))
    }
}
