#[cfg(target_arch = "wasm32")]
use js_sys;

/// Milliseconds on a monotonic-enough clock.
///
/// In the browser this is `Date.now()`, the same clock the frame loop and the
/// rotation animation are measured against. Natively it counts from the first
/// call, which is all the tests need.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Stopwatch over [`now_ms`].
#[derive(Clone, Copy)]
pub struct FrameTimer {
    start_ms: f64,
}

impl FrameTimer {
    pub fn start() -> Self {
        FrameTimer { start_ms: now_ms() }
    }

    pub fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start_ms
    }
}
