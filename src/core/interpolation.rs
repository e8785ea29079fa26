/// Easing helpers for animations.
pub struct Interpolation;

impl Interpolation {
    /// Eases from `start` to `end` along `log2(1 + progress)`.
    ///
    /// Fast at first, settling as it approaches `end`. `progress` is clamped
    /// to `[0, 1]`, so `0` yields `start` and `1` yields `end` exactly.
    pub fn log2(start: f64, end: f64, progress: f64) -> f64 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            return end;
        }
        start + (end - start) * (1.0 + t).log2()
    }
}
