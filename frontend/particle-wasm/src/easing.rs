pub const COUNTER_DURATION_MS: f32 = 2000.0;

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a stat counter `elapsed_ms` into its count-up. Negative
/// targets count down from zero.
pub fn counter_value(target: i32, elapsed_ms: f32, duration_ms: f32) -> i32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = elapsed_ms / duration_ms;
    if progress >= 1.0 {
        return target;
    }
    (target as f64 * ease_out_cubic(progress) as f64).floor() as i32
}
