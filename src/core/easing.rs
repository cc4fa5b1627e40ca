//! Shared easing helpers for scripted animation.

/// Cubic ease-out: fast start, gentle landing.
///
/// Used by the camera fly-in and the letter settle animation.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Move `current` toward `target` at a frame-rate-independent rate.
///
/// `rate` is an interpolation speed multiplier (higher = faster). Mirrors
/// how smooth transforms chase their targets; used for card snap-back and
/// the panel slide.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).min(1.0);
    current + (target - current) * t
}
