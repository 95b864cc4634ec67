// core/smoothing.rs
//
// Per-tick interpolation helpers shared by bodies and the camera.
// Pure math, no dependencies on the field or the camera.

use std::f32::consts::TAU;

use glam::Vec2;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// One step of a first-order low-pass filter: move `current` a fixed fraction
/// `k` of the way toward `target`, unless it is already within `epsilon`.
///
/// Repeated calls decay the gap geometrically and never overshoot for
/// `k` in (0, 1]. The target is approached asymptotically, never reached.
#[inline]
pub fn approach(current: f32, target: f32, k: f32, epsilon: f32) -> f32 {
    if (target - current).abs() > epsilon {
        lerp(current, target, k)
    } else {
        current
    }
}

/// Reduce an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly `2π`
/// in f32, which would break the half-open range.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
