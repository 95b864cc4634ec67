//! Animation system: advances every body's sprite-sheet playback.

use crate::core::field::OrbitField;

/// Tick all body animations.
///
/// Call this once per frame before rendering.
pub fn tick_animations(field: &mut OrbitField, dt: f32) {
    for body in field.iter_mut() {
        if let Some(anim) = body.animation.as_mut() {
            anim.tick(dt);
        }
    }
}
