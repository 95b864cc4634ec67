use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::types::BodyId;
use crate::components::animation::SpriteAnimation;
use crate::components::depth::DepthOrder;
use crate::core::smoothing::{approach, wrap_angle};
use crate::renderer::instance::BodyInstance;
use crate::renderer::traits::Renderable;

/// Resize factor applied by an enlarge tap.
pub const ENLARGE_FACTOR: f32 = 1.15;
/// Resize factor applied by a shrink tap.
pub const SHRINK_FACTOR: f32 = 0.85;

/// Orbit-shape smoothing parameters shared by every body in a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitTuning {
    /// Fraction of the remaining axis-ratio gap closed each tick.
    pub axis_ratio_lerp: f32,
    /// Gap below which the axis ratio stops moving.
    pub axis_ratio_epsilon: f32,
    /// Lower clamp for target axis ratios. Keeps orbits from collapsing to a line.
    pub min_axis_ratio: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            axis_ratio_lerp: 0.01,
            axis_ratio_epsilon: 0.01,
            min_axis_ratio: 0.01,
        }
    }
}

impl OrbitTuning {
    /// Check every parameter against the range that keeps the axis ratio in
    /// `(0, 1]` and its approach monotonic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, value, expected| ConfigError::InvalidTuning {
            field,
            value,
            expected,
        };
        if !(self.axis_ratio_lerp > 0.0 && self.axis_ratio_lerp <= 1.0) {
            return Err(invalid("axis_ratio_lerp", self.axis_ratio_lerp, "0 < x <= 1"));
        }
        if !(self.axis_ratio_epsilon >= 0.0 && self.axis_ratio_epsilon.is_finite()) {
            return Err(invalid("axis_ratio_epsilon", self.axis_ratio_epsilon, "finite, x >= 0"));
        }
        if !(self.min_axis_ratio > 0.0 && self.min_axis_ratio <= 1.0) {
            return Err(invalid("min_axis_ratio", self.min_axis_ratio, "0 < x <= 1"));
        }
        Ok(())
    }

    /// Clamp a requested axis ratio to `[min_axis_ratio, 1]`. NaN becomes 1.
    pub fn clamp_axis_ratio(&self, ratio: f32) -> f32 {
        if ratio.is_nan() {
            return 1.0;
        }
        ratio.max(self.min_axis_ratio).min(1.0)
    }
}

/// Sense of rotation. Counter-clockwise increases the angle (Y-up world).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitDirection {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl OrbitDirection {
    pub fn sign(self) -> f32 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}

/// Summary shown in the UI info window when a body is selected or tapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInfo {
    pub id: BodyId,
    pub radius: f32,
    /// Base orbit speed in degrees per second, before the global multiplier.
    pub base_speed_deg: f32,
}

/// A named body on an elliptical orbit around another body, or an anchor
/// with no orbit at all.
///
/// `position` is the top-left corner of the body's bounding square, so the
/// center is `position + radius`. Everything except `radius`, the orbit
/// parameters and the speed settings is recomputed by [`OrbitingBody::advance`].
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub id: BodyId,
    pub name: String,
    pub radius: f32,
    /// Radius of the circular tap target around the center, before visual scaling.
    pub touch_radius: f32,
    pub orbit_target: Option<BodyId>,
    /// Semi-major axis of the orbit ellipse.
    pub orbit_distance: f32,
    pub axis_ratio: f32,
    pub target_axis_ratio: f32,
    pub base_speed_deg: f32,
    pub speed_multiplier: f32,
    /// Derived from `base_speed_deg * speed_multiplier`, in rad/s.
    angular_speed: f32,
    pub direction: OrbitDirection,
    /// Radians in [0, 2π).
    current_angle: f32,
    pub position: Vec2,
    pub visual_scale: f32,
    pub depth: DepthOrder,
    /// Key into the sprite registry.
    pub sprite: String,
    pub animation: Option<SpriteAnimation>,
    pub tuning: OrbitTuning,
}

impl OrbitingBody {
    /// Create an anchor body centered on the world origin.
    /// The id is assigned when the body is added to a field.
    pub fn new(name: impl Into<String>, radius: f32) -> Self {
        Self {
            id: BodyId(0),
            name: name.into(),
            radius,
            touch_radius: radius,
            orbit_target: None,
            orbit_distance: 0.0,
            axis_ratio: 1.0,
            target_axis_ratio: 1.0,
            base_speed_deg: 0.0,
            speed_multiplier: 1.0,
            angular_speed: 0.0,
            direction: OrbitDirection::default(),
            current_angle: 0.0,
            position: Vec2::splat(-radius),
            visual_scale: 1.0,
            depth: DepthOrder::Anchor,
            sprite: String::new(),
            animation: None,
            tuning: OrbitTuning::default(),
        }
    }

    // -- Builder pattern --

    /// Orbit `target` at `distance` with a base speed in degrees per second.
    pub fn with_orbit(mut self, target: BodyId, distance: f32, speed_deg: f32) -> Self {
        self.orbit_target = Some(target);
        self.orbit_distance = distance;
        self.base_speed_deg = speed_deg;
        self.depth = DepthOrder::Behind;
        self.recompute_angular_speed();
        self
    }

    /// Place the body's center. Only meaningful for anchors; orbiting bodies
    /// are repositioned every tick.
    pub fn with_center(mut self, center: Vec2) -> Self {
        self.position = center - Vec2::splat(self.radius);
        self
    }

    pub fn with_touch_radius(mut self, touch_radius: f32) -> Self {
        self.touch_radius = touch_radius;
        self
    }

    pub fn with_direction(mut self, direction: OrbitDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_axis_ratio(mut self, ratio: f32) -> Self {
        self.axis_ratio = ratio;
        self.target_axis_ratio = ratio;
        self
    }

    pub fn with_start_angle(mut self, angle: f32) -> Self {
        self.current_angle = wrap_angle(angle);
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    pub fn with_animation(mut self, animation: SpriteAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    // -- Queries --

    /// Anchors have no orbit target and never move on their own.
    pub fn is_anchor(&self) -> bool {
        self.orbit_target.is_none()
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.radius)
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Whether a world-space point lies inside the scaled touch circle.
    pub fn hit(&self, point: Vec2) -> bool {
        let reach = self.touch_radius * self.visual_scale;
        point.distance_squared(self.center()) <= reach * reach
    }

    pub fn info(&self) -> BodyInfo {
        BodyInfo {
            id: self.id,
            radius: self.radius,
            base_speed_deg: self.base_speed_deg,
        }
    }

    // -- Per-tick update --

    /// Advance the orbit by `dt` seconds around `anchor_center`, the center
    /// of the orbit target as already computed this tick.
    ///
    /// Anchors (and an orbiting body handed no anchor) keep their position.
    pub fn advance(&mut self, dt: f32, anchor_center: Option<Vec2>) {
        if self.is_anchor() {
            return;
        }
        let Some(center) = anchor_center else {
            return;
        };

        self.axis_ratio = approach(
            self.axis_ratio,
            self.target_axis_ratio,
            self.tuning.axis_ratio_lerp,
            self.tuning.axis_ratio_epsilon,
        );

        self.current_angle =
            wrap_angle(self.current_angle + self.direction.sign() * self.angular_speed * dt);

        let (sin, cos) = self.current_angle.sin_cos();
        let offset = Vec2::new(
            self.orbit_distance * cos,
            self.orbit_distance * self.axis_ratio * sin,
        );
        self.position = center + offset - Vec2::splat(self.radius);

        self.visual_scale = 2.0 - (0.5 + (1.0 + sin) / 2.0);
        self.depth = DepthOrder::from_angle(self.current_angle);
    }

    // -- Setters driven by the UI --

    /// Set the axis ratio the orbit eases toward. Clamped to `[min_axis_ratio, 1]`.
    pub fn set_target_axis_ratio(&mut self, ratio: f32) {
        self.target_axis_ratio = self.tuning.clamp_axis_ratio(ratio);
    }

    /// Rescale the angular speed from the stored base speed.
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
        self.recompute_angular_speed();
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Scale radius and touch radius by `factor`, keeping the center fixed.
    pub fn resize(&mut self, factor: f32) {
        if factor <= 0.0 || !factor.is_finite() {
            log::warn!("ignoring resize of `{}` by {}", self.name, factor);
            return;
        }
        let center = self.center();
        self.radius *= factor;
        self.touch_radius *= factor;
        self.position = center - Vec2::splat(self.radius);
    }

    fn recompute_angular_speed(&mut self) {
        self.angular_speed = (self.base_speed_deg * self.speed_multiplier).to_radians();
    }
}

impl Renderable for OrbitingBody {
    fn depth(&self) -> DepthOrder {
        self.depth
    }

    fn instance(&self) -> BodyInstance {
        let (frame_col, frame_row, phase) = match &self.animation {
            Some(anim) => {
                let (col, row) = anim.current_frame();
                (col, row, anim.phase())
            }
            None => (0.0, 0.0, 0.0),
        };
        BodyInstance {
            x: self.position.x,
            y: self.position.y,
            size: self.radius * 2.0,
            scale: self.visual_scale,
            depth: self.depth.as_u8() as f32,
            frame_col,
            frame_row,
            phase,
        }
    }
}
