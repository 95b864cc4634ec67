use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::core::field::OrbitField;
use crate::core::smoothing::lerp_vec2;

/// Camera tuning, read once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// World units per second at zoom 1 for keyboard panning.
    pub move_speed: f32,
    /// Zoom factor applied by one zoom-in step.
    pub zoom_in_factor: f32,
    /// Zoom factor applied by one zoom-out step.
    pub zoom_out_factor: f32,
    /// Fraction of the remaining distance to the tracked body covered per tick.
    pub lerp_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub default_position: [f32; 2],
    pub default_zoom: f32,
    /// Visible world width at zoom 1.
    pub viewport_width: f32,
    /// Visible world height at zoom 1.
    pub viewport_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 400.0,
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            lerp_factor: 0.1,
            min_zoom: 0.02,
            max_zoom: 50.0,
            default_position: [0.0, 0.0],
            default_zoom: 1.0,
            viewport_width: 400.0,
            viewport_height: 300.0,
        }
    }
}

/// Who drives the camera position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Directional impulses from keys and drags.
    #[default]
    Manual,
    /// Smooth follow of a body's center.
    Tracking(BodyId),
}

/// Keyboard pan directions. World space is Y-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Currently held pan keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PanFlags {
    pub fn set(&mut self, direction: PanDirection, active: bool) {
        match direction {
            PanDirection::Up => self.up = active,
            PanDirection::Down => self.down = active,
            PanDirection::Left => self.left = active,
            PanDirection::Right => self.right = active,
        }
    }

    /// Sum of the active unit directions.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y += 1.0;
        }
        if self.down {
            dir.y -= 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Camera pose handed to the presentation layer.
/// `tracked` is the tracked body index, or -1 in manual mode.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraView {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    pub tracked: f32,
}

impl CameraView {
    pub const FLOATS: usize = 4;
}

/// Pan/zoom camera that can lock onto a body.
///
/// Manual panning and tracking are exclusive: any pan intent drops tracking.
/// `zoom` below 1 shows less of the world.
pub struct CameraRig {
    pub position: Vec2,
    zoom: f32,
    mode: CameraMode,
    flags: PanFlags,
    /// Host surface size in pixels, for screen to world conversion.
    screen: Vec2,
    config: CameraConfig,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let min_zoom = config.min_zoom.max(f32::MIN_POSITIVE);
        let config = CameraConfig {
            min_zoom,
            max_zoom: config.max_zoom.max(min_zoom),
            ..config
        };
        Self {
            position: Vec2::from(config.default_position),
            zoom: config.default_zoom.clamp(config.min_zoom, config.max_zoom),
            mode: CameraMode::Manual,
            flags: PanFlags::default(),
            screen: Vec2::new(config.viewport_width, config.viewport_height),
            config,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn tracked(&self) -> Option<BodyId> {
        match self.mode {
            CameraMode::Tracking(id) => Some(id),
            CameraMode::Manual => None,
        }
    }

    pub fn flags(&self) -> PanFlags {
        self.flags
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Move the camera for this tick. Must run after the field has advanced
    /// so the tracked body's center is current.
    pub fn update(&mut self, dt: f32, field: &OrbitField) {
        match self.mode {
            CameraMode::Tracking(id) => match field.get(id) {
                Some(body) => {
                    self.position =
                        lerp_vec2(self.position, body.center(), self.config.lerp_factor);
                }
                None => {
                    log::warn!("camera: tracked body {:?} no longer exists", id);
                    self.mode = CameraMode::Manual;
                }
            },
            CameraMode::Manual => {
                self.position +=
                    self.flags.direction() * self.config.move_speed * self.zoom * dt;
            }
        }
    }

    /// Multiply the zoom by `factor`, clamped to the configured range.
    pub fn zoom_by(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            log::warn!("camera: ignoring zoom factor {}", factor);
            return;
        }
        let wanted = self.zoom * factor;
        let clamped = wanted.clamp(self.config.min_zoom, self.config.max_zoom);
        if clamped != wanted {
            log::warn!("camera: zoom {} clamped to {}", wanted, clamped);
        }
        self.zoom = clamped;
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_in_factor);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(self.config.zoom_out_factor);
    }

    /// Drag the view by a screen-space delta (pixels, Y-down). Content
    /// follows the pointer. Clears tracking.
    pub fn pan(&mut self, dx_screen: f32, dy_screen: f32) {
        self.mode = CameraMode::Manual;
        let delta = Vec2::new(-dx_screen, dy_screen) * self.units_per_pixel() * self.zoom;
        self.position += delta;
    }

    /// Press or release a pan key. Pressing clears tracking.
    pub fn set_pan(&mut self, direction: PanDirection, active: bool) {
        if active {
            self.mode = CameraMode::Manual;
        }
        self.flags.set(direction, active);
    }

    /// Track a body, or return to manual mode with `None`.
    pub fn set_tracked(&mut self, body: Option<BodyId>) {
        self.mode = match body {
            Some(id) => CameraMode::Tracking(id),
            None => CameraMode::Manual,
        };
        log::debug!("camera: mode {:?}", self.mode);
    }

    pub fn free(&mut self) {
        self.set_tracked(None);
    }

    /// Default position and zoom, manual mode, no held keys.
    pub fn reset(&mut self) {
        self.position = Vec2::from(self.config.default_position);
        self.zoom = self
            .config
            .default_zoom
            .clamp(self.config.min_zoom, self.config.max_zoom);
        self.mode = CameraMode::Manual;
        self.flags = PanFlags::default();
    }

    /// Record the host surface size in pixels. Zero sizes are ignored.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.screen = Vec2::new(width, height);
        }
    }

    /// Convert a screen point (pixels, origin top-left, Y-down) to world space.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let from_center = Vec2::new(
            screen.x - self.screen.x / 2.0,
            self.screen.y / 2.0 - screen.y,
        );
        self.position + from_center * self.units_per_pixel() * self.zoom
    }

    /// World units per screen pixel at zoom 1, fitting the viewport in the screen.
    fn units_per_pixel(&self) -> f32 {
        let horiz = self.config.viewport_width / self.screen.x;
        let vert = self.config.viewport_height / self.screen.y;
        horiz.max(vert)
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            x: self.position.x,
            y: self.position.y,
            zoom: self.zoom,
            tracked: self.tracked().map_or(-1.0, |id| id.0 as f32),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::OrbitingBody;

    fn field_with_planet() -> (OrbitField, BodyId) {
        let mut field = OrbitField::default();
        let sun = field.add_body(OrbitingBody::new("sun", 50.0)).unwrap();
        let planet = field
            .add_body(OrbitingBody::new("planet", 5.0).with_orbit(sun, 200.0, 0.0))
            .unwrap();
        field.advance_all(0.0);
        (field, planet)
    }

    #[test]
    fn starts_manual_at_default() {
        let cam = CameraRig::default();
        assert_eq!(cam.mode(), CameraMode::Manual);
        assert_eq!(cam.position, Vec2::ZERO);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn ten_zoom_steps() {
        let mut cam = CameraRig::default();
        for _ in 0..10 {
            cam.zoom_in();
        }
        assert!((cam.zoom() - 0.348_678_4).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped_positive() {
        let mut cam = CameraRig::default();
        for _ in 0..500 {
            cam.zoom_by(0.5);
        }
        assert!((cam.zoom() - 0.02).abs() < 1e-6);
        cam.zoom_by(0.0);
        cam.zoom_by(-3.0);
        cam.zoom_by(f32::NAN);
        assert!(cam.zoom() > 0.0);
        for _ in 0..500 {
            cam.zoom_by(2.0);
        }
        assert_eq!(cam.zoom(), 50.0);
    }

    #[test]
    fn manual_pan_scales_with_zoom() {
        let (field, _) = field_with_planet();
        let mut cam = CameraRig::default();
        cam.zoom_by(2.0);
        cam.set_pan(PanDirection::Right, true);
        cam.set_pan(PanDirection::Up, true);
        cam.update(0.5, &field);
        // 400 * 2 * 0.5 = 400 on both axes
        assert!((cam.position - Vec2::new(400.0, 400.0)).length() < 1e-3);

        cam.set_pan(PanDirection::Right, false);
        cam.update(0.5, &field);
        assert!((cam.position - Vec2::new(400.0, 800.0)).length() < 1e-3);
    }

    #[test]
    fn tracking_lerps_toward_body() {
        let (field, planet) = field_with_planet();
        let mut cam = CameraRig::default();
        cam.set_tracked(Some(planet));
        cam.update(0.016, &field);
        // 10% of the way to (200, 0)
        assert!((cam.position - Vec2::new(20.0, 0.0)).length() < 1e-3);
        for _ in 0..200 {
            cam.update(0.016, &field);
        }
        assert!((cam.position - Vec2::new(200.0, 0.0)).length() < 0.01);
    }

    #[test]
    fn tracking_ignores_held_keys() {
        let (field, planet) = field_with_planet();
        let mut cam = CameraRig::default();
        cam.set_pan(PanDirection::Left, true);
        cam.set_tracked(Some(planet));
        cam.update(0.016, &field);
        assert!((cam.position - Vec2::new(20.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn pan_clears_tracking() {
        let (field, planet) = field_with_planet();
        let mut cam = CameraRig::default();
        cam.set_tracked(Some(planet));
        cam.pan(10.0, 0.0);
        assert_eq!(cam.mode(), CameraMode::Manual);
        assert!((cam.position.x - -10.0).abs() < 1e-5);

        cam.set_tracked(Some(planet));
        cam.set_pan(PanDirection::Down, true);
        assert_eq!(cam.mode(), CameraMode::Manual);
        cam.update(0.1, &field);
        assert!((cam.position.y - -40.0).abs() < 1e-3);
    }

    #[test]
    fn drag_down_moves_camera_up() {
        let mut cam = CameraRig::default();
        cam.zoom_by(0.5);
        cam.pan(0.0, 20.0);
        assert!((cam.position.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn stale_tracking_falls_back_to_manual() {
        let field = OrbitField::default();
        let mut cam = CameraRig::default();
        cam.set_tracked(Some(BodyId(3)));
        cam.update(0.016, &field);
        assert_eq!(cam.mode(), CameraMode::Manual);
    }

    #[test]
    fn screen_to_world_centers_on_camera() {
        let mut cam = CameraRig::default();
        cam.position = Vec2::new(100.0, 50.0);
        assert_eq!(cam.screen_to_world(Vec2::new(200.0, 150.0)), Vec2::new(100.0, 50.0));
        // Top-left pixel is up and to the left in world space
        let tl = cam.screen_to_world(Vec2::ZERO);
        assert!((tl - Vec2::new(-100.0, 200.0)).length() < 1e-4);

        cam.resize_viewport(800.0, 600.0);
        let tl = cam.screen_to_world(Vec2::ZERO);
        assert!((tl - Vec2::new(-100.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut cam = CameraRig::default();
        cam.pan(50.0, 50.0);
        cam.zoom_in();
        cam.set_tracked(Some(BodyId(0)));
        cam.set_pan(PanDirection::Up, true);
        cam.reset();
        assert_eq!(cam.position, Vec2::ZERO);
        assert_eq!(cam.zoom(), 1.0);
        assert_eq!(cam.mode(), CameraMode::Manual);
        assert!(!cam.flags().any());
    }

    #[test]
    fn view_reports_tracking() {
        let mut cam = CameraRig::default();
        assert_eq!(cam.view().tracked, -1.0);
        cam.set_tracked(Some(BodyId(4)));
        assert_eq!(cam.view().tracked, 4.0);
    }
}
