use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::types::{BodyId, GameEvent};
use crate::components::body::{OrbitTuning, ENLARGE_FACTOR, SHRINK_FACTOR};
use crate::core::field::OrbitField;
use crate::input::queue::InputQueue;
use crate::input::translator::{Intent, TapMode};
use crate::renderer::camera::{CameraConfig, CameraRig, CameraView};
use crate::renderer::instance::RenderBuffer;
use crate::systems::animation::tick_animations;

/// Configuration for the engine, provided by the game.
/// Every field has a default, so a JSON override may name only what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World width in game units, reported to the host.
    pub world_width: f32,
    /// World height in game units, reported to the host.
    pub world_height: f32,
    /// Maximum number of bodies in the frame buffer (default: 64).
    pub max_bodies: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Longest frame delta simulated in one tick, in seconds.
    /// `None` simulates the real elapsed time however long the frame took.
    pub max_frame_dt: Option<f32>,
    /// Start every orbit clockwise.
    pub clockwise: bool,
    pub orbit: OrbitTuning,
    pub camera: CameraConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 300.0,
            max_bodies: 64,
            max_events: 32,
            max_frame_dt: None,
            clockwise: false,
            orbit: OrbitTuning::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) configuration from JSON.
    /// Out-of-range orbit tuning is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.orbit.validate()?;
        Ok(config)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial field. An error leaves the runner uninitialized.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), ConfigError>;

    /// Translate this frame's input and apply the resulting intents.
    /// The engine advances the field and camera right after this returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass after the render buffer is built.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub field: OrbitField,
    pub camera: CameraRig,
    pub events: Vec<GameEvent>,
    pub tap_mode: TapMode,
    /// Body hit by a tap this frame, if any.
    pub tapped: Option<BodyId>,
    /// Selection cursor for next/previous. Survives switching to free camera.
    selected: Option<BodyId>,
    speed_multiplier: f32,
    axis_ratio_target: f32,
    max_events: usize,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            field: OrbitField::new(config.orbit).unwrap_or_else(|err| {
                log::warn!("engine: {}, using default orbit tuning", err);
                OrbitField::default()
            }),
            camera: CameraRig::new(config.camera),
            events: Vec::with_capacity(config.max_events),
            tap_mode: TapMode::Select,
            tapped: None,
            selected: None,
            speed_multiplier: 1.0,
            axis_ratio_target: 1.0,
            max_events: config.max_events,
        }
    }

    /// Replace the field, e.g. after loading a manifest. Resets selection.
    pub fn install_field(&mut self, field: OrbitField) {
        log::info!("engine: installed field with {} bodies", field.len());
        self.field = field;
        self.selected = None;
        self.tapped = None;
        self.speed_multiplier = 1.0;
        self.axis_ratio_target = 1.0;
        self.camera.free();
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn axis_ratio_target(&self) -> f32 {
        self.axis_ratio_target
    }

    /// Select a body and start tracking it.
    pub fn select(&mut self, id: BodyId) {
        if self.field.get(id).is_none() {
            log::debug!("engine: ignoring selection of unknown body {:?}", id);
            return;
        }
        self.selected = Some(id);
        self.camera.set_tracked(Some(id));
    }

    /// Apply one intent to the camera, the field or the tap mode.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Pan { direction, active } => self.camera.set_pan(direction, active),
            Intent::Drag { delta } => self.camera.pan(delta.x, delta.y),
            Intent::Pinch { zoom_factor, midpoint_delta } => {
                self.camera.zoom_by(zoom_factor);
                self.camera.pan(midpoint_delta.x, midpoint_delta.y);
            }
            Intent::ZoomIn => self.camera.zoom_in(),
            Intent::ZoomOut => self.camera.zoom_out(),
            Intent::Zoom(factor) => self.camera.zoom_by(factor),
            Intent::SelectIndex(index) => match self.field.id_at(index) {
                Some(id) => self.select(id),
                None => log::debug!("engine: no body at index {}", index),
            },
            Intent::SelectNext => {
                if let Some(id) = self.field.next(self.selected) {
                    self.select(id);
                }
            }
            Intent::SelectPrevious => {
                if let Some(id) = self.field.previous(self.selected) {
                    self.select(id);
                }
            }
            Intent::FreeCamera => self.camera.free(),
            Intent::SetAxisRatio(ratio) => {
                self.field.set_global_axis_ratio_target(ratio);
                self.axis_ratio_target = self.field.tuning().clamp_axis_ratio(ratio);
            }
            Intent::SetSpeedMultiplier(multiplier) => {
                if multiplier.is_finite() && multiplier >= 0.0 {
                    self.field.set_global_speed_multiplier(multiplier);
                    self.speed_multiplier = multiplier;
                } else {
                    log::warn!("engine: ignoring speed multiplier {}", multiplier);
                }
            }
            Intent::ToggleDirection => self.field.toggle_direction_all(),
            Intent::Tap { screen } => self.tap(screen),
            Intent::SetTapMode(mode) => {
                log::debug!("engine: tap mode {:?}", mode);
                self.tap_mode = mode;
            }
            Intent::ResetView => self.camera.reset(),
            Intent::Resize { width, height } => self.camera.resize_viewport(width, height),
        }
    }

    fn tap(&mut self, screen: glam::Vec2) {
        let world = self.camera.screen_to_world(screen);
        let Some(id) = self.field.hit_test(world) else {
            return;
        };
        log::debug!("engine: tap hit {:?} in {:?} mode", id, self.tap_mode);
        self.tapped = Some(id);
        match self.tap_mode {
            TapMode::Select => self.select(id),
            TapMode::Enlarge | TapMode::Shrink => {
                let factor = if self.tap_mode == TapMode::Enlarge {
                    ENLARGE_FACTOR
                } else {
                    SHRINK_FACTOR
                };
                if let Some(body) = self.field.get_mut(id) {
                    body.resize(factor);
                }
            }
        }
    }

    /// Advance the simulation by `dt` seconds: bodies first, in dependency
    /// order, then animations, then the camera against the fresh positions.
    pub fn step(&mut self, dt: f32) {
        self.field.advance_all(dt);
        tick_animations(&mut self.field, dt);
        self.camera.update(dt, &self.field);
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("engine: event buffer full, dropping kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.tapped = None;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Render context for the optional post-build render pass.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub camera: CameraView,
}
