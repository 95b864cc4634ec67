use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::game::GameConfig;
use crate::assets::registry::SpriteRegistry;
use crate::components::animation::{
    SpriteAnimation, DEFAULT_FRAME_DURATION, DEFAULT_SHEET_COLS, DEFAULT_SHEET_ROWS,
};
use crate::components::body::{OrbitDirection, OrbitingBody};
use crate::core::field::OrbitField;

/// Static description of a planetary system: its sprite sheets and its
/// bodies, listed so that every body comes after the body it orbits.
/// Loaded from JSON or built in code at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemManifest {
    #[serde(default)]
    pub sprite_sheets: Vec<SpriteSheetDescriptor>,
    pub bodies: Vec<BodyDescriptor>,
}

/// Describes one animated sprite sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSheetDescriptor {
    /// Key bodies use to refer to this sheet.
    pub name: String,
    /// Relative path to the PNG file, for the host's loader.
    pub path: String,
    #[serde(default = "default_cols")]
    pub cols: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
    /// Seconds per frame.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: f32,
}

/// Describes one body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub radius: f32,
    /// Tap target radius. Defaults to `radius`.
    #[serde(default)]
    pub touch_radius: Option<f32>,
    /// Sprite sheet key. Bodies without one are drawn without animation.
    #[serde(default)]
    pub sprite: Option<String>,
    /// Absent for anchors.
    #[serde(default)]
    pub orbit: Option<OrbitDescriptor>,
}

/// Orbit of a body around a previously listed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitDescriptor {
    /// Name of the orbited body.
    pub target: String,
    /// Semi-major axis.
    pub distance: f32,
    /// Base speed in degrees per second.
    pub speed: f32,
    #[serde(default = "default_axis_ratio")]
    pub axis_ratio: f32,
    /// Initial angle in radians.
    #[serde(default)]
    pub start_angle: f32,
}

impl SpriteSheetDescriptor {
    /// Reject grids with no frames and non-positive frame durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidSpriteSheet {
            sheet: self.name.clone(),
            reason,
        };
        if self.cols == 0 || self.rows == 0 {
            return Err(invalid("the frame grid is empty"));
        }
        if !(self.frame_duration > 0.0 && self.frame_duration.is_finite()) {
            return Err(invalid("frame_duration must be a positive number of seconds"));
        }
        Ok(())
    }
}

fn default_cols() -> u32 {
    DEFAULT_SHEET_COLS
}

fn default_rows() -> u32 {
    DEFAULT_SHEET_ROWS
}

fn default_frame_duration() -> f32 {
    DEFAULT_FRAME_DURATION
}

fn default_axis_ratio() -> f32 {
    1.0
}

impl SystemManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the manifest and build the field it describes.
    ///
    /// Every orbit target must name a body listed earlier, every sprite key
    /// must name a sprite sheet, and the body count must fit the frame buffer.
    pub fn build_field(&self, config: &GameConfig) -> Result<OrbitField, ConfigError> {
        if self.bodies.len() > config.max_bodies {
            return Err(ConfigError::CapacityExceeded {
                count: self.bodies.len(),
                max: config.max_bodies,
            });
        }

        for sheet in &self.sprite_sheets {
            sheet.validate()?;
        }
        let registry = SpriteRegistry::from_manifest(self);
        let direction = if config.clockwise {
            OrbitDirection::Clockwise
        } else {
            OrbitDirection::CounterClockwise
        };

        let mut field = OrbitField::new(config.orbit)?;
        for desc in &self.bodies {
            let mut body = OrbitingBody::new(desc.name.as_str(), desc.radius);
            if let Some(touch) = desc.touch_radius {
                body = body.with_touch_radius(touch);
            }

            if let Some(sprite) = &desc.sprite {
                let def = registry.get(sprite).ok_or_else(|| ConfigError::UnknownSprite {
                    body: desc.name.clone(),
                    sprite: sprite.clone(),
                })?;
                body = body
                    .with_sprite(sprite.as_str())
                    .with_animation(SpriteAnimation::new(def.clone()));
            }

            if let Some(orbit) = &desc.orbit {
                let target = field
                    .find_by_name(&orbit.target)
                    .map(|b| b.id)
                    .ok_or_else(|| ConfigError::UnknownOrbitTarget {
                        body: desc.name.clone(),
                        target: orbit.target.clone(),
                    })?;
                body = body
                    .with_orbit(target, orbit.distance, orbit.speed)
                    .with_axis_ratio(config.orbit.clamp_axis_ratio(orbit.axis_ratio))
                    .with_start_angle(orbit.start_angle)
                    .with_direction(direction);
            }

            field.add_body(body)?;
        }

        // Place orbiting bodies before the first frame is drawn.
        field.advance_all(0.0);
        log::info!(
            "manifest: built field with {} bodies and {} sprite sheets",
            field.len(),
            self.sprite_sheets.len()
        );
        Ok(field)
    }
}
