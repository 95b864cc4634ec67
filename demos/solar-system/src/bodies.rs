/// Body table for the stylized solar system.
///
/// Sizes and distances are chosen for readability, not realism.

use orrery_engine::{BodyDescriptor, OrbitDescriptor, SpriteSheetDescriptor, SystemManifest};

/// Base orbital speed in degrees per second. Each planet scales it.
pub const BASE_SPEED_DEG: f32 = 5.0;

/// Table distances are stretched by this factor when the manifest is built.
pub const DISTANCE_FACTOR: f32 = 1.4;

/// Sheets are 28x28 frame grids played at 20 fps.
pub const SHEET_GRID: u32 = 28;
pub const FRAME_DURATION: f32 = 0.05;

/// Visual and orbital parameters for one body.
pub struct BodySpec {
    pub name: &'static str,
    pub radius: f32,
    /// Tap target radius, when it differs from the visual radius.
    pub touch_radius: Option<f32>,
    /// Orbit target, unstretched distance and speed factor. `None` for the sun.
    pub orbit: Option<(&'static str, f32, f32)>,
}

/// Bodies in dependency order: every body follows the one it orbits.
pub const BODIES: [BodySpec; 10] = [
    BodySpec {
        name: "sun",
        radius: 400.0,
        // The sprite's glow is much larger than the disc
        touch_radius: Some(200.0),
        orbit: None,
    },
    BodySpec { name: "mercury", radius: 8.0, touch_radius: None, orbit: Some(("sun", 200.0, 4.0)) },
    BodySpec { name: "venus", radius: 33.0, touch_radius: None, orbit: Some(("sun", 413.0, 3.5)) },
    BodySpec { name: "earth", radius: 34.0, touch_radius: None, orbit: Some(("sun", 633.0, 2.0)) },
    BodySpec { name: "moon", radius: 6.0, touch_radius: None, orbit: Some(("earth", 100.0, 3.0)) },
    BodySpec { name: "mars", radius: 17.0, touch_radius: None, orbit: Some(("sun", 862.0, 1.8)) },
    BodySpec { name: "jupiter", radius: 100.0, touch_radius: None, orbit: Some(("sun", 1117.0, 1.3)) },
    BodySpec {
        name: "saturn",
        radius: 285.0,
        // Rings excluded
        touch_radius: Some(95.0),
        orbit: Some(("sun", 1385.0, 1.5)),
    },
    BodySpec { name: "uranus", radius: 72.0, touch_radius: None, orbit: Some(("sun", 1668.0, 1.2)) },
    BodySpec { name: "neptune", radius: 71.0, touch_radius: None, orbit: Some(("sun", 1960.0, 1.1)) },
];

/// Index of a body in `BODIES`, which is also its `BodyId` once built.
pub fn index_of(name: &str) -> Option<usize> {
    BODIES.iter().position(|b| b.name == name)
}

/// Build the manifest for the whole system: one sprite sheet per body.
pub fn system_manifest() -> SystemManifest {
    let sprite_sheets = BODIES
        .iter()
        .map(|b| SpriteSheetDescriptor {
            name: b.name.to_string(),
            path: format!("sprites/anim/{}.png", b.name),
            cols: SHEET_GRID,
            rows: SHEET_GRID,
            frame_duration: FRAME_DURATION,
        })
        .collect();

    let bodies = BODIES
        .iter()
        .map(|b| BodyDescriptor {
            name: b.name.to_string(),
            radius: b.radius,
            touch_radius: b.touch_radius,
            sprite: Some(b.name.to_string()),
            orbit: b.orbit.map(|(target, distance, factor)| OrbitDescriptor {
                target: target.to_string(),
                distance: distance * DISTANCE_FACTOR,
                speed: BASE_SPEED_DEG * factor,
                axis_ratio: 1.0,
                start_angle: 0.0,
            }),
        })
        .collect();

    SystemManifest { sprite_sheets, bodies }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_precedes_its_orbiter() {
        for (i, body) in BODIES.iter().enumerate() {
            if let Some((target, _, _)) = body.orbit {
                let t = index_of(target).unwrap();
                assert!(t < i, "{} orbits {} which comes later", body.name, target);
            }
        }
    }

    #[test]
    fn manifest_speeds_scale_base() {
        let manifest = system_manifest();
        let earth = &manifest.bodies[index_of("earth").unwrap()];
        let orbit = earth.orbit.as_ref().unwrap();
        assert_eq!(orbit.target, "sun");
        assert!((orbit.speed - 10.0).abs() < 1e-6);
        assert!((orbit.distance - 633.0 * 1.4).abs() < 1e-3);
        assert_eq!(manifest.sprite_sheets.len(), BODIES.len());
        assert_eq!(manifest.sprite_sheets[0].path, "sprites/anim/sun.png");
    }
}
