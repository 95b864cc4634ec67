/// Solar System: stylized orrery with elliptical orbits and a depth illusion.
///
/// Sprite-sheet bodies, no physics. Camera: keys/drag to pan, scroll/pinch
/// to zoom, digits or arrows to follow a body, space to let go.

use orrery_engine::*;
use orrery_engine::input::queue::InputQueue;

use crate::bodies;

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 400.0;
const WORLD_H: f32 = 300.0;

/// Start zoomed out far enough to see the inner planets.
const START_ZOOM: f32 = 5.0;

// ── Game event kinds to the host UI ──────────────────────────────────

/// a = selected index (-1 when none), b = radius, c = base speed.
pub const EVENT_SELECTION: f32 = 1.0;
/// a = 1 when tracking, b = zoom, c = speed multiplier.
pub const EVENT_CAMERA: f32 = 2.0;
/// a = tapped index, b = radius, c = base speed.
pub const EVENT_TAP_INFO: f32 = 3.0;
/// a = axis ratio the orbits are easing toward, b = speed multiplier.
pub const EVENT_ORBIT: f32 = 4.0;

pub struct SolarSystem {
    translator: InputTranslator,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            translator: InputTranslator::default(),
        }
    }

    fn info_event(kind: f32, ctx: &EngineContext, id: BodyId) -> GameEvent {
        match ctx.field.get(id) {
            Some(body) => {
                let info = body.info();
                GameEvent {
                    kind,
                    a: info.id.0 as f32,
                    b: info.radius,
                    c: info.base_speed_deg,
                }
            }
            None => GameEvent { kind, a: -1.0, b: 0.0, c: 0.0 },
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_bodies: 16,
            max_events: 8,
            camera: CameraConfig {
                default_zoom: START_ZOOM,
                viewport_width: WORLD_W,
                viewport_height: WORLD_H,
                ..CameraConfig::default()
            },
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), ConfigError> {
        let field = bodies::system_manifest().build_field(&self.config())?;
        ctx.install_field(field);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for intent in self.translator.translate_all(input.iter()) {
            ctx.apply(intent);
        }

        // ── Emit game events ─────────────────────────────────────────
        let selection = match ctx.selected() {
            Some(id) => Self::info_event(EVENT_SELECTION, ctx, id),
            None => GameEvent { kind: EVENT_SELECTION, a: -1.0, b: 0.0, c: 0.0 },
        };
        ctx.emit_event(selection);

        let tracking = if ctx.camera.tracked().is_some() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent {
            kind: EVENT_CAMERA,
            a: tracking,
            b: ctx.camera.zoom(),
            c: ctx.speed_multiplier(),
        });

        ctx.emit_event(GameEvent {
            kind: EVENT_ORBIT,
            a: ctx.axis_ratio_target(),
            b: ctx.speed_multiplier(),
            c: 0.0,
        });

        if let Some(id) = ctx.tapped {
            let tap = Self::info_event(EVENT_TAP_INFO, ctx, id);
            ctx.emit_event(tap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::input::keys;
    use orrery_engine::input::translator::{UI_SET_AXIS_RATIO, UI_SET_SPEED, UI_SET_TAP_MODE};

    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx).unwrap();
        (game, ctx)
    }

    fn frame(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent], dt: f32) {
        let mut queue = InputQueue::new();
        for e in events {
            queue.push(*e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &queue);
        ctx.step(dt);
    }

    #[test]
    fn builds_all_bodies_in_order() {
        let (_, ctx) = setup();
        assert_eq!(ctx.field.len(), bodies::BODIES.len());
        let moon = ctx.field.find_by_name("moon").unwrap();
        let earth = ctx.field.find_by_name("earth").unwrap();
        assert_eq!(moon.orbit_target, Some(earth.id));
        assert!(ctx.field.find_by_name("sun").unwrap().is_anchor());
    }

    #[test]
    fn digit_key_selects_and_reports() {
        let (mut game, mut ctx) = setup();
        frame(
            &mut game,
            &mut ctx,
            &[
                InputEvent::KeyDown { key_code: keys::DIGIT_1 + 3 },
                InputEvent::KeyUp { key_code: keys::DIGIT_1 + 3 },
            ],
            0.016,
        );
        assert_eq!(ctx.selected(), Some(BodyId(3)));
        let sel = ctx.events.iter().find(|e| e.kind == EVENT_SELECTION).unwrap();
        assert_eq!(sel.a, 3.0);
        assert_eq!(sel.b, 34.0);
        assert!((sel.c - 10.0).abs() < 1e-6);
        let cam = ctx.events.iter().find(|e| e.kind == EVENT_CAMERA).unwrap();
        assert_eq!(cam.a, 1.0);
    }

    #[test]
    fn moon_follows_earth_each_frame() {
        let (mut game, mut ctx) = setup();
        for _ in 0..30 {
            frame(&mut game, &mut ctx, &[], 0.1);
            let earth = ctx.field.find_by_name("earth").unwrap().center();
            let moon = ctx.field.find_by_name("moon").unwrap();
            let d = moon.center().distance(earth);
            assert!((d - 100.0 * bodies::DISTANCE_FACTOR).abs() < 1e-2);
        }
    }

    #[test]
    fn speed_change_reported() {
        let (mut game, mut ctx) = setup();
        frame(
            &mut game,
            &mut ctx,
            &[InputEvent::Custom { kind: UI_SET_SPEED, a: 2.5, b: 0.0, c: 0.0 }],
            0.016,
        );
        let cam = ctx.events.iter().find(|e| e.kind == EVENT_CAMERA).unwrap();
        assert_eq!(cam.c, 2.5);
        assert_eq!(cam.a, 0.0);
    }

    #[test]
    fn axis_ratio_slider_is_reported_and_eased() {
        let (mut game, mut ctx) = setup();
        frame(
            &mut game,
            &mut ctx,
            &[InputEvent::Custom { kind: UI_SET_AXIS_RATIO, a: 0.5, b: 0.0, c: 0.0 }],
            0.016,
        );
        let orbit = ctx.events.iter().find(|e| e.kind == EVENT_ORBIT).unwrap();
        assert_eq!(orbit.a, 0.5);
        assert_eq!(orbit.b, 1.0);

        let earth = ctx.field.find_by_name("earth").unwrap();
        assert!(earth.axis_ratio < 1.0);
        assert!(earth.axis_ratio > 0.5);
    }

    #[test]
    fn tapping_the_sun_in_enlarge_mode_grows_it() {
        let (mut game, mut ctx) = setup();
        // Screen center maps onto the camera position, the sun's center
        frame(
            &mut game,
            &mut ctx,
            &[
                InputEvent::Custom { kind: UI_SET_TAP_MODE, a: 1.0, b: 0.0, c: 0.0 },
                InputEvent::PointerDown { id: 0, x: WORLD_W / 2.0, y: WORLD_H / 2.0 },
                InputEvent::PointerUp { id: 0, x: WORLD_W / 2.0, y: WORLD_H / 2.0 },
            ],
            0.016,
        );
        let sun = ctx.field.find_by_name("sun").unwrap();
        assert!((sun.radius - 400.0 * 1.15).abs() < 1e-3);
        assert_eq!(ctx.selected(), None);
        let tap = ctx.events.iter().find(|e| e.kind == EVENT_TAP_INFO).unwrap();
        assert_eq!(tap.a, 0.0);
    }
}
