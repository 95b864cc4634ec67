//! Raw events to intents.
//!
//! The translator owns only the bookkeeping needed to tell gestures apart:
//! which pointers are down, where a press started and the previous pinch
//! span. It never touches the camera or the field; `EngineContext::apply`
//! does that with the intents it returns.

use glam::Vec2;

use super::keys;
use super::queue::InputEvent;
use crate::renderer::camera::PanDirection;

/// Screen-pixel distance a press may travel and still count as a tap.
pub const DRAG_THRESHOLD: f32 = 5.0;

// ── Custom event kinds from the UI ──────────────────────────────────

/// a = target axis ratio in [0, 1].
pub const UI_SET_AXIS_RATIO: u32 = 1;
/// a = speed multiplier.
pub const UI_SET_SPEED: u32 = 2;
pub const UI_TOGGLE_DIRECTION: u32 = 3;
/// a = body index; negative frees the camera.
pub const UI_SELECT: u32 = 4;
pub const UI_NEXT: u32 = 5;
pub const UI_PREVIOUS: u32 = 6;
pub const UI_FREE: u32 = 7;
pub const UI_RESET_VIEW: u32 = 8;
/// a = 0 select, 1 enlarge, 2 shrink.
pub const UI_SET_TAP_MODE: u32 = 9;
/// a = zoom factor.
pub const UI_ZOOM: u32 = 10;
/// Viewport resize (sent by the host as kind=99). a = width, b = height.
pub const UI_RESIZE: u32 = 99;

/// What a tap on a body does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapMode {
    /// Track the tapped body.
    #[default]
    Select,
    Enlarge,
    Shrink,
}

impl TapMode {
    pub fn from_f32(value: f32) -> Option<Self> {
        match value.round() as i32 {
            0 => Some(Self::Select),
            1 => Some(Self::Enlarge),
            2 => Some(Self::Shrink),
            _ => None,
        }
    }
}

/// A state change requested by the user, applied by `EngineContext::apply`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// A pan key was pressed or released.
    Pan { direction: PanDirection, active: bool },
    /// One-pointer drag by a screen-space delta.
    Drag { delta: Vec2 },
    /// Two-pointer pinch: zoom factor plus the midpoint's screen-space motion.
    Pinch { zoom_factor: f32, midpoint_delta: Vec2 },
    ZoomIn,
    ZoomOut,
    /// Multiply the zoom by an explicit factor.
    Zoom(f32),
    SelectIndex(usize),
    SelectNext,
    SelectPrevious,
    FreeCamera,
    SetAxisRatio(f32),
    SetSpeedMultiplier(f32),
    ToggleDirection,
    /// Press and release without dragging, at a screen point.
    Tap { screen: Vec2 },
    SetTapMode(TapMode),
    ResetView,
    Resize { width: f32, height: f32 },
}

/// Key codes bound to each keyboard action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub pan_up: Vec<u32>,
    pub pan_down: Vec<u32>,
    pub pan_left: Vec<u32>,
    pub pan_right: Vec<u32>,
    pub zoom_in: Vec<u32>,
    pub zoom_out: Vec<u32>,
    pub next: Vec<u32>,
    pub previous: Vec<u32>,
    pub free: Vec<u32>,
    /// Digit keys 1..=select_digits select bodies 0..select_digits.
    pub select_digits: usize,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan_up: vec![keys::W],
            pan_down: vec![keys::S],
            pan_left: vec![keys::A],
            pan_right: vec![keys::D],
            zoom_in: vec![keys::H, keys::UP],
            zoom_out: vec![keys::J, keys::DOWN],
            next: vec![keys::RIGHT],
            previous: vec![keys::LEFT],
            free: vec![keys::SPACE],
            select_digits: 5,
        }
    }
}

impl KeyBindings {
    fn pan_direction(&self, key_code: u32) -> Option<PanDirection> {
        if self.pan_up.contains(&key_code) {
            Some(PanDirection::Up)
        } else if self.pan_down.contains(&key_code) {
            Some(PanDirection::Down)
        } else if self.pan_left.contains(&key_code) {
            Some(PanDirection::Left)
        } else if self.pan_right.contains(&key_code) {
            Some(PanDirection::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pointer {
    id: u32,
    pos: Vec2,
}

/// Turns raw input events into intents.
pub struct InputTranslator {
    bindings: KeyBindings,
    /// At most two tracked pointers; extra touches are ignored.
    pointers: Vec<Pointer>,
    /// Where the current single-pointer press began.
    press_start: Vec2,
    /// Last position a drag delta was measured from.
    drag_anchor: Vec2,
    /// Whether the current press has become a drag or pinch.
    moved: bool,
    /// Previous pinch span and midpoint.
    pinch: Option<(f32, Vec2)>,
}

impl InputTranslator {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pointers: Vec::with_capacity(2),
            press_start: Vec2::ZERO,
            drag_anchor: Vec2::ZERO,
            moved: false,
            pinch: None,
        }
    }

    /// Translate every event in order.
    pub fn translate_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> Vec<Intent> {
        events
            .into_iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    /// Translate one event. Most pointer events only update gesture state.
    pub fn translate(&mut self, event: &InputEvent) -> Option<Intent> {
        match *event {
            InputEvent::KeyDown { key_code } => self.key_down(key_code),
            InputEvent::KeyUp { key_code } => self.key_up(key_code),
            InputEvent::Scroll { dy } => {
                if dy > 0.0 {
                    Some(Intent::ZoomOut)
                } else if dy < 0.0 {
                    Some(Intent::ZoomIn)
                } else {
                    None
                }
            }
            InputEvent::PointerDown { id, x, y } => self.pointer_down(id, Vec2::new(x, y)),
            InputEvent::PointerMove { id, x, y } => self.pointer_move(id, Vec2::new(x, y)),
            InputEvent::PointerUp { id, x, y } => self.pointer_up(id, Vec2::new(x, y)),
            InputEvent::Custom { kind, a, b, .. } => Self::custom(kind, a, b),
        }
    }

    // -- Keyboard --

    /// Pan keys act on press; zoom repeats with the host's key repeat.
    fn key_down(&mut self, key_code: u32) -> Option<Intent> {
        if let Some(direction) = self.bindings.pan_direction(key_code) {
            return Some(Intent::Pan { direction, active: true });
        }
        if self.bindings.zoom_in.contains(&key_code) {
            return Some(Intent::ZoomIn);
        }
        if self.bindings.zoom_out.contains(&key_code) {
            return Some(Intent::ZoomOut);
        }
        None
    }

    /// Selection keys act on release so a held key selects once.
    fn key_up(&mut self, key_code: u32) -> Option<Intent> {
        if let Some(direction) = self.bindings.pan_direction(key_code) {
            return Some(Intent::Pan { direction, active: false });
        }
        if let Some(index) = keys::digit_index(key_code) {
            if index < self.bindings.select_digits {
                return Some(Intent::SelectIndex(index));
            }
        }
        if self.bindings.next.contains(&key_code) {
            return Some(Intent::SelectNext);
        }
        if self.bindings.previous.contains(&key_code) {
            return Some(Intent::SelectPrevious);
        }
        if self.bindings.free.contains(&key_code) {
            return Some(Intent::FreeCamera);
        }
        None
    }

    // -- Pointer gestures --

    fn pointer_down(&mut self, id: u32, pos: Vec2) -> Option<Intent> {
        if self.pointers.iter().any(|p| p.id == id) || self.pointers.len() >= 2 {
            return None;
        }
        self.pointers.push(Pointer { id, pos });

        if self.pointers.len() == 1 {
            self.press_start = pos;
            self.drag_anchor = pos;
            self.moved = false;
        } else {
            // A second finger turns the press into a pinch; no tap follows.
            self.moved = true;
            self.pinch = self.pinch_span();
        }
        None
    }

    fn pointer_move(&mut self, id: u32, pos: Vec2) -> Option<Intent> {
        let pointer = self.pointers.iter_mut().find(|p| p.id == id)?;
        pointer.pos = pos;

        match self.pointers.len() {
            1 => {
                if !self.moved && pos.distance(self.press_start) > DRAG_THRESHOLD {
                    self.moved = true;
                }
                if !self.moved {
                    return None;
                }
                let delta = pos - self.drag_anchor;
                self.drag_anchor = pos;
                Some(Intent::Drag { delta })
            }
            _ => {
                let (prev_span, prev_mid) = self.pinch?;
                let (span, mid) = self.pinch_span()?;
                self.pinch = Some((span, mid));
                if span <= 0.0 || prev_span <= 0.0 {
                    return None;
                }
                Some(Intent::Pinch {
                    zoom_factor: prev_span / span,
                    midpoint_delta: mid - prev_mid,
                })
            }
        }
    }

    fn pointer_up(&mut self, id: u32, pos: Vec2) -> Option<Intent> {
        let index = self.pointers.iter().position(|p| p.id == id)?;
        self.pointers.remove(index);

        match self.pointers.first() {
            None => {
                self.pinch = None;
                if self.moved {
                    None
                } else {
                    Some(Intent::Tap { screen: pos })
                }
            }
            Some(remaining) => {
                // Pinch ends; the remaining finger keeps dragging from here.
                self.pinch = None;
                self.drag_anchor = remaining.pos;
                None
            }
        }
    }

    fn pinch_span(&self) -> Option<(f32, Vec2)> {
        match self.pointers.as_slice() {
            [a, b] => Some((a.pos.distance(b.pos), (a.pos + b.pos) / 2.0)),
            _ => None,
        }
    }

    // -- UI --

    fn custom(kind: u32, a: f32, b: f32) -> Option<Intent> {
        match kind {
            UI_SET_AXIS_RATIO => Some(Intent::SetAxisRatio(a)),
            UI_SET_SPEED => Some(Intent::SetSpeedMultiplier(a)),
            UI_TOGGLE_DIRECTION => Some(Intent::ToggleDirection),
            UI_SELECT => {
                // Hosts send floats; 1.9999 still means body 2
                if a >= 0.0 {
                    Some(Intent::SelectIndex(a.round() as usize))
                } else {
                    Some(Intent::FreeCamera)
                }
            }
            UI_NEXT => Some(Intent::SelectNext),
            UI_PREVIOUS => Some(Intent::SelectPrevious),
            UI_FREE => Some(Intent::FreeCamera),
            UI_RESET_VIEW => Some(Intent::ResetView),
            UI_SET_TAP_MODE => TapMode::from_f32(a).map(Intent::SetTapMode),
            UI_ZOOM => Some(Intent::Zoom(a)),
            UI_RESIZE => Some(Intent::Resize { width: a, height: b }),
            other => {
                log::debug!("input: unhandled custom event kind {}", other);
                None
            }
        }
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(id: u32, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown { id, x, y }
    }

    fn moved(id: u32, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove { id, x, y }
    }

    fn up(id: u32, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp { id, x, y }
    }

    #[test]
    fn pan_keys_set_and_clear() {
        let mut t = InputTranslator::default();
        assert_eq!(
            t.translate(&InputEvent::KeyDown { key_code: keys::W }),
            Some(Intent::Pan { direction: PanDirection::Up, active: true })
        );
        assert_eq!(
            t.translate(&InputEvent::KeyUp { key_code: keys::W }),
            Some(Intent::Pan { direction: PanDirection::Up, active: false })
        );
    }

    #[test]
    fn zoom_on_press_select_on_release() {
        let mut t = InputTranslator::default();
        assert_eq!(t.translate(&InputEvent::KeyDown { key_code: keys::H }), Some(Intent::ZoomIn));
        assert_eq!(t.translate(&InputEvent::KeyDown { key_code: keys::DOWN }), Some(Intent::ZoomOut));
        assert_eq!(t.translate(&InputEvent::KeyUp { key_code: keys::H }), None);

        assert_eq!(t.translate(&InputEvent::KeyDown { key_code: keys::DIGIT_3 }), None);
        assert_eq!(
            t.translate(&InputEvent::KeyUp { key_code: keys::DIGIT_3 }),
            Some(Intent::SelectIndex(2))
        );
        assert_eq!(t.translate(&InputEvent::KeyUp { key_code: keys::RIGHT }), Some(Intent::SelectNext));
        assert_eq!(t.translate(&InputEvent::KeyUp { key_code: keys::LEFT }), Some(Intent::SelectPrevious));
        assert_eq!(t.translate(&InputEvent::KeyUp { key_code: keys::SPACE }), Some(Intent::FreeCamera));
    }

    #[test]
    fn digits_past_binding_are_ignored() {
        let mut t = InputTranslator::default();
        assert_eq!(t.translate(&InputEvent::KeyUp { key_code: 54 }), None);
    }

    #[test]
    fn scroll_down_zooms_out() {
        let mut t = InputTranslator::default();
        assert_eq!(t.translate(&InputEvent::Scroll { dy: 3.0 }), Some(Intent::ZoomOut));
        assert_eq!(t.translate(&InputEvent::Scroll { dy: -1.0 }), Some(Intent::ZoomIn));
        assert_eq!(t.translate(&InputEvent::Scroll { dy: 0.0 }), None);
    }

    #[test]
    fn still_press_is_a_tap() {
        let mut t = InputTranslator::default();
        let intents = t.translate_all(&[down(0, 100.0, 100.0), moved(0, 102.0, 101.0), up(0, 102.0, 101.0)]);
        assert_eq!(intents, vec![Intent::Tap { screen: Vec2::new(102.0, 101.0) }]);
    }

    #[test]
    fn drag_past_threshold_pans_without_tap() {
        let mut t = InputTranslator::default();
        let intents = t.translate_all(&[
            down(0, 100.0, 100.0),
            moved(0, 103.0, 100.0),
            moved(0, 110.0, 100.0),
            moved(0, 120.0, 90.0),
            up(0, 120.0, 90.0),
        ]);
        assert_eq!(
            intents,
            vec![
                Intent::Drag { delta: Vec2::new(10.0, 0.0) },
                Intent::Drag { delta: Vec2::new(10.0, -10.0) },
            ]
        );
    }

    #[test]
    fn two_pointers_pinch() {
        let mut t = InputTranslator::default();
        let intents = t.translate_all(&[
            down(0, 100.0, 100.0),
            down(1, 200.0, 100.0),
            // Spread to twice the span, midpoint moves right by 50
            moved(1, 300.0, 100.0),
        ]);
        assert_eq!(intents.len(), 1);
        match intents[0] {
            Intent::Pinch { zoom_factor, midpoint_delta } => {
                assert!((zoom_factor - 0.5).abs() < 1e-6);
                assert!((midpoint_delta - Vec2::new(50.0, 0.0)).length() < 1e-4);
            }
            other => panic!("expected pinch, got {other:?}"),
        }

        // Lifting both fingers never taps
        let rest = t.translate_all(&[up(1, 300.0, 100.0), up(0, 100.0, 100.0)]);
        assert!(rest.is_empty());
    }

    #[test]
    fn drag_continues_after_pinch() {
        let mut t = InputTranslator::default();
        t.translate_all(&[down(0, 0.0, 0.0), down(1, 100.0, 0.0), up(1, 100.0, 0.0)]);
        let intents = t.translate_all(&[moved(0, 1.0, 0.0)]);
        assert_eq!(intents, vec![Intent::Drag { delta: Vec2::new(1.0, 0.0) }]);
    }

    #[test]
    fn third_pointer_ignored() {
        let mut t = InputTranslator::default();
        t.translate_all(&[down(0, 0.0, 0.0), down(1, 100.0, 0.0), down(2, 50.0, 50.0)]);
        assert!(t.translate(&moved(2, 500.0, 500.0)).is_none());
    }

    #[test]
    fn custom_events_map_to_intents() {
        let mut t = InputTranslator::default();
        let custom = |kind, a, b| InputEvent::Custom { kind, a, b, c: 0.0 };
        assert_eq!(t.translate(&custom(UI_SET_AXIS_RATIO, 0.4, 0.0)), Some(Intent::SetAxisRatio(0.4)));
        assert_eq!(t.translate(&custom(UI_SET_SPEED, 5.0, 0.0)), Some(Intent::SetSpeedMultiplier(5.0)));
        assert_eq!(t.translate(&custom(UI_SELECT, 2.0, 0.0)), Some(Intent::SelectIndex(2)));
        assert_eq!(t.translate(&custom(UI_SELECT, -1.0, 0.0)), Some(Intent::FreeCamera));
        assert_eq!(t.translate(&custom(UI_SELECT, 1.9999, 0.0)), Some(Intent::SelectIndex(2)));
        assert_eq!(t.translate(&custom(UI_SELECT, 3.2, 0.0)), Some(Intent::SelectIndex(3)));
        assert_eq!(
            t.translate(&custom(UI_SET_TAP_MODE, 1.0, 0.0)),
            Some(Intent::SetTapMode(TapMode::Enlarge))
        );
        assert_eq!(t.translate(&custom(UI_SET_TAP_MODE, 7.0, 0.0)), None);
        assert_eq!(
            t.translate(&custom(UI_RESIZE, 800.0, 600.0)),
            Some(Intent::Resize { width: 800.0, height: 600.0 })
        );
        assert_eq!(t.translate(&custom(1234, 0.0, 0.0)), None);
    }
}
