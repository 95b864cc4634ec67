/// Raw input events the engine understands.
/// Pointer coordinates are screen pixels, origin top-left, Y-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began. `id` distinguishes simultaneous touches.
    PointerDown { id: u32, x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { id: u32, x: f32, y: f32 },
    /// A touch/cursor moved.
    PointerMove { id: u32, x: f32, y: f32 },
    /// Scroll wheel. Positive `dy` scrolls down (zooms out).
    Scroll { dy: f32 },
    /// A key was pressed. Browser `keyCode` values, see `input::keys`.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the UI layer (sliders, buttons).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { id: 0, x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 32 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_keeps_events() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Scroll { dy: 1.0 });
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let events = q.drain();
        match events[0] {
            InputEvent::Custom { kind, a, b, c } => {
                assert_eq!(kind, 7);
                assert_eq!((a, b, c), (1.5, 2.5, 3.5));
            }
            _ => panic!("Expected Custom event"),
        }
    }
}
