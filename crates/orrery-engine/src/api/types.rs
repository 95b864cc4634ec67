use bytemuck::{Pod, Zeroable};

/// Stable identifier of a body within its `OrbitField`.
/// Bodies are never removed, so the id doubles as the insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Position of the body in its field's dependency order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An event communicated from Rust to the UI layer via the shared frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }

    #[test]
    fn body_id_index() {
        assert_eq!(BodyId(7).index(), 7);
    }
}
