/// Shared frame buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_BODIES: usize = 3;
pub const HEADER_BODY_COUNT: usize = 4;
pub const HEADER_ANCHOR_START: usize = 5;
pub const HEADER_FRONT_START: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_WORLD_WIDTH: usize = 9;
pub const HEADER_WORLD_HEIGHT: usize = 10;
pub const HEADER_CAMERA_X: usize = 11;
pub const HEADER_CAMERA_Y: usize = 12;
pub const HEADER_CAMERA_ZOOM: usize = 13;
pub const HEADER_CAMERA_TRACKED: usize = 14;
pub const HEADER_ELAPSED: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance: x, y, size, scale, depth, frame col, frame row, phase.
pub const BODY_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum bodies per frame.
    pub max_bodies: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_bodies: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let event_data_offset = body_data_offset + body_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_bodies,
            max_events,
            body_data_floats,
            event_data_floats,
            body_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_bodies, config.max_events)
    }
}
