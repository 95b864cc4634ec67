use orrery_engine::bridge::protocol::*;
use orrery_engine::{FrameData, GameEvent, Presenter, ProtocolLayout};

/// Presenter that serializes each frame into one flat f32 buffer laid out
/// per `ProtocolLayout`. The host reads it through a pointer into wasm
/// memory or a copied `Float32Array`.
pub struct SharedFramePresenter {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    frame_counter: u32,
}

impl SharedFramePresenter {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_BODIES] = layout.max_bodies as f32;
        buffer[HEADER_MAX_EVENTS] = layout.max_events as f32;
        Self {
            layout,
            buffer,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn body_count(&self) -> u32 {
        self.buffer[HEADER_BODY_COUNT] as u32
    }

    pub fn event_count(&self) -> u32 {
        self.buffer[HEADER_EVENT_COUNT] as u32
    }
}

impl Presenter for SharedFramePresenter {
    fn present(&mut self, frame: &FrameData, events: &[GameEvent]) {
        let layout = &self.layout;

        let body_count = frame.bodies.len().min(layout.max_bodies);
        if body_count < frame.bodies.len() {
            log::warn!(
                "frame: {} bodies exceed capacity {}, truncating",
                frame.bodies.len(),
                layout.max_bodies
            );
        }
        let event_count = events.len().min(layout.max_events);

        let bodies: &[f32] = bytemuck::cast_slice(&frame.bodies[..body_count]);
        let start = layout.body_data_offset;
        self.buffer[start..start + bodies.len()].copy_from_slice(bodies);

        let events_floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        let start = layout.event_data_offset;
        self.buffer[start..start + events_floats.len()].copy_from_slice(events_floats);

        self.frame_counter = self.frame_counter.wrapping_add(1);

        let header = &mut self.buffer[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_BODY_COUNT] = body_count as f32;
        header[HEADER_ANCHOR_START] = (frame.anchor_start as usize).min(body_count) as f32;
        header[HEADER_FRONT_START] = (frame.front_start as usize).min(body_count) as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        header[HEADER_WORLD_WIDTH] = frame.world_width;
        header[HEADER_WORLD_HEIGHT] = frame.world_height;
        header[HEADER_CAMERA_X] = frame.camera.x;
        header[HEADER_CAMERA_Y] = frame.camera.y;
        header[HEADER_CAMERA_ZOOM] = frame.camera.zoom;
        header[HEADER_CAMERA_TRACKED] = frame.camera.tracked;
        header[HEADER_ELAPSED] = frame.elapsed;
    }
}
