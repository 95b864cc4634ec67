use bytemuck::{Pod, Zeroable};

/// Per-body render data copied into the shared frame buffer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// `x`/`y` is the top-left corner of the body's square in world space; the
/// presenter scales the square by `scale` about its center.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Top-left X in world space.
    pub x: f32,
    /// Top-left Y in world space.
    pub y: f32,
    /// Unscaled edge length (twice the radius).
    pub size: f32,
    /// Depth-illusion scale, 0.5 on the far side to 1.5 on the near side.
    pub scale: f32,
    /// `DepthOrder` as a float.
    pub depth: f32,
    /// Sprite-sheet column of the current frame.
    pub frame_col: f32,
    /// Sprite-sheet row of the current frame.
    pub frame_row: f32,
    /// Animation loop phase in [0, 1).
    pub phase: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all body instances, ordered back to front.
///
/// Instances `[0..anchor_start)` are behind their primaries,
/// `[anchor_start..front_start)` are anchors and `[front_start..]` are in front.
pub struct RenderBuffer {
    pub instances: Vec<BodyInstance>,
    pub anchor_start: u32,
    pub front_start: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            anchor_start: 0,
            front_start: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.anchor_start = 0;
        self.front_start = 0;
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn set_splits(&mut self, anchor_start: u32, front_start: u32) {
        self.anchor_start = anchor_start;
        self.front_start = front_start;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
