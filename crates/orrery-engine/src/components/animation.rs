//! Sprite-sheet animation for bodies.
//!
//! Every body texture is a grid of frames played row by row on a loop.
//! The engine only tracks which cell is current; slicing the texture is the
//! renderer's job.

/// Identifies which texture atlas a sprite sheet lives in.
/// Index into the manifest's sprite-sheet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Default grid of a body sprite sheet.
pub const DEFAULT_SHEET_COLS: u32 = 28;
pub const DEFAULT_SHEET_ROWS: u32 = 28;
/// Default seconds per frame.
pub const DEFAULT_FRAME_DURATION: f32 = 0.05;

/// Definition of a looping sprite-sheet animation.
///
/// Frames are walked row-major over a `cols` × `rows` grid: left to right,
/// top to bottom. Cells are computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Atlas holding the sheet.
    pub atlas: AtlasId,
    pub cols: u32,
    pub rows: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl AnimationDef {
    pub fn grid(atlas: AtlasId, cols: u32, rows: u32, frame_duration: f32) -> Self {
        Self {
            atlas,
            cols,
            rows,
            frame_duration,
        }
    }

    /// Get the number of frames.
    pub fn frame_count(&self) -> usize {
        (self.cols as usize).saturating_mul(self.rows as usize)
    }

    /// (col, row) cell of the `index`-th frame.
    pub fn frame_at(&self, index: usize) -> (f32, f32) {
        if self.cols == 0 {
            return (0.0, 0.0);
        }
        let cols = self.cols as usize;
        ((index % cols) as f32, (index / cols) as f32)
    }

    /// Get the total duration of one loop.
    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frame_count() as f32
    }
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self::grid(
            AtlasId(0),
            DEFAULT_SHEET_COLS,
            DEFAULT_SHEET_ROWS,
            DEFAULT_FRAME_DURATION,
        )
    }
}

/// Playback state of a body's sprite sheet.
#[derive(Debug, Clone)]
pub struct SpriteAnimation {
    pub def: AnimationDef,
    /// Seconds since playback started, wrapped to one loop.
    pub state_time: f32,
    /// Current frame index.
    pub frame_index: usize,
}

impl SpriteAnimation {
    pub fn new(def: AnimationDef) -> Self {
        Self {
            def,
            state_time: 0.0,
            frame_index: 0,
        }
    }

    /// Advance playback by dt seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let total = self.def.total_duration();
        let count = self.def.frame_count();
        if count == 0 || total <= 0.0 || !total.is_finite() {
            return false;
        }

        self.state_time = (self.state_time + dt.max(0.0)) % total;
        let index = ((self.state_time / self.def.frame_duration) as usize)
            .min(count - 1);

        let changed = index != self.frame_index;
        self.frame_index = index;
        changed
    }

    /// Current frame (col, row) for sprite rendering.
    pub fn current_frame(&self) -> (f32, f32) {
        self.def.frame_at(self.frame_index)
    }

    /// Fraction of the loop already played, in [0, 1).
    pub fn phase(&self) -> f32 {
        let total = self.def.total_duration();
        if total <= 0.0 {
            0.0
        } else {
            self.state_time / total
        }
    }
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self::new(AnimationDef::default())
    }
}
