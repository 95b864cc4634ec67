//! Presentation contract.
//!
//! The engine never draws. Each tick it hands a `FrameData` snapshot to a
//! `Presenter`, and the web bridge copies it into the shared frame buffer.

use super::camera::CameraView;
use super::instance::BodyInstance;
use crate::components::depth::DepthOrder;

/// Anything that can be drawn as a body instance.
pub trait Renderable {
    /// Tier the instance belongs to this frame.
    fn depth(&self) -> DepthOrder;

    /// Render tuple for this frame.
    fn instance(&self) -> BodyInstance;
}

/// Complete frame snapshot, valid for one tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Body instances, ordered back to front.
    pub bodies: &'a [BodyInstance],
    /// First index of the anchor tier.
    pub anchor_start: u32,
    /// First index of the front tier.
    pub front_start: u32,
    pub camera: CameraView,
    /// Seconds simulated since start.
    pub elapsed: f32,
    /// World dimensions for the host's projection.
    pub world_width: f32,
    pub world_height: f32,
}

/// Receives the final state of every tick.
///
/// # Example Implementation
///
/// ```ignore
/// struct LogPresenter;
///
/// impl Presenter for LogPresenter {
///     fn present(&mut self, frame: &FrameData, events: &[GameEvent]) {
///         log::trace!("{} bodies, camera at {:?}", frame.bodies.len(), frame.camera);
///     }
/// }
/// ```
pub trait Presenter {
    fn present(&mut self, frame: &FrameData, events: &[crate::api::types::GameEvent]);
}
