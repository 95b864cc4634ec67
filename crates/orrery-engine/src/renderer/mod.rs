pub mod camera;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraConfig, CameraMode, CameraRig, CameraView, PanDirection, PanFlags};
pub use instance::{BodyInstance, RenderBuffer};
pub use traits::{FrameData, Presenter, Renderable};
