pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::error::ConfigError;
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{BodyId, GameEvent};
pub use components::animation::{AnimationDef, AtlasId, SpriteAnimation};
pub use components::body::{BodyInfo, OrbitDirection, OrbitTuning, OrbitingBody};
pub use components::depth::DepthOrder;
pub use core::field::OrbitField;
pub use core::time::FrameClock;
pub use renderer::camera::{CameraConfig, CameraMode, CameraRig, CameraView, PanDirection};
pub use renderer::instance::{BodyInstance, RenderBuffer};
pub use renderer::traits::{FrameData, Presenter, Renderable};
pub use input::queue::{InputEvent, InputQueue};
pub use input::translator::{InputTranslator, Intent, KeyBindings, TapMode};
pub use assets::manifest::{BodyDescriptor, OrbitDescriptor, SpriteSheetDescriptor, SystemManifest};
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::animation::tick_animations;
pub use systems::render::build_render_buffer;
