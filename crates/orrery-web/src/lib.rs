pub mod frame;
pub mod runner;

pub use frame::SharedFramePresenter;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// The macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, frame accessors)
///
/// The game type must provide `fn new() -> Self`.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyOrrery;
///
/// orrery_web::export_game!(MyOrrery, "my-orrery");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the runner. Returns None before `game_init`.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("{}: call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            match runner.init() {
                Ok(()) => log::info!("{}: initialized", $game_name),
                Err(err) => log::error!("{}: init failed: {}", $game_name, err),
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_scroll(dy: f32) {
            with_runner(|r| r.push_input(InputEvent::Scroll { dy }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Returns false (and logs why) if the manifest was rejected.
        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> bool {
            with_runner(|r| match r.load_manifest(json) {
                Ok(()) => true,
                Err(err) => {
                    log::error!("{}: manifest rejected: {}", $game_name, err);
                    false
                }
            })
            .unwrap_or(false)
        }

        // ---- Frame accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        /// Copy of the whole frame buffer, for hosts without shared memory.
        #[wasm_bindgen]
        pub fn get_frame() -> js_sys::Float32Array {
            with_runner(|r| js_sys::Float32Array::from(r.frame()))
                .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_anchor_start() -> u32 {
            with_runner(|r| r.anchor_start()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_front_start() -> u32 {
            with_runner(|r| r.front_start()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }
    };
}
