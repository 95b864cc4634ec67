use orrery_engine::{
    build_render_buffer, ConfigError, EngineContext, FrameClock, FrameData, Game, GameConfig,
    InputEvent, InputQueue, Presenter, ProtocolLayout, RenderBuffer, RenderContext,
    SystemManifest,
};

use crate::frame::SharedFramePresenter;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// Per tick: the game translates and applies input, the field advances,
/// the camera follows, and only then is the frame presented.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: GameConfig,
    presenter: SharedFramePresenter,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_bodies),
            clock: FrameClock::new(config.max_frame_dt),
            presenter: SharedFramePresenter::new(ProtocolLayout::from_config(&config)),
            config,
            game,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// On error the runner stays uninitialized and ticks do nothing.
    pub fn init(&mut self) -> Result<(), ConfigError> {
        self.config = self.game.config();
        self.ctx = EngineContext::new(&self.config);
        self.clock = FrameClock::new(self.config.max_frame_dt);
        self.presenter = SharedFramePresenter::new(ProtocolLayout::from_config(&self.config));
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_bodies);

        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replace the field with one built from a JSON manifest.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), ConfigError> {
        let manifest = SystemManifest::from_json(json)?;
        let field = manifest.build_field(&self.config)?;
        self.ctx.install_field(field);
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick with the real elapsed time since the last one.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let dt = self.clock.tick(dt);

        // Input becomes intents before anything moves
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        // Bodies in dependency order, then the camera
        self.ctx.step(dt);

        build_render_buffer(self.ctx.field.iter(), &mut self.render_buffer);

        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
                camera: self.ctx.camera.view(),
            };
            self.game.render(&mut render_ctx);
        }

        let frame = FrameData {
            bodies: &self.render_buffer.instances,
            anchor_start: self.render_buffer.anchor_start,
            front_start: self.render_buffer.front_start,
            camera: self.ctx.camera.view(),
            elapsed: self.clock.elapsed() as f32,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
        };
        self.presenter.present(&frame, &self.ctx.events);
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame(&self) -> &[f32] {
        self.presenter.as_slice()
    }

    // ---- Pointer accessors for shared memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.presenter.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn anchor_start(&self) -> u32 {
        self.render_buffer.anchor_start
    }

    pub fn front_start(&self) -> u32 {
        self.render_buffer.front_start
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.presenter.layout().max_bodies as u32
    }

    pub fn max_events(&self) -> u32 {
        self.presenter.layout().max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.presenter.layout().buffer_total_floats as u32
    }
}
