//! The game contract and the frame loop that drives it.

use glam::Vec2;

use crate::core::time::Clock;
use crate::error::EngineError;
use crate::input::queue::{EventSource, InputEvent, InputQueue};
use crate::renderer::pixmap::{Pixmap, Rgba};
use crate::renderer::traits::PresentTarget;

/// Engine configuration, provided by the host before the loop starts.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Logical drawing surface width in pixels.
    pub width: u32,
    /// Logical drawing surface height in pixels.
    pub height: u32,
    /// Integer upscale factor from logical surface to output surface.
    pub scale: u32,
    /// Window caption.
    pub title: String,
    /// Nominal update rate. dt stays variable; this only paces the clock.
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 220,
            scale: 3,
            title: "Lantern".to_string(),
            target_fps: 60,
        }
    }
}

/// Per-frame shared context handed into update and event hooks.
///
/// Carries the measured fps, the pointer position in logical (pre-scale)
/// coordinates, and the two requests game code can make of its owners:
/// terminate the loop, or switch the active scene.
#[derive(Debug, Clone, Default)]
pub struct EngineContext {
    fps: f32,
    pointer: Vec2,
    quit: bool,
    scene_request: Option<String>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent measured frames-per-second.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Pointer position in logical surface coordinates (window position
    /// divided by the configured scale).
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Ask the loop to terminate. The current frame still completes its
    /// update, render, and present before the flag is honored.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Ask the owning [`SceneStateMachine`](crate::core::state::SceneStateMachine)
    /// to switch scenes once the current dispatch returns.
    pub fn request_scene(&mut self, tag: impl Into<String>) {
        self.scene_request = Some(tag.into());
    }

    /// Consume a pending scene request, if any.
    pub fn take_scene_request(&mut self) -> Option<String> {
        self.scene_request.take()
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// React to one drained input event.
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext);

    /// Advance game logic by `dt` seconds (variable, wall-clock measured).
    fn update(&mut self, dt: f32, ctx: &mut EngineContext);

    /// Draw into the logical low-resolution surface.
    fn render(&mut self, screen: &mut Pixmap);
}

/// Owns the logical and output surfaces, the input queue, and the platform
/// collaborators, and runs the frame loop.
pub struct GameContainer<P: PresentTarget, C: Clock, E: EventSource> {
    config: GameConfig,
    screen: Pixmap,
    output: Pixmap,
    present: P,
    clock: C,
    events: E,
    input: InputQueue,
    ctx: EngineContext,
    game: Option<Box<dyn Game>>,
    running: bool,
}

impl<P: PresentTarget, C: Clock, E: EventSource> GameContainer<P, C, E> {
    pub fn new(config: GameConfig, present: P, clock: C, events: E) -> Self {
        let screen = Pixmap::new(config.width, config.height);
        let output = Pixmap::new(config.width * config.scale, config.height * config.scale);
        Self {
            config,
            screen,
            output,
            present,
            clock,
            events,
            input: InputQueue::new(),
            ctx: EngineContext::new(),
            game: None,
            running: false,
        }
    }

    /// Install the game to drive. Must happen before [`GameContainer::run`].
    pub fn set_game(&mut self, game: Box<dyn Game>) {
        self.game = Some(game);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Logical surface dimensions.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Output surface dimensions (logical × scale).
    pub fn output_size(&self) -> (u32, u32) {
        (self.output.width(), self.output.height())
    }

    pub fn present_target(&self) -> &P {
        &self.present
    }

    /// Tear the container apart, returning the platform collaborators.
    /// Useful after a run to inspect what was presented.
    pub fn into_platform(self) -> (P, C, E) {
        (self.present, self.clock, self.events)
    }

    /// Run the frame loop until a terminate signal is observed.
    ///
    /// Fails fast with [`EngineError::NoGame`] before any frame executes if
    /// no game was set. Each iteration, in order: tick the clock, update the
    /// game, poll and drain input (dispatching every event), clear the
    /// logical surface to black, render, integer-scale into the output
    /// surface, present. A frame that observes the terminate signal still
    /// completes before the loop exits cleanly.
    pub fn run(&mut self) -> Result<(), EngineError> {
        let mut game = self.game.take().ok_or(EngineError::NoGame)?;
        self.present.set_caption(&self.config.title);
        log::info!(
            "loop starting: {}x{} logical, x{} scale, target {} fps",
            self.config.width,
            self.config.height,
            self.config.scale,
            self.config.target_fps
        );

        let scale = self.config.scale as f32;
        self.running = true;
        while self.running {
            let dt = self.clock.tick(self.config.target_fps) * 0.001;
            self.ctx.fps = self.clock.fps();

            // Update runs before the event drain, on last frame's input state.
            game.update(dt, &mut self.ctx);

            self.events.poll(&mut self.input);
            for event in self.input.drain() {
                match event {
                    InputEvent::Quit => self.running = false,
                    InputEvent::PointerMoved { x, y } => {
                        self.ctx.pointer = Vec2::new(x / scale, y / scale);
                    }
                    _ => {}
                }
                game.check_events(&event, &mut self.ctx);
            }
            if self.ctx.quit_requested() {
                self.running = false;
            }

            self.screen.fill(Rgba::BLACK);
            game.render(&mut self.screen);
            self.screen.scale_into(&mut self.output);
            self.present.present(&self.output)?;
        }

        log::info!("loop stopped");
        self.game = Some(game);
        Ok(())
    }
}
