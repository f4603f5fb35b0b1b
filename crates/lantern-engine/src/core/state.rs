//! Named, resettable scenes and the machine that switches between them.

use std::collections::HashMap;

use crate::api::game::EngineContext;
use crate::error::EngineError;
use crate::input::queue::InputEvent;
use crate::renderer::pixmap::Pixmap;

/// One named mode of the game (menu, level, pause). Exactly one is active
/// in a [`SceneStateMachine`] at any time.
pub trait SceneState {
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext);
    fn update(&mut self, dt: f32, ctx: &mut EngineContext);
    fn render(&mut self, screen: &mut Pixmap);

    /// Restore the scene's fields to their construction-time values. The
    /// machine calls this when the scene becomes current, before it
    /// receives any event.
    fn reset(&mut self);
}

/// Tag-keyed scene collection with a single current pointer.
///
/// An empty current tag means "no active scene": dispatch is a no-op. There
/// are no transition guards and no terminal state; the host loop owns
/// lifecycle termination.
#[derive(Default)]
pub struct SceneStateMachine {
    states: HashMap<String, Box<dyn SceneState>>,
    current: String,
}

impl SceneStateMachine {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: String::new(),
        }
    }

    /// Register a scene under `tag`. First registration wins: re-registering
    /// an existing tag is a silent no-op (guards against accidental
    /// overwrite of a live scene).
    pub fn register(&mut self, tag: impl Into<String>, state: Box<dyn SceneState>) {
        let tag = tag.into();
        if self.states.contains_key(&tag) {
            log::debug!("scene '{tag}' already registered; keeping the existing one");
            return;
        }
        self.states.insert(tag, state);
    }

    /// Make `tag` the current scene, resetting it before it receives any
    /// event. Unknown tags fail fast and leave the previous current scene
    /// untouched.
    pub fn set_current(&mut self, tag: &str) -> Result<(), EngineError> {
        let state = self
            .states
            .get_mut(tag)
            .ok_or_else(|| EngineError::UnknownState(tag.to_string()))?;
        state.reset();
        self.current = tag.to_string();
        Ok(())
    }

    /// Tag of the current scene; empty when none is active.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(|s| s.as_str())
    }

    pub fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.check_events(event, ctx);
        }
        self.apply_requested_transition(ctx);
    }

    pub fn update(&mut self, dt: f32, ctx: &mut EngineContext) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.update(dt, ctx);
        }
        self.apply_requested_transition(ctx);
    }

    pub fn render(&mut self, screen: &mut Pixmap) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.render(screen);
        }
    }

    /// Scenes cannot mutably reach the machine dispatching them, so
    /// transitions requested through the context are applied here, after
    /// the dispatch returns. Unknown tags are dropped with a warning; the
    /// per-frame path never fails.
    fn apply_requested_transition(&mut self, ctx: &mut EngineContext) {
        if let Some(tag) = ctx.take_scene_request() {
            if let Err(err) = self.set_current(&tag) {
                log::warn!("ignoring scene transition request: {err}");
            }
        }
    }
}
