//! Discrete input events and the per-frame queue.

/// Pointer buttons the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input event types the engine understands. Generic, with no
/// game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The platform asked the application to terminate.
    Quit,
    /// The pointer moved to window coordinates (x, y).
    PointerMoved { x: f32, y: f32 },
    /// A pointer button was pressed.
    PointerDown { button: MouseButton },
    /// A pointer button was released.
    PointerUp { button: MouseButton },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// A queue of input events.
/// The platform writes events in; the loop drains them once per frame.
#[derive(Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Input collaborator: fills the queue with whatever the platform has
/// pending. Called once per frame before the drain.
pub trait EventSource {
    fn poll(&mut self, queue: &mut InputQueue);
}
