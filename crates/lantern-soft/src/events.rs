//! Scripted input for headless runs.

use std::collections::VecDeque;

use lantern_engine::{EventSource, InputEvent, InputQueue};

/// Replays pre-written event batches, one batch per poll. Once the script
/// runs dry every poll delivers nothing, so a script that never quits
/// relies on the game requesting termination itself.
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }

    /// An empty script.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// A script of `frames - 1` quiet polls followed by a quit event.
    pub fn quit_after(frames: u32) -> Self {
        let mut batches = vec![Vec::new(); frames.saturating_sub(1) as usize];
        batches.push(vec![InputEvent::Quit]);
        Self::new(batches)
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, queue: &mut InputQueue) {
        if let Some(batch) = self.batches.pop_front() {
            for event in batch {
                queue.push(event);
            }
        }
    }
}
