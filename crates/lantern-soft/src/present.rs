//! In-memory presentation target.

use lantern_engine::{EngineError, Pixmap, PresentTarget};

/// Keeps the most recently presented frame instead of putting it on a
/// screen. Tests and headless runs inspect it after the loop exits.
#[derive(Default)]
pub struct SoftPresent {
    last_frame: Option<Pixmap>,
    frames_presented: u64,
    caption: String,
}

impl SoftPresent {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last frame handed to [`PresentTarget::present`], if any.
    pub fn last_frame(&self) -> Option<&Pixmap> {
        self.last_frame.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl PresentTarget for SoftPresent {
    fn present(&mut self, frame: &Pixmap) -> Result<(), EngineError> {
        self.last_frame = Some(frame.clone());
        self.frames_presented += 1;
        Ok(())
    }

    fn set_caption(&mut self, title: &str) {
        self.caption = title.to_string();
    }
}
