//! Presentation contract for platform backends.
//!
//! The engine renders into an owned [`Pixmap`] and hands the finished,
//! already-scaled frame to a backend. Window creation, vsync, and the
//! actual flip are the backend's concern; `lantern-soft` ships an
//! in-memory implementation used for headless runs and tests.

use crate::error::EngineError;
use crate::renderer::pixmap::Pixmap;

/// The output surface the loop presents each finished frame to.
pub trait PresentTarget {
    /// Present one finished frame. Called exactly once per loop iteration.
    fn present(&mut self, frame: &Pixmap) -> Result<(), EngineError>;

    /// Update the window caption.
    fn set_caption(&mut self, title: &str);
}
