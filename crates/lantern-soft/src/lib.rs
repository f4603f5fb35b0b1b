//! Software platform backend: in-memory presentation, wall-clock and manual
//! clocks, scripted input, and PNG decoding. Runs the engine loop with no
//! window system, which is what the tests and headless tools want.

pub mod clock;
pub mod events;
pub mod loader;
pub mod present;

pub use clock::{ManualClock, SystemClock};
pub use events::ScriptedEvents;
pub use loader::PngLoader;
pub use present::SoftPresent;
