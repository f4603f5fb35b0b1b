//! The loop's time source.

/// Clock collaborator: measures elapsed time, never enforces deadlines.
///
/// The loop calls [`Clock::tick`] once per iteration; backends are free to
/// sleep toward `target_fps` before reporting, but the returned delta is
/// always real measured wall-clock time, so update math stays dt-scaled.
pub trait Clock {
    /// Advance the clock, pacing toward `target_fps`, and return the elapsed
    /// milliseconds since the previous tick.
    fn tick(&mut self, target_fps: u32) -> f32;

    /// Most recent measured frames-per-second.
    fn fps(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock;
    impl Clock for FixedClock {
        fn tick(&mut self, _target_fps: u32) -> f32 {
            16.0
        }
        fn fps(&self) -> f32 {
            60.0
        }
    }

    #[test]
    fn clock_is_object_safe() {
        let mut clock: Box<dyn Clock> = Box::new(FixedClock);
        assert_eq!(clock.tick(60), 16.0);
        assert_eq!(clock.fps(), 60.0);
    }
}
