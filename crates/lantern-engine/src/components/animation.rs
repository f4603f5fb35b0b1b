//! Sprite animation: sheet slicing, frame playback, and the tag-keyed
//! registry with a single current selection.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::renderer::pixmap::{Pixmap, Rgba};

/// Slice a `cols`×`rows` grid of `frame_w`×`frame_h` cells out of a sheet,
/// row-major, into owned frames. Color-key transparency is baked into each
/// frame here, once; the source sheet is never modified.
pub fn slice_sheet(
    sheet: &Pixmap,
    frame_w: u32,
    frame_h: u32,
    cols: u32,
    rows: u32,
    color_keys: &[Rgba],
) -> Vec<Pixmap> {
    let mut frames = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let mut frame = sheet.region(col * frame_w, row * frame_h, frame_w, frame_h);
            frame.apply_color_keys(color_keys);
            frames.push(frame);
        }
    }
    frames
}

/// Frame timing: one uniform duration, optionally refined by a per-frame
/// table. Out-of-range table lookups fall back to the uniform value.
#[derive(Debug, Clone)]
pub struct FrameDurations {
    uniform: f32,
    per_frame: Option<Vec<f32>>,
}

impl FrameDurations {
    /// Every frame holds for `seconds`.
    pub fn uniform(seconds: f32) -> Self {
        Self {
            uniform: seconds,
            per_frame: None,
        }
    }

    /// Frame `i` holds for `table[i]`; frames past the table's end fall
    /// back to `fallback`.
    pub fn per_frame(table: Vec<f32>, fallback: f32) -> Self {
        Self {
            uniform: fallback,
            per_frame: Some(table),
        }
    }

    /// Duration of frame `index`. Never fails; this sits on the hot
    /// per-frame path.
    pub fn duration(&self, index: usize) -> f32 {
        self.per_frame
            .as_ref()
            .and_then(|table| table.get(index))
            .copied()
            .unwrap_or(self.uniform)
    }
}

/// A frame-indexed sprite sequence advanced by accumulated dt.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    frames: Vec<Pixmap>,
    durations: FrameDurations,
    timer: f32,
    frame_index: usize,
}

impl AnimationPlayer {
    /// Build a player over pre-sliced frames. Zero frames is a setup bug
    /// and fails immediately.
    pub fn new(frames: Vec<Pixmap>, durations: FrameDurations) -> Result<Self, EngineError> {
        if frames.is_empty() {
            return Err(EngineError::EmptyAnimation);
        }
        Ok(Self {
            frames,
            durations,
            timer: 0.0,
            frame_index: 0,
        })
    }

    /// Current frame index, always in `[0, frame_count)`.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Rewind to the first frame with an empty timer.
    pub fn rewind(&mut self) {
        self.timer = 0.0;
        self.frame_index = 0;
    }

    /// Accumulate `dt`, advance at most one frame once the timer reaches
    /// the current frame's duration (timer resets to zero on advance,
    /// index wraps past the last frame), then blit the current frame at
    /// (`x`, `y`). `flip` mirrors horizontally without touching the stored
    /// frame.
    pub fn render_frame(&mut self, target: &mut Pixmap, x: i32, y: i32, dt: f32, flip: bool) {
        self.timer += dt;
        if self.timer >= self.durations.duration(self.frame_index) {
            self.frame_index += 1;
            self.timer = 0.0;
        }
        if self.frame_index >= self.frames.len() {
            self.frame_index = 0;
        }

        let frame = &self.frames[self.frame_index];
        if flip {
            target.blit_flipped_h(frame, x, y);
        } else {
            target.blit(frame, x, y);
        }
    }
}

/// Tag-keyed animation set with one current selection and a flip flag.
///
/// All lookup failures here are fatal signaled errors: a duplicate insert,
/// selecting an unregistered tag, or rendering with no selection all point
/// at setup bugs and are never silently ignored.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    players: HashMap<String, AnimationPlayer>,
    current: String,
    flip: bool,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            current: String::new(),
            flip: false,
        }
    }

    /// Register a player under `tag`. Re-registering an existing tag fails.
    pub fn insert(&mut self, tag: impl Into<String>, player: AnimationPlayer) -> Result<(), EngineError> {
        let tag = tag.into();
        if self.players.contains_key(&tag) {
            return Err(EngineError::DuplicateAnimation(tag));
        }
        self.players.insert(tag, player);
        Ok(())
    }

    /// Make `tag` the current animation and set the flip flag.
    pub fn select(&mut self, tag: &str, flip: bool) -> Result<(), EngineError> {
        if !self.players.contains_key(tag) {
            return Err(EngineError::UnknownAnimation(tag.to_string()));
        }
        self.current = tag.to_string();
        self.flip = flip;
        Ok(())
    }

    /// Tag of the current animation; empty when none is selected.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn get(&self, tag: &str) -> Option<&AnimationPlayer> {
        self.players.get(tag)
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut AnimationPlayer> {
        self.players.get_mut(tag)
    }

    /// Advance and draw the current animation.
    pub fn render(
        &mut self,
        target: &mut Pixmap,
        x: i32,
        y: i32,
        dt: f32,
    ) -> Result<(), EngineError> {
        let player = self
            .players
            .get_mut(&self.current)
            .ok_or(EngineError::NoAnimationSelected)?;
        player.render_frame(target, x, y, dt, self.flip);
        Ok(())
    }
}
