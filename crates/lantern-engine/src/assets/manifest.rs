//! Declarative asset descriptions parsed from JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Everything a game wants loaded up front: animation sheets keyed by the
/// tag they register under, and font strips keyed by a name of the host's
/// choosing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub sheets: HashMap<String, SheetEntry>,
    #[serde(default)]
    pub fonts: HashMap<String, FontEntry>,
}

/// One animation sheet: a grid of equally sized frames plus timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEntry {
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub cols: u32,
    pub rows: u32,
    /// Uniform frame duration in seconds, and the fallback when a partial
    /// `durations` table is given.
    pub duration: f32,
    /// Optional per-frame durations overriding `duration` index by index.
    #[serde(default)]
    pub durations: Option<Vec<f32>>,
    /// Colors to key out to transparency when slicing, as `[r, g, b]`.
    #[serde(default)]
    pub color_keys: Vec<[u8; 3]>,
}

/// One font strip and the color its glyphs are tinted to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontEntry {
    pub path: String,
    pub color: [u8; 3],
}

impl AssetManifest {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
