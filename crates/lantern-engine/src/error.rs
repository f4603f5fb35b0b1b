use std::fmt;

/// Engine-level failures.
///
/// Setup mistakes (running without a game, duplicate or unknown animation
/// tags, unparseable assets) surface here and are meant to abort startup.
/// Per-frame code paths never return these; they fall back and log instead.
#[derive(Debug)]
pub enum EngineError {
    /// `GameContainer::run` was called before `set_game`.
    NoGame,
    /// `SceneStateMachine::set_current` was given a tag that was never registered.
    UnknownState(String),
    /// `AnimationRegistry::insert` would overwrite an existing tag.
    DuplicateAnimation(String),
    /// `AnimationRegistry::select` was given an unregistered tag.
    UnknownAnimation(String),
    /// `AnimationRegistry::render` was called before any animation was selected.
    NoAnimationSelected,
    /// An `AnimationPlayer` was constructed with zero frames.
    EmptyAnimation,
    /// An inset leaves the collision box with a non-positive dimension.
    InsetTooLarge { width: f32, height: f32 },
    /// A glyph strip did not contain enough separators for the character table.
    FontParse(String),
    /// An asset manifest failed to parse.
    Manifest(serde_json::Error),
    /// The platform image loader failed.
    Asset(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoGame => write!(f, "no game set; call set_game before run"),
            EngineError::UnknownState(tag) => write!(f, "unknown scene state '{tag}'"),
            EngineError::DuplicateAnimation(tag) => {
                write!(f, "animation '{tag}' is already registered")
            }
            EngineError::UnknownAnimation(tag) => write!(f, "unknown animation '{tag}'"),
            EngineError::NoAnimationSelected => {
                write!(f, "no animation selected; call select before render")
            }
            EngineError::EmptyAnimation => write!(f, "animation has no frames"),
            EngineError::InsetTooLarge { width, height } => write!(
                f,
                "inset leaves a non-positive collision box ({width}x{height})"
            ),
            EngineError::FontParse(msg) => write!(f, "font strip parse failed: {msg}"),
            EngineError::Manifest(err) => write!(f, "asset manifest parse failed: {err}"),
            EngineError::Asset(msg) => write!(f, "asset load failed: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Manifest(err)
    }
}
