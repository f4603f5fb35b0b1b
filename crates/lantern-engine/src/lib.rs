pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod text;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, GameContainer};
pub use assets::loader::{load_animations, load_font, ImageLoader};
pub use assets::manifest::AssetManifest;
pub use components::animation::{slice_sheet, AnimationPlayer, AnimationRegistry, FrameDurations};
pub use components::ui::{UIButton, UIButtonRegistry};
pub use core::entity::{Entity, EntityCore};
pub use core::physics::{CollisionSides, PhysicsBody};
pub use core::rect::{Inset, Rect};
pub use core::registry::EntityRegistry;
pub use core::state::{SceneState, SceneStateMachine};
pub use core::time::Clock;
pub use error::EngineError;
pub use input::queue::{EventSource, InputEvent, InputQueue, MouseButton};
pub use renderer::pixmap::{Pixmap, Rgba};
pub use renderer::traits::PresentTarget;
pub use text::Font;
