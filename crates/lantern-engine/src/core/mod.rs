pub mod entity;
pub mod physics;
pub mod rect;
pub mod registry;
pub mod state;
pub mod time;
