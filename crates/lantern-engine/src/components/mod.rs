pub mod animation;
pub mod ui;
