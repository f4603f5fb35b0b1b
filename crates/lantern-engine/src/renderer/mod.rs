pub mod pixmap;
pub mod traits;
