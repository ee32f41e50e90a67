//! Cache-URL assembly over the core encoders.
//!
//! - path classification into serving segments
//! - final cache-URL generation

pub mod classify;
pub mod generate;

// Re-export main functionality
pub use classify::{is_font_path, is_image_path, path_segment};
pub use generate::generate;
