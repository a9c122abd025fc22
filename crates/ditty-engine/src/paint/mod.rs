//! Colors used for clearing the frame.
//!
//! Scope:
//! - color representation (straight alpha, values stored as-is on a UNORM surface)
//! - random color sources for the per-frame clear

pub mod color;
pub mod random;

pub use color::Color;
pub use random::RandomColors;
