//! ditty engine crate.
//!
//! Opens a window, binds a wgpu surface to it and gives the application one
//! cleared frame per redraw.

pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
