//! GPU rendering subsystem.
//!
//! Today the only pass is the frame clear. `RenderCtx` and `RenderTarget` are
//! handed to the per-frame draw callback so drawing commands can be encoded
//! after the clear once there is something to draw.

mod clear;
mod ctx;

pub use clear::clear_pass;
pub use ctx::{RenderCtx, RenderTarget};
