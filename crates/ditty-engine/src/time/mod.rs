//! Time subsystem.
//!
//! Provides testable frame timing utilities without coupling to the runtime:
//! - one `FrameClock` per window; call `tick()` once per presented frame
//! - `FrameStats` turns ticks into a periodic frames-per-second figure

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::FrameStats;
