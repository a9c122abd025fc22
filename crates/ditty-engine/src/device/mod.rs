//! GPU device + surface management.
//!
//! This module is responsible for:
//! - selecting a wgpu backend and adapter (with an optional software fallback)
//! - creating the Device/Queue once per window
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering

mod backend;
mod error;
mod frame;
mod gpu;
mod init;
mod probe;
mod surface;

pub use backend::{Backend, BackendParseError};
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use probe::{probe_backends, BackendProbe};
pub use surface::{choose_alpha_mode, choose_surface_format, surface_error_action};
