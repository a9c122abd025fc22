use super::Backend;

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Graphics API to create the instance on.
    pub backend: Backend,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: clear colors are written to a plain UNORM drawable
    /// unchanged, so a channel of `0.5` is stored as 128.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and paces the clear loop to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Retry with a software adapter when no hardware adapter is found
    /// (headless machines, VMs).
    pub allow_fallback_adapter: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            allow_fallback_adapter: true,
        }
    }
}

impl GpuInit {
    /// Returns the instance descriptor for the configured backend.
    pub(crate) fn instance_descriptor(&self) -> wgpu::InstanceDescriptor {
        wgpu::InstanceDescriptor {
            backends: self.backend.to_wgpu(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_not_srgb() {
        let init = GpuInit::default();
        assert!(!init.prefer_srgb);
        assert_eq!(init.backend, Backend::Auto);
    }
}
