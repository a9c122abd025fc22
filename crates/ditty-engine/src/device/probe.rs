use super::Backend;

/// Result of probing one backend for a usable adapter.
#[derive(Debug, Clone)]
pub struct BackendProbe {
    pub backend: Backend,
    /// Adapter wgpu would pick on this backend, if any.
    pub adapter: Option<wgpu::AdapterInfo>,
}

impl BackendProbe {
    pub fn is_available(&self) -> bool {
        self.adapter.is_some()
    }
}

/// Checks every concrete backend for an adapter without creating a window.
///
/// Backends not compiled into wgpu for this platform simply report no adapter.
pub fn probe_backends() -> Vec<BackendProbe> {
    Backend::CONCRETE
        .iter()
        .map(|&backend| BackendProbe {
            backend,
            adapter: pollster::block_on(probe_one(backend)),
        })
        .collect()
}

async fn probe_one(backend: Backend) -> Option<wgpu::AdapterInfo> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: backend.to_wgpu(),
        ..Default::default()
    });

    match instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
    {
        Ok(adapter) => Some(adapter.get_info()),
        Err(err) => {
            log::debug!("backend `{backend}` unavailable: {err}");
            None
        }
    }
}
