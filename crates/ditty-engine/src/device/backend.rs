use std::fmt;
use std::str::FromStr;

/// Graphics API the surface is created on.
///
/// `Auto` lets wgpu pick the primary backend for the platform.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Backend {
    #[default]
    Auto,
    Vulkan,
    Metal,
    Dx12,
    Gl,
}

/// Error returned when a backend name cannot be parsed.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum BackendParseError {
    #[error("unknown backend `{0}` (expected auto, vulkan, metal, dx12 or gl)")]
    Unknown(String),
    #[error("backend `{0}` is not available through wgpu; use dx12 or gl instead")]
    Unsupported(String),
}

impl Backend {
    /// Concrete backends, in probe order.
    pub const CONCRETE: [Backend; 4] =
        [Backend::Vulkan, Backend::Metal, Backend::Dx12, Backend::Gl];

    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Vulkan => "vulkan",
            Backend::Metal => "metal",
            Backend::Dx12 => "dx12",
            Backend::Gl => "gl",
        }
    }

    /// wgpu backend mask for instance creation.
    pub fn to_wgpu(self) -> wgpu::Backends {
        match self {
            Backend::Auto => wgpu::Backends::all(),
            Backend::Vulkan => wgpu::Backends::VULKAN,
            Backend::Metal => wgpu::Backends::METAL,
            Backend::Dx12 => wgpu::Backends::DX12,
            Backend::Gl => wgpu::Backends::GL,
        }
    }

    /// Human-readable API name, used for window titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Backend::Auto => "GPU",
            Backend::Vulkan => "Vulkan",
            Backend::Metal => "Metal",
            Backend::Dx12 => "D3D12",
            Backend::Gl => "OpenGL",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = BackendParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Backend::Auto),
            "vulkan" | "vk" => Ok(Backend::Vulkan),
            "metal" | "mtl" => Ok(Backend::Metal),
            "dx12" | "d3d12" => Ok(Backend::Dx12),
            "gl" | "opengl" | "gles" => Ok(Backend::Gl),
            "dx11" | "d3d11" => Err(BackendParseError::Unsupported(s.to_string())),
            _ => Err(BackendParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for b in [Backend::Auto, Backend::Vulkan, Backend::Metal, Backend::Dx12, Backend::Gl] {
            assert_eq!(b.as_str().parse::<Backend>(), Ok(b));
        }
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("VK".parse::<Backend>(), Ok(Backend::Vulkan));
        assert_eq!("OpenGL".parse::<Backend>(), Ok(Backend::Gl));
        assert_eq!("d3d12".parse::<Backend>(), Ok(Backend::Dx12));
        assert_eq!(" mtl ".parse::<Backend>(), Ok(Backend::Metal));
    }

    #[test]
    fn d3d11_is_rejected_as_unsupported() {
        assert!(matches!(
            "d3d11".parse::<Backend>(),
            Err(BackendParseError::Unsupported(_))
        ));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "glide".parse::<Backend>(),
            Err(BackendParseError::Unknown("glide".to_string()))
        );
    }

    #[test]
    fn auto_maps_to_all_backends() {
        assert_eq!(Backend::Auto.to_wgpu(), wgpu::Backends::all());
        assert_eq!(Backend::Gl.to_wgpu(), wgpu::Backends::GL);
    }

    #[test]
    fn concrete_list_excludes_auto() {
        assert!(!Backend::CONCRETE.contains(&Backend::Auto));
    }
}
