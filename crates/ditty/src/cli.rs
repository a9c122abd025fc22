use clap::Parser;
use ditty_engine::device::{Backend, GpuInit};
use ditty_engine::logging::LoggingConfig;
use ditty_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Opens a window and clears it to a random color every frame.
#[derive(Debug, Parser)]
#[command(name = "ditty", version)]
pub struct Cli {
    /// Graphics API: auto, vulkan, metal, dx12 or gl.
    #[arg(short, long, env = "DITTY_BACKEND", default_value = "auto")]
    pub backend: Backend,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Window title. Defaults to "<API> ditty".
    #[arg(long)]
    pub title: Option<String>,

    /// Seed for the color sequence; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exit after presenting this many frames.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: Option<u64>,

    /// Present as fast as possible instead of waiting for vblank.
    #[arg(long)]
    pub no_vsync: bool,

    /// Show frames per second in the window title.
    #[arg(long)]
    pub show_fps: bool,

    /// Fail instead of retrying with a software adapter.
    #[arg(long)]
    pub no_fallback: bool,

    /// List which backends have a usable adapter, then exit.
    #[arg(long)]
    pub probe: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} ditty", self.backend.display_name()))
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            backend: self.backend,
            present_mode: if self.no_vsync {
                wgpu::PresentMode::AutoNoVsync
            } else {
                wgpu::PresentMode::AutoVsync
            },
            allow_fallback_adapter: !self.no_fallback,
            ..GpuInit::default()
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ditty").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_open_classic_window() {
        let cli = parse(&["--backend", "auto"]);
        let config = cli.runtime_config();
        assert_eq!(config.initial_size, LogicalSize::new(640.0, 480.0));
        assert_eq!(config.title, "GPU ditty");
        assert!(cli.gpu_init().allow_fallback_adapter);
        assert!(!cli.gpu_init().prefer_srgb);
        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::AutoVsync);
    }

    #[test]
    fn backend_alias_sets_title() {
        let cli = parse(&["--backend", "opengl"]);
        assert_eq!(cli.backend, Backend::Gl);
        assert_eq!(cli.title(), "OpenGL ditty");
        assert_eq!(cli.gpu_init().backend, Backend::Gl);
    }

    #[test]
    fn explicit_title_wins() {
        let cli = parse(&["-b", "metal", "--title", "hello"]);
        assert_eq!(cli.title(), "hello");
    }

    #[test]
    fn d3d11_is_rejected() {
        assert!(Cli::try_parse_from(["ditty", "--backend", "d3d11"]).is_err());
    }

    #[test]
    fn zero_sizes_and_frame_counts_are_rejected() {
        assert!(Cli::try_parse_from(["ditty", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["ditty", "--frames", "0"]).is_err());
    }

    #[test]
    fn flags_map_to_gpu_init() {
        let cli = parse(&["--backend", "vk", "--no-vsync", "--no-fallback"]);
        let init = cli.gpu_init();
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert!(!init.allow_fallback_adapter);
    }

    #[test]
    fn log_filter_flows_into_logging_config() {
        let cli = parse(&["--backend", "auto", "--log", "ditty=trace"]);
        assert_eq!(cli.logging_config().env_filter.as_deref(), Some("ditty=trace"));
    }
}
