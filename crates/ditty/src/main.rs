mod app;
mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use ditty_engine::device::{probe_backends, Backend};
use ditty_engine::logging::init_logging;
use ditty_engine::paint::RandomColors;
use ditty_engine::window::Runtime;

use app::ClearApp;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    log::info!(
        "ditty {} (winit 0.30, wgpu 28), backend `{}`",
        env!("CARGO_PKG_VERSION"),
        cli.backend
    );

    if cli.probe {
        return probe(cli.backend);
    }

    if let Some(seed) = cli.seed {
        log::info!("color seed: {seed}");
    }

    let app = ClearApp::new(RandomColors::new(cli.seed), cli.title())
        .with_frame_limit(cli.frames)
        .with_fps_in_title(cli.show_fps);

    Runtime::run(cli.runtime_config(), cli.gpu_init(), app)
}

/// Prints adapter availability per backend.
///
/// Fails when the requested backend (or, for `auto`, every backend) has no adapter.
fn probe(requested: Backend) -> Result<()> {
    let probes = probe_backends();

    for p in &probes {
        match &p.adapter {
            Some(info) => println!(
                "{:<7} yes  {} ({:?}, {:?})",
                p.backend, info.name, info.device_type, info.backend
            ),
            None => println!("{:<7} no", p.backend),
        }
    }

    let usable = probes
        .iter()
        .any(|p| p.is_available() && (requested == Backend::Auto || p.backend == requested));

    if !usable {
        bail!("no usable adapter for backend `{requested}`");
    }

    Ok(())
}
