//! Pixoo statistics panel uploader.
//!
//! Loads the statistics document, composes every screen and uploads the
//! resulting animation to the device.
//!
//! ```text
//! pixoo-stats --stats all-results.json --device 192.168.0.21
//! pixoo-stats --dry-run --dump-dir preview/
//! ```
//!
//! A missing or malformed statistics document is not an error: every screen
//! falls back to its built-in numbers. Failing to encode the contact code or
//! exhausting the retries on any device command aborts the run.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use pixoo_stats::config::{CODE_QUIET_ZONE, DEFAULT_CONTACT_URL, DEFAULT_DEVICE_HOST, DEFAULT_STATS_PATH};
use pixoo_stats::preview;
use pixoo_stats::qr::{MatrixGenerator, QrGenerator};
use pixoo_stats::screens::RenderContext;
use pixoo_stats::sequencer::{build_sequence, catalog};
use pixoo_stats::stats::PanelStats;
use pixoo_stats::transport::{HttpTransport, SendSettings, send_animation};

#[derive(Parser)]
#[command(name = "pixoo-stats", about = "Upload animated research statistics to a Pixoo 64")]
struct Cli {
    /// Statistics document produced by the scraper
    #[arg(long, default_value = DEFAULT_STATS_PATH)]
    stats: PathBuf,
    /// Device host name or IP address
    #[arg(long, default_value = DEFAULT_DEVICE_HOST)]
    device: String,
    /// URL encoded in the contact screen's QR code
    #[arg(long, default_value = DEFAULT_CONTACT_URL)]
    url: String,
    /// Write every frame as a PNG into this directory
    #[arg(long)]
    dump_dir: Option<PathBuf>,
    /// Compose frames without contacting the device
    #[arg(long)]
    dry_run: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = RenderContext::new();

    let code = QrGenerator {
        quiet_zone: CODE_QUIET_ZONE,
    }
    .generate(&cli.url)
    .context("cannot build the contact code")?;

    let stats = PanelStats::load_or_default(&cli.stats);
    let screens = catalog(&ctx, &stats, code);
    let frames = build_sequence(&ctx, &screens);
    info!("Composed {} frames across {} screens", frames.len(), screens.len());

    if let Some(dir) = &cli.dump_dir {
        preview::dump_frames(dir, &frames)?;
    }

    if cli.dry_run {
        info!("Dry run, skipping upload");
        return Ok(());
    }

    let mut transport = HttpTransport::new(&cli.device);
    info!("Sending to {}", transport.url());
    send_animation(&mut transport, &frames, &SendSettings::DEFAULT)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
