//! statusframe demo binary
//!
//! Entry sequencing is a hard requirement: initialize the frame (which
//! hides the cursor), launch the tasks, wait on the join barrier, close
//! the frame (which restores the cursor).

use anyhow::{Context, Result};
use clap::Parser;
use statusframe::frame::{Frame, FrameConfig};
use statusframe::render::BarTheme;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod demo;

#[derive(Parser, Debug)]
#[command(
    name = "statusframe",
    version,
    about = "Live multi-line progress demo: a download bar and a scan gauge"
)]
struct Cli {
    /// Snapshot sampling interval in milliseconds
    #[arg(long, default_value_t = 25)]
    interval_ms: u64,

    /// Bar theme: lite, lite-squash, heavy, heavy-squash,
    /// really-heavy-squash, heavy-no-bar
    #[arg(long, default_value = "lite")]
    theme: BarTheme,
}

#[tokio::main]
async fn main() -> Result<()> {
    // diagnostics go to stderr so they never corrupt the frame
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let frame =
        Frame::open(FrameConfig::default()).context("failed to initialize terminal frame")?;

    demo::run(frame, Duration::from_millis(cli.interval_ms), cli.theme).await
}
