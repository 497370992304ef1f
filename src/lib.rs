//! statusframe - live multi-line terminal progress
//!
//! Renders one in-place-updating terminal line per concurrent task, each
//! with a spinner, a proportional bar or raw gauge, and a completion
//! marker, without tasks corrupting each other's output or the cursor.
//!
//! # Architecture
//!
//! - **Single-writer pump**: a [`frame::Frame`] owns the output stream
//!   through one dedicated thread; tasks hold [`frame::Line`] handles and
//!   send fully-formed strings, so writes are serialized byte-exact.
//! - **Progress pipeline**: producers feed [`progress::Tracker`] counters,
//!   a [`progress::Aggregator`] normalizes them into one ratio,
//!   [`progress::Staged`] attaches a phase label, and [`progress::stream`]
//!   samples the result on a fixed clock into a snapshot stream.
//! - **Pure rendering**: [`render::BarRenderer`] and [`render::Spinner`]
//!   turn snapshots into strings and never touch the terminal.
//!
//! # Example
//!
//! ```no_run
//! use statusframe::frame::{Frame, FrameConfig};
//! use statusframe::progress::{Aggregator, Strategy, Tracker, stream};
//! use statusframe::render::{BarRenderer, BarTheme, Spinner};
//! use std::time::Duration;
//! use tokio_stream::StreamExt;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut frame = Frame::open(FrameConfig::default())?;
//! let line = frame.append()?;
//!
//! let tracker = Tracker::sized(1000);
//! let aggregator = Aggregator::new(Strategy::Normalize, [tracker.clone()]);
//! let mut snapshots = stream(
//!     aggregator,
//!     Duration::from_millis(25),
//!     CancellationToken::new(),
//! );
//!
//! let bar = BarRenderer::new(50, BarTheme::Lite);
//! let mut spinner = Spinner::default();
//! tokio::spawn(async move {
//!     while let Some(p) = snapshots.next().await {
//!         let _ = line.set(format!(" {} {}", spinner.next(), bar.render(p.ratio)));
//!     }
//! });
//!
//! // ... drive the tracker, join the tasks ...
//! frame.close()?;
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod progress;
pub mod render;

// Re-exports for convenience
pub use frame::{Frame, FrameConfig, FrameError, Line};
pub use progress::{Aggregator, Progress, Progressable, Stage, Staged, Strategy, Tracker, stream};
pub use render::{BarRenderer, BarTheme, Spinner};
