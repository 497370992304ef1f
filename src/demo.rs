//! Demo tasks - a bounded download bar and an unbounded scan gauge
//!
//! Each task owns one frame line, one producer task feeding a tracker at a
//! fixed cadence, and one consumer task rendering snapshots onto the line.
//! The run barrier joins every producer/consumer pair before the frame is
//! allowed to close.

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use statusframe::frame::{Frame, Line, terminal_size};
use statusframe::progress::{Aggregator, Stage, Staged, Strategy, Tracker, stream};
use statusframe::render::spinner::ARROW_SET;
use statusframe::render::{BarRenderer, BarTheme, COLOR_TODO, COMPLETED_MARK, Spinner};
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_stream::StreamExt;
use tokio_util::sync::CancellationToken;

/// Units in the simulated download.
const DOWNLOAD_TOTAL: u64 = 1000;

/// Findings produced by the simulated scan. The completion line shows the
/// tracker's final count, i.e. the number of increments performed.
const SCAN_FINDINGS: u64 = 549;

/// Fixed width of the title column in every status line.
const TITLE_WIDTH: usize = 31;

const DOWNLOAD_COLOR: Color = Color::Red;
const SCAN_COLOR: Color = Color::Green;
const SPINNER_COLOR: Color = Color::Magenta;

/// Left-pad titles before styling so ANSI codes don't skew the column.
fn padded(title: &str) -> String {
    format!("{title:<width$}", width = TITLE_WIDTH)
}

/// Launch both demo tasks, wait for them, then close the frame.
pub(crate) async fn run(mut frame: Frame, interval: Duration, theme: BarTheme) -> Result<()> {
    let (cols, _) = terminal_size();
    let bar = BarRenderer::new(BarRenderer::fit_width(cols), theme);
    let cancel = CancellationToken::new();
    let mut tasks = JoinSet::new();

    let scan_line = frame.append().context("allocating scan line")?;
    let download_line = frame.append().context("allocating download line")?;

    spawn_scan(&mut tasks, scan_line, interval, cancel.clone());
    spawn_download(&mut tasks, download_line, bar, interval, cancel);

    // barrier: every producer and consumer finishes before the frame closes
    while let Some(joined) = tasks.join_next().await {
        joined.context("demo task panicked")?;
    }
    frame.close().context("closing frame")?;
    Ok(())
}

/// Bounded transfer: sized tracker, staged aggregator, bar rendering.
fn spawn_download(
    tasks: &mut JoinSet<()>,
    line: Line,
    bar: BarRenderer,
    interval: Duration,
    cancel: CancellationToken,
) {
    let tracker = Tracker::sized(DOWNLOAD_TOTAL);
    let stage = Stage::new();
    let staged = Staged::new(
        Aggregator::new(Strategy::Normalize, [tracker.clone()]),
        stage.clone(),
    );
    let mut snapshots = stream(staged, interval, cancel);

    let producer = tracker.clone();
    tasks.spawn(async move {
        stage.set("fetching");
        for unit in 0..DOWNLOAD_TOTAL {
            producer.add(1);
            if unit == DOWNLOAD_TOTAL / 2 {
                stage.set("verifying");
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        producer.complete();
    });

    tasks.spawn(async move {
        let mut spinner = Spinner::new(ARROW_SET);
        let title = padded("Download progress").with(DOWNLOAD_COLOR);
        while let Some(p) = snapshots.next().await {
            let spin = spinner.next().with(SPINNER_COLOR);
            let aux = format!("[{}]", p.stage).with(COLOR_TODO);
            let _ = line.set(format!(" {spin} {title} {} {aux}", bar.render(p.ratio)));
        }
        let mark = COMPLETED_MARK.with(Color::Green);
        let title = padded("Download complete").with(DOWNLOAD_COLOR);
        let _ = line.set(format!(" {mark} {title} "));
    });
}

/// Unbounded gauge: raw finding count, no bar.
fn spawn_scan(tasks: &mut JoinSet<()>, line: Line, interval: Duration, cancel: CancellationToken) {
    let tracker = Tracker::gauge();
    let aggregator = Aggregator::new(Strategy::Normalize, [tracker.clone()]);
    let mut snapshots = stream(aggregator, interval, cancel);

    let producer = tracker.clone();
    tasks.spawn(async move {
        for _ in 0..SCAN_FINDINGS {
            producer.add(1);
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        producer.complete();
    });

    tasks.spawn(async move {
        let mut spinner = Spinner::new(ARROW_SET);
        let title = padded("Scanning image...").with(SCAN_COLOR);
        while let Some(p) = snapshots.next().await {
            let spin = spinner.next().with(SPINNER_COLOR);
            let aux = format!("[vulnerabilities {}]", p.current).with(COLOR_TODO);
            let _ = line.set(format!(" {spin} {title} {aux}"));
        }
        let mark = COMPLETED_MARK.with(Color::Green);
        let title = padded("Scanned image").with(SCAN_COLOR);
        let aux = format!("[{} vulnerabilities]", tracker.current()).with(COLOR_TODO);
        let _ = line.set(format!(" {mark} {title} {aux}"));
    });
}
