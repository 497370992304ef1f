//! Frame - a terminal canvas of independently-updatable lines
//!
//! A [`Frame`] owns the output stream and hands out [`Line`] handles in
//! insertion order. Lines are written to concurrently from many tasks;
//! all physical writes funnel through one pump thread (see [`pump`]) so
//! escape sequences never interleave. The cursor is hidden while the frame
//! is open and restored on close, frame drop, or pump panic.
//!
//! Lifecycle: open once at startup, append a line per task, close once
//! after every task has finished writing. Closing before the tasks' join
//! barrier is a caller error.

mod pump;

use pump::FrameEvent;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use thiserror::Error;

/// Width assumed when the terminal cannot report its size.
pub const DEFAULT_WIDTH: u16 = 80;

/// Errors from frame construction and line allocation.
#[derive(Error, Debug)]
pub enum FrameError {
    /// The output stream could not report a usable size.
    #[error("output stream is not a sizeable terminal: {0}")]
    Unsized(#[from] io::Error),

    /// The terminal reported a zero-sized window.
    #[error("terminal reported a zero-sized window")]
    ZeroSize,

    /// The frame has already been closed (or its pump has stopped).
    #[error("frame is closed")]
    Closed,
}

/// Row placement policy for newly appended lines.
///
/// Only forward-float placement is supported: new lines are always
/// appended below the last allocated one, and rows already handed out
/// keep their position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementPolicy {
    /// Append-only, existing rows stay addressable above.
    #[default]
    FloatForward,
}

/// Frame construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameConfig {
    /// Where newly appended lines land.
    pub placement: PlacementPolicy,
}

/// Terminal size in `(columns, rows)`, with a sane fallback.
///
/// Queried once at startup to size bars; a failed query degrades to
/// [`DEFAULT_WIDTH`] rather than failing the program.
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((DEFAULT_WIDTH, 24))
}

/// A terminal canvas managing concurrently-updatable lines.
#[derive(Debug)]
pub struct Frame {
    tx: mpsc::Sender<FrameEvent>,
    pump: Option<thread::JoinHandle<()>>,
    rows: u16,
    placement: PlacementPolicy,
}

impl Frame {
    /// Open a frame over stdout.
    ///
    /// Fails if the terminal cannot be sized at all; this is a fatal
    /// startup condition, not recoverable per line.
    pub fn open(config: FrameConfig) -> Result<Self, FrameError> {
        let (cols, rows) = crossterm::terminal::size()?;
        if cols == 0 || rows == 0 {
            return Err(FrameError::ZeroSize);
        }
        Ok(Self::with_output(config, io::stdout()))
    }

    /// Open a frame over an arbitrary sink.
    ///
    /// Intended for tests and captured output; no size query is performed.
    pub fn with_output<W: Write + Send + 'static>(config: FrameConfig, out: W) -> Self {
        let (tx, rx) = mpsc::channel();
        let pump = thread::spawn(move || pump::run(out, &rx));
        Self {
            tx,
            pump: Some(pump),
            rows: 0,
            placement: config.placement,
        }
    }

    /// Allocate the next line.
    ///
    /// Handles are stable: a line keeps its row for the life of the frame
    /// no matter how many lines are appended after it.
    pub fn append(&mut self) -> Result<Line, FrameError> {
        let row = match self.placement {
            PlacementPolicy::FloatForward => self.rows,
        };
        self.tx
            .send(FrameEvent::Append)
            .map_err(|_| FrameError::Closed)?;
        self.rows += 1;
        Ok(Line {
            row,
            tx: self.tx.clone(),
        })
    }

    /// Number of lines allocated so far.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Flush pending content, restore the cursor, and release the stream.
    ///
    /// Consumes the frame, so it can only happen once. Must be sequenced
    /// after all line writers have finished.
    pub fn close(mut self) -> Result<(), FrameError> {
        self.shutdown().map_err(|_| FrameError::Closed)
    }

    fn shutdown(&mut self) -> Result<(), mpsc::SendError<FrameEvent>> {
        let Some(pump) = self.pump.take() else {
            return Ok(());
        };
        let (ack_tx, ack_rx) = mpsc::channel();
        self.tx.send(FrameEvent::Close(ack_tx))?;
        let _ = ack_rx.recv();
        let _ = pump.join();
        Ok(())
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        // best effort if close() was never called; joining the pump here
        // guarantees the cursor is restored before the process moves on
        let _ = self.shutdown();
    }
}

/// A handle to one row of a [`Frame`].
///
/// Cheap to clone and safe to move into a task. Writes from different
/// lines are serialized by the frame's pump; a write to this line never
/// disturbs any other line's content.
#[derive(Debug, Clone)]
pub struct Line {
    row: u16,
    tx: mpsc::Sender<FrameEvent>,
}

impl Line {
    /// This line's row index within its frame, counted from the top.
    pub fn row(&self) -> u16 {
        self.row
    }

    /// Overwrite the line with `text` in place. Idempotent.
    pub fn set(&self, text: impl Into<String>) -> Result<(), FrameError> {
        self.tx
            .send(FrameEvent::Set {
                row: self.row,
                text: text.into(),
            })
            .map_err(|_| FrameError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Shared in-memory sink standing in for the terminal.
    #[derive(Debug, Clone, Default)]
    struct MockSink(Arc<Mutex<Vec<u8>>>);

    impl MockSink {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for MockSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_append_yields_stable_ordered_rows() {
        let sink = MockSink::default();
        let mut frame = Frame::with_output(FrameConfig::default(), sink.clone());

        let lines: Vec<Line> = (0..5).map(|_| frame.append().unwrap()).collect();
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.row(), i as u16);
        }
        assert_eq!(frame.rows(), 5);
        frame.close().unwrap();
    }

    #[test]
    fn test_cursor_hidden_then_restored() {
        let sink = MockSink::default();
        let frame = Frame::with_output(FrameConfig::default(), sink.clone());
        frame.close().unwrap();

        let out = sink.contents();
        assert!(out.starts_with("\u{1b}[?25l"), "cursor hide comes first");
        assert!(out.ends_with("\u{1b}[?25h"), "cursor restored on close");
    }

    #[test]
    fn test_cursor_restored_on_drop() {
        let sink = MockSink::default();
        {
            let mut frame = Frame::with_output(FrameConfig::default(), sink.clone());
            let line = frame.append().unwrap();
            line.set("interrupted").unwrap();
            // dropped without close()
        }
        assert!(sink.contents().contains("\u{1b}[?25h"));
    }

    #[test]
    fn test_line_writes_target_their_own_row() {
        let sink = MockSink::default();
        let mut frame = Frame::with_output(FrameConfig::default(), sink.clone());
        let first = frame.append().unwrap();
        let second = frame.append().unwrap();

        second.set("below").unwrap();
        first.set("above").unwrap();
        frame.close().unwrap();

        let out = sink.contents();
        // row 1 write moves down one, clears, writes, moves back up one
        assert!(out.contains("\u{1b}[1G\u{1b}[1B\u{1b}[2Kbelow\u{1b}[1G\u{1b}[1A"));
        // row 0 write never moves vertically
        assert!(out.contains("\u{1b}[1G\u{1b}[2Kabove\u{1b}[1G"));
    }

    #[test]
    fn test_concurrent_writes_never_interleave() {
        let sink = MockSink::default();
        let mut frame = Frame::with_output(FrameConfig::default(), sink.clone());

        let mut handles = Vec::new();
        for task in 0..4 {
            let line = frame.append().unwrap();
            handles.push(thread::spawn(move || {
                for round in 0..50 {
                    line.set(format!("task-{task}-round-{round}")).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        frame.close().unwrap();

        let out = sink.contents();
        for task in 0..4 {
            for round in 0..50 {
                assert!(
                    out.contains(&format!("task-{task}-round-{round}")),
                    "payload for task {task} round {round} was split"
                );
            }
        }
    }

    #[test]
    fn test_writes_after_close_report_closed() {
        let sink = MockSink::default();
        let mut frame = Frame::with_output(FrameConfig::default(), sink);
        let line = frame.append().unwrap();
        frame.close().unwrap();
        assert!(matches!(line.set("late"), Err(FrameError::Closed)));
    }
}
