//! Single-writer pump
//!
//! One dedicated thread owns the physical output sink and applies line
//! updates sequentially, so concurrent tasks can never interleave escape
//! sequences mid-write. The cursor is parked at the top of the frame
//! between updates; every operation moves down relative to that anchor and
//! returns to it before flushing.

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, Sender};

/// Messages accepted by the pump thread.
#[derive(Debug)]
pub(crate) enum FrameEvent {
    /// Allocate the next row below the current last one.
    Append,
    /// Overwrite one row's content in place.
    Set {
        /// Row index, counted from the top of the frame.
        row: u16,
        /// Fully-formed display string for that row.
        text: String,
    },
    /// Flush, restore the terminal, acknowledge, and stop.
    Close(Sender<()>),
}

/// Pump thread body. Consumes events until `Close` or sender disconnect.
pub(crate) fn run<W: Write>(out: W, events: &Receiver<FrameEvent>) {
    let mut canvas = Canvas { out, rows: 0 };
    if let Err(err) = canvas.open() {
        tracing::debug!("frame open failed: {err}");
    }

    loop {
        match events.recv() {
            Ok(FrameEvent::Append) => {
                if let Err(err) = canvas.append_row() {
                    tracing::debug!("row allocation failed: {err}");
                }
            }
            Ok(FrameEvent::Set { row, text }) => {
                // render errors stay local to the row, the pump keeps going
                if let Err(err) = canvas.overwrite(row, &text) {
                    tracing::debug!(row, "row write failed: {err}");
                }
            }
            Ok(FrameEvent::Close(ack)) => {
                let _ = ack.send(());
                break;
            }
            Err(_) => break, // all senders gone
        }
    }
    // Canvas::drop restores the cursor on every exit path, panics included
}

/// The pump's view of the terminal: the sink plus how many rows exist.
struct Canvas<W: Write> {
    out: W,
    rows: u16,
}

impl<W: Write> Canvas<W> {
    /// Hide the cursor for the lifetime of the frame.
    fn open(&mut self) -> io::Result<()> {
        self.out.queue(Hide)?;
        self.out.flush()
    }

    /// Reserve one more row below the last, scrolling if at screen bottom,
    /// and park back at the frame top.
    fn append_row(&mut self) -> io::Result<()> {
        // distance back to the top after the newline lands
        let up = self.rows.max(1);
        if self.rows > 1 {
            self.out.queue(MoveDown(self.rows - 1))?;
        }
        self.out.queue(MoveToColumn(0))?;
        writeln!(self.out)?;
        self.out.queue(MoveUp(up))?;
        self.rows += 1;
        self.out.flush()
    }

    /// Clear row `row` and write `text` onto it, then park back at the top.
    fn overwrite(&mut self, row: u16, text: &str) -> io::Result<()> {
        if row >= self.rows {
            return Ok(());
        }

        self.out.queue(MoveToColumn(0))?;
        if row > 0 {
            self.out.queue(MoveDown(row))?;
        }
        self.out.queue(Clear(ClearType::CurrentLine))?;
        self.out.write_all(text.as_bytes())?;
        self.out.queue(MoveToColumn(0))?;
        if row > 0 {
            self.out.queue(MoveUp(row))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for Canvas<W> {
    fn drop(&mut self) {
        // park below the frame so the shell prompt lands on a fresh line,
        // and guarantee the cursor comes back
        if self.rows > 0 {
            let _ = self.out.queue(MoveDown(self.rows));
        }
        let _ = self.out.queue(MoveToColumn(0));
        let _ = self.out.queue(Show);
        let _ = self.out.flush();
    }
}
