//! Status rendering - bars, spinners, themes
//!
//! Pure formatting only: nothing in this module touches the terminal.
//! The demo composes these into one status string per snapshot and hands
//! it to a [`crate::frame::Line`].

pub mod bar;
pub mod spinner;
pub mod theme;

pub use bar::{BarRenderer, MAX_BAR_WIDTH};
pub use spinner::Spinner;
pub use theme::{BarTheme, COLOR_DONE, COLOR_TODO, COMPLETED_MARK, GlyphSet};
