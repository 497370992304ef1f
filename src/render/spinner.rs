//! Spinner animation state
//!
//! Each task owns its own spinner so animations stay independent; the
//! render loop calls [`Spinner::next`] once per tick.

/// Arrow glyphs cycling clockwise.
pub const ARROW_SET: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];

/// Braille dot glyphs.
pub const DOT_SET: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Plain ASCII line glyphs.
pub const LINE_SET: &[&str] = &["|", "/", "-", "\\"];

/// A cyclic glyph sequence advanced one step per render tick.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    pos: usize,
}

impl Spinner {
    /// Create a spinner over `frames`.
    pub fn new(frames: &'static [&'static str]) -> Self {
        Self { frames, pos: 0 }
    }

    /// Return the current glyph, then advance one position.
    pub fn next(&mut self) -> &'static str {
        if self.frames.is_empty() {
            return "";
        }
        let glyph = self.frames[self.pos];
        self.pos = (self.pos + 1) % self.frames.len();
        glyph
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(ARROW_SET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let mut spinner = Spinner::new(ARROW_SET);
        let first: Vec<_> = (0..ARROW_SET.len()).map(|_| spinner.next()).collect();
        assert_eq!(first, ARROW_SET);
        // wrapped back to the start
        assert_eq!(spinner.next(), ARROW_SET[0]);
    }

    #[test]
    fn test_spinner_cyclic_property() {
        // k = len * m + j calls lands on the same glyph as j calls from fresh
        let len = DOT_SET.len();
        for (m, j) in [(1, 0), (2, 3), (5, len - 1)] {
            let mut long = Spinner::new(DOT_SET);
            let mut short = Spinner::new(DOT_SET);
            let k = len * m + j;
            let mut last_long = "";
            for _ in 0..=k {
                last_long = long.next();
            }
            let mut last_short = "";
            for _ in 0..=j {
                last_short = short.next();
            }
            assert_eq!(last_long, last_short);
        }
    }

    #[test]
    fn test_empty_frames() {
        let mut spinner = Spinner::new(&[]);
        assert_eq!(spinner.next(), "");
        assert_eq!(spinner.next(), "");
    }
}
