//! Proportional progress bar rendering
//!
//! `BarRenderer` is a pure formatter: given a ratio it produces the themed,
//! colorized bar string. It holds no progress state of its own, so one
//! renderer can be shared by every snapshot of the same task.

use super::theme::{BarTheme, COLOR_DONE, COLOR_TODO, GlyphSet};
use crossterm::style::{Color, Stylize};

/// Hard ceiling on bar width regardless of terminal size.
pub const MAX_BAR_WIDTH: usize = 50;

/// Renders ratios as fixed-width themed bars.
#[derive(Debug, Clone)]
pub struct BarRenderer {
    width: usize,
    glyphs: GlyphSet,
    done_color: Color,
    todo_color: Color,
}

impl BarRenderer {
    /// Create a renderer of `width` columns using the theme's default colors.
    pub fn new(width: usize, theme: BarTheme) -> Self {
        Self::with_colors(width, theme, COLOR_DONE, COLOR_TODO)
    }

    /// Create a renderer with explicit section colors.
    pub fn with_colors(width: usize, theme: BarTheme, done: Color, todo: Color) -> Self {
        Self {
            width,
            glyphs: theme.glyphs(),
            done_color: done,
            todo_color: todo,
        }
    }

    /// Bar width for a terminal of `terminal_width` columns: a quarter of
    /// the terminal, capped at [`MAX_BAR_WIDTH`].
    pub fn fit_width(terminal_width: u16) -> usize {
        (usize::from(terminal_width) / 4).min(MAX_BAR_WIDTH)
    }

    /// The fixed column width of rendered bars.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render `ratio` as a bar string.
    ///
    /// Negative ratios draw as an empty bar; ratios above 1 saturate at a
    /// full bar. The underlying number is never altered here, only the
    /// drawn width is clamped.
    pub fn render(&self, ratio: f64) -> String {
        let (completed, todo) = self.sections(ratio);

        let completed_section = self.glyphs.full.repeat(completed).with(self.done_color);
        let todo_section = self.glyphs.full.repeat(todo).with(self.todo_color);

        format!(
            "{}{completed_section}{todo_section}{}",
            self.glyphs.left_cap, self.glyphs.right_cap
        )
    }

    /// Split the bar width into (completed, todo) column counts.
    fn sections(&self, ratio: f64) -> (usize, usize) {
        let ratio = if ratio < 0.0 { 0.0 } else { ratio };
        let completed = ((ratio * self.width as f64) as usize).min(self.width);
        (completed, self.width - completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_glyph_count(bar: &str, theme: BarTheme) -> usize {
        let full = theme.glyphs().full.chars().next().unwrap();
        bar.chars().filter(|c| *c == full).count()
    }

    #[test]
    fn test_negative_ratio_draws_empty() {
        let bar = BarRenderer::new(10, BarTheme::Lite);
        assert_eq!(bar.render(-0.5), bar.render(0.0));
        assert_eq!(bar.render(f64::MIN), bar.render(0.0));
    }

    #[test]
    fn test_sections_always_fill_width() {
        let bar = BarRenderer::new(10, BarTheme::Lite);
        for r in [0.0, 0.1, 0.33, 0.5, 0.99, 1.0] {
            assert_eq!(full_glyph_count(&bar.render(r), BarTheme::Lite), 10);
        }
    }

    #[test]
    fn test_overflow_saturates() {
        let bar = BarRenderer::new(10, BarTheme::Lite);
        let saturated = bar.render(1.7);
        assert_eq!(saturated, bar.render(1.0));
        assert_eq!(full_glyph_count(&saturated, BarTheme::Lite), 10);
    }

    #[test]
    fn test_floor_semantics() {
        let bar = BarRenderer::new(10, BarTheme::Lite);
        // 0.55 * 10 = 5.5 floors to 5
        assert_eq!(bar.sections(0.55), (5, 5));
        assert_eq!(bar.sections(0.0), (0, 10));
        assert_eq!(bar.sections(1.0), (10, 0));
        assert_eq!(bar.sections(0.999), (9, 1));
        assert_eq!(bar.sections(2.5), (10, 0));
        assert_eq!(bar.sections(-1.0), (0, 10));
    }

    #[test]
    fn test_caps_wrap_bar() {
        let bar = BarRenderer::new(8, BarTheme::Lite);
        let out = bar.render(0.5);
        assert!(out.starts_with('├'));
        assert!(out.ends_with('┤'));
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(BarRenderer::fit_width(80), 20);
        assert_eq!(BarRenderer::fit_width(400), MAX_BAR_WIDTH);
        assert_eq!(BarRenderer::fit_width(0), 0);
    }
}
