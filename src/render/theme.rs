//! Bar themes - glyph sets and default colors
//!
//! A theme is the set of four glyphs a progress bar is drawn with
//! (`empty`, `full`, and the two end caps) plus the default colors for
//! the completed and remaining sections. Themes are selected once at
//! renderer construction and never change afterwards.

use crossterm::style::Color;
use std::str::FromStr;

/// Default fill color for the completed section (amber).
pub const COLOR_DONE: Color = Color::Rgb {
    r: 0xfc,
    g: 0xba,
    b: 0x03,
};

/// Default color for the remaining section and auxiliary text (grey).
pub const COLOR_TODO: Color = Color::Rgb {
    r: 0x77,
    g: 0x77,
    b: 0x77,
};

/// Marker glyph shown in place of the spinner once a task finishes.
pub const COMPLETED_MARK: &str = "✔";

/// The four glyphs that make up one bar style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Glyph for unfilled positions.
    pub empty: &'static str,
    /// Glyph for filled positions.
    pub full: &'static str,
    /// Left end cap.
    pub left_cap: &'static str,
    /// Right end cap.
    pub right_cap: &'static str,
}

/// Built-in bar themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarTheme {
    /// Thin rule with angular caps: `├──  ┤`
    #[default]
    Lite,
    /// Thin rule with squashed caps: `▕──  ▏`
    LiteSquash,
    /// Heavy rule with angular caps: `┝━━━━┥`
    Heavy,
    /// Heavy rule with squashed caps: `▕━━━━▏`
    HeavySquash,
    /// Heavy rule with block caps: `▐━━━━▌`
    ReallyHeavySquash,
    /// Heavy rule with no caps at all.
    HeavyNoBar,
}

impl BarTheme {
    /// The glyph set this theme draws with.
    pub fn glyphs(self) -> GlyphSet {
        match self {
            Self::Lite => GlyphSet {
                empty: " ",
                full: "─",
                left_cap: "├",
                right_cap: "┤",
            },
            Self::LiteSquash => GlyphSet {
                empty: " ",
                full: "─",
                left_cap: "▕",
                right_cap: "▏",
            },
            Self::Heavy => GlyphSet {
                empty: "━",
                full: "━",
                left_cap: "┝",
                right_cap: "┥",
            },
            Self::HeavySquash => GlyphSet {
                empty: "━",
                full: "━",
                left_cap: "▕",
                right_cap: "▏",
            },
            Self::ReallyHeavySquash => GlyphSet {
                empty: "━",
                full: "━",
                left_cap: "▐",
                right_cap: "▌",
            },
            Self::HeavyNoBar => GlyphSet {
                empty: "━",
                full: "━",
                left_cap: "",
                right_cap: "",
            },
        }
    }
}

impl FromStr for BarTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lite" => Ok(Self::Lite),
            "lite-squash" => Ok(Self::LiteSquash),
            "heavy" => Ok(Self::Heavy),
            "heavy-squash" => Ok(Self::HeavySquash),
            "really-heavy-squash" => Ok(Self::ReallyHeavySquash),
            "heavy-no-bar" => Ok(Self::HeavyNoBar),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_glyphs() {
        let lite = BarTheme::Lite.glyphs();
        assert_eq!(lite.full, "─");
        assert_eq!(lite.left_cap, "├");
        assert_eq!(lite.right_cap, "┤");

        let bare = BarTheme::HeavyNoBar.glyphs();
        assert_eq!(bare.left_cap, "");
        assert_eq!(bare.right_cap, "");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("lite".parse::<BarTheme>().unwrap(), BarTheme::Lite);
        assert_eq!(
            "really-heavy-squash".parse::<BarTheme>().unwrap(),
            BarTheme::ReallyHeavySquash
        );
        assert!("bogus".parse::<BarTheme>().is_err());
    }
}
