// SPDX-License-Identifier: MIT
//
// Text styling — the small vocabulary the renderer paints with.
//
// The editor draws a handful of fixed-colour bars (title, message, status)
// over plain text, so there is no cell grid and no colour math here: just
// the terminal's own palette and the SGR attribute bits.

use bitflags::bitflags;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Terminal default colour (follows the user's theme).
    #[default]
    Default,
    /// ANSI 256-colour palette index. 0-7 are the standard colours,
    /// 8-15 their bright variants.
    Ansi256(u8),
}

impl Color {
    pub const BLACK: Self = Self::Ansi256(0);
    pub const RED: Self = Self::Ansi256(1);
    pub const GREEN: Self = Self::Ansi256(2);
    pub const YELLOW: Self = Self::Ansi256(3);
    pub const BLUE: Self = Self::Ansi256(4);
    pub const MAGENTA: Self = Self::Ansi256(5);
    pub const CYAN: Self = Self::Ansi256(6);
    pub const WHITE: Self = Self::Ansi256(7);
}

// ─── Attr ────────────────────────────────────────────────────────────────────

bitflags! {
    /// SGR text attributes.
    ///
    /// Bit positions are ours; the SGR codes they map to live in
    /// [`ansi::attrs`](crate::ansi::attrs).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1.
        const BOLD    = 1 << 0;
        /// SGR 2.
        const DIM     = 1 << 1;
        /// SGR 3.
        const ITALIC  = 1 << 2;
        /// SGR 4.
        const UNDERLINE = 1 << 3;
        /// SGR 7 — swap foreground and background.
        const INVERSE = 1 << 4;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Foreground, background and attributes applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attr,
}

impl Style {
    /// No colours, no attributes.
    pub const PLAIN: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attrs: Attr::empty(),
    };

    #[must_use]
    pub const fn fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    #[must_use]
    pub const fn bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    #[must_use]
    pub const fn attrs(self, attrs: Attr) -> Self {
        Self { attrs, ..self }
    }

    /// True when writing this style would emit nothing.
    #[must_use]
    pub fn is_plain(self) -> bool {
        self == Self::PLAIN
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_plain() {
        assert!(Style::default().is_plain());
        assert_eq!(Style::default(), Style::PLAIN);
    }

    #[test]
    fn builders_set_one_field() {
        let s = Style::PLAIN.bg(Color::BLUE);
        assert_eq!(s.bg, Color::BLUE);
        assert_eq!(s.fg, Color::Default);
        assert!(s.attrs.is_empty());
        assert!(!s.is_plain());
    }

    #[test]
    fn attrs_combine() {
        let s = Style::PLAIN.attrs(Attr::BOLD | Attr::INVERSE);
        assert!(s.attrs.contains(Attr::BOLD));
        assert!(s.attrs.contains(Attr::INVERSE));
        assert!(!s.attrs.contains(Attr::DIM));
    }

    #[test]
    fn named_colors_are_standard_palette() {
        assert_eq!(Color::BLACK, Color::Ansi256(0));
        assert_eq!(Color::BLUE, Color::Ansi256(4));
        assert_eq!(Color::WHITE, Color::Ansi256(7));
    }
}
