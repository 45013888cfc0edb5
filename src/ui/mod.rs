//! Terminal presentation built on [crossterm](https://github.com/crossterm-rs/crossterm).
//!
//! - **[`Palette`]** — decides whether bit strings are coloured and applies the colours
//! - **[`theme`]** — the colour palette
//!
//! Styling never changes the characters printed, only wraps them in escape codes,
//! and it is switched off entirely unless stdout is a terminal and `NO_COLOR` is
//! unset. Piped transcripts are therefore always plain text.

pub mod theme;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use theme::DEFAULT_THEME;

/// Output styling for bit strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    /// Plain text, no escape codes
    pub fn plain() -> Self {
        Palette { colored: false }
    }

    pub fn colored() -> Self {
        Palette { colored: true }
    }

    /// Colour only when `stream` is a terminal and `NO_COLOR` is not set
    pub fn detect<S: IsTty>(stream: &S) -> Self {
        let colored = stream.is_tty() && std::env::var_os("NO_COLOR").is_none();
        log::debug!("bit colouring {}", if colored { "on" } else { "off" });
        Palette { colored }
    }

    /// Apply the theme to a string of `'0'`, `'1'` and separators
    pub fn paint_bits(&self, bits: &str) -> String {
        if !self.colored {
            return bits.to_string();
        }

        bits.chars()
            .map(|ch| match ch {
                '1' => ch.with(DEFAULT_THEME.one).bold().to_string(),
                '0' => ch.with(DEFAULT_THEME.zero).to_string(),
                _ => ch.with(DEFAULT_THEME.separator).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        let bits = "00000000 00000101";
        assert_eq!(Palette::plain().paint_bits(bits), bits);
        assert_eq!(Palette::default(), Palette::plain());
    }

    fn strip_escapes(text: &str) -> String {
        let mut visible = String::new();
        let mut in_escape = false;
        for ch in text.chars() {
            match ch {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => visible.push(ch),
            }
        }
        visible
    }

    #[test]
    fn test_colored_keeps_characters() {
        let painted = Palette::colored().paint_bits("10 01");
        assert_eq!(strip_escapes(&painted), "10 01");
    }
}
