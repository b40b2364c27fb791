//! Terminal capability detection and colorized output

use owo_colors::{colors::css, OwoColorize};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 70 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 70)
}

/// Extension trait for colorizing output
pub trait Paint {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as failure (red)
    fn failure(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str>> Paint for T {
    fn success(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::Green>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::Orange>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn failure(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::Red>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn info(&self) -> String {
        if supports_color() {
            self.as_ref().fg::<css::LightBlue>().to_string()
        } else {
            self.as_ref().to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.as_ref().dimmed().to_string()
        } else {
            self.as_ref().to_string()
        }
    }
}
