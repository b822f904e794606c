//! Terminal colors for motion output
//!
//! Semantic styles plus color support detection that respects `NO_COLOR`,
//! `FORCE_COLOR`, `TERM=dumb` and piped stdout.

use colored::{ColoredString, Colorize};
use std::io::IsTerminal;

/// Level of color support detected for the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// No color support (NO_COLOR set, TERM=dumb, piped output)
    None,
    /// Basic 16-color support
    Basic,
}

impl ColorSupport {
    /// Detect color support from environment and terminal capabilities
    #[must_use]
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            return Self::None;
        }
        if std::env::var("FORCE_COLOR").is_ok() {
            return Self::Basic;
        }
        if !std::io::stdout().is_terminal() {
            return Self::None;
        }
        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::None;
        }
        Self::Basic
    }

    #[must_use]
    pub const fn has_color(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for ColorSupport {
    fn default() -> Self {
        Self::detect()
    }
}

/// Pre-built semantic styles
pub struct MotionStyles;

impl MotionStyles {
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red().bold()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn command(text: &str) -> ColoredString {
        text.cyan().bold()
    }

    pub fn path(text: &str) -> ColoredString {
        text.blue()
    }
}

/// Apply a style only when the terminal supports color.
pub fn styled<S, F>(text: S, style_fn: F, support: ColorSupport) -> String
where
    S: AsRef<str>,
    F: FnOnce(&str) -> ColoredString,
{
    if support.has_color() {
        style_fn(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

/// Status glyph for a per-file outcome line.
#[must_use]
pub fn status_symbol(success: Option<bool>, support: ColorSupport) -> String {
    match success {
        Some(true) => styled("✓", MotionStyles::success, support),
        Some(false) => styled("✗", MotionStyles::error, support),
        None => styled("!", MotionStyles::warning, support),
    }
}
