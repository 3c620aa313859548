//! Injected terminal styling capability.
//!
//! The renderer formats through this trait, so tests assert plain text
//! instead of capturing escape codes, and piped output stays uncolored.

use yansi::Paint;

pub trait Style {
    /// Strong emphasis, e.g. the city name or the temperature value.
    fn emphasize(&self, s: &str) -> String;
    /// Informational tint for secondary values.
    fn info(&self, s: &str) -> String;
    /// Positive tint, e.g. the condition label.
    fn good(&self, s: &str) -> String;
    /// Mild warning tint.
    fn warn(&self, s: &str) -> String;
    /// Strong warning tint, e.g. heat advisories and errors.
    fn alert(&self, s: &str) -> String;
    /// Cold tint, e.g. chill advisories.
    fn chill(&self, s: &str) -> String;
}

/// ANSI color styling for real terminals.
#[derive(Debug, Default)]
pub struct Ansi;

impl Style for Ansi {
    fn emphasize(&self, s: &str) -> String {
        Paint::yellow(s).bold().to_string()
    }

    fn info(&self, s: &str) -> String {
        Paint::blue(s).to_string()
    }

    fn good(&self, s: &str) -> String {
        Paint::green(s).to_string()
    }

    fn warn(&self, s: &str) -> String {
        Paint::yellow(s).to_string()
    }

    fn alert(&self, s: &str) -> String {
        Paint::red(s).bold().to_string()
    }

    fn chill(&self, s: &str) -> String {
        Paint::cyan(s).to_string()
    }
}

/// Pass-through styling for tests and non-terminal output.
#[derive(Debug, Default)]
pub struct Plain;

impl Style for Plain {
    fn emphasize(&self, s: &str) -> String {
        s.to_string()
    }

    fn info(&self, s: &str) -> String {
        s.to_string()
    }

    fn good(&self, s: &str) -> String {
        s.to_string()
    }

    fn warn(&self, s: &str) -> String {
        s.to_string()
    }

    fn alert(&self, s: &str) -> String {
        s.to_string()
    }

    fn chill(&self, s: &str) -> String {
        s.to_string()
    }
}
