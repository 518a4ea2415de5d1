use artistriage_core::Status;
use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn artist_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn genre(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn id(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn status(&self, status: Status) -> ColoredString {
        let symbol = status.symbol();
        match status {
            Status::Positive => symbol.green(),
            Status::Negative => symbol.red(),
            Status::Neutral => symbol.normal(),
            Status::Potential => symbol.magenta(),
            Status::Unlabeled => symbol.normal(),
        }
    }

    pub fn potential(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn prompt(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }
}
