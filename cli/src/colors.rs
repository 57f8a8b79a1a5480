use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn city_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn url(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    /// Placeholder for data the sources do not provide
    pub fn missing(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
