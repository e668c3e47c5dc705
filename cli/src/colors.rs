use colored::*;

/// Styles for terminal output. Colouring is switched off process-wide when
/// `--no-color` is passed.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn vertex(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    /// Grid position of a vertex, shown after its id.
    pub fn coordinate(&self, (x, y): (i64, i64)) -> ColoredString {
        format!("({x}, {y})").dimmed()
    }

    /// Path weights stand out from the other counters.
    pub fn cost(&self, distance: i64) -> ColoredString {
        distance.to_string().cyan().bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
