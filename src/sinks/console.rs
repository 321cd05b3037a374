//! Console sink implementation

use crate::core::{LogLevel, Sink};
#[cfg(feature = "console")]
use colored::Colorize;

/// Default sink: `Error` lines go to stderr, everything else to stdout.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, level: LogLevel, line: &str) {
        let rendered = self.render(level, line);
        match level {
            LogLevel::Error => eprintln!("{}", rendered),
            _ => println!("{}", rendered),
        }
    }
}

impl ConsoleSink {
    #[cfg(feature = "console")]
    fn render(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn render(&self, _level: LogLevel, line: &str) -> String {
        let _ = self.use_colors;
        line.to_string()
    }
}
