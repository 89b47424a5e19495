use colored::*;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

fn colorize(level: Level, s: &str, enable: bool) -> String {
    if !enable {
        return s.to_string();
    }
    match level {
        Level::Info => s.normal().to_string(),
        Level::Success => s.green().bold().to_string(),
        Level::Warn => s.yellow().bold().to_string(),
        Level::Error => s.red().bold().to_string(),
    }
}

/// Line-oriented console output.
///
/// Every level goes to the same sink so callers see progress and errors
/// interleaved in the order they happened.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl Reporter<io::Stdout> {
    /// Reporter on stdout, colored only when stdout is a terminal
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn emit(&mut self, level: Level, message: &str) {
        let line = colorize(level, message, self.color);
        let _ = writeln!(self.out, "{}", line);
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

pub mod prelude {
    pub use super::{Level, Reporter};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.emit(Level::Error, "Error: boom");
        reporter.emit(Level::Success, "done");

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "Error: boom\ndone\n");
    }

    #[test]
    fn colorize_respects_flag() {
        assert_eq!(colorize(Level::Warn, "careful", false), "careful");
    }
}
