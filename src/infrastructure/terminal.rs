//! Terminal I/O boundary
//!
//! The interactive session only talks to a [`Terminal`], so it can be driven
//! by scripted input in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;

/// Line-oriented terminal abstraction.
pub trait Terminal {
    /// Show `prompt` and read one line without its line terminator.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print a plain line.
    fn info(&mut self, msg: &str) -> io::Result<()>;

    /// Print an input error line.
    fn error(&mut self, msg: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATION
// ============================================================

/// Terminal over any reader/writer pair.
#[derive(Debug)]
pub struct StreamTerminal<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

/// Terminal bound to the process stdin/stdout.
pub type StdTerminal = StreamTerminal<StdinLock<'static>, Stdout>;

impl StdTerminal {
    pub fn stdio() -> Self {
        // colored still honours NO_COLOR / CLICOLOR and non-tty stdout
        StreamTerminal::new(io::stdin().lock(), io::stdout()).with_color(true)
    }
}

impl<R: BufRead, W: Write> StreamTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for StreamTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.color {
            write!(self.writer, "{} ", prompt.cyan())?;
        } else {
            write!(self.writer, "{} ", prompt)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", msg.red())
        } else {
            writeln!(self.writer, "{}", msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminator() {
        let mut terminal = StreamTerminal::new(Cursor::new("2,5\r\nq\n"), Vec::new());

        assert_eq!(terminal.read_line("a:").unwrap(), Some("2,5".to_string()));
        assert_eq!(terminal.read_line("b:").unwrap(), Some("q".to_string()));
        assert_eq!(terminal.read_line("c:").unwrap(), None);

        let written = String::from_utf8(terminal.into_writer()).unwrap();
        assert_eq!(written, "a: b: c: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut terminal = StreamTerminal::new(Cursor::new("exit"), Vec::new());

        assert_eq!(terminal.read_line(">").unwrap(), Some("exit".to_string()));
        assert_eq!(terminal.read_line(">").unwrap(), None);
    }

    #[test]
    fn test_info_and_error_write_lines() {
        let mut terminal = StreamTerminal::new(Cursor::new(""), Vec::new());

        terminal.info("CPD = 1.00 / day").unwrap();
        terminal.error("Invalid number, try again.").unwrap();

        let written = String::from_utf8(terminal.into_writer()).unwrap();
        assert_eq!(written, "CPD = 1.00 / day\nInvalid number, try again.\n");
    }
}
