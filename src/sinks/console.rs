//! Console sink implementation
//!
//! Writes a color-wrapped copy of each line. The color is chosen by level and
//! reset right after the line, so it never bleeds into unrelated output.

use crate::core::{LogLevel, Result, Sink};
use std::io::{self, Write};

const RESET: &[u8] = b"\x1b[0m";

enum ConsoleTarget {
    Stdout,
    Writer(Box<dyn Write + Send>),
}

pub struct ConsoleSink {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleSink {
    /// Standard output, colored unless the environment says otherwise
    /// (`NO_COLOR`, `CLICOLOR=0`, not a terminal)
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Write to an arbitrary writer instead of standard output
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            target: ConsoleTarget::Writer(writer),
            use_colors: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the color reset when dropped, unless `finish` already did
struct ColorReset<'a, W: Write + ?Sized> {
    writer: &'a mut W,
    armed: bool,
}

impl<'a, W: Write + ?Sized> ColorReset<'a, W> {
    fn set(writer: &'a mut W, color: colored::Color) -> io::Result<Self> {
        write!(writer, "\x1b[{}m", color.to_fg_str())?;
        Ok(Self {
            writer,
            armed: true,
        })
    }

    fn finish(mut self) -> io::Result<()> {
        self.armed = false;
        self.writer.write_all(RESET)
    }
}

impl<W: Write + ?Sized> Drop for ColorReset<'_, W> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.writer.write_all(RESET);
        }
    }
}

fn write_colored<W: Write + ?Sized>(
    writer: &mut W,
    color: Option<colored::Color>,
    line: &str,
) -> io::Result<()> {
    match color {
        Some(color) => {
            let reset = ColorReset::set(writer, color)?;
            reset.writer.write_all(line.as_bytes())?;
            reset.finish()?;
        }
        None => writer.write_all(line.as_bytes())?,
    }
    writer.write_all(b"\n")
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, level: LogLevel, line: &str) -> Result<()> {
        let color = if self.use_colors {
            level.console_color()
        } else {
            None
        };

        match &mut self.target {
            ConsoleTarget::Stdout => write_colored(&mut io::stdout().lock(), color, line)?,
            ConsoleTarget::Writer(writer) => write_colored(writer.as_mut(), color, line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    /// Accepts `limit` bytes, then fails every write
    struct FailingWriter {
        out: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.out.len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.out.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_colors_per_level() {
        let buffer = SharedBuffer::default();
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone()));

        sink.write_line(LogLevel::Debug, "d").unwrap();
        sink.write_line(LogLevel::Info, "i").unwrap();
        sink.write_line(LogLevel::Warn, "w").unwrap();
        sink.write_line(LogLevel::Error, "e").unwrap();

        assert_eq!(
            buffer.contents(),
            "\x1b[32md\x1b[0m\ni\n\x1b[33mw\x1b[0m\n\x1b[31me\x1b[0m\n"
        );
    }

    #[test]
    fn test_plain_when_colors_disabled() {
        let buffer = SharedBuffer::default();
        let mut sink = ConsoleSink::with_writer(Box::new(buffer.clone())).with_colors(false);
        assert!(!sink.uses_colors());

        sink.write_line(LogLevel::Error, "plain").unwrap();
        assert_eq!(buffer.contents(), "plain\n");
    }

    #[test]
    fn test_reset_written_when_line_write_fails() {
        let mut writer = FailingWriter {
            out: Vec::new(),
            limit: 16,
        };
        let line = "x".repeat(64);

        let result = write_colored(&mut writer, Some(colored::Color::Red), &line);
        assert!(result.is_err());
        // The color prefix went out, the line did not; the guard still fits the reset
        assert_eq!(writer.out, b"\x1b[31m\x1b[0m".to_vec());
    }
}
