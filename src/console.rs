//! The narration sink every example writes to.
//!
//! Examples never call `println!` directly. They write through a [`Console`],
//! which the driver binds to stdout and the tests bind to a byte buffer.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

use crate::error::Result;

pub const RULE: &str = "-------------------";
pub const SEPARATOR: &str = "***";

pub struct Console<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Console { out, color }
    }

    /// A console that never emits ANSI escapes.
    pub fn plain(out: &'a mut dyn Write) -> Self {
        Self::new(out, false)
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn lines<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Category heading, bold when colour is enabled.
    pub fn heading(&mut self, title: &str) -> Result<()> {
        if self.color {
            self.line(title.bold())
        } else {
            self.line(title)
        }
    }

    /// Example title, cyan when colour is enabled.
    pub fn title(&mut self, name: &str) -> Result<()> {
        if self.color {
            self.line(name.cyan())
        } else {
            self.line(name)
        }
    }

    pub fn failure(&mut self, text: impl Display) -> Result<()> {
        if self.color {
            self.line(text.to_string().red())
        } else {
            self.line(text)
        }
    }

    pub fn rule(&mut self) -> Result<()> {
        self.line(RULE)
    }

    pub fn separator(&mut self) -> Result<()> {
        self.line(SEPARATOR)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Runs `f` against an in-memory plain console and returns what it wrote.
    pub fn capture<F>(f: F) -> Result<String>
    where
        F: FnOnce(&mut Console<'_>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        {
            let mut console = Console::plain(&mut buffer);
            f(&mut console)?;
        }
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;
    use std::io;

    #[test]
    fn test_capture_plain_lines() {
        let text = Console::capture(|c| {
            c.heading("Creational Patterns")?;
            c.rule()?;
            c.title("Singleton")?;
            c.lines(["a", "b"])?;
            c.separator()?;
            c.blank()
        })
        .unwrap();

        assert_eq!(
            text,
            "Creational Patterns\n-------------------\nSingleton\na\nb\n***\n\n"
        );
    }

    #[test]
    fn test_capture_propagates_errors() {
        let result = Console::capture(|_| Err(PatternError::NoStrategy));
        assert!(matches!(result, Err(PatternError::NoStrategy)));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let mut sink = Broken;
        let mut console = Console::plain(&mut sink);
        assert!(matches!(console.line("x"), Err(PatternError::Io(_))));
    }
}
