use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::tty::IsTty;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Status and error console, styled only when attached to a terminal
pub struct Console<W: Write> {
    writer: W,
    colors: bool,
}

impl Console<io::Stderr> {
    pub fn stderr(color: bool) -> Self {
        let stderr = io::stderr();
        let colors = color && stderr.is_tty();
        Self::new(stderr, colors)
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, colors: bool) -> Self {
        Self { writer, colors }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn println(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    pub fn bold(&mut self, message: &str) -> io::Result<()> {
        if self.colors {
            queue!(
                self.writer,
                SetAttribute(Attribute::Bold),
                Print(message),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            write!(self.writer, "{}", message)?;
        }
        self.writer.flush()
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        if self.colors {
            queue!(
                self.writer,
                SetForegroundColor(Color::Red),
                Print(message),
                ResetColor,
                Print("\n")
            )?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        self.writer.flush()
    }

    /// Ask whether `resource` should really be deleted, anything but `y` or
    /// `yes` declines
    pub fn confirm_deletion<R: BufRead>(
        &mut self,
        kind: &str,
        resource: &dyn fmt::Display,
        input: &mut R,
    ) -> io::Result<bool> {
        write!(self.writer, "Are you sure you want to delete the {} ", kind)?;
        self.bold(&resource.to_string())?;
        write!(self.writer, "? [y/N]: ")?;
        self.writer.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error() {
        let mut console = Console::new(Vec::new(), false);
        console.error("Error: boom").unwrap();
        assert_eq!(String::from_utf8(console.into_inner()).unwrap(), "Error: boom\n");
    }

    #[test]
    fn test_colored_error_uses_ansi() {
        let mut console = Console::new(Vec::new(), true);
        console.error("boom").unwrap();
        let output = String::from_utf8(console.into_inner()).unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("boom"));
    }

    #[test]
    fn test_confirm_deletion() {
        let mut console = Console::new(Vec::new(), false);
        let mut input = "Yes\n".as_bytes();
        assert!(console.confirm_deletion("kubernetes cluster", &"prod (1)", &mut input).unwrap());

        let prompt = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(prompt, "Are you sure you want to delete the kubernetes cluster prod (1)? [y/N]: ");
    }

    #[test]
    fn test_confirm_deletion_defaults_to_no() {
        let mut console = Console::new(Vec::new(), false);
        let mut input = "\n".as_bytes();
        assert!(!console.confirm_deletion("server", &"web (2)", &mut input).unwrap());

        let mut input = "".as_bytes();
        assert!(!console.confirm_deletion("server", &"web (2)", &mut input).unwrap());
    }
}
