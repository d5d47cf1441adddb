//! Module containing structures and implementations for logging messages to the user.

use colored::Colorize;
use std::fmt::Display;

/// Represent the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Help,
}

/// Struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}
impl<T> Message<T> {
    /// Create a new log message with the given severity and message to be displayed.
    pub fn new(severity: Severity, display: T) -> Self {
        Self { severity, display }
    }
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = (match self.severity {
            Severity::Error => "[error]:".red(),
            Severity::Help => "[help]:".cyan(),
        })
        .bold();

        let message_part = &self.display.to_string().bold();

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints the line of an expression containing the
/// given byte position, with a caret underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceCodeDisplay<'a, T> {
    /// The full expression text.
    pub source: &'a str,

    /// Byte position to point at.
    pub position: usize,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Create a new source code display pointing at `position` inside `source`.
    pub fn new(source: &'a str, position: usize, help_display: Option<T>) -> Self {
        Self {
            source,
            position,
            help_display,
        }
    }

    /// Returns the line containing the position and the character column of the position in it.
    fn line_and_column(&self) -> (&'a str, usize) {
        let position = self.position.min(self.source.len());
        let line_start = self.source[..position]
            .rfind(['\n', '\r'])
            .map_or(0, |index| index + 1);
        let line_end = self.source[position..]
            .find(['\n', '\r'])
            .map_or(self.source.len(), |index| position + index);

        let column = self.source[line_start..position].chars().count();

        (&self.source[line_start..line_end], column)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.line_and_column();
        let line = line.replace('\t', " ");

        writeln!(f, "  {line}")?;
        write!(f, "  {}{}", " ".repeat(column), "^".red().bold())?;

        if let Some(help_display) = &self.help_display {
            write!(f, "\n\n{}", Message::new(Severity::Help, help_display))?;
        }

        Ok(())
    }
}
