//! Provides the types used to format log messages printed to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_text::Location;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Is a struct implementing [`Display`] that represents a log message to be
/// displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = Style::Bold.paint(match self.severity {
            Severity::Error => Color::Red.paint("[error]:"),
            Severity::Warning => Color::Yellow.paint("[warning]:"),
            Severity::Info => Color::Green.paint("[info]:"),
        });

        write!(f, "{header} {}", Style::Bold.paint(&self.display))
    }
}

/// Structure implementing [`Display`] that prints a single line of the
/// scanned text with a caret pointing at a particular column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceLineDisplay<'a> {
    /// The line of text to be printed.
    pub line: &'a str,

    /// The location the caret points at.
    pub location: Location,
}

impl Display for SourceLineDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_number = self.location.line.to_string();
        let pipe = Style::Bold.paint(Color::Cyan.paint("┃"));

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}:{}",
            "",
            Style::Bold.paint(Color::Cyan.paint("-->")),
            self.location.line,
            self.location.column,
            width = line_number.len()
        )?;

        // prints the line itself, tabs widened, terminator stripped
        write!(
            f,
            "{} {pipe} ",
            Style::Bold.paint(Color::Cyan.paint(&line_number))
        )?;
        for character in self.line.chars() {
            if character == '\t' {
                write!(f, "    ")?;
            } else if character != '\n' && character != '\r' {
                write!(f, "{character}")?;
            }
        }
        writeln!(f)?;

        // prints the caret under the offending column
        write!(f, "{:width$} {pipe} ", "", width = line_number.len())?;
        for (index, character) in self.line.chars().enumerate() {
            if index + 1 >= self.location.column {
                break;
            }

            write!(f, "{}", if character == '\t' { "    " } else { " " })?;
        }
        write!(f, "{}", Style::Bold.paint(Color::Red.paint("^")))
    }
}
