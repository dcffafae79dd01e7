//! Contains the definitions used to apply ANSI style and color codes to
//! displayable values.

use std::fmt::Display;

/// Represents a text style that can be applied to a displayable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Wraps the given displayable value with this style's escape codes.
    pub fn paint<T>(self, display: T) -> StyledText<T> {
        StyledText {
            style: self,
            display,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable value
/// with a [`Style`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyledText<T> {
    /// The style applied to the value.
    pub style: Style,

    /// The displayable value.
    pub display: T,
}

impl<T: Display> Display for StyledText<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.style.code(), self.display)
    }
}

/// Represents a color that can be applied to a displayable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Wraps the given displayable value with this color's escape codes.
    pub fn paint<T>(self, display: T) -> ColoredText<T> {
        ColoredText {
            color: self,
            display,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1B[30m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Magenta => "\x1B[35m",
            Self::Cyan => "\x1B[36m",
            Self::White => "\x1B[37m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable value
/// with a [`Color`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColoredText<T> {
    /// The color applied to the value.
    pub color: Color,

    /// The displayable value.
    pub display: T,
}

impl<T: Display> Display for ColoredText<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.color.code(), self.display)
    }
}
