//! Named fill colors for shapes.
//!
//! The library only needs color as identity: something a shape can carry
//! and a description can mention. A closed set of named colors keeps that
//! cheap to copy and trivial to format.

use std::fmt;

/// A named color carried by shapes.
///
/// # Example
///
/// ```
/// use geom_rs::Color;
///
/// let c = Color::Red;
/// assert_eq!(c.to_string(), "red");
/// assert_eq!(Color::default(), Color::Blue);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
    White,
}

impl Color {
    /// Lowercase name of the color.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for Color {
    /// The fill color used when none is specified.
    fn default() -> Self {
        Color::Blue
    }
}
