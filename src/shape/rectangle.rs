//! Axis-aligned rectangle value type.

use std::fmt;

use super::Drawable;
use crate::color::Color;

/// A rectangle with computed geometric properties.
///
/// `Rectangle` is a plain value: copied on assignment, immutable after
/// construction. The constructor accepts any dimensions, including negative
/// ones — this is intentional permissiveness at the type level. Validation
/// is a separate, explicit step
/// ([`validate_rectangle`](crate::validate::validate_rectangle)) layered on
/// top, so the type itself stays total.
///
/// # Example
///
/// ```
/// use geom_rs::Rectangle;
///
/// let r = Rectangle::new(10.0, 5.0);
/// assert_eq!(r.area(), 50.0);
/// assert_eq!(r.perimeter(), 30.0);
/// assert!(!r.is_square());
///
/// let sq = Rectangle::square(7.0);
/// assert!(sq.is_square());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Horizontal extent
    width: f64,
    /// Vertical extent
    height: f64,
    /// Fill color, [`Color::Blue`] unless overridden
    fill_color: Color,
}

impl Rectangle {
    /// Create a new rectangle.
    ///
    /// Never fails, regardless of the sign of the inputs. Use
    /// [`validate_rectangle`](crate::validate::validate_rectangle) when the
    /// dimensions come from untrusted input.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill_color: Color::default(),
        }
    }

    /// Create a square with the given side length.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Set the fill color.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Fill color.
    #[inline]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Surface area (width × height).
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter (2 × (width + height)).
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Whether both sides have the same length.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Look up a dimension by name.
    ///
    /// Recognizes `"width"` and `"height"`. Any other key yields `0.0` —
    /// a defensive default, not an error.
    pub fn dimension(&self, name: &str) -> f64 {
        match name {
            "width" => self.width,
            "height" => self.height,
            _ => 0.0,
        }
    }

    /// Rendering description referencing both side lengths.
    pub fn describe(&self) -> String {
        format!("Drawing rectangle: {} x {}", self.width, self.height)
    }
}

impl Drawable for Rectangle {
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }

    fn describe(&self) -> String {
        Rectangle::describe(self)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

impl From<(f64, f64)> for Rectangle {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}
