//! Shape model: the [`Drawable`] capability and the closed [`Shape`] set.
//!
//! Two concrete shapes exist: a base shape carrying identity only (a name
//! and a color, no geometry) and [`Rectangle`]. The set is closed, so the
//! model is a tagged variant with a single dispatch point for area and
//! description — extending it means adding a variant here, not implementing
//! a trait from outside. The [`Drawable`] trait remains the seam that
//! aggregate operations like
//! [`total_area`](crate::validate::total_area) work against.

mod rectangle;

pub use rectangle::Rectangle;

use crate::color::Color;

/// Capability of anything that can be rendered.
///
/// A drawable exposes a computed surface area and a human-readable
/// rendering description. Descriptions are returned, never printed — what
/// (and whether) to print is the caller's decision.
///
/// # Example
///
/// ```
/// use geom_rs::{Drawable, Rectangle};
///
/// let r = Rectangle::new(10.0, 5.0);
/// assert_eq!(Drawable::area(&r), 50.0);
/// assert_eq!(r.describe(), "Drawing rectangle: 10 x 5");
/// ```
pub trait Drawable {
    /// Computed surface area.
    fn area(&self) -> f64;

    /// Human-readable rendering description.
    fn describe(&self) -> String;
}

/// A shape from the closed set the library knows about.
///
/// `Base` carries identity (name and color) with no geometry — its area is
/// `0.0` by definition. `Rectangle` wraps the [`Rectangle`] value type.
/// A mixed collection of shapes is the unit that aggregate queries operate
/// on.
///
/// # Example
///
/// ```
/// use geom_rs::{Color, Rectangle, Shape};
///
/// let shapes = [
///     Shape::base("frame", Color::Red),
///     Shape::from(Rectangle::new(10.0, 5.0)),
/// ];
/// assert_eq!(shapes[0].area(), 0.0);
/// assert_eq!(shapes[1].area(), 50.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// An abstract shape with identity but no geometry.
    Base {
        /// Display name referenced by the description
        name: String,
        /// Identity color
        color: Color,
    },
    /// A concrete rectangle.
    Rectangle(Rectangle),
}

impl Shape {
    /// Create a base shape from a name and color. Never fails.
    pub fn base(name: impl Into<String>, color: Color) -> Self {
        Shape::Base {
            name: name.into(),
            color,
        }
    }

    /// Computed surface area.
    ///
    /// A base shape has no geometry defined and reports `0.0`.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Base { .. } => 0.0,
            Shape::Rectangle(r) => r.area(),
        }
    }

    /// Human-readable rendering description.
    pub fn describe(&self) -> String {
        match self {
            Shape::Base { name, color } => format!("Drawing {name} with color {color}"),
            Shape::Rectangle(r) => r.describe(),
        }
    }
}

impl Drawable for Shape {
    fn area(&self) -> f64 {
        Shape::area(self)
    }

    fn describe(&self) -> String {
        Shape::describe(self)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}
