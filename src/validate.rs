//! Validated construction and aggregate queries.
//!
//! The shape constructors themselves are total: they store whatever they
//! are given. This module is the entry point for raw, untrusted dimensions.
//! Validation returns a typed [`GeometryError`] to the immediate caller on
//! the first violated precondition — no partial construction, no logging,
//! no retries.

use crate::error::GeometryError;
use crate::shape::{Drawable, Rectangle};

/// Shape kind names the library recognizes.
pub const SUPPORTED_SHAPE_KINDS: [&str; 3] = ["circle", "rectangle", "triangle"];

/// Build a rectangle from raw dimensions, rejecting a non-positive width.
///
/// The guard is single-sided: only `width` is checked, `height` is passed
/// through as-is. A zero or negative width fails with
/// [`GeometryError::NegativeValue`] carrying the offending value.
///
/// # Example
///
/// ```
/// use geom_rs::{validate_rectangle, GeometryError};
///
/// let r = validate_rectangle(10.0, 5.0).unwrap();
/// assert_eq!(r.area(), 50.0);
///
/// let err = validate_rectangle(-2.0, 5.0).unwrap_err();
/// assert_eq!(err, GeometryError::NegativeValue(-2.0));
/// ```
pub fn validate_rectangle(width: f64, height: f64) -> Result<Rectangle, GeometryError> {
    // Written as `width > 0.0` so a NaN width also fails the guard.
    if width > 0.0 {
        Ok(Rectangle::new(width, height))
    } else {
        Err(GeometryError::NegativeValue(width))
    }
}

/// Sum the areas of a collection of drawables.
///
/// An empty collection yields `0.0`. Aggregation never rejects input:
/// whatever area each drawable reports is what gets summed.
///
/// # Example
///
/// ```
/// use geom_rs::{total_area, Rectangle};
///
/// let shapes = [Rectangle::new(10.0, 5.0), Rectangle::square(7.0)];
/// assert_eq!(total_area(&shapes), 99.0);
/// ```
pub fn total_area<'a, D, I>(shapes: I) -> f64
where
    D: Drawable + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    shapes.into_iter().map(|s| s.area()).sum()
}

/// Check that a shape kind name is recognized.
///
/// Succeeds for the kinds in [`SUPPORTED_SHAPE_KINDS`]; any other name
/// fails with [`GeometryError::UnknownShape`] carrying the name.
pub fn lookup_shape_kind(name: &str) -> Result<(), GeometryError> {
    if SUPPORTED_SHAPE_KINDS.contains(&name) {
        Ok(())
    } else {
        Err(GeometryError::UnknownShape(name.to_string()))
    }
}
