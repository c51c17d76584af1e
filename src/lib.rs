//! # geom-rs
//!
//! A small geometry value library.
//!
//! This crate provides the core building blocks for working with simple
//! shapes as plain values:
//! - The [`Drawable`] capability (computed area + rendering description)
//! - A [`Rectangle`] value type with derived properties
//! - A closed [`Shape`] variant set for heterogeneous collections
//! - A validation layer that rejects invalid dimensions with a typed error
//!
//! Every operation is a pure, synchronous computation on immutable values.
//! The library never prints or logs: rendering descriptions and error
//! messages are returned as strings, and the caller decides what to
//! surface.

pub mod color;
pub mod error;
pub mod shape;
pub mod validate;

// Re-export main types for convenience
pub use color::Color;
pub use error::GeometryError;
pub use shape::{Drawable, Rectangle, Shape};
pub use validate::{SUPPORTED_SHAPE_KINDS, lookup_shape_kind, total_area, validate_rectangle};
