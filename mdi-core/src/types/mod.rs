//! Core data types used throughout the MDI shell.
//!
//! - **Geometry**: integer pixel primitives [`PointInt`], [`SizeInt`], [`RectInt`].

pub mod geometry;

pub use geometry::{PointInt, RectInt, SizeInt, MAX_DIMENSION};
