//! Integer geometry primitives: points, sizes, and rectangles in pixels.
//!
//! Workspace and window geometry is always whole pixels. Origins are signed
//! (`i32`) so a window may sit partly left of or above the workspace; sizes are
//! unsigned (`u32`).

use serde::{Deserialize, Serialize};

/// Largest width or height accepted for a workspace; any larger extent would
/// not fit an `i32` coordinate.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Converts an unsigned extent to a coordinate delta, saturating at `i32::MAX`.
pub fn extent_to_offset(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

/// An integer point with `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointInt {
    pub x: i32,
    pub y: i32,
}

impl PointInt {
    /// The origin (0,0).
    pub const ZERO: PointInt = PointInt::new(0, 0);

    /// Creates a new `PointInt`.
    pub const fn new(x: i32, y: i32) -> Self {
        PointInt { x, y }
    }

    /// Moves the point right by `dx` and down by `dy`, saturating at `i32::MAX`.
    pub fn offset_by(&self, dx: u32, dy: u32) -> Self {
        PointInt::new(
            self.x.saturating_add(extent_to_offset(dx)),
            self.y.saturating_add(extent_to_offset(dy)),
        )
    }
}

/// An integer size with `u32` dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizeInt {
    pub width: u32,
    pub height: u32,
}

impl SizeInt {
    /// Creates a new `SizeInt`.
    pub const fn new(width: u32, height: u32) -> Self {
        SizeInt { width, height }
    }

    /// Checks if the area is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Halves both dimensions, rounding down.
    pub fn half(&self) -> Self {
        SizeInt::new(self.width / 2, self.height / 2)
    }

    /// Shrinks both dimensions by `amount`, stopping at zero.
    pub fn shrink(&self, amount: u32) -> Self {
        SizeInt::new(
            self.width.saturating_sub(amount),
            self.height.saturating_sub(amount),
        )
    }
}

/// An integer rectangle with `i32` origin and `u32` size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectInt {
    /// The origin point (top-left corner) of the rectangle.
    pub origin: PointInt,
    /// The size (width and height) of the rectangle.
    pub size: SizeInt,
}

impl RectInt {
    /// Creates a new `RectInt` from an origin point and a size.
    pub const fn new(origin: PointInt, size: SizeInt) -> Self {
        RectInt { origin, size }
    }

    /// Creates a new `RectInt` from individual coordinate and dimension values.
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        RectInt {
            origin: PointInt::new(x, y),
            size: SizeInt::new(width, height),
        }
    }

    /// A rectangle anchored at (0,0) covering `size`.
    pub const fn from_size(size: SizeInt) -> Self {
        RectInt::new(PointInt::ZERO, size)
    }

    pub fn x(&self) -> i32 { self.origin.x }
    pub fn y(&self) -> i32 { self.origin.y }
    pub fn width(&self) -> u32 { self.size.width }
    pub fn height(&self) -> u32 { self.size.height }

    pub fn top(&self) -> i32 { self.origin.y }
    pub fn left(&self) -> i32 { self.origin.x }

    /// The x-coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.origin.x.saturating_add(extent_to_offset(self.size.width))
    }

    /// The y-coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(extent_to_offset(self.size.height))
    }

    /// Checks if this rectangle shares any area with `other`.
    pub fn intersects(&self, other: &RectInt) -> bool {
        self.left() < other.right() && self.right() > other.left() &&
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Checks that `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &RectInt) -> bool {
        other.left() >= self.left() && other.right() <= self.right() &&
        other.top() >= self.top() && other.bottom() <= self.bottom()
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(PointInt: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Serialize, Send, Sync);
    assert_impl_all!(SizeInt: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Serialize, Send, Sync);
    assert_impl_all!(RectInt: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Serialize, Send, Sync);

    #[test]
    fn size_half_rounds_down() {
        assert_eq!(SizeInt::new(801, 599).half(), SizeInt::new(400, 299));
    }

    #[rstest]
    #[case(SizeInt::new(400, 300), 20, SizeInt::new(380, 280))]
    #[case(SizeInt::new(10, 30), 20, SizeInt::new(0, 10))]
    #[case(SizeInt::new(0, 0), 20, SizeInt::new(0, 0))]
    fn size_shrink_saturates(#[case] size: SizeInt, #[case] by: u32, #[case] expected: SizeInt) {
        assert_eq!(size.shrink(by), expected);
    }

    #[test]
    fn rect_edges() {
        let r = RectInt::from_coords(400, 300, 380, 280);
        assert_eq!(r.left(), 400);
        assert_eq!(r.top(), 300);
        assert_eq!(r.right(), 780);
        assert_eq!(r.bottom(), 580);
    }

    #[test]
    fn edges_saturate_for_huge_extents() {
        let r = RectInt::from_coords(10, 0, u32::MAX, MAX_DIMENSION);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
    }

    #[test]
    fn adjacent_rects_do_not_intersect() {
        let left = RectInt::from_coords(0, 0, 400, 300);
        let right = RectInt::from_coords(400, 0, 400, 300);
        assert!(!left.intersects(&right));
        assert!(left.intersects(&RectInt::from_coords(399, 299, 10, 10)));
    }

    #[test]
    fn contains_rect_checks_all_edges() {
        let area = RectInt::from_size(SizeInt::new(800, 600));
        assert!(area.contains_rect(&RectInt::from_coords(400, 300, 400, 300)));
        assert!(!area.contains_rect(&RectInt::from_coords(401, 300, 400, 300)));
    }

    #[test]
    fn offset_by_moves_and_saturates() {
        assert_eq!(PointInt::ZERO.offset_by(10, 28), PointInt::new(10, 28));
        assert_eq!(PointInt::new(-5, 5).offset_by(u32::MAX, 0), PointInt::new(i32::MAX - 5, 5));
        assert_eq!(PointInt::new(1, 1).offset_by(MAX_DIMENSION, MAX_DIMENSION), PointInt::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn empty_rects() {
        assert!(!RectInt::from_coords(0, 0, 100, 50).is_empty());
        assert!(RectInt::default().is_empty());
    }
}
