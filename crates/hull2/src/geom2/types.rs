//! Basic value types of the hull engine.
//!
//! - `Point`: integer pair, ordered lexicographically (x, then y).
//! - `PointSet`: deduplicated, strictly increasing sequence of points.

use nalgebra::Vector2;
use std::fmt;

/// Integer point in the Cartesian plane (origin bottom-left, y up).
///
/// Field order matters: the derived `Ord` is lexicographic on `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Widened copy for affine maps; `i128` leaves room for offsets past the `i64` range.
    #[inline]
    pub fn to_vector(self) -> Vector2<i128> {
        Vector2::new(i128::from(self.x), i128::from(self.y))
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    /// Hull dump format: `"<x> <y>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Sorted, duplicate-free point sequence; the input of the monotone chain.
///
/// Invariant: strictly increasing under `Point`'s lexicographic order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    pts: Vec<Point>,
}

impl PointSet {
    /// Dedupe by exact equality and sort ascending.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut pts: Vec<Point> = points.into_iter().collect();
        pts.sort_unstable();
        pts.dedup();
        Self { pts }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.pts.binary_search(p).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_x_then_y() {
        assert!(Point::new(0, 9) < Point::new(1, -9));
        assert!(Point::new(1, 2) < Point::new(1, 3));
        assert_eq!(Point::new(-3, 4).to_string(), "-3 4");
    }

    #[test]
    fn point_set_sorts_and_dedups() {
        let s = PointSet::from_points([
            Point::new(2, 2),
            Point::new(0, 1),
            Point::new(2, 2),
            Point::new(0, 0),
            Point::new(0, 1),
        ]);
        assert_eq!(
            s.as_slice(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(2, 2)]
        );
        assert!(s.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(s.contains(&Point::new(0, 1)));
        assert!(!s.contains(&Point::new(1, 1)));
    }
}
