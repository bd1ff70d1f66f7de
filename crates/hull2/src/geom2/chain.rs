//! Andrew's monotone chain over integer points.
//!
//! Conventions
//! - Output is counterclockwise, starts at the lexicographically smallest
//!   point and has no repeated closing vertex.
//! - Pruning pops on `cross <= 0`: collinear boundary points are dropped, only
//!   the extreme endpoints of a straight edge survive. Keep it that way; the
//!   collinear cases below depend on it.

use super::types::{Point, PointSet};
use super::util::{turn, Turn};

/// Convex hull vertices, CCW from the smallest point.
///
/// Invariants:
/// - Subset of the `PointSet` it was built from.
/// - Every point of that set lies on or inside the polygon.
/// - No three cyclically consecutive vertices are collinear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    /// Run the monotone chain on an already sorted, deduplicated set.
    pub fn from_point_set(set: &PointSet) -> Self {
        let pts = set.as_slice();
        if pts.len() <= 1 {
            return Self {
                vertices: pts.to_vec(),
            };
        }
        let mut lower = half_chain(pts.iter().copied(), pts.len());
        let mut upper = half_chain(pts.iter().rev().copied(), pts.len());
        lower.pop();
        upper.pop();
        lower.extend(upper);
        Self { vertices: lower }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed cycle of edges `(v[k], v[k+1 mod n])`; empty for fewer than 2 vertices.
    ///
    /// A two-vertex hull yields the segment twice (there and back).
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.vertices.len() >= 2 {
            self.vertices.len()
        } else {
            0
        };
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// On-or-inside test, exact.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [v] => *v == p,
            [a, b] => turn(*a, *b, p) == Turn::Collinear && within_box(*a, *b, p),
            _ => self.edges().all(|(a, b)| turn(a, b, p) != Turn::Clockwise),
        }
    }

    /// Every cyclic triple turns strictly left. Trivially true below 3 vertices.
    pub fn is_strictly_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| {
            turn(
                self.vertices[k],
                self.vertices[(k + 1) % n],
                self.vertices[(k + 2) % n],
            )
            .is_left()
        })
    }
}

/// Convex hull of an arbitrary multiset of points.
///
/// Total: empty input gives an empty hull, a single point is its own hull and
/// two distinct points give both endpoints.
pub fn convex_hull(points: &[Point]) -> Hull {
    Hull::from_point_set(&PointSet::from_points(points.iter().copied()))
}

/// One monotone half: keep only strict left turns.
fn half_chain<I>(pts: I, cap: usize) -> Vec<Point>
where
    I: Iterator<Item = Point>,
{
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in pts {
        while chain.len() >= 2 && !turn(chain[chain.len() - 2], chain[chain.len() - 1], p).is_left()
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

#[inline]
fn within_box(a: Point, b: Point, p: Point) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}
