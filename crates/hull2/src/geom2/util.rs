use std::cmp::Ordering;

use super::types::Point;

/// Orientation of the ordered triple `(o, a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Turn {
    /// `true` iff `cross(o, a, b) > 0`.
    #[inline]
    pub fn is_left(self) -> bool {
        self == Turn::CounterClockwise
    }
}

#[inline]
fn deltas(o: Point, a: Point, b: Point) -> (i128, i128, i128, i128) {
    (
        i128::from(a.x) - i128::from(o.x),
        i128::from(a.y) - i128::from(o.y),
        i128::from(b.x) - i128::from(o.x),
        i128::from(b.y) - i128::from(o.y),
    )
}

/// Product of two deltas as (sign, magnitude).
///
/// Deltas of `i64` coordinates are bounded by `2^64 - 1` in magnitude, so the
/// product magnitude always fits in `u128` while the signed product may not
/// fit in `i128`.
#[inline]
fn wide_mul(p: i128, q: i128) -> (Ordering, u128) {
    let sign = p.signum() * q.signum();
    (sign.cmp(&0), p.unsigned_abs() * q.unsigned_abs())
}

#[inline]
fn cmp_wide(lhs: (Ordering, u128), rhs: (Ordering, u128)) -> Ordering {
    match lhs.0.cmp(&rhs.0) {
        Ordering::Equal => match lhs.0 {
            Ordering::Less => rhs.1.cmp(&lhs.1),
            _ => lhs.1.cmp(&rhs.1),
        },
        o => o,
    }
}

/// Exact sign of `(a.x − o.x)·(b.y − o.y) − (a.y − o.y)·(b.x − o.x)`.
///
/// Valid for every `i64` coordinate; no floating point and no overflow.
pub fn turn(o: Point, a: Point, b: Point) -> Turn {
    let (ax, ay, bx, by) = deltas(o, a, b);
    match cmp_wide(wide_mul(ax, by), wide_mul(ay, bx)) {
        Ordering::Greater => Turn::CounterClockwise,
        Ordering::Equal => Turn::Collinear,
        Ordering::Less => Turn::Clockwise,
    }
}

/// Signed cross product, or `None` if it does not fit in `i128`.
pub fn cross_checked(o: Point, a: Point, b: Point) -> Option<i128> {
    let (ax, ay, bx, by) = deltas(o, a, b);
    ax.checked_mul(by)?.checked_sub(ay.checked_mul(bx)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_turns_match_cross() {
        let o = Point::new(0, 0);
        assert_eq!(turn(o, Point::new(1, 0), Point::new(0, 1)), Turn::CounterClockwise);
        assert_eq!(turn(o, Point::new(0, 1), Point::new(1, 0)), Turn::Clockwise);
        assert_eq!(turn(o, Point::new(1, 1), Point::new(2, 2)), Turn::Collinear);
        assert_eq!(cross_checked(o, Point::new(1, 0), Point::new(0, 1)), Some(1));
        assert_eq!(cross_checked(o, Point::new(2, 3), Point::new(4, 5)), Some(-2));
    }

    #[test]
    fn extremes_do_not_overflow() {
        let lo = Point::new(i64::MIN, i64::MIN);
        let hi = Point::new(i64::MAX, i64::MAX);
        let left = Point::new(i64::MIN, i64::MAX);
        let right = Point::new(i64::MAX, i64::MIN);
        assert_eq!(turn(lo, hi, left), Turn::CounterClockwise);
        assert_eq!(turn(lo, hi, right), Turn::Clockwise);
        assert_eq!(turn(lo, Point::new(0, 0), hi), Turn::Collinear);
        // (2^64 - 1)^2 overflows i128; sign is still exact.
        assert_eq!(cross_checked(lo, hi, left), None);
    }

    #[test]
    fn near_collinear_at_large_scale() {
        // b is one unit above the line through o and a.
        let o = Point::new(-4_000_000_000_000_000_000, -3_000_000_000_000_000_000);
        let a = Point::new(4_000_000_000_000_000_000, 3_000_000_000_000_000_000);
        let b = Point::new(4_000_000_000_000_000_000, 3_000_000_000_000_000_001);
        let c = Point::new(4_000_000_000_000_000_000, 2_999_999_999_999_999_999);
        assert_eq!(turn(o, a, b), Turn::CounterClockwise);
        assert_eq!(turn(o, a, c), Turn::Clockwise);
    }
}
