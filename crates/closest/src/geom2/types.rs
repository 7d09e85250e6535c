//! Basic 2D types for the closest-pair search.
//!
//! - `Point`: plain value type, no identity beyond its coordinates.
//! - `ClosestPair`: best pair found so far plus its distance; the empty pair
//!   carries `+inf` so that any real pair compares smaller.
//!
//! Code cross-refs: `solver::closest_pair`, `strip::scan_strip`

use nalgebra::Vector2;

/// A point in the plane. Duplicates are legal.
pub type Point = Vector2<f64>;

/// Two points forming a candidate pair.
pub type PointPair = (Point, Point);

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Result of a closest-pair search on some subset.
///
/// Invariants:
/// - `pair.is_none()` iff `dist == f64::INFINITY`.
/// - Otherwise `dist == distance(pair.0, pair.1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub pair: Option<PointPair>,
    pub dist: f64,
}

impl Default for ClosestPair {
    fn default() -> Self {
        Self::none()
    }
}

impl ClosestPair {
    /// No pair exists (fewer than two points).
    #[inline]
    pub fn none() -> Self {
        Self {
            pair: None,
            dist: f64::INFINITY,
        }
    }

    #[inline]
    pub fn of(a: Point, b: Point) -> Self {
        Self {
            pair: Some((a, b)),
            dist: distance(a, b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pair.is_none()
    }

    /// Smaller of two results; `left` wins ties.
    #[inline]
    pub fn closer(left: Self, right: Self) -> Self {
        if left.dist <= right.dist {
            left
        } else {
            right
        }
    }

    /// Replace `self` with `(a, b)` if that pair is strictly closer.
    #[inline]
    pub fn offer(&mut self, a: Point, b: Point) -> bool {
        let d = distance(a, b);
        if d < self.dist {
            *self = Self {
                pair: Some((a, b)),
                dist: d,
            };
            true
        } else {
            false
        }
    }
}
