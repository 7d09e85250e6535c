//! Splitting orderings around the median x.
//!
//! Two policies (see `MedianPolicy`):
//! - `partition`: value split; points exactly at the median are dropped from
//!   both sides. Each call shrinks the subset by at least the median point, so
//!   the recursion terminates even for a single point.
//! - `split_by_rank`: index split of the x-ordering at `mid`; the y-ordering is
//!   split by membership. Nothing is dropped, duplicates land on one side.
//!
//! Both are O(n) and preserve relative order.

use crate::geom2::Point;

/// Left/right sub-orderings for both axes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Halves {
    pub left_by_x: Vec<usize>,
    pub right_by_x: Vec<usize>,
    pub left_by_y: Vec<usize>,
    pub right_by_y: Vec<usize>,
}

/// Value split around `median_x`. Equal-to-median points go nowhere.
pub fn partition(points: &[Point], median_x: f64, ordering: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::with_capacity(ordering.len() / 2 + 1);
    let mut right = Vec::with_capacity(ordering.len() / 2 + 1);
    for &i in ordering {
        let x = points[i].x;
        if x < median_x {
            left.push(i);
        } else if x > median_x {
            right.push(i);
        }
    }
    (left, right)
}

/// Apply `partition` with the same median to both orderings.
pub fn partition_both(points: &[Point], median_x: f64, by_x: &[usize], by_y: &[usize]) -> Halves {
    let (left_by_x, right_by_x) = partition(points, median_x, by_x);
    let (left_by_y, right_by_y) = partition(points, median_x, by_y);
    Halves {
        left_by_x,
        right_by_x,
        left_by_y,
        right_by_y,
    }
}

/// Rank split: `by_x[..mid]` left, `by_x[mid..]` right; `by_y` follows membership.
///
/// `n_points` is the length of the underlying point slice (indices are `< n_points`).
pub fn split_by_rank(by_x: &[usize], by_y: &[usize], mid: usize, n_points: usize) -> Halves {
    let mid = mid.min(by_x.len());
    let mut in_left = vec![false; n_points];
    for &i in &by_x[..mid] {
        in_left[i] = true;
    }
    let (left_by_y, right_by_y): (Vec<usize>, Vec<usize>) =
        by_y.iter().copied().partition(|&i| in_left[i]);
    Halves {
        left_by_x: by_x[..mid].to_vec(),
        right_by_x: by_x[mid..].to_vec(),
        left_by_y,
        right_by_y,
    }
}
