//! Dual ordering of a point set (by x and by y).
//!
//! Orderings are index vectors into the caller's point slice; indices give
//! duplicate points an identity so later splits can keep each one on exactly
//! one side.

use std::cmp::Ordering;

use crate::geom2::Point;

/// Stable sort of all indices by x and by y (ascending). Ties keep input order.
pub fn sort_by_xy(points: &[Point]) -> (Vec<usize>, Vec<usize>) {
    let mut by_x: Vec<usize> = (0..points.len()).collect();
    let mut by_y = by_x.clone();
    // `sort_by` is stable.
    by_x.sort_by(|&a, &b| cmp_coord(points[a].x, points[b].x));
    by_y.sort_by(|&a, &b| cmp_coord(points[a].y, points[b].y));
    (by_x, by_y)
}

#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Materialize an ordering as points.
pub fn resolve(points: &[Point], ordering: &[usize]) -> Vec<Point> {
    ordering.iter().map(|&i| points[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sorts_both_axes() {
        let pts = vec![
            vector![3.0, 1.0],
            vector![1.0, 2.0],
            vector![2.0, 0.0],
        ];
        let (bx, by) = sort_by_xy(&pts);
        assert_eq!(bx, vec![1, 2, 0]);
        assert_eq!(by, vec![2, 0, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let pts = vec![
            vector![1.0, 5.0],
            vector![0.0, 5.0],
            vector![1.0, 4.0],
            vector![1.0, 5.0],
        ];
        let (bx, by) = sort_by_xy(&pts);
        assert_eq!(bx, vec![1, 0, 2, 3]);
        assert_eq!(by, vec![2, 0, 1, 3]);
    }

    #[test]
    fn empty_input() {
        let (bx, by) = sort_by_xy(&[]);
        assert!(bx.is_empty() && by.is_empty());
    }
}
