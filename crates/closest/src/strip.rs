//! Strip construction and the bounded-window strip scan.
//!
//! Any pair straddling the cut with distance below `best` has both points
//! within `best` of the median in x. Filtering the by-y ordering keeps the
//! strip sorted by y, and the packing argument bounds how many strip
//! successors can lie within `best` of a point, so each point is compared
//! with a fixed number `window` of successors.

use crate::geom2::{distance, ClosestPair, Point};

/// Strip points with `|x - median_x| < half_width`, in the order of `by_y`.
pub fn build_strip(points: &[Point], by_y: &[usize], median_x: f64, half_width: f64) -> Vec<usize> {
    by_y.iter()
        .copied()
        .filter(|&i| (points[i].x - median_x).abs() < half_width)
        .collect()
}

/// One outer step of the scan: the focus point, the successors it was
/// compared with, and the best pair after those comparisons.
#[derive(Clone, Copy, Debug)]
pub struct StripProbe<'a> {
    pub index: usize,
    pub focus: usize,
    pub compared: &'a [usize],
    pub best: &'a ClosestPair,
}

/// Compare each strip point with its next `window` successors and return the
/// (possibly improved) best pair.
///
/// `on_probe` runs once per outer index, after that index's comparisons. An
/// error from it aborts the scan and is returned as is.
pub fn scan_strip<E, F>(
    points: &[Point],
    strip: &[usize],
    mut best: ClosestPair,
    window: usize,
    mut on_probe: F,
) -> Result<ClosestPair, E>
where
    F: FnMut(StripProbe<'_>) -> Result<(), E>,
{
    let n = strip.len();
    for i in 0..n {
        let a = points[strip[i]];
        let last = i.saturating_add(window).min(n.saturating_sub(1));
        let compared = if i < last { &strip[i + 1..=last] } else { &strip[..0] };
        for &j in compared {
            let b = points[j];
            if distance(a, b) < best.dist {
                best = ClosestPair::of(a, b);
            }
        }
        on_probe(StripProbe {
            index: i,
            focus: strip[i],
            compared,
            best: &best,
        })?;
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::sort_by_xy;
    use nalgebra::vector;
    use std::convert::Infallible;

    #[test]
    fn strip_filters_by_x_distance_and_keeps_y_order() {
        let p = vec![
            vector![0.0, 5.0],
            vector![4.5, 1.0],
            vector![5.5, 3.0],
            vector![10.0, 0.0],
            vector![5.0, 2.0],
        ];
        let (_, by) = sort_by_xy(&p);
        let s = build_strip(&p, &by, 5.0, 1.0);
        assert_eq!(s, vec![1, 4, 2]);
        for &i in &s {
            assert!((p[i].x - 5.0).abs() < 1.0);
        }
        // Strict inequality: exactly half_width away is excluded.
        assert!(build_strip(&p, &by, 5.0, 0.5).len() == 1);
    }

    #[test]
    fn scan_finds_crossing_pair_and_reports_each_index() {
        let p = vec![
            vector![4.9, 0.0],
            vector![5.1, 0.1],
            vector![4.0, 3.0],
        ];
        let strip = vec![0, 1, 2];
        let mut seen = Vec::new();
        let best = scan_strip::<Infallible, _>(&p, &strip, ClosestPair::none(), 8, |probe| {
            seen.push((probe.index, probe.focus, probe.compared.to_vec()));
            Ok(())
        })
        .unwrap();
        assert_eq!(best.pair, Some((p[0], p[1])));
        assert_eq!(
            seen,
            vec![(0, 0, vec![1, 2]), (1, 1, vec![2]), (2, 2, vec![])]
        );
    }

    #[test]
    fn window_limits_comparisons() {
        let p: Vec<Point> = (0..12).map(|k| vector![0.0, k as f64]).collect();
        let strip: Vec<usize> = (0..12).collect();
        let mut widths = Vec::new();
        scan_strip::<Infallible, _>(&p, &strip, ClosestPair::none(), 3, |probe| {
            widths.push(probe.compared.len());
            Ok(())
        })
        .unwrap();
        assert_eq!(widths, vec![3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 0]);
    }

    #[test]
    fn probe_error_aborts_scan() {
        let p: Vec<Point> = (0..5).map(|k| vector![0.0, k as f64]).collect();
        let strip: Vec<usize> = (0..5).collect();
        let mut calls = 0;
        let out = scan_strip(&p, &strip, ClosestPair::none(), 8, |_| {
            calls += 1;
            if calls == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(out, Err("stop"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn unbounded_window_compares_all_successors() {
        let p = vec![vector![0.0, 0.0], vector![2.0, 5.0], vector![1.0, 0.0]];
        let strip = vec![0, 2, 1];
        let mut widths = Vec::new();
        let best = scan_strip::<Infallible, _>(&p, &strip, ClosestPair::none(), usize::MAX, |probe| {
            widths.push(probe.compared.len());
            Ok(())
        })
        .unwrap();
        assert_eq!(widths, vec![2, 1, 0]);
        assert_eq!(best.dist, 1.0);
    }

    #[test]
    fn no_improvement_keeps_incoming_best() {
        let p = vec![vector![0.0, 0.0], vector![0.0, 10.0]];
        let incoming = ClosestPair::of(vector![100.0, 0.0], vector![100.0, 1.0]);
        let out = scan_strip::<Infallible, _>(&p, &[0, 1], incoming, 8, |_| Ok(())).unwrap();
        assert_eq!(out, incoming);
    }
}
