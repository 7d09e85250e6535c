//! Divide-and-conquer closest pair with an optional pacing seam.
//!
//! Per call on `(by_x, by_y)`: pick the median x at index `n / 2`, split both
//! orderings, solve left fully then right, keep the closer result (left wins
//! ties), then scan the strip around the median for crossing pairs.
//!
//! The recursion is generic over `Pacer`. `Silent` builds no directives and
//! cannot fail; a `StepController` pauses at each milestone. Child calls
//! always run silently, so only the top-level call is observable.
//!
//! Code cross-refs: `sort::sort_by_xy`, `partition`, `strip`, `step::StepController`

use std::convert::Infallible;

use crate::config::{MedianPolicy, SolverCfg};
use crate::geom2::{ClosestPair, Point, PointPair};
use crate::partition::{partition_both, split_by_rank, Halves};
use crate::sort::{resolve, sort_by_xy};
use crate::step::{DrawDirective, Milestone, MilestoneKind};
use crate::strip::{build_strip, scan_strip};

/// Decides whether (and how) the solver pauses at milestones.
pub trait Pacer {
    type Error;

    /// When false, milestones are never built or passed to `pause`.
    fn is_stepped(&self) -> bool;

    fn pause(&mut self, milestone: Milestone) -> Result<(), Self::Error>;
}

/// Pacer for plain computation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Pacer for Silent {
    type Error = Infallible;

    #[inline]
    fn is_stepped(&self) -> bool {
        false
    }

    #[inline]
    fn pause(&mut self, _milestone: Milestone) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Closest pair of `points` (silent). Fewer than two points yields `ClosestPair::none()`.
pub fn closest_pair(points: &[Point], cfg: SolverCfg) -> ClosestPair {
    match solve_paced(points, cfg, &mut Silent) {
        Ok(best) => best,
        Err(never) => match never {},
    }
}

/// Sort, then run the recursion with `pacer` driving the top-level milestones.
pub fn solve_paced<P: Pacer>(
    points: &[Point],
    cfg: SolverCfg,
    pacer: &mut P,
) -> Result<ClosestPair, P::Error> {
    let (by_x, by_y) = sort_by_xy(points);
    if pacer.is_stepped() {
        pacer.pause(Milestone::new(
            MilestoneKind::SortedByX,
            DrawDirective::ShowSorted {
                ordered: resolve(points, &by_x),
            },
        ))?;
        pacer.pause(Milestone::new(
            MilestoneKind::SortedByY,
            DrawDirective::ShowSorted {
                ordered: resolve(points, &by_y),
            },
        ))?;
    }
    let best = Runner { points, cfg }.solve(&by_x, &by_y, pacer)?;
    tracing::trace!(n = points.len(), dist = best.dist, "closest pair");
    Ok(best)
}

/// O(n²) reference used as a cross-check oracle.
pub fn closest_pair_brute_force(points: &[Point]) -> ClosestPair {
    let mut best = ClosestPair::none();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            best.offer(a, b);
        }
    }
    best
}

/// Recursion context shared by every level.
struct Runner<'a> {
    points: &'a [Point],
    cfg: SolverCfg,
}

impl Runner<'_> {
    fn solve_silent(&self, by_x: &[usize], by_y: &[usize]) -> ClosestPair {
        match self.solve(by_x, by_y, &mut Silent) {
            Ok(best) => best,
            Err(never) => match never {},
        }
    }

    fn split(&self, median_x: f64, by_x: &[usize], by_y: &[usize]) -> Halves {
        match self.cfg.median {
            MedianPolicy::DropAtMedian => partition_both(self.points, median_x, by_x, by_y),
            MedianPolicy::SplitByRank => {
                split_by_rank(by_x, by_y, by_x.len() / 2, self.points.len())
            }
        }
    }

    fn solve<P: Pacer>(
        &self,
        by_x: &[usize],
        by_y: &[usize],
        pacer: &mut P,
    ) -> Result<ClosestPair, P::Error> {
        let n = by_x.len();
        // A rank split cannot shrink a single point, so it bottoms out one level earlier.
        if n == 0 || (n == 1 && self.cfg.median == MedianPolicy::SplitByRank) {
            return Ok(ClosestPair::none());
        }
        let stepped = pacer.is_stepped();
        let pts = self.points;

        let median_x = pts[by_x[n / 2]].x;
        let halves = self.split(median_x, by_x, by_y);
        if stepped {
            for (kind, highlighted) in [
                (MilestoneKind::Median, Vec::new()),
                (MilestoneKind::LeftPartition, resolve(pts, &halves.left_by_x)),
                (MilestoneKind::RightPartition, resolve(pts, &halves.right_by_x)),
            ] {
                pacer.pause(Milestone::new(
                    kind,
                    DrawDirective::ShowPartition {
                        median_x,
                        highlighted,
                    },
                ))?;
            }
        }

        let left = self.solve_silent(&halves.left_by_x, &halves.left_by_y);
        let right = self.solve_silent(&halves.right_by_x, &halves.right_by_y);
        if stepped {
            pacer.pause(Milestone::new(
                MilestoneKind::LeftClosest,
                DrawDirective::ShowClosest {
                    pairs: pairs_of(&[left]),
                },
            ))?;
            pacer.pause(Milestone::new(
                MilestoneKind::BothClosest,
                DrawDirective::ShowClosest {
                    pairs: pairs_of(&[left, right]),
                },
            ))?;
        }

        let best = ClosestPair::closer(left, right);
        let half_width = best.dist;
        let strip = build_strip(pts, by_y, median_x, half_width);
        if stepped {
            pacer.pause(Milestone::new(
                MilestoneKind::StripIntro,
                DrawDirective::ShowClosest {
                    pairs: pairs_of(&[left, right]),
                },
            ))?;
            for kind in [MilestoneKind::StripBuilt, MilestoneKind::ScanIntro] {
                pacer.pause(Milestone::new(
                    kind,
                    DrawDirective::ShowStrip {
                        half_width,
                        median_x,
                        best: best.pair,
                        focus: None,
                        compared: Vec::new(),
                    },
                ))?;
            }
        }

        let best = scan_strip(pts, &strip, best, self.cfg.window, |probe| {
            if !stepped {
                return Ok(());
            }
            pacer.pause(Milestone::new(
                MilestoneKind::StripProbe { index: probe.index },
                DrawDirective::ShowStrip {
                    half_width,
                    median_x,
                    best: probe.best.pair,
                    focus: Some(pts[probe.focus]),
                    compared: resolve(pts, probe.compared),
                },
            ))
        })?;

        if stepped {
            pacer.pause(Milestone::new(
                MilestoneKind::Result,
                DrawDirective::ShowClosest {
                    pairs: pairs_of(&[best]),
                },
            ))?;
        }
        Ok(best)
    }
}

fn pairs_of(results: &[ClosestPair]) -> Vec<PointPair> {
    results.iter().filter_map(|r| r.pair).collect()
}
