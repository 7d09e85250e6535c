//! Milestones and the draw directives handed to a `Renderer`.
//!
//! The core never draws; it describes what a view should show at each pause.

use std::sync::mpsc::Sender;

use crate::geom2::{Point, PointPair};

/// Structured drawing instructions for the host's renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawDirective {
    /// Idle view: every point, the current closest pair highlighted.
    ShowDefault {
        points: Vec<Point>,
        closest: Option<PointPair>,
    },
    /// Points labelled by their rank in `ordered`.
    ShowSorted { ordered: Vec<Point> },
    /// Vertical cut at `median_x` with a highlighted subset.
    ShowPartition {
        median_x: f64,
        highlighted: Vec<Point>,
    },
    /// Pairs joined by a segment (empty results are omitted).
    ShowClosest { pairs: Vec<PointPair> },
    /// Band of half-width `half_width` around `median_x`, the best pair so far,
    /// and the comparisons made from `focus` (if scanning).
    ShowStrip {
        half_width: f64,
        median_x: f64,
        best: Option<PointPair>,
        focus: Option<Point>,
        compared: Vec<Point>,
    },
}

/// Named pause points of a stepped run, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneKind {
    SortedByX,
    SortedByY,
    Median,
    LeftPartition,
    RightPartition,
    LeftClosest,
    BothClosest,
    StripIntro,
    StripBuilt,
    ScanIntro,
    /// One per outer strip index.
    StripProbe { index: usize },
    Result,
}

impl MilestoneKind {
    /// Narration shown next to the drawing.
    pub fn caption(&self) -> &'static str {
        match self {
            MilestoneKind::SortedByX => "Sort the points by x coordinate.",
            MilestoneKind::SortedByY => "Sort the points by y coordinate as well.",
            MilestoneKind::Median => "Take the median x value as the cut line.",
            MilestoneKind::LeftPartition => "Points left of the cut form the left half.",
            MilestoneKind::RightPartition => "Points right of the cut form the right half.",
            MilestoneKind::LeftClosest => "Solve the left half recursively.",
            MilestoneKind::BothClosest => "Solve the right half recursively.",
            MilestoneKind::StripIntro => "A closer pair may still cross the cut line.",
            MilestoneKind::StripBuilt => {
                "Keep the points closer to the cut than the best distance so far."
            }
            MilestoneKind::ScanIntro => {
                "Walk the strip by increasing y, comparing each point with the next few."
            }
            MilestoneKind::StripProbe { .. } => "Compare the focus point with its successors.",
            MilestoneKind::Result => "This is the closest pair of the whole set.",
        }
    }
}

/// One pause of a stepped run.
#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub directive: DrawDirective,
}

impl Milestone {
    #[inline]
    pub fn new(kind: MilestoneKind, directive: DrawDirective) -> Self {
        Self { kind, directive }
    }

    #[inline]
    pub fn caption(&self) -> &'static str {
        self.kind.caption()
    }
}

/// Receives a milestone right before the run pauses on it.
pub trait Renderer {
    fn render(&mut self, milestone: &Milestone);
}

impl<F: FnMut(&Milestone)> Renderer for F {
    fn render(&mut self, milestone: &Milestone) {
        self(milestone)
    }
}

/// Forwards milestones to another thread (typically the host's UI loop).
#[derive(Clone, Debug)]
pub struct ChannelRenderer {
    tx: Sender<Milestone>,
}

impl ChannelRenderer {
    pub fn new(tx: Sender<Milestone>) -> Self {
        Self { tx }
    }
}

impl Renderer for ChannelRenderer {
    fn render(&mut self, milestone: &Milestone) {
        if self.tx.send(milestone.clone()).is_err() {
            tracing::warn!(kind = ?milestone.kind, "milestone receiver dropped");
        }
    }
}
