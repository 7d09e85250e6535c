use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use closest::api::{
    closest_pair, closest_pair_brute_force, MedianPolicy, SolverCfg, DEFAULT_WINDOW,
};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod input;
mod provenance;
mod session;

use input::InputArgs;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of 2D points: silent solve and stepped walkthrough")]
struct Cmd {
    /// Log debug events (milestones, recomputations) to stderr
    #[arg(long)]
    verbose: bool,

    #[command(flatten)]
    solver: SolverArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct SolverArgs {
    /// Strip successors compared per point
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    window: usize,
    /// Re-check interval of a paused run, in milliseconds
    #[arg(long, default_value_t = 50)]
    poll_ms: u64,
    /// Assignment of points lying exactly on the median x
    #[arg(long, value_enum, default_value_t = Median::Drop)]
    median: Median,
}

#[derive(Clone, Copy, ValueEnum)]
enum Median {
    /// Drop median points from both halves (classical demo)
    Drop,
    /// Split at the median index; nothing is dropped
    Rank,
}

impl SolverArgs {
    fn cfg(&self) -> SolverCfg {
        SolverCfg {
            window: self.window,
            poll_interval: Duration::from_millis(self.poll_ms),
            median: match self.median {
                Median::Drop => MedianPolicy::DropAtMedian,
                Median::Rank => MedianPolicy::SplitByRank,
            },
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the closest pair silently and print it as JSON
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Also run the O(n²) brute force and report agreement
        #[arg(long)]
        check: bool,
    },
    /// Walk through the algorithm milestone by milestone (Enter advances, q quits)
    Demo {
        #[command(flatten)]
        input: InputArgs,
        /// Advance automatically instead of waiting for Enter
        #[arg(long)]
        auto: bool,
    },
    /// Read `x y` lines from stdin, recomputing after each point
    Session,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = cmd.solver.cfg();
    match cmd.action {
        Action::Solve { input: source, check } => solve(&source, cfg, check),
        Action::Demo { input: source, auto } => demo::run(input::load(&source)?, cfg, auto),
        Action::Session => session::run(cfg),
        Action::Report => report(cfg),
    }
}

/// JSON shape of a solve result.
#[derive(Serialize)]
struct SolveReport {
    n: usize,
    pair: Option<[[f64; 2]; 2]>,
    /// `None` when fewer than two points exist.
    dist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brute_force_dist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agrees: Option<bool>,
}

fn solve(source: &InputArgs, cfg: SolverCfg, check: bool) -> Result<()> {
    let points = input::load(source)?;
    tracing::info!(n = points.len(), window = cfg.window, "solve");
    let best = closest_pair(&points, cfg);
    let mut out = SolveReport {
        n: points.len(),
        pair: best.pair.map(|(a, b)| [[a.x, a.y], [b.x, b.y]]),
        dist: finite(best.dist),
        brute_force_dist: None,
        agrees: None,
    };
    if check {
        let oracle = closest_pair_brute_force(&points);
        out.brute_force_dist = finite(oracle.dist);
        out.agrees = Some(oracle.dist == best.dist);
        if oracle.dist != best.dist {
            tracing::warn!(fast = best.dist, brute = oracle.dist, "solver disagrees with brute force");
        }
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn finite(d: f64) -> Option<f64> {
    d.is_finite().then_some(d)
}

fn report(cfg: SolverCfg) -> Result<()> {
    let obj = provenance::document(&cfg);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
