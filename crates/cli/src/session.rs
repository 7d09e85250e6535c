//! Line-oriented interactive session over stdin.
//!
//! Commands: `x y` (or `x,y`) adds a point, `demo` replays the algorithm
//! with automatic advancing, `points` lists the set, `quit` exits.

use anyhow::Result;
use closest::api::{ChannelRenderer, Milestone, Session, SolverCfg};
use std::io::{self, BufRead};
use std::sync::mpsc;

use crate::demo::{describe_pair, print_milestone};

pub fn run(cfg: SolverCfg) -> Result<()> {
    let mut session = Session::new(cfg);
    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "points" => {
                for (i, p) in session.points().iter().enumerate() {
                    println!("{i:>4}: ({}, {})", p.x, p.y);
                }
            }
            "demo" => replay(&session)?,
            other => match parse_point(other) {
                Some((x, y)) => match session.add_point(x, y) {
                    Ok(best) => println!("closest: {}", describe_pair(best)),
                    Err(e) => tracing::warn!(error = %e, "point rejected"),
                },
                None => tracing::warn!(line = other, "expected `x y`, `demo`, `points`, or `quit`"),
            },
        }
    }
    Ok(())
}

fn replay(session: &Session) -> Result<()> {
    let (tx, rx) = mpsc::channel::<Milestone>();
    let run = session.start_stepped_run(ChannelRenderer::new(tx))?;
    for (k, m) in rx.iter().enumerate() {
        print_milestone(k, &m);
        run.advance();
    }
    let best = run.join()?;
    println!("result: {}", describe_pair(&best));
    Ok(())
}

fn parse_point(s: &str) -> Option<(f64, f64)> {
    let mut it = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let x = it.next()?.parse().ok()?;
    let y = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some((x, y))
}
