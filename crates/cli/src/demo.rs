//! Text host for stepped runs: prints each milestone and advances on Enter.

use anyhow::Result;
use closest::api::{
    ChannelRenderer, ClosestPair, DrawDirective, Milestone, Point, Session, SolverCfg, StepError,
};
use std::io::{self, BufRead, Write};
use std::sync::mpsc;

pub fn run(points: Vec<Point>, cfg: SolverCfg, auto: bool) -> Result<()> {
    let mut session = Session::new(cfg);
    for p in &points {
        session.add_point(p.x, p.y)?;
    }
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (tx, rx) = mpsc::channel::<Milestone>();
    let run = session.start_stepped_run(ChannelRenderer::new(tx))?;

    for (k, m) in rx.iter().enumerate() {
        print_milestone(k, &m);
        if auto {
            run.advance();
            continue;
        }
        print!("    (enter = next, q = quit) ");
        io::stdout().flush()?;
        match lines.next() {
            Some(Ok(line)) if line.trim() == "q" => {
                run.cancel();
                break;
            }
            Some(Ok(_)) => run.advance(),
            Some(Err(e)) => {
                run.cancel();
                return Err(e.into());
            }
            None => {
                run.cancel();
                break;
            }
        }
    }

    match run.join() {
        Ok(best) => {
            println!("result: {}", describe_pair(&best));
            Ok(())
        }
        Err(StepError::Cancelled) => {
            tracing::info!("demo cancelled");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn print_milestone(k: usize, m: &Milestone) {
    println!("[{k:>3}] {}", m.caption());
    println!("      {}", describe(&m.directive));
}

pub fn describe_pair(r: &ClosestPair) -> String {
    match r.pair {
        Some((a, b)) => format!("{} - {} (dist {:.4})", pt(a), pt(b), r.dist),
        None => "no pair (fewer than two points)".to_string(),
    }
}

fn describe(d: &DrawDirective) -> String {
    match d {
        DrawDirective::ShowDefault { points, closest } => format!(
            "{} points, closest {}",
            points.len(),
            closest.map_or("none".to_string(), |(a, b)| format!("{} - {}", pt(a), pt(b)))
        ),
        DrawDirective::ShowSorted { ordered } => format!("order: {}", list(ordered)),
        DrawDirective::ShowPartition {
            median_x,
            highlighted,
        } => format!("cut x = {median_x:.2}; highlighted: {}", list(highlighted)),
        DrawDirective::ShowClosest { pairs } => {
            let parts: Vec<String> = pairs
                .iter()
                .map(|(a, b)| format!("{} - {}", pt(*a), pt(*b)))
                .collect();
            format!("pairs: [{}]", parts.join(", "))
        }
        DrawDirective::ShowStrip {
            half_width,
            median_x,
            best,
            focus,
            compared,
        } => {
            let mut s = format!("strip x = {median_x:.2} ± {half_width:.2}");
            if let Some((a, b)) = best {
                s.push_str(&format!("; best {} - {}", pt(*a), pt(*b)));
            }
            if let Some(f) = focus {
                s.push_str(&format!("; {} vs {}", pt(*f), list(compared)));
            }
            s
        }
    }
}

fn pt(p: Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

fn list(points: &[Point]) -> String {
    let parts: Vec<String> = points.iter().map(|p| pt(*p)).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_strip_probe() {
        let d = DrawDirective::ShowStrip {
            half_width: 1.5,
            median_x: 5.0,
            best: Some((Point::new(0.0, 0.0), Point::new(1.0, 1.0))),
            focus: Some(Point::new(5.0, 5.0)),
            compared: vec![Point::new(4.5, 6.0)],
        };
        assert_eq!(
            describe(&d),
            "strip x = 5.00 ± 1.50; best (0.00, 0.00) - (1.00, 1.00); (5.00, 5.00) vs [(4.50, 6.00)]"
        );
    }

    #[test]
    fn describes_empty_result() {
        assert_eq!(
            describe_pair(&ClosestPair::none()),
            "no pair (fewer than two points)"
        );
    }
}
