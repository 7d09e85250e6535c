//! Stepped run on a small random cloud, advanced automatically.
//!
//! Purpose
//! - Show the milestone stream a renderer receives, without any UI.
//! - Cross-check that the stepped answer equals the silent one.
//!
//! Run: `cargo run -p closest --example stepped_demo`

use std::sync::mpsc;
use std::thread;

use closest::prelude::*;

fn main() {
    let mut session = Session::default();
    let cloud = draw_points(
        CloudCfg {
            count: 12,
            ..Default::default()
        },
        ReplayToken { seed: 7, index: 0 },
    );
    for p in &cloud {
        session
            .add_point(p.x, p.y)
            .expect("session accepts points while idle");
    }

    let (tx, rx) = mpsc::channel();
    let run = session
        .start_stepped_run(ChannelRenderer::new(tx))
        .expect("no run in progress");
    let signal = run.signal().clone();
    let printer = thread::spawn(move || {
        for (k, m) in rx.into_iter().enumerate() {
            println!("[{k:>3}] {:?}: {}", m.kind, m.caption());
            signal.advance();
        }
    });

    let stepped = run.join().expect("run completes");
    printer.join().expect("printer thread");
    let silent = session.closest();
    println!("stepped: {:?} dist={}", stepped.pair, stepped.dist);
    println!("silent:  {:?} dist={}", silent.pair, silent.dist);
    assert_eq!(stepped.dist, silent.dist);
}
