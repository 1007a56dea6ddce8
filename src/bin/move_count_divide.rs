//! Perft-divide for CoTuLenh: enumerate root moves from a position and
//! report the subtree move count under each, plus the grand total.
//!
//! ```text
//! move_count_divide [--fen <fen>] <depth>
//! ```
//! Defaults to the starting position when `--fen` is omitted.

use std::env;
use std::time::Instant;

use cotulenh_engine::Engine;

fn perft(engine: &mut Engine, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = engine.legal_moves(None);
    let mut nodes = 0;
    for mv in moves.iter() {
        engine.apply(mv.clone()).expect("move drawn from legal_moves must apply");
        nodes += perft(engine, depth - 1);
        engine.undo();
    }
    nodes
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut fen_arg: Option<String> = None;
    let mut depth_arg: Option<u32> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" => {
                i += 1;
                fen_arg = args.get(i).cloned();
            }
            other => depth_arg = other.parse().ok(),
        }
        i += 1;
    }

    let depth = depth_arg.unwrap_or(3);
    let mut engine = Engine::new_game(fen_arg.as_deref()).expect("invalid FEN");

    println!("move count divide at depth {depth}");
    let start = Instant::now();
    let root_moves = engine.legal_moves(None);
    let mut total = 0u64;
    for mv in root_moves.iter() {
        engine.apply(mv.clone()).expect("move drawn from legal_moves must apply");
        let count = perft(&mut engine, depth - 1);
        engine.undo();
        println!("  {}{}: {}", mv.from, mv.to, count);
        total += count;
    }
    let elapsed = start.elapsed();
    println!("total: {total} in {elapsed:?}");
}
