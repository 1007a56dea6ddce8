//! Apply a sequence of SAN moves to a position and report the resulting
//! side to move, status, legal move count, and FEN.
//!
//! ```text
//! status_checker [--fen <fen>] <move1> <move2> ...
//! ```
//! Defaults to the starting position when `--fen` is omitted.

use std::env;

use cotulenh_engine::Engine;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut fen_arg: Option<String> = None;
    let mut moves: Vec<String> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" => {
                i += 1;
                if let Some(f) = args.get(i) {
                    fen_arg = Some(f.clone());
                }
            }
            other => moves.push(other.to_string()),
        }
        i += 1;
    }

    let mut engine = Engine::new_game(fen_arg.as_deref()).expect("invalid FEN");
    for san in &moves {
        match engine.apply(san.as_str()) {
            Ok(result) => println!("applied {san} -> {:?}", result.status),
            Err(e) => {
                eprintln!("failed to apply '{san}': {e}");
                std::process::exit(1);
            }
        }
    }

    let status = engine.status();
    let legal = engine.legal_moves(None);
    println!(
        "side_to_move: {}",
        match engine.turn() {
            cotulenh_engine::Color::Red => "red",
            cotulenh_engine::Color::Blue => "blue",
        }
    );
    println!("status: {status:?}");
    println!("outcome: {:?}", engine.outcome());
    println!("legal_moves: {}", legal.len());
    println!("fen: {}", engine.fen());
}
