//! Property-based tests for move reversibility, FEN round-tripping, and
//! commander safety over random legal-move walks from the starting
//! position.

use cotulenh_engine::Engine;
use proptest::prelude::*;

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// apply() followed by undo() restores the exact FEN at every step of
    /// a random legal-move walk.
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut engine = Engine::new_game(None).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial_fen = engine.fen();

        let mut applied = 0;
        for _ in 0..num_moves {
            let moves = engine.legal_moves(None);
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            let mv = moves.get(idx).cloned().unwrap();
            engine.apply(mv).expect("move drawn from legal_moves must apply");
            applied += 1;
        }

        for _ in 0..applied {
            engine.undo();
        }

        prop_assert_eq!(engine.fen(), initial_fen);
    }

    /// A position's FEN round-trips through a fresh `Engine` after any
    /// number of random legal moves.
    #[test]
    fn prop_fen_roundtrip_after_random_walk(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut engine = Engine::new_game(None).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = engine.legal_moves(None);
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            let mv = moves.get(idx).cloned().unwrap();
            engine.apply(mv).expect("move drawn from legal_moves must apply");
        }

        let fen = engine.fen();
        let restored = Engine::new_game(Some(&fen)).unwrap();
        prop_assert_eq!(restored.fen(), fen);
    }

    /// No legal move ever leaves the mover's own commander in check.
    #[test]
    fn prop_legal_moves_never_self_check(seed in seed_strategy()) {
        use rand::prelude::*;

        let mut engine = Engine::new_game(None).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = engine.legal_moves(None);
            if moves.is_empty() {
                break;
            }

            let mover = engine.turn();
            for mv in moves.iter() {
                engine.apply(mv.clone()).expect("move drawn from legal_moves must apply");
                prop_assert!(!engine.is_in_check(mover), "legal move left its own commander in check: {mv}");
                engine.undo();
            }

            let idx = rng.gen_range(0..moves.len());
            let mv = moves.get(idx).cloned().unwrap();
            engine.apply(mv).expect("move drawn from legal_moves must apply");
        }
    }

    /// Move generation is deterministic: the same position always yields
    /// the same ordered legal-move list.
    #[test]
    fn prop_move_generation_is_deterministic(seed in seed_strategy(), num_moves in 0..15usize) {
        use rand::prelude::*;

        let mut engine = Engine::new_game(None).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = engine.legal_moves(None);
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            let mv = moves.get(idx).cloned().unwrap();
            engine.apply(mv).expect("move drawn from legal_moves must apply");
        }

        let fen = engine.fen();
        let mut a = Engine::new_game(Some(&fen)).unwrap();
        let mut b = Engine::new_game(Some(&fen)).unwrap();
        let moves_a: Vec<String> = a.legal_moves(None).iter().map(|m| m.to_string()).collect();
        let moves_b: Vec<String> = b.legal_moves(None).iter().map(|m| m.to_string()).collect();
        prop_assert_eq!(moves_a, moves_b);
    }
}
