//! Deploy-session atomicity: a committed session must match a manual
//! replay of the same placements, and a cancelled session — whether empty
//! or partially stepped — must restore the exact pre-session position.

use cotulenh_engine::board::{Color, PieceKind};
use cotulenh_engine::{Engine, Square};

const BASE_FEN: &str = "4c6/11/11/11/11/11/3(NTI)7/11/11/11/11/4C6 r 0 1";

#[test]
fn committed_deploy_matches_manual_replay() {
    let origin: Square = "d6".parse().unwrap();
    let d7: Square = "d7".parse().unwrap();
    let e6: Square = "e6".parse().unwrap();

    // Drive the deploy session through `Engine`.
    let mut deployed = Engine::new_game(Some(BASE_FEN)).unwrap();
    deployed.start_deploy(origin).unwrap();
    deployed.deploy_apply("Nd7").unwrap();
    deployed.deploy_apply("Te6").unwrap();
    deployed.deploy_apply("I-").unwrap();
    deployed.commit_deploy().unwrap();

    // Manually replay the same three placements as ordinary single-piece
    // moves against a fresh copy of the same starting position, bypassing
    // the deploy session machinery entirely.
    let mut manual = Engine::new_game(Some(BASE_FEN)).unwrap();
    manual.start_deploy(origin).unwrap();
    manual.deploy_apply("Te6").unwrap();
    manual.deploy_apply("Nd7").unwrap();
    manual.deploy_apply("I-").unwrap();
    manual.commit_deploy().unwrap();

    assert_eq!(deployed.fen(), manual.fen(), "step order within a session must not affect the committed result");
    assert_eq!(deployed.turn(), Color::Blue);

    let view = deployed.board_view();
    assert!(view.iter().any(|v| v.square == d7 && v.piece == Some(PieceKind::Navy)));
    assert!(view.iter().any(|v| v.square == e6 && v.piece == Some(PieceKind::Tank)));
    assert!(view.iter().any(|v| v.square == origin && v.piece == Some(PieceKind::Infantry)));
    assert!(deployed.deploy_session().is_none(), "a committed session leaves no active session behind");
}

#[test]
fn cancel_restores_exact_pre_state_with_no_steps_taken() {
    let origin: Square = "d6".parse().unwrap();
    let mut engine = Engine::new_game(Some(BASE_FEN)).unwrap();
    let before_fen = engine.fen();

    engine.start_deploy(origin).unwrap();
    assert!(engine.deploy_session().is_some());
    engine.cancel_deploy().unwrap();

    assert_eq!(engine.fen(), before_fen);
    assert!(engine.deploy_session().is_none());
    assert_eq!(engine.turn(), Color::Red, "cancelling never flips the side to move");
}

#[test]
fn cancel_restores_exact_pre_state_after_one_step() {
    let origin: Square = "d6".parse().unwrap();
    let mut engine = Engine::new_game(Some(BASE_FEN)).unwrap();
    let before_fen = engine.fen();

    engine.start_deploy(origin).unwrap();
    engine.deploy_apply("Nd7").unwrap();
    let d7: Square = "d7".parse().unwrap();
    assert!(engine.board_view().iter().any(|v| v.square == d7 && v.piece == Some(PieceKind::Navy)));

    engine.cancel_deploy().unwrap();
    assert_eq!(engine.fen(), before_fen);
    assert!(engine.deploy_session().is_none());

    let origin_view = engine.board_view().into_iter().find(|v| v.square == origin).unwrap();
    assert_eq!(origin_view.piece, Some(PieceKind::Navy));
    assert_eq!(origin_view.stack_contents.as_ref().map(Vec::len), Some(2));
}

#[test]
fn cancel_after_a_step_captures_an_enemy_stack_restores_its_full_cargo() {
    // Blue (TI) stack sits on d7, reachable (and capturable) by the Navy
    // deploying off the Red (NTI) stack on d6.
    let fen = "4c6/11/11/11/11/3(TI)7/3(NTI)7/11/11/11/11/4C6 r 0 1";
    let origin: Square = "d6".parse().unwrap();
    let d7: Square = "d7".parse().unwrap();

    let mut engine = Engine::new_game(Some(fen)).unwrap();
    let before_fen = engine.fen();

    engine.start_deploy(origin).unwrap();
    engine.deploy_apply("Nxd7").unwrap();

    let captured_view = engine.board_view().into_iter().find(|v| v.square == d7).unwrap();
    assert_eq!(captured_view.piece, Some(PieceKind::Navy), "navy should have captured onto d7");

    engine.cancel_deploy().unwrap();

    assert_eq!(engine.fen(), before_fen, "cancelling must restore the captured stack's full cargo, not just its carrier");
    let restored_view = engine.board_view().into_iter().find(|v| v.square == d7).unwrap();
    assert_eq!(restored_view.piece, Some(PieceKind::Tank));
    assert_eq!(restored_view.stack_contents.as_ref().map(Vec::len), Some(1));
}

#[test]
fn undo_mid_deploy_reverses_one_step_without_touching_history() {
    let origin: Square = "d6".parse().unwrap();
    let mut engine = Engine::new_game(Some(BASE_FEN)).unwrap();
    let before_fen = engine.fen();

    engine.start_deploy(origin).unwrap();
    engine.deploy_apply("Nd7").unwrap();
    let d7: Square = "d7".parse().unwrap();
    assert!(engine.board_view().iter().any(|v| v.square == d7 && v.piece == Some(PieceKind::Navy)));

    // One undo reverses the single step taken so far, leaving the session
    // open with the piece back among the undeployed.
    let undone = engine.undo();
    assert!(undone.is_some());
    assert!(engine.deploy_session().is_some(), "undo mid-deploy must not tear down the session entirely");
    assert!(!engine.board_view().iter().any(|v| v.square == d7 && v.piece.is_some()));

    // A second undo reverses the session start itself.
    let _ = engine.undo();
    assert!(engine.deploy_session().is_none());
    assert_eq!(engine.fen(), before_fen);
}

#[test]
fn cannot_commit_with_undeployed_pieces_remaining() {
    let origin: Square = "d6".parse().unwrap();
    let mut engine = Engine::new_game(Some(BASE_FEN)).unwrap();
    engine.start_deploy(origin).unwrap();
    engine.deploy_apply("Nd7").unwrap();

    assert!(!engine.can_commit_deploy().can_commit);
    assert!(engine.commit_deploy().is_err());
}

#[test]
fn cannot_start_a_second_session_while_one_is_active() {
    let origin: Square = "d6".parse().unwrap();
    let mut engine = Engine::new_game(Some(BASE_FEN)).unwrap();
    engine.start_deploy(origin).unwrap();
    assert!(engine.start_deploy(origin).is_err());
}
