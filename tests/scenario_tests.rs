//! Literal walkthroughs of the six canonical scenarios: opening move,
//! heroic promotion, stay-capture, air-defense suicide capture, a deploy
//! session, and the flying-general rule.

use cotulenh_engine::board::builder::BoardBuilder;
use cotulenh_engine::board::san;
use cotulenh_engine::board::{Color, MoveKind, PieceKind, Status};
use cotulenh_engine::{Engine, Square};

#[test]
fn s1_opening_move() {
    let mut engine = Engine::new_game(None).unwrap();
    let starting_fen = engine.fen();
    let opening_count = engine.legal_moves(None).len();
    assert!(opening_count > 0);

    let mut reference = BoardBuilder::starting_position().build();
    let mv = reference.legal_moves(None).get(0).cloned().unwrap();
    let notation = san::move_to_san(&reference, &mv);

    engine.apply(notation.as_str()).unwrap();
    assert_eq!(engine.fen().split(' ').nth(1), Some("b"));
    assert_eq!(engine.fen().split(' ').nth(3), Some("1"));

    let undone = engine.undo();
    assert!(undone.is_some());
    assert_eq!(engine.fen(), starting_fen);
}

#[test]
fn s2_heroic_promotion() {
    // Red Tank e5, Blue Infantry e7 interposed, Blue Commander e8, Red Commander e1.
    let mut engine =
        Engine::new_game(Some("11/11/11/11/4c6/4i6/11/4T6/11/11/11/4C6 r 0 1")).unwrap();
    let before_fen = engine.fen();
    let e5: Square = "e5".parse().unwrap();
    let e7: Square = "e7".parse().unwrap();

    let capture = engine
        .legal_moves(Some(e5))
        .iter()
        .find(|m| m.to == e7)
        .cloned()
        .expect("tank should capture the interposed infantry");
    assert_eq!(capture.kind, MoveKind::Capture);

    engine.apply(capture).unwrap();
    let view = engine.board_view().into_iter().find(|v| v.square == e7).unwrap();
    assert_eq!(view.piece, Some(PieceKind::Tank));
    assert!(view.is_heroic);

    engine.undo();
    assert_eq!(engine.fen(), before_fen);
    let view = engine.board_view().into_iter().find(|v| v.square == e5).unwrap();
    assert!(!view.is_heroic);
}

#[test]
fn s3_stay_capture() {
    // Red Artillery c5, Blue Navy a5.
    let mut engine = Engine::new_game(Some("4c6/11/11/11/11/11/11/n1A8/11/11/11/4C6 r 0 1")).unwrap();
    let c5: Square = "c5".parse().unwrap();
    let a5: Square = "a5".parse().unwrap();

    let stay = engine
        .legal_moves(Some(c5))
        .iter()
        .find(|m| m.to == a5)
        .cloned()
        .expect("artillery should reach across the gap to the navy on a5");
    assert_eq!(stay.kind, MoveKind::StayCapture);
    let san_text = san::move_to_san(&BoardBuilder::empty().build(), &stay);
    assert!(!san_text.contains('x'), "stay-capture SAN carries no 'x' marker");

    engine.apply(stay).unwrap();
    let view = engine.board_view();
    assert!(view.iter().any(|v| v.square == c5 && v.piece == Some(PieceKind::Artillery)));
    assert!(view.iter().all(|v| v.square != a5 || v.piece.is_none()));
}

#[test]
fn s4_air_defense_suicide_capture() {
    // Red Air Force e5, Blue Tank e7, Blue Anti-Air f6 (radius 1 covers e7 directly).
    let mut engine =
        Engine::new_game(Some("2c8/11/11/11/11/4t6/5g5/4F6/11/11/11/2C8 r 0 1")).unwrap();
    let e5: Square = "e5".parse().unwrap();
    let e7: Square = "e7".parse().unwrap();

    let suicide = engine
        .legal_moves(Some(e5))
        .iter()
        .find(|m| m.to == e7)
        .cloned()
        .expect("air force should see the tank through single-source coverage");
    assert_eq!(suicide.kind, MoveKind::SuicideCapture);

    engine.apply(suicide).unwrap();
    let view = engine.board_view();
    assert!(view.iter().all(|v| v.square != e5 || v.piece.is_none()), "air force is destroyed too");
    assert!(view.iter().all(|v| v.square != e7 || v.piece.is_none()), "tank is removed, nothing replaces it");
}

#[test]
fn s5_deploy_session() {
    // Stack (Navy+Tank+Infantry) at d6, a mixed-terrain square.
    let base_fen = "4c6/11/11/11/11/11/3(NTI)7/11/11/11/11/4C6 r 0 1";
    let origin: Square = "d6".parse().unwrap();

    let mut engine = Engine::new_game(Some(base_fen)).unwrap();
    engine.start_deploy(origin).unwrap();
    engine.deploy_apply("Nd7").unwrap();
    engine.deploy_apply("Te6").unwrap();
    engine.deploy_apply("I-").unwrap();
    assert!(engine.can_commit_deploy().can_commit);

    let result = engine.commit_deploy().unwrap();
    assert_eq!(result.mv.kind, MoveKind::DeployCommit);
    assert_eq!(engine.turn(), Color::Blue);

    let d7: Square = "d7".parse().unwrap();
    let e6: Square = "e6".parse().unwrap();
    let view = engine.board_view();
    assert!(view.iter().any(|v| v.square == d7 && v.piece == Some(PieceKind::Navy)));
    assert!(view.iter().any(|v| v.square == e6 && v.piece == Some(PieceKind::Tank)));
    assert!(view.iter().any(|v| v.square == origin && v.piece == Some(PieceKind::Infantry)));

    let mut cancelled = Engine::new_game(Some(base_fen)).unwrap();
    let before_fen = cancelled.fen();
    cancelled.start_deploy(origin).unwrap();
    cancelled.deploy_apply("Nd7").unwrap();
    cancelled.cancel_deploy().unwrap();
    assert_eq!(cancelled.fen(), before_fen);
    assert!(cancelled.deploy_session().is_none());
}

#[test]
fn s6_flying_general() {
    let mut engine = Engine::new_game(Some("4c6/11/11/11/11/11/11/11/11/11/11/4C6 b 0 1")).unwrap();
    let e1: Square = "e1".parse().unwrap();
    let e11: Square = "e11".parse().unwrap();

    let moves = engine.legal_moves(None);
    assert!(
        !moves.iter().any(|m| m.to == e11 && m.kind == MoveKind::Normal),
        "a move that leaves file e clear for the enemy commander must be illegal"
    );
    let capture = moves
        .iter()
        .find(|m| m.to == e1 && m.kind == MoveKind::Capture)
        .cloned()
        .expect("ranged commander capture along the clear file must be legal");

    let applied = engine.apply(capture).unwrap();
    assert_eq!(applied.status, Status::Stalemate);
}
