//! Move application and undo.

use super::airdefense::AirDefenseZones;
use super::movegen;
use super::state::Board;
use super::types::{Color, Move, MoveKind, PieceContent, PieceKind, PieceSlot, Square};

/// Everything needed to exactly reverse one `apply_move` call.
#[derive(Clone, Debug)]
pub struct UndoRecord {
    dest_before: Option<PieceContent>,
    origin_before: Option<PieceContent>,
    heroic_changes: Vec<(Square, bool)>,
    commanders_before: [Option<Square>; 2],
    fullmove_before: u32,
    halfmove_before: u32,
    side_before: Color,
    air_defense_before: AirDefenseZones,
}

/// Whether placing `piece` at `at` gives it a pseudo-legal attack on the
/// opposing commander — the commander-attack heroic promotion trigger.
pub(crate) fn threatens_enemy_commander(board: &Board, at: Square, piece: PieceSlot) -> bool {
    let Some(enemy_commander) = board.commander_square(piece.color.opponent()) else {
        return false;
    };
    movegen::generate_for_square(board, at)
        .iter()
        .any(|m| m.to == enemy_commander)
}

fn count_non_commander_pieces(board: &Board, color: Color) -> usize {
    (0..super::types::NUM_SQUARES)
        .filter(|&idx| {
            let sq = Square::from_index(idx);
            board.piece_at(sq).is_some_and(|c| {
                c.color() == color && c.flatten().iter().any(|p| p.kind != PieceKind::Commander)
            })
        })
        .count()
}

/// Applies `mv` to the board (ordinary Normal/Capture/StayCapture/
/// SuicideCapture/Combine moves only — deploy-family moves are handled by
/// `Board::deploy_step` & co., which do not go through this path).
pub(crate) fn apply_move(board: &mut Board, mv: &Move) -> UndoRecord {
    let commanders_before = board.commanders;
    let fullmove_before = board.fullmove_number;
    let halfmove_before = board.halfmove_clock;
    let side_before = board.side_to_move;
    let air_defense_before = board.air_defense.clone();
    let dest_before = board.piece_at(mv.to).cloned();
    let origin_before = board.piece_at(mv.from).cloned();

    let mut heroic_changes = Vec::new();

    match mv.kind {
        MoveKind::Normal | MoveKind::Capture => {
            let moving = match origin_before.clone() {
                Some(p) => p,
                None => super::invariant::fatal_invariant("apply_move: no piece at origin"),
            };
            board.clear(mv.from);
            board.set_content(mv.to, Some(moving));
            apply_promotion_at(board, mv.to, &mut heroic_changes);
        }
        MoveKind::StayCapture => {
            board.clear(mv.to);
            apply_promotion_at(board, mv.from, &mut heroic_changes);
        }
        MoveKind::SuicideCapture => {
            board.clear(mv.to);
            board.clear(mv.from);
        }
        MoveKind::Combine => {
            board.clear(mv.from);
            board.set_content(mv.to, mv.combined_into.clone());
            apply_promotion_at(board, mv.to, &mut heroic_changes);
        }
        MoveKind::DeployStep | MoveKind::DeployStay | MoveKind::DeployCommit | MoveKind::DeployCancel => {
            unreachable!("deploy-family moves are applied via Board::deploy_* methods")
        }
    }

    apply_last_piece_promotion(board, mv.color, &mut heroic_changes);
    board.recompute_air_defense();
    board.side_to_move = side_before.opponent();
    board.halfmove_clock = 0;
    if side_before == Color::Blue {
        board.fullmove_number += 1;
    }

    #[cfg(debug_assertions)]
    if let Err(e) = board.check_invariants() {
        super::invariant::fatal_invariant(e);
    }

    UndoRecord {
        dest_before,
        origin_before,
        heroic_changes,
        commanders_before,
        fullmove_before,
        halfmove_before,
        side_before,
        air_defense_before,
    }
}

/// Reverses the effect of `apply_move`. Heroic-flag restoration happens
/// first so the pieces being un-flagged still exist when board content is
/// restored underneath them, matching the documented undo order.
pub(crate) fn unmake_move(board: &mut Board, mv: &Move, undo: UndoRecord) {
    for &(sq, was_heroic) in undo.heroic_changes.iter().rev() {
        if let Some(content) = &mut board.squares[sq.as_index()] {
            content.set_carrier_heroic(was_heroic);
        }
    }

    match mv.kind {
        MoveKind::Normal | MoveKind::Capture | MoveKind::Combine => {
            board.clear(mv.to);
            board.set_content(mv.to, undo.dest_before);
            board.set_content(mv.from, undo.origin_before);
        }
        MoveKind::StayCapture => {
            board.set_content(mv.to, undo.dest_before);
        }
        MoveKind::SuicideCapture => {
            board.set_content(mv.to, undo.dest_before);
            board.set_content(mv.from, undo.origin_before);
        }
        MoveKind::DeployStep | MoveKind::DeployStay | MoveKind::DeployCommit | MoveKind::DeployCancel => {
            unreachable!("deploy-family moves are undone via Board::cancel_deploy")
        }
    }

    board.commanders = undo.commanders_before;
    board.fullmove_number = undo.fullmove_before;
    board.halfmove_clock = undo.halfmove_before;
    board.side_to_move = undo.side_before;
    board.air_defense = undo.air_defense_before;

    #[cfg(debug_assertions)]
    if let Err(e) = board.check_invariants() {
        super::invariant::fatal_invariant(e);
    }
}

fn apply_promotion_at(board: &mut Board, at: Square, heroic_changes: &mut Vec<(Square, bool)>) {
    let Some(content) = board.piece_at(at) else {
        return;
    };
    if content.carrier().heroic {
        return;
    }
    let carrier = *content.carrier();
    if threatens_enemy_commander(board, at, carrier) {
        let before = carrier.heroic;
        if let Some(content) = &mut board.squares[at.as_index()] {
            content.set_carrier_heroic(true);
        }
        heroic_changes.push((at, before));
    }
}

/// A side with exactly one non-commander piece left has that piece promoted.
fn apply_last_piece_promotion(board: &mut Board, color: Color, heroic_changes: &mut Vec<(Square, bool)>) {
    if count_non_commander_pieces(board, color) != 1 {
        return;
    }
    for idx in 0..super::types::NUM_SQUARES {
        let sq = Square::from_index(idx);
        let Some(content) = board.piece_at(sq) else {
            continue;
        };
        if content.color() != color {
            continue;
        }
        if content.flatten().iter().any(|p| p.kind != PieceKind::Commander) && !content.carrier().heroic {
            let before = content.carrier().heroic;
            if let Some(content) = &mut board.squares[idx] {
                content.set_carrier_heroic(true);
            }
            heroic_changes.push((sq, before));
        }
    }
}
