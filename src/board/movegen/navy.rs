//! Navy: moves on water/mixed/bridge; attacks land pieces within one square
//! of water as a stay-capture (it cannot come ashore), ignoring blockers
//! along its orthogonal attack rays.

use crate::board::state::Board;
use crate::board::types::{Move, MoveList, PieceSlot, Square};

use super::common::{directions_for, ray_captures_unblocked, slide_empty, water_or_mixed, ALL_EIGHT};

/// Whether `sq` has any water/mixed/bridge square among its eight neighbors.
fn is_coastal(sq: Square) -> bool {
    ALL_EIGHT
        .iter()
        .filter_map(|&(dr, df)| sq.offset(dr, df))
        .any(water_or_mixed)
}

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let dirs = directions_for(piece.omnidirectional());
    let range = piece.range();

    for to in slide_empty(board, from, dirs, range, water_or_mixed) {
        moves.push(Move::normal(piece.kind, piece.color, piece.heroic, from, to));
    }

    for (to, captured) in ray_captures_unblocked(board, from, piece.color, dirs, range, |_| true) {
        if water_or_mixed(to) {
            moves.push(Move::capture(
                piece.kind,
                piece.color,
                piece.heroic,
                from,
                to,
                captured,
            ));
        } else if is_coastal(to) {
            moves.push(Move::stay_capture(
                piece.kind,
                piece.color,
                piece.heroic,
                from,
                to,
                captured,
            ));
        }
    }
    moves
}
