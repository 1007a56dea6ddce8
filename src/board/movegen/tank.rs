//! Tank move generation: blocked movement, shoot-over capture (attacks
//! within range regardless of intervening pieces, but cannot itself move
//! through them).

use crate::board::state::Board;
use crate::board::types::{Move, MoveList, Square};

use super::common::{directions_for, land_or_mixed, ray_captures_unblocked, slide_empty};
use crate::board::types::PieceSlot;

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let dirs = directions_for(piece.omnidirectional());
    let range = piece.range();

    for to in slide_empty(board, from, dirs, range, land_or_mixed) {
        moves.push(Move::normal(piece.kind, piece.color, piece.heroic, from, to));
    }
    for (to, captured) in ray_captures_unblocked(board, from, piece.color, dirs, range, land_or_mixed) {
        moves.push(Move::capture(
            piece.kind,
            piece.color,
            piece.heroic,
            from,
            to,
            captured,
        ));
    }
    moves
}
