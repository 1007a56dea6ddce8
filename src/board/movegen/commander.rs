//! Commander: ordinary short-range moves plus the ranged commander-capture
//! exception to the flying-general rule.

use crate::board::state::Board;
use crate::board::types::{Move, MoveList, PieceKind, PieceSlot, Square};

use super::land;

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = land::generate(board, from, piece);

    if let Some(opp_sq) = board.commander_square(piece.color.opponent()) {
        let already_in_range = from.chebyshev_distance(opp_sq) <= piece.range() as i32;
        if !already_in_range && opp_sq.file() == from.file() && file_is_clear(board, from, opp_sq) {
            if let Some(content) = board.piece_at(opp_sq) {
                if content.carrier().kind == PieceKind::Commander {
                    moves.push(Move::capture(
                        piece.kind,
                        piece.color,
                        piece.heroic,
                        from,
                        opp_sq,
                        *content.carrier(),
                    ));
                }
            }
        }
    }
    moves
}

fn file_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (lo, hi) = (from.rank().min(to.rank()), from.rank().max(to.rank()));
    for rank in (lo + 1)..hi {
        if !board.is_empty(Square::new(rank, from.file())) {
            return false;
        }
    }
    true
}
