//! Pseudo-legal move generation, dispatched per piece kind.
//!
//! A stack moves exactly as its carrier would alone — the carrier's kind and
//! stats decide reachable squares; `make_unmake` relocates the whole stack
//! when such a move is applied. Combine moves are generated separately for
//! every lone piece regardless of kind.

mod airforce;
mod artillery;
mod commander;
mod common;
mod land;
mod navy;
mod stack;
mod tank;

use super::state::Board;
use crate::board::types::{Color, Move, MoveList, PieceKind, PieceSlot, Square, NUM_SQUARES};

/// Pseudo-legal moves for the piece/stack sitting on `from`, ignoring deploy
/// session bookkeeping (the deploy layer builds its own virtual board and
/// calls this per remaining piece).
pub(crate) fn generate_for_square(board: &Board, from: Square) -> MoveList {
    let Some(content) = board.piece_at(from) else {
        return MoveList::new();
    };
    let carrier = *content.carrier();
    let mut out: Vec<Move> = dispatch(board, from, carrier).into_iter().collect();
    out.extend(stack::generate(board, from, carrier));
    out.into_iter().collect()
}

fn dispatch(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    match piece.kind {
        PieceKind::Infantry | PieceKind::Militia | PieceKind::Engineer | PieceKind::AntiAir => {
            land::generate(board, from, piece)
        }
        PieceKind::Headquarter => {
            if piece.heroic {
                land::generate(board, from, piece)
            } else {
                MoveList::new()
            }
        }
        PieceKind::Tank => tank::generate(board, from, piece),
        PieceKind::Artillery | PieceKind::Missile => artillery::generate(board, from, piece),
        PieceKind::Navy => navy::generate(board, from, piece),
        PieceKind::AirForce => airforce::generate(board, from, piece),
        PieceKind::Commander => commander::generate(board, from, piece),
        _ => MoveList::new(),
    }
}

/// All pseudo-legal moves for `color` across the whole board.
pub(crate) fn generate_pseudo_moves(board: &Board, color: Color) -> MoveList {
    let mut all: Vec<Move> = Vec::new();
    for idx in 0..NUM_SQUARES {
        let sq = Square::from_index(idx);
        if let Some(content) = board.piece_at(sq) {
            if content.color() == color {
                all.extend(generate_for_square(board, sq));
            }
        }
    }
    all.into_iter().collect()
}
