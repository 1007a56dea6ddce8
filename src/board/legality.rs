//! Legality filtering: commander safety and the flying-general exposure
//! rule. Navy/Air Force after-state terrain and
//! air-defense rules are enforced directly during generation instead, since
//! every candidate move already encodes a destination the mover is actually
//! allowed to occupy.

use super::make_unmake;
use super::movegen;
use super::state::Board;
use super::types::{Color, Move, MoveList, Square};

/// Whether `color`'s commander is currently attacked by any pseudo-legal
/// enemy move.
#[must_use]
pub(crate) fn is_commander_safe(board: &Board, color: Color) -> bool {
    let Some(commander_sq) = board.commander_square(color) else {
        return true; // no commander on board: vacuously safe (should not occur in reachable play)
    };
    !movegen::generate_pseudo_moves(board, color.opponent())
        .iter()
        .any(|m| m.to == commander_sq)
}

/// Whether the two commanders share an empty file with nothing between them.
#[must_use]
pub(crate) fn flying_general_violated(board: &Board) -> bool {
    let (Some(red), Some(blue)) = (
        board.commander_square(Color::Red),
        board.commander_square(Color::Blue),
    ) else {
        return false;
    };
    if red.file() != blue.file() {
        return false;
    }
    let (lo, hi) = (red.rank().min(blue.rank()), red.rank().max(blue.rank()));
    ((lo + 1)..hi).all(|rank| board.is_empty(Square::new(rank, red.file())))
}

/// Deterministically ordered legal moves for `color`.
#[must_use]
pub(crate) fn generate_legal_moves(board: &mut Board, color: Color) -> MoveList {
    let pseudo = movegen::generate_pseudo_moves(board, color);
    let mut legal: Vec<Move> = Vec::new();
    for mv in pseudo.iter() {
        // A commander-vs-commander ranged capture is itself how the flying
        // exposure rule is resolved offensively; everything else is filtered
        // by simulating the move.
        let undo = make_unmake::apply_move(board, mv);
        if is_commander_safe(board, color) && !flying_general_violated(board) {
            legal.push(mv.clone());
        }
        make_unmake::unmake_move(board, mv, undo);
    }
    let mut list: MoveList = legal.into_iter().collect();
    list.sort_canonical();
    list
}

#[must_use]
pub(crate) fn is_in_check(board: &Board, color: Color) -> bool {
    !is_commander_safe(board, color)
}
