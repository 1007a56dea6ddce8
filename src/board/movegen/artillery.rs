//! Artillery, Missile, and Anti-Air: indirect-fire pieces. Movement is
//! blocked and land-only (with the heavy-piece bridge-crossing rule); attack
//! ignores intervening pieces and, for Missile, terrain. A target sitting on
//! water (necessarily a Navy, by the board's terrain invariant) is a
//! stay-capture rather than a displacing capture.

use crate::board::state::Board;
use crate::board::types::{Move, MoveList, PieceSlot, Square};

use super::common::{
    any_terrain, capture_or_stay, directions_for, land_or_mixed, ray_captures_unblocked,
    slide_empty_heavy,
};

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let dirs = directions_for(piece.omnidirectional());
    let range = piece.range();

    for to in slide_empty_heavy(board, from, dirs, range, land_or_mixed) {
        moves.push(Move::normal(piece.kind, piece.color, piece.heroic, from, to));
    }

    // Indirect fire ignores both blockers and path terrain; only the
    // landing square's terrain decides capture vs. stay-capture below.
    for (to, captured) in ray_captures_unblocked(board, from, piece.color, dirs, range, any_terrain) {
        moves.push(capture_or_stay(piece, from, to, captured, land_or_mixed));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::BoardBuilder;
    use crate::board::types::{Color, MoveKind, PieceKind};

    #[test]
    fn artillery_stay_captures_navy_on_water() {
        let board = BoardBuilder::empty()
            .piece("c5".parse().unwrap(), PieceKind::Artillery, Color::Red)
            .piece("a5".parse().unwrap(), PieceKind::Navy, Color::Blue)
            .build();
        let c5 = "c5".parse().unwrap();
        let piece = *board.carrier_at(c5).unwrap();
        let moves = generate(&board, c5, piece);
        let hit = moves
            .iter()
            .find(|m| m.to == "a5".parse().unwrap())
            .expect("artillery should reach the navy on a5");
        assert_eq!(hit.kind, MoveKind::StayCapture);
        assert_eq!(hit.from, c5);
    }
}
