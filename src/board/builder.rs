//! Fluent board construction, for tests and programmatic setup.

use super::state::Board;
use super::types::{Color, PieceContent, PieceKind, PieceSlot, Square};

/// Builds a `Board` one square at a time, then finalizes derived state.
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    #[must_use]
    pub fn empty() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    #[must_use]
    pub fn piece(mut self, sq: Square, kind: PieceKind, color: Color) -> Self {
        self.board
            .set_content(sq, Some(PieceContent::Single(PieceSlot::new(kind, color))));
        self
    }

    #[must_use]
    pub fn heroic_piece(mut self, sq: Square, kind: PieceKind, color: Color) -> Self {
        let mut slot = PieceSlot::new(kind, color);
        slot.heroic = true;
        self.board.set_content(sq, Some(PieceContent::Single(slot)));
        self
    }

    #[must_use]
    pub fn stack(mut self, sq: Square, carrier: PieceSlot, carried: Vec<PieceSlot>) -> Self {
        self.board
            .set_content(sq, Some(PieceContent::Stack { carrier, carried }));
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, n: u32) -> Self {
        self.board.fullmove_number = n;
        self
    }

    #[must_use]
    pub fn build(mut self) -> Board {
        self.board.recompute_air_defense();
        self.board
    }

    /// The fixed starting layout (canonical starting FEN).
    #[must_use]
    pub fn starting_position() -> Self {
        let mut b = BoardBuilder::empty();
        for (color, rank_base) in [(Color::Red, 0usize), (Color::Blue, 9usize)] {
            let back = if color == Color::Red {
                rank_base
            } else {
                rank_base + 2
            };
            let mid = rank_base + 1;
            let front = if color == Color::Red {
                rank_base + 2
            } else {
                rank_base
            };

            b = b
                .piece(Square::new(back, 0), PieceKind::Navy, color)
                .piece(Square::new(back, 1), PieceKind::Navy, color)
                .piece(Square::new(back, 2), PieceKind::Engineer, color)
                .piece(Square::new(back, 3), PieceKind::AntiAir, color)
                .piece(Square::new(back, 4), PieceKind::Artillery, color)
                .piece(Square::new(back, 5), PieceKind::Commander, color)
                .piece(Square::new(back, 6), PieceKind::Missile, color)
                .piece(Square::new(back, 7), PieceKind::AntiAir, color)
                .piece(Square::new(back, 8), PieceKind::Engineer, color)
                .piece(Square::new(back, 9), PieceKind::Headquarter, color)
                .piece(Square::new(back, 10), PieceKind::Headquarter, color)
                .piece(Square::new(mid, 2), PieceKind::Infantry, color)
                .piece(Square::new(mid, 3), PieceKind::Tank, color)
                .piece(Square::new(mid, 4), PieceKind::Infantry, color)
                .piece(Square::new(mid, 5), PieceKind::Infantry, color)
                .piece(Square::new(mid, 6), PieceKind::Infantry, color)
                .piece(Square::new(mid, 7), PieceKind::Tank, color)
                .piece(Square::new(mid, 8), PieceKind::Infantry, color)
                .piece(Square::new(front, 2), PieceKind::Militia, color)
                .piece(Square::new(front, 3), PieceKind::Militia, color)
                .piece(Square::new(front, 5), PieceKind::AirForce, color)
                .piece(Square::new(front, 7), PieceKind::Militia, color)
                .piece(Square::new(front, 8), PieceKind::Militia, color);
        }
        b
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::empty()
    }
}
