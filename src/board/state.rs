use super::airdefense::AirDefenseZones;
use super::deploy::DeploySession;
use super::types::{Bitboard, Color, PieceContent, PieceKind, PieceSlot, Square, NUM_SQUARES};

/// A full, atomic CoTuLenh game state.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: Vec<Option<PieceContent>>,
    pub(crate) side_to_move: Color,
    pub(crate) fullmove_number: u32,
    /// Always 0 for this game; retained only for FEN format compatibility.
    pub(crate) halfmove_clock: u32,
    pub(crate) commanders: [Option<Square>; 2],
    pub(crate) air_defense: AirDefenseZones,
    pub(crate) deploy_session: Option<DeploySession>,
}

impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            squares: vec![None; NUM_SQUARES],
            side_to_move: Color::Red,
            fullmove_number: 1,
            halfmove_clock: 0,
            commanders: [None, None],
            air_defense: AirDefenseZones::empty(),
            deploy_session: None,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&PieceContent> {
        self.squares[sq.as_index()].as_ref()
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(PieceContent::color)
    }

    #[must_use]
    pub fn is_stack(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(PieceContent::is_stack)
    }

    /// The carrier/lone piece on `sq`, ignoring any carried cargo.
    #[must_use]
    pub fn carrier_at(&self, sq: Square) -> Option<&PieceSlot> {
        self.piece_at(sq).map(PieceContent::carrier)
    }

    /// Carrier followed by carried pieces, or an empty vec if the square is empty.
    #[must_use]
    pub fn flatten(&self, sq: Square) -> Vec<PieceSlot> {
        self.piece_at(sq).map(PieceContent::flatten).unwrap_or_default()
    }

    pub(crate) fn set_content(&mut self, sq: Square, content: Option<PieceContent>) {
        if let Some(c) = &content {
            if c.carrier().kind == PieceKind::Commander {
                self.commanders[c.color().index()] = Some(sq);
            }
        }
        self.squares[sq.as_index()] = content;
    }

    pub(crate) fn clear(&mut self, sq: Square) {
        if let Some(existing) = &self.squares[sq.as_index()] {
            if existing.carrier().kind == PieceKind::Commander
                && self.commanders[existing.color().index()] == Some(sq)
            {
                self.commanders[existing.color().index()] = None;
            }
        }
        self.squares[sq.as_index()] = None;
    }

    #[must_use]
    pub fn commander_square(&self, color: Color) -> Option<Square> {
        self.commanders[color.index()]
    }

    /// Occupancy bitboard for `color`, recomputed from the square array.
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        let mut bb = Bitboard::empty();
        for idx in 0..NUM_SQUARES {
            if let Some(content) = &self.squares[idx] {
                if content.color() == color {
                    bb.set(Square::from_index(idx));
                }
            }
        }
        bb
    }

    #[must_use]
    pub fn all_occupancy(&self) -> Bitboard {
        self.occupancy(Color::Red) | self.occupancy(Color::Blue)
    }

    #[must_use]
    pub fn deploy_session(&self) -> Option<&DeploySession> {
        self.deploy_session.as_ref()
    }

    pub(crate) fn recompute_air_defense(&mut self) {
        let mut zones = AirDefenseZones::empty();
        for idx in 0..NUM_SQUARES {
            let sq = Square::from_index(idx);
            if let Some(content) = &self.squares[idx] {
                for piece in content.flatten() {
                    if let Some((base, heroic_r)) = piece.kind.air_defense_radii() {
                        let radius = if piece.heroic { heroic_r } else { base };
                        zones.register_source(piece.color, sq, radius);
                    }
                }
            }
        }
        self.air_defense = zones;
    }

    #[must_use]
    pub fn air_defense(&self) -> &AirDefenseZones {
        &self.air_defense
    }
}

impl Default for Board {
    fn default() -> Self {
        super::builder::BoardBuilder::starting_position().build()
    }
}
