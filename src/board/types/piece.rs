//! Piece, color, and stack content types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eleven CoTuLenh piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum PieceKind {
    Commander,
    Infantry,
    Tank,
    Militia,
    Engineer,
    Artillery,
    AntiAir,
    Missile,
    AirForce,
    Navy,
    Headquarter,
}

impl PieceKind {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Commander => 0,
            PieceKind::Infantry => 1,
            PieceKind::Tank => 2,
            PieceKind::Militia => 3,
            PieceKind::Engineer => 4,
            PieceKind::Artillery => 5,
            PieceKind::AntiAir => 6,
            PieceKind::Missile => 7,
            PieceKind::AirForce => 8,
            PieceKind::Navy => 9,
            PieceKind::Headquarter => 10,
        }
    }

    /// Parse a piece from its lowercase letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'c' => Some(PieceKind::Commander),
            'i' => Some(PieceKind::Infantry),
            't' => Some(PieceKind::Tank),
            'm' => Some(PieceKind::Militia),
            'e' => Some(PieceKind::Engineer),
            'a' => Some(PieceKind::Artillery),
            'g' => Some(PieceKind::AntiAir),
            's' => Some(PieceKind::Missile),
            'f' => Some(PieceKind::AirForce),
            'n' => Some(PieceKind::Navy),
            'h' => Some(PieceKind::Headquarter),
            _ => None,
        }
    }

    /// Lowercase notation letter for this piece.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Commander => 'c',
            PieceKind::Infantry => 'i',
            PieceKind::Tank => 't',
            PieceKind::Militia => 'm',
            PieceKind::Engineer => 'e',
            PieceKind::Artillery => 'a',
            PieceKind::AntiAir => 'g',
            PieceKind::Missile => 's',
            PieceKind::AirForce => 'f',
            PieceKind::Navy => 'n',
            PieceKind::Headquarter => 'h',
        }
    }

    /// Notation letter, cased by color (uppercase for Red).
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::Red {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Base (non-heroic) movement/attack range in squares.
    #[inline]
    #[must_use]
    pub const fn base_range(self) -> u32 {
        match self {
            PieceKind::Commander => 1,
            PieceKind::Infantry | PieceKind::Militia | PieceKind::Engineer | PieceKind::AntiAir => 1,
            PieceKind::Tank => 2,
            PieceKind::Artillery | PieceKind::Missile => 3,
            PieceKind::Navy => 3,
            PieceKind::AirForce => 4,
            PieceKind::Headquarter => 0,
        }
    }

    /// Whether this piece is already omnidirectional at base (heroic adds no new directions).
    #[inline]
    #[must_use]
    pub const fn is_omnidirectional(self) -> bool {
        matches!(self, PieceKind::AirForce)
    }

    /// Whether this piece may only occupy water/mixed/bridge squares.
    #[inline]
    #[must_use]
    pub const fn is_navy(self) -> bool {
        matches!(self, PieceKind::Navy)
    }

    /// Whether this piece ignores terrain entirely (Air Force).
    #[inline]
    #[must_use]
    pub const fn ignores_terrain(self) -> bool {
        matches!(self, PieceKind::AirForce)
    }

    /// Whether this piece is one of the heavy pieces subject to the bridge-crossing rule.
    #[inline]
    #[must_use]
    pub const fn is_heavy(self) -> bool {
        matches!(
            self,
            PieceKind::Artillery | PieceKind::Missile | PieceKind::AntiAir
        )
    }

    /// Whether this piece contributes to a color's air-defense zone, and its (base, heroic) radius.
    #[must_use]
    pub const fn air_defense_radii(self) -> Option<(u32, u32)> {
        match self {
            PieceKind::AntiAir => Some((1, 2)),
            PieceKind::Missile => Some((2, 3)),
            PieceKind::Navy => Some((1, 1)),
            _ => None,
        }
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// Returns the opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Parse from the FEN side-to-move letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// A single piece, with color and heroic status, carrying no sub-pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSlot {
    pub kind: PieceKind,
    pub color: Color,
    pub heroic: bool,
}

impl PieceSlot {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        PieceSlot {
            kind,
            color,
            heroic: false,
        }
    }

    /// Effective range. Heroic status doubles the base range (Tank 2->4,
    /// Artillery/Navy 3->6, Air Force 4->8); consistent across every concrete
    /// figure the design gives, even though the general prose rounds it to
    /// "+1" for the range-1 pieces where the two phrasings coincide.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> u32 {
        if matches!(self.kind, PieceKind::Headquarter) {
            // Base Headquarter cannot move at all; heroic unlocks Militia-like range 1.
            return if self.heroic { 1 } else { 0 };
        }
        let base = self.kind.base_range();
        if self.heroic {
            base * 2
        } else {
            base
        }
    }

    /// Whether this piece moves/attacks in all eight directions.
    #[inline]
    #[must_use]
    pub const fn omnidirectional(&self) -> bool {
        self.kind.is_omnidirectional() || self.heroic
    }
}

/// Maximum carried pieces on top of the carrier in a single stack.
pub const MAX_STACK_CARRIED: usize = 3;

/// The content of an occupied square: either a lone piece or a carrier-plus-cargo stack.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceContent {
    Single(PieceSlot),
    Stack {
        carrier: PieceSlot,
        carried: Vec<PieceSlot>,
    },
}

impl PieceContent {
    /// The color occupying this square (carrier and cargo always share a color).
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            PieceContent::Single(p) => p.color,
            PieceContent::Stack { carrier, .. } => carrier.color,
        }
    }

    /// The piece that determines this square's movement (the carrier, or the lone piece).
    #[must_use]
    pub fn carrier(&self) -> &PieceSlot {
        match self {
            PieceContent::Single(p) => p,
            PieceContent::Stack { carrier, .. } => carrier,
        }
    }

    #[must_use]
    pub fn carrier_mut(&mut self) -> &mut PieceSlot {
        match self {
            PieceContent::Single(p) => p,
            PieceContent::Stack { carrier, .. } => carrier,
        }
    }

    /// Returns carrier followed by carried pieces, in that order.
    #[must_use]
    pub fn flatten(&self) -> Vec<PieceSlot> {
        match self {
            PieceContent::Single(p) => vec![*p],
            PieceContent::Stack { carrier, carried } => {
                let mut v = Vec::with_capacity(1 + carried.len());
                v.push(*carrier);
                v.extend_from_slice(carried);
                v
            }
        }
    }

    #[must_use]
    pub fn is_stack(&self) -> bool {
        matches!(self, PieceContent::Stack { .. })
    }

    /// Set the heroic flag on the carrier (or the lone piece).
    pub fn set_carrier_heroic(&mut self, heroic: bool) {
        self.carrier_mut().heroic = heroic;
    }
}

/// Promotion-style priority order used only for deterministic SAN disambiguation tie-breaks.
pub(crate) const PIECE_ORDER: [PieceKind; 11] = [
    PieceKind::Commander,
    PieceKind::Infantry,
    PieceKind::Tank,
    PieceKind::Militia,
    PieceKind::Engineer,
    PieceKind::Artillery,
    PieceKind::AntiAir,
    PieceKind::Missile,
    PieceKind::AirForce,
    PieceKind::Navy,
    PieceKind::Headquarter,
];
