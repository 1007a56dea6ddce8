//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceContent, PieceKind, PieceSlot};
use super::square::Square;

/// The discriminated kinds of move this engine can apply.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Capture,
    StayCapture,
    SuicideCapture,
    Combine,
    DeployStep,
    DeployStay,
    DeployCommit,
    DeployCancel,
}

impl MoveKind {
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::StayCapture | MoveKind::SuicideCapture
        )
    }
}

/// A fully-described move. `from`/`to` are always present; for a `StayCapture` or
/// `SuicideCapture`, `to` is the target square attacked, not a destination the
/// attacker occupies afterward.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub kind: MoveKind,
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    /// Set when the moving piece was already heroic before this move.
    pub piece_was_heroic: bool,
    /// The piece captured by this move, if any (victim only; for `SuicideCapture`
    /// the attacker is also removed, tracked separately by the apply layer).
    pub captured: Option<PieceSlot>,
    /// Present only for `Combine`: the friendly content that was merged into.
    pub combined_into: Option<PieceContent>,
    /// Present only for deploy-family moves: the stack's origin square.
    pub deploy_origin: Option<Square>,
}

impl Move {
    #[must_use]
    pub fn normal(piece: PieceKind, color: Color, heroic: bool, from: Square, to: Square) -> Self {
        Move {
            kind: MoveKind::Normal,
            from,
            to,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: None,
            combined_into: None,
            deploy_origin: None,
        }
    }

    #[must_use]
    pub fn capture(
        piece: PieceKind,
        color: Color,
        heroic: bool,
        from: Square,
        to: Square,
        captured: PieceSlot,
    ) -> Self {
        Move {
            kind: MoveKind::Capture,
            from,
            to,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: Some(captured),
            combined_into: None,
            deploy_origin: None,
        }
    }

    #[must_use]
    pub fn stay_capture(
        piece: PieceKind,
        color: Color,
        heroic: bool,
        from: Square,
        target: Square,
        captured: PieceSlot,
    ) -> Self {
        Move {
            kind: MoveKind::StayCapture,
            from,
            to: target,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: Some(captured),
            combined_into: None,
            deploy_origin: None,
        }
    }

    #[must_use]
    pub fn suicide_capture(
        piece: PieceKind,
        color: Color,
        heroic: bool,
        from: Square,
        to: Square,
        captured: PieceSlot,
    ) -> Self {
        Move {
            kind: MoveKind::SuicideCapture,
            from,
            to,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: Some(captured),
            combined_into: None,
            deploy_origin: None,
        }
    }

    #[must_use]
    pub fn combine(
        piece: PieceKind,
        color: Color,
        heroic: bool,
        from: Square,
        to: Square,
        target: PieceContent,
    ) -> Self {
        Move {
            kind: MoveKind::Combine,
            from,
            to,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: None,
            combined_into: Some(target),
            deploy_origin: None,
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }

    /// One cargo piece placed at `to` during an in-progress deploy session.
    #[must_use]
    pub fn deploy_step(
        piece: PieceKind,
        color: Color,
        heroic: bool,
        from: Square,
        to: Square,
        origin: Square,
        captured: Option<PieceSlot>,
    ) -> Self {
        Move {
            kind: if captured.is_some() {
                MoveKind::Capture
            } else {
                MoveKind::DeployStep
            },
            from,
            to,
            piece,
            color,
            piece_was_heroic: heroic,
            captured,
            combined_into: None,
            deploy_origin: Some(origin),
        }
    }

    /// A piece left behind at the stack's origin when the session commits.
    #[must_use]
    pub fn deploy_stay(piece: PieceKind, color: Color, heroic: bool, origin: Square) -> Self {
        Move {
            kind: MoveKind::DeployStay,
            from: origin,
            to: origin,
            piece,
            color,
            piece_was_heroic: heroic,
            captured: None,
            combined_into: None,
            deploy_origin: Some(origin),
        }
    }

    #[must_use]
    pub fn deploy_commit(color: Color, origin: Square) -> Self {
        Move {
            kind: MoveKind::DeployCommit,
            from: origin,
            to: origin,
            piece: PieceKind::Commander,
            color,
            piece_was_heroic: false,
            captured: None,
            combined_into: None,
            deploy_origin: Some(origin),
        }
    }

    #[must_use]
    pub fn deploy_cancel(color: Color, origin: Square) -> Self {
        Move {
            kind: MoveKind::DeployCancel,
            from: origin,
            to: origin,
            piece: PieceKind::Commander,
            color,
            piece_was_heroic: false,
            captured: None,
            combined_into: None,
            deploy_origin: Some(origin),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::StayCapture | MoveKind::SuicideCapture => {
                write!(f, "{}@{}", self.from, self.to)
            }
            _ => write!(f, "{}{}", self.from, self.to),
        }
    }
}

/// A list of candidate or legal moves.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }

    /// Stable sort by (piece-type, from-square, to-square) for deterministic output.
    pub(crate) fn sort_canonical(&mut self) {
        self.moves.sort_by(|a, b| {
            (a.piece.index(), a.from.as_index(), a.to.as_index())
                .cmp(&(b.piece.index(), b.from.as_index(), b.to.as_index()))
        });
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}
