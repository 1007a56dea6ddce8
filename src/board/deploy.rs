//! Deploy-session state machine.
//!
//! A deploy turn splits a single stack's cargo across multiple destination
//! squares without ending the turn after each individual step. While a
//! session is active the origin square is treated as empty on the real
//! board — the session itself is the "virtual board" holding the pieces
//! still to be placed, kept separate from the committed position per the
//! design notes.

use super::error::DeployError;
use super::movegen;
use super::state::Board;
use super::types::stack::is_legal_stack;
use super::types::{Color, PieceContent, PieceKind, PieceSlot, Square};

/// One piece peeled off the origin stack and placed on a destination square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployStep {
    pub piece: PieceSlot,
    pub destination: Square,
    pub captured: Option<PieceContent>,
}

/// An in-progress deploy turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploySession {
    pub(crate) color: Color,
    pub(crate) origin: Square,
    pub(crate) original: PieceContent,
    /// Pieces not yet moved or marked as staying.
    pub(crate) remaining: Vec<PieceSlot>,
    /// Pieces explicitly left behind at the origin.
    pub(crate) stayed: Vec<PieceSlot>,
    /// Steps committed so far in this session, in order (for replay/cancel).
    pub(crate) steps: Vec<DeployStep>,
}

impl DeploySession {
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn origin(&self) -> Square {
        self.origin
    }

    #[must_use]
    pub fn remaining(&self) -> &[PieceSlot] {
        &self.remaining
    }

    #[must_use]
    pub fn stayed(&self) -> &[PieceSlot] {
        &self.stayed
    }

    #[must_use]
    pub fn steps(&self) -> &[DeployStep] {
        &self.steps
    }

    /// Whether every original piece has been placed (moved or stayed) and at
    /// least one actual movement occurred, per the commit precondition.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        self.remaining.is_empty() && !self.steps.is_empty()
    }
}

impl Board {
    pub fn start_deploy(&mut self, origin: Square) -> Result<(), DeployError> {
        if self.deploy_session.is_some() {
            return Err(DeployError::DeployAlreadyActive);
        }
        let Some(content) = self.piece_at(origin) else {
            return Err(DeployError::NoStackHere);
        };
        if !content.is_stack() {
            return Err(DeployError::NoStackHere);
        }
        if content.color() != self.side_to_move {
            return Err(DeployError::WrongColor);
        }
        let original = content.clone();
        let remaining = original.flatten();
        self.clear(origin);
        self.deploy_session = Some(DeploySession {
            color: self.side_to_move,
            origin,
            original,
            remaining,
            stayed: Vec::new(),
            steps: Vec::new(),
        });
        self.recompute_air_defense();
        Ok(())
    }

    /// Move one remaining piece of `kind` from the deploy origin to `to`,
    /// as one of its own ordinary pseudo-legal moves from that square.
    pub fn deploy_step(&mut self, kind: PieceKind, to: Square) -> Result<(), DeployError> {
        let session = self.deploy_session.as_ref().ok_or(DeployError::NoActiveDeploy)?;
        let origin = session.origin;
        let pos = session
            .remaining
            .iter()
            .position(|p| p.kind == kind)
            .ok_or(DeployError::PieceNotInSession)?;
        let piece = session.remaining[pos];

        self.set_content(origin, Some(PieceContent::Single(piece)));
        let candidates = movegen::generate_for_square(self, origin);
        let chosen = candidates
            .iter()
            .find(|m| m.to == to && m.from == origin)
            .cloned();
        self.clear(origin);

        let Some(mv) = chosen else {
            return Err(DeployError::PieceNotInSession);
        };

        let captured = mv.captured.and(self.piece_at(to).cloned());
        let suicide = matches!(mv.kind, super::types::MoveKind::SuicideCapture);
        if captured.is_some() {
            self.clear(to);
        }
        let mut placed = piece;
        if !suicide {
            placed.heroic = piece.heroic || super::make_unmake::threatens_enemy_commander(self, to, placed);
            self.set_content(to, Some(PieceContent::Single(placed)));
        }

        let session = self.deploy_session.as_mut().expect("session checked above");
        session.remaining.remove(pos);
        session.steps.push(DeployStep {
            piece,
            destination: to,
            captured,
        });
        self.recompute_air_defense();
        Ok(())
    }

    /// Mark one remaining piece as staying at the origin.
    pub fn deploy_stay(&mut self, kind: PieceKind) -> Result<(), DeployError> {
        let session = self.deploy_session.as_mut().ok_or(DeployError::NoActiveDeploy)?;
        let pos = session
            .remaining
            .iter()
            .position(|p| p.kind == kind)
            .ok_or(DeployError::PieceNotInSession)?;
        let piece = session.remaining.remove(pos);
        session.stayed.push(piece);
        Ok(())
    }

    pub fn commit_deploy(&mut self) -> Result<(), DeployError> {
        let session = self.deploy_session.as_ref().ok_or(DeployError::NoActiveDeploy)?;
        if !session.can_commit() {
            return Err(DeployError::IllegalDeployCommit {
                reason: "deploy session still has undeployed pieces".to_string(),
            });
        }
        let origin = session.origin;
        let color = session.color;
        let stayed = session.stayed.clone();

        let origin_content = match stayed.len() {
            0 => None,
            1 => Some(PieceContent::Single(stayed[0])),
            _ => {
                let carrier_pos = (0..stayed.len()).find(|&idx| {
                    let carried: Vec<PieceKind> = stayed
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != idx)
                        .map(|(_, p)| p.kind)
                        .collect();
                    is_legal_stack(stayed[idx].kind, &carried)
                });
                let Some(idx) = carrier_pos else {
                    return Err(DeployError::IllegalDeployCommit {
                        reason: "pieces left at origin do not form a legal stack".to_string(),
                    });
                };
                let carrier = stayed[idx];
                let carried = stayed
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idx)
                    .map(|(_, p)| *p)
                    .collect();
                Some(PieceContent::Stack { carrier, carried })
            }
        };

        self.set_content(origin, origin_content);
        self.recompute_air_defense();

        if !super::legality::is_commander_safe(self, color) {
            // Roll back the placement; the session stays open for more steps.
            self.clear(origin);
            self.recompute_air_defense();
            return Err(DeployError::IllegalDeployCommit {
                reason: "committing would leave the commander in check".to_string(),
            });
        }

        self.deploy_session = None;
        let opponent = color.opponent();
        if color == Color::Blue {
            self.fullmove_number += 1;
        }
        self.side_to_move = opponent;

        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            super::invariant::fatal_invariant(e);
        }

        Ok(())
    }

    pub fn cancel_deploy(&mut self) -> Result<(), DeployError> {
        let session = self.deploy_session.take().ok_or(DeployError::NoActiveDeploy)?;
        for step in session.steps.iter().rev() {
            self.clear(step.destination);
            if let Some(captured) = step.captured.clone() {
                self.set_content(step.destination, Some(captured));
            }
        }
        self.set_content(session.origin, Some(session.original));
        self.recompute_air_defense();

        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            super::invariant::fatal_invariant(e);
        }

        Ok(())
    }

    /// Reverses the most recent action of the active deploy session: the
    /// last recorded step if one exists, or the session start itself when
    /// nothing has moved yet. Lets `Engine::undo` step back through a
    /// mid-deploy turn one action at a time instead of only being able to
    /// cancel the whole session.
    pub(crate) fn undo_last_deploy_action(&mut self) -> Option<super::types::Move> {
        let session_ref = self.deploy_session.as_ref()?;
        if session_ref.steps.is_empty() {
            let session = self.deploy_session.take()?;
            self.set_content(session.origin, Some(session.original));
            self.recompute_air_defense();

            #[cfg(debug_assertions)]
            if let Err(e) = self.check_invariants() {
                super::invariant::fatal_invariant(e);
            }

            return Some(super::types::Move::deploy_cancel(session.color, session.origin));
        }

        let session = self.deploy_session.as_mut().expect("checked non-empty above");
        let step = session.steps.pop().expect("checked non-empty above");
        let color = session.color;
        let origin = session.origin;

        self.clear(step.destination);
        if let Some(captured) = step.captured.clone() {
            self.set_content(step.destination, Some(captured));
        }
        let session = self.deploy_session.as_mut().expect("session still active");
        session.remaining.push(step.piece);
        self.recompute_air_defense();

        #[cfg(debug_assertions)]
        if let Err(e) = self.check_invariants() {
            super::invariant::fatal_invariant(e);
        }

        Some(super::types::Move::deploy_step(
            step.piece.kind,
            color,
            step.piece.heroic,
            origin,
            step.destination,
            origin,
            step.captured.as_ref().map(|c| *c.carrier()),
        ))
    }
}
