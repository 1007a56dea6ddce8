//! Game-termination detection.

use super::legality;
use super::state::Board;
use super::types::Color;

/// Whether stalemate (no legal moves, not in check) counts as a loss for the
/// stalemated side. The source game has no draw rules; this is the
/// configurable resolution of that open question.
#[derive(Clone, Copy, Debug)]
pub struct StatusConfig {
    pub stalemate_is_loss: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            stalemate_is_loss: true,
        }
    }
}

/// The outcome of the game from the side-to-move's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[must_use]
pub(crate) fn status(board: &mut Board, color: Color) -> Status {
    let in_check = legality::is_in_check(board, color);
    let has_moves = !legality::generate_legal_moves(board, color).is_empty();

    match (in_check, has_moves) {
        (true, true) => Status::Check,
        (true, false) => Status::Checkmate,
        (false, true) => Status::Ongoing,
        (false, false) => Status::Stalemate,
    }
}

/// The game-ending outcome for `color`, resolving `Status::Stalemate`
/// through `config.stalemate_is_loss` rather than leaving it to the caller
/// to interpret.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Ongoing,
    Check,
    /// `color` has no legal response: the opponent wins.
    Win { winner: Color },
    /// Only reachable when `config.stalemate_is_loss` is `false`.
    Draw,
}

#[must_use]
pub(crate) fn outcome(board: &mut Board, color: Color, config: StatusConfig) -> Outcome {
    match status(board, color) {
        Status::Ongoing => Outcome::Ongoing,
        Status::Check => Outcome::Check,
        Status::Checkmate => Outcome::Win { winner: color.opponent() },
        Status::Stalemate => {
            if config.stalemate_is_loss {
                Outcome::Win { winner: color.opponent() }
            } else {
                Outcome::Draw
            }
        }
    }
}
