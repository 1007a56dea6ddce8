//! CoTuLenh board representation and rules engine.
//!
//! An 11-file by 12-rank military chess variant with piece stacks, terrain
//! zones, air-defense coverage, heroic promotion, and multi-step deploy
//! turns. See `DESIGN.md` for how each piece of this module maps onto the
//! specification.
//!
//! # Example
//! ```
//! use cotulenh_engine::board::Board;
//!
//! let board = Board::default();
//! println!("{}", cotulenh_engine::board::fen::serialize(&board));
//! ```

pub mod airdefense;
pub mod builder;
#[cfg(debug_assertions)]
mod debug;
pub mod deploy;
pub mod error;
pub mod fen;
pub(crate) mod invariant;
pub(crate) mod legality;
pub(crate) mod make_unmake;
pub(crate) mod movegen;
pub mod prelude;
pub mod san;
mod state;
pub mod status;
pub mod terrain;
pub mod types;

pub use builder::BoardBuilder;
pub use deploy::{DeploySession, DeployStep};
pub use error::{DeployError, FenError, MoveError, SquareError, StackError};
pub use state::Board;
pub use status::{Outcome, Status, StatusConfig};
pub use types::{
    Bitboard, Color, Move, MoveKind, MoveList, PieceContent, PieceKind, PieceSlot, Square,
    MAX_STACK_CARRIED,
};

impl Board {
    /// Pseudo-legal-filtered, deterministically ordered legal moves for the
    /// side to move, or for the piece/stack sitting on `from` when given.
    #[must_use]
    pub fn legal_moves(&mut self, from: Option<Square>) -> MoveList {
        let side = self.side_to_move();
        let all = legality::generate_legal_moves(self, side);
        match from {
            None => all,
            Some(sq) => all.into_iter().filter(|m| m.from == sq).collect(),
        }
    }

    /// Whether `color`'s commander is presently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        legality::is_in_check(self, color)
    }

    /// The game-termination status for the side to move.
    #[must_use]
    pub fn status(&mut self) -> Status {
        let side = self.side_to_move();
        status::status(self, side)
    }

    /// Apply a move already known to be legal (e.g. drawn from
    /// `legal_moves()`). Deploy-family moves are not accepted here — use
    /// `start_deploy`/`deploy_step`/`deploy_stay`/`commit_deploy` instead.
    ///
    /// Crate-internal: the supported external entry point is
    /// `cotulenh_engine::Engine`, which also maintains undo history and
    /// deploy-session bookkeeping.
    pub(crate) fn apply(&mut self, mv: &Move) -> make_unmake::UndoRecord {
        make_unmake::apply_move(self, mv)
    }

    /// Reverse a move previously applied via `apply`.
    pub(crate) fn undo(&mut self, mv: &Move, undo: make_unmake::UndoRecord) {
        make_unmake::unmake_move(self, mv, undo);
    }
}
