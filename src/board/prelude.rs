//! Curated re-export surface for convenient imports.
//!
//! ```
//! use cotulenh_engine::board::prelude::*;
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, Color, DeployError, DeploySession, DeployStep, FenError, Move,
    MoveError, MoveKind, MoveList, Outcome, PieceContent, PieceKind, PieceSlot, Square,
    SquareError, StackError, Status, StatusConfig,
};
