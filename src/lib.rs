// Crate root - export modules
pub mod board;
pub mod engine;

pub use board::{Color, Move, MoveKind, Outcome, PieceKind, PieceSlot, Square, Status};
pub use engine::{
    ApplyResult, CanCommit, DeploySnapshot, Engine, EngineConfig, EngineError, MoveInput,
    SquareView,
};
