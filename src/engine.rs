//! The public engine facade.
//!
//! `Engine` is the single entry point external collaborators (the UI, move
//! generators for testing, analysis tools) are expected to drive. It owns a
//! `Board`, its applied-move history (for `undo`/`history`), and mediates
//! deploy sessions so that a caller never has to reach into `board::` types
//! directly.

use std::fmt;

pub mod shared;

use crate::board::san;
use crate::board::status::{self, Outcome, StatusConfig};
use crate::board::{
    Board, BoardBuilder, Color, DeployError, FenError, Move, MoveError, MoveKind, MoveList,
    PieceContent, PieceKind, PieceSlot, Square, Status,
};

/// Resolution rule for stalemate and other engine-level knobs.
pub type EngineConfig = StatusConfig;

/// Everything that can go wrong driving an `Engine`, gathering the error
/// kinds under one type for the facade's `Result`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidFen(FenError),
    IllegalMove(MoveError),
    SanAmbiguous(MoveError),
    Deploy(DeployError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidFen(e) => write!(f, "invalid FEN: {e}"),
            EngineError::IllegalMove(e) => write!(f, "illegal move: {e}"),
            EngineError::SanAmbiguous(e) => write!(f, "ambiguous SAN: {e}"),
            EngineError::Deploy(e) => write!(f, "deploy error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<FenError> for EngineError {
    fn from(e: FenError) -> Self {
        EngineError::InvalidFen(e)
    }
}

impl From<DeployError> for EngineError {
    fn from(e: DeployError) -> Self {
        EngineError::Deploy(e)
    }
}

/// A move literal or a SAN string — anything `Engine::apply` accepts.
pub enum MoveInput<'a> {
    Move(Move),
    San(&'a str),
}

impl From<Move> for MoveInput<'_> {
    fn from(mv: Move) -> Self {
        MoveInput::Move(mv)
    }
}

impl<'a> From<&'a str> for MoveInput<'a> {
    fn from(s: &'a str) -> Self {
        MoveInput::San(s)
    }
}

impl<'a> From<&'a String> for MoveInput<'a> {
    fn from(s: &'a String) -> Self {
        MoveInput::San(s.as_str())
    }
}

/// A read-only view of one square, for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<PieceKind>,
    pub color: Option<Color>,
    pub is_heroic: bool,
    pub stack_contents: Option<Vec<PieceSlot>>,
}

fn square_view(board: &Board, sq: Square) -> SquareView {
    match board.piece_at(sq) {
        None => SquareView {
            square: sq,
            piece: None,
            color: None,
            is_heroic: false,
            stack_contents: None,
        },
        Some(content) => {
            let carrier = content.carrier();
            SquareView {
                square: sq,
                piece: Some(carrier.kind),
                color: Some(carrier.color),
                is_heroic: carrier.heroic,
                stack_contents: match content {
                    PieceContent::Single(_) => None,
                    PieceContent::Stack { carried, .. } => Some(carried.clone()),
                },
            }
        }
    }
}

/// The result of a successful `apply`/`commit_deploy` call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplyResult {
    pub mv: Move,
    pub status: Status,
}

/// Whether `commit_deploy` would currently succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanCommit {
    pub can_commit: bool,
    pub reason: Option<String>,
}

/// A read-only view of the active deploy session, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploySnapshot {
    pub origin: Square,
    pub color: Color,
    pub remaining: Vec<PieceSlot>,
    pub stayed: Vec<PieceSlot>,
    pub moved: Vec<(PieceKind, Square)>,
}

fn deploy_snapshot(board: &Board) -> Option<DeploySnapshot> {
    board.deploy_session().map(|s| DeploySnapshot {
        origin: s.origin(),
        color: s.color(),
        remaining: s.remaining().to_vec(),
        stayed: s.stayed().to_vec(),
        moved: s
            .steps()
            .iter()
            .map(|step| (step.piece.kind, step.destination))
            .collect(),
    })
}

/// One undo frame: the move that was applied and what is needed to reverse
/// it on `Board`.
struct HistoryEntry {
    mv: Move,
    undo: crate::board::make_unmake::UndoRecord,
}

/// The stateful game session external callers drive.
pub struct Engine {
    board: Board,
    history: Vec<HistoryEntry>,
    config: EngineConfig,
}

impl Engine {
    /// Start a new game from `fen`, or the canonical starting position when
    /// `None`, using the default `EngineConfig` (stalemate counts as a loss).
    pub fn new_game(fen: Option<&str>) -> Result<Engine, EngineError> {
        Engine::new_with_config(fen, EngineConfig::default())
    }

    /// Start a new game with an explicit `EngineConfig`.
    pub fn new_with_config(fen: Option<&str>, config: EngineConfig) -> Result<Engine, EngineError> {
        let board = match fen {
            Some(f) => crate::board::fen::parse(f)?,
            None => BoardBuilder::starting_position().build(),
        };
        Ok(Engine {
            board,
            history: Vec::new(),
            config,
        })
    }

    #[must_use]
    pub fn fen(&self) -> String {
        crate::board::fen::serialize(&self.board)
    }

    #[must_use]
    pub fn board_view(&self) -> Vec<SquareView> {
        (0..crate::board::types::NUM_SQUARES)
            .map(|idx| square_view(&self.board, Square::from_index(idx)))
            .collect()
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn legal_moves(&mut self, from: Option<Square>) -> MoveList {
        self.board.legal_moves(from)
    }

    #[must_use]
    pub fn status(&mut self) -> Status {
        self.board.status()
    }

    /// The game-ending outcome for the side to move, resolving stalemate per
    /// this engine's configured `EngineConfig`.
    #[must_use]
    pub fn outcome(&mut self) -> Outcome {
        let side = self.turn();
        status::outcome(&mut self.board, side, self.config)
    }

    /// Whether `color`'s commander is presently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    #[must_use]
    pub fn history(&self) -> Vec<Move> {
        self.history.iter().map(|e| e.mv.clone()).collect()
    }

    #[must_use]
    pub fn deploy_session(&self) -> Option<DeploySnapshot> {
        deploy_snapshot(&self.board)
    }

    /// Resolve `input` into a concrete legal `Move`. SAN strings are matched
    /// against the side-to-move's current legal moves (or, mid-deploy,
    /// against the active session's own candidates).
    fn resolve(&mut self, input: MoveInput<'_>) -> Result<Move, EngineError> {
        match input {
            MoveInput::Move(mv) => Ok(mv),
            MoveInput::San(text) => {
                if self.board.deploy_session().is_some() {
                    return Err(EngineError::Deploy(DeployError::DeployAlreadyActive));
                }
                san::parse_san(&mut self.board, text).map_err(|e| match e {
                    MoveError::AmbiguousMove { .. } => EngineError::SanAmbiguous(e),
                    other => EngineError::IllegalMove(other),
                })
            }
        }
    }

    /// Apply a legal move or SAN string, switching the side to move unless
    /// it starts (but does not finish) a deploy turn.
    pub fn apply<'a>(&mut self, input: impl Into<MoveInput<'a>>) -> Result<ApplyResult, EngineError> {
        let mv = self.resolve(input.into())?;

        let is_legal = self
            .board
            .legal_moves(None)
            .iter()
            .any(|m| *m == mv);
        if !is_legal {
            return Err(EngineError::IllegalMove(MoveError::IllegalMove {
                notation: mv.to_string(),
            }));
        }

        let undo = self.board.apply(&mv);
        self.history.push(HistoryEntry {
            mv: mv.clone(),
            undo,
        });
        Ok(ApplyResult {
            mv,
            status: self.board.status(),
        })
    }

    /// Undo the last applied action. Mid-deploy, this reverses one deploy
    /// step (or the session start itself) without touching the history of
    /// completed turns; otherwise it reverses the last completed turn.
    /// Returns `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        if self.board.deploy_session().is_some() {
            return self.board.undo_last_deploy_action();
        }
        let entry = self.history.pop()?;
        self.board.undo(&entry.mv, entry.undo);
        Some(entry.mv)
    }

    pub fn start_deploy(&mut self, square: Square) -> Result<DeploySnapshot, EngineError> {
        self.board.start_deploy(square)?;
        Ok(deploy_snapshot(&self.board).expect("session active immediately after start_deploy"))
    }

    /// Apply one deploy element (`"Nd7"`, `"I-"`, or an explicit
    /// `DeployStay` `Move`) against the active session.
    pub fn deploy_apply<'a>(&mut self, input: impl Into<MoveInput<'a>>) -> Result<(), EngineError> {
        if self.board.deploy_session().is_none() {
            return Err(EngineError::Deploy(DeployError::NoActiveDeploy));
        }
        match input.into() {
            MoveInput::Move(mv) if mv.kind == MoveKind::DeployStay => {
                self.board.deploy_stay(mv.piece)?;
            }
            MoveInput::Move(mv) => {
                self.board.deploy_step(mv.piece, mv.to)?;
            }
            MoveInput::San(text) => {
                let elem = san::parse_deploy_element(text)
                    .map_err(EngineError::IllegalMove)?;
                match elem.destination {
                    None => self.board.deploy_stay(elem.piece)?,
                    Some(dest) => self.board.deploy_step(elem.piece, dest)?,
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn can_commit_deploy(&self) -> CanCommit {
        match self.board.deploy_session() {
            None => CanCommit {
                can_commit: false,
                reason: Some("no active deploy session".to_string()),
            },
            Some(session) if session.can_commit() => CanCommit {
                can_commit: true,
                reason: None,
            },
            Some(_) => CanCommit {
                can_commit: false,
                reason: Some("deploy session still has undeployed pieces".to_string()),
            },
        }
    }

    pub fn commit_deploy(&mut self) -> Result<ApplyResult, EngineError> {
        let origin = self
            .board
            .deploy_session()
            .map(|s| s.origin())
            .ok_or(DeployError::NoActiveDeploy)?;
        let color = self.board.side_to_move();
        self.board.commit_deploy()?;
        Ok(ApplyResult {
            mv: Move::deploy_commit(color, origin),
            status: self.board.status(),
        })
    }

    pub fn cancel_deploy(&mut self) -> Result<(), EngineError> {
        self.board.cancel_deploy()?;
        Ok(())
    }
}
