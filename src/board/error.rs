//! Error types for CoTuLenh board operations.

use std::fmt;

/// Error parsing a FEN-like position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    TooFewParts { found: usize },
    InvalidPiece { char: char },
    InvalidRank { rank: usize },
    TooManyFiles { rank: usize, files: usize },
    InvalidSideToMove { found: String },
    InvalidStackNotation { found: String },
    InvalidDeployState { found: String },
    IllegalStackComposition { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRank { rank } => write!(f, "Invalid rank index {rank} in FEN"),
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'r' or 'b'")
            }
            FenError::InvalidStackNotation { found } => {
                write!(f, "Invalid stack notation '{found}'")
            }
            FenError::InvalidDeployState { found } => {
                write!(f, "Invalid deploy-state field '{found}'")
            }
            FenError::IllegalStackComposition { found } => {
                write!(f, "Illegal stack composition '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error parsing a square in algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-11)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-10)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error parsing or resolving a move (covers SAN and `IllegalMove`/`SANAmbiguous`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    Empty,
    InvalidPiece { char: char },
    InvalidSquare { notation: String },
    AmbiguousMove { notation: String },
    IllegalMove { notation: String },
    InvalidDeploySequence { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Empty => write!(f, "Empty move notation"),
            MoveError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in move notation")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square in move notation '{notation}'")
            }
            MoveError::AmbiguousMove { notation } => {
                write!(f, "Ambiguous move '{notation}'")
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveError::InvalidDeploySequence { notation } => {
                write!(f, "Invalid deploy sequence '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Internal invariant violation on stack or board structure. Should never
/// surface in correct use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    InvalidSquare { index: usize },
    TooManyCarried { count: usize, max: usize },
    DuplicateType { kind: String },
    MixedColor,
    IllegalComposition,
    DuplicateCommander,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::InvalidSquare { index } => write!(f, "square index {index} out of range"),
            StackError::TooManyCarried { count, max } => {
                write!(f, "stack has {count} carried pieces, max is {max}")
            }
            StackError::DuplicateType { kind } => {
                write!(f, "duplicate piece type '{kind}' within stack")
            }
            StackError::MixedColor => write!(f, "stack contains pieces of mixed color"),
            StackError::IllegalComposition => {
                write!(f, "stack composition is not in the legal carrier table")
            }
            StackError::DuplicateCommander => {
                write!(f, "a color may not have more than one commander")
            }
        }
    }
}

impl std::error::Error for StackError {}

/// Deploy-session state misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    NoStackHere,
    WrongColor,
    DeployAlreadyActive,
    NoActiveDeploy,
    IllegalDeployCommit { reason: String },
    PieceNotInSession,
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::NoStackHere => write!(f, "no stack on the given square"),
            DeployError::WrongColor => write!(f, "stack does not belong to the side to move"),
            DeployError::DeployAlreadyActive => write!(f, "a deploy session is already active"),
            DeployError::NoActiveDeploy => write!(f, "no active deploy session"),
            DeployError::IllegalDeployCommit { reason } => {
                write!(f, "cannot commit deploy: {reason}")
            }
            DeployError::PieceNotInSession => {
                write!(f, "piece is not part of the active deploy session")
            }
        }
    }
}

impl std::error::Error for DeployError {}
