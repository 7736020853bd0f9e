//! Errors used throughout the engine.
//!
//! `MoveRejection` explains why the validator refused a move. It never
//! changes whether a move is accepted: a move is legal exactly when
//! `validate_move` returns `Ok`. `ChessErrors` covers the text codecs and
//! turn commitment on a `GameState`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Reason a move descriptor was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("origin and destination are the same square")]
    SameSquare,

    #[error("square index out of range")]
    OutOfBounds,

    #[error("no piece on the origin square")]
    EmptyOrigin,

    #[error("piece belongs to {0:?}, not the side to move")]
    WrongSideToMove(Color),

    #[error("destination holds a piece of the mover's own color")]
    OwnPieceOnDestination,

    #[error("destination holds a king")]
    KingOnDestination,

    #[error("piece cannot move that way")]
    IllegalGeometry,

    #[error("path between origin and destination is blocked")]
    BlockedPath,

    #[error("promotion piece missing, forbidden or of the wrong kind")]
    IllegalPromotion,

    #[error("en passant is not available here")]
    InvalidEnPassant,

    #[error("castling right already lost")]
    LostCastlingRight,

    #[error("squares between king and rook are not clear, or the rook is missing")]
    CastlingPathBlocked,

    #[error("king is in check or would pass through an attacked square")]
    CastlingThroughCheck,

    #[error("move leaves the mover's own king in check")]
    ExposesOwnKing,
}

/// Unified error type for parsing and game-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A coordinate had a file outside `a..=h` or a rank outside `1..=8`.
    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(Square),

    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    #[error("invalid promotion piece character: {0:?}")]
    InvalidPromotionChar(char),

    #[error("invalid board diagram: {0}")]
    InvalidBoardDiagram(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: MoveRejection },

    /// The engine option name is not recognised.
    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },
}
