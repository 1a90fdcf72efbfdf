//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by game logic, position
//! parsing, move generation, search, and the turn coordinator. Variants fall
//! into two groups:
//!
//! - Contract violations (`MoveAlreadyExecuted`, `MoveNotExecuted`,
//!   `MissingKing`, `InvalidCastlingRights`) indicate a caller bug. They abort
//!   the operation and are never expected during correct coordinator usage.
//! - Input and runtime failures (`InvalidFen`, `InvalidAlgebraic`,
//!   `IllegalMove`, `SearchWorkerPanicked`, ...) are recoverable and suitable
//!   for presenting to an end user.
//!
//! A search deadline running out is not an error. Search functions report it
//! as `Ok(None)`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("move {0} has already been executed")]
    MoveAlreadyExecuted(String),

    #[error("move {0} has not been executed and cannot be undone")]
    MoveNotExecuted(String),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("castling rights need exactly 4 flags, got {len}")]
    InvalidCastlingRights { len: usize },

    #[error("square ({file}, {rank}) is off the board")]
    InvalidSquare { file: i8, rank: i8 },

    #[error("invalid algebraic text: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("no piece on {0}")]
    NoPieceOnSquare(Square),

    #[error("nothing to take back")]
    NothingToUndo,

    #[error("search worker thread panicked")]
    SearchWorkerPanicked,

    #[error("could not start search worker: {0}")]
    SearchWorkerSpawn(String),

    #[error("shared game state lock was poisoned")]
    StatePoisoned,

    #[error("move input closed before a move was chosen")]
    InputClosed,
}

pub type ChessResult<T> = Result<T, ChessError>;
