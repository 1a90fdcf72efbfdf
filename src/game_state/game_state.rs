//! Live game state: board, side to move, castling rights, last move, and
//! per-side move caches.
//!
//! The caches are derived data. Every execute or undo drops them, and they
//! are rebuilt in full the next time a query needs them. Pseudo-legal and
//! legal sets are cached separately per color.

use std::fmt;
use std::sync::OnceLock;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_generator::pseudo_moves_for_color;
use crate::moves::chess_move::{LastMove, Move};
use crate::moves::move_execution::{execute_move, undo_move};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Default)]
struct MoveCache {
    pseudo: [OnceLock<Vec<Move>>; 2],
    legal: [OnceLock<Vec<Move>>; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { loser: Color },
    Stalemate { stalemated: Color },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) last_move: Option<LastMove>,
    cache: MoveCache,
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.last_move == other.last_move
    }
}

impl Eq for GameState {}

impl GameState {
    /// Standard initial arrangement, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self::from_parts(Board::standard(), Color::White, CastlingRights::all(), None)
    }

    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights,
            last_move,
            cache: MoveCache::default(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Independent deep copy with empty caches, safe to hand to another thread.
    pub fn snapshot(&self) -> Self {
        Self::from_parts(
            self.board.clone(),
            self.side_to_move,
            self.castling_rights,
            self.last_move,
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.occupied()
    }

    pub fn execute(&mut self, mv: &mut Move) -> ChessResult<()> {
        execute_move(self, mv)
    }

    pub fn undo(&mut self, mv: &mut Move) -> ChessResult<()> {
        undo_move(self, mv)
    }

    pub(crate) fn invalidate_caches(&mut self) {
        self.cache = MoveCache::default();
    }

    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        self.board
            .king_square(color)
            .ok_or(ChessError::MissingKing(color))
    }

    /// Moves that follow piece patterns, ignoring self-check. No castling.
    pub fn pseudo_moves(&self, color: Color) -> &[Move] {
        self.cache.pseudo[color.index()].get_or_init(|| pseudo_moves_for_color(self, color))
    }

    pub fn legal_moves(&self, color: Color) -> ChessResult<&[Move]> {
        let cell = &self.cache.legal[color.index()];
        if let Some(moves) = cell.get() {
            return Ok(moves);
        }
        let moves = generate_legal_moves(self, color)?;
        Ok(cell.get_or_init(|| moves))
    }

    /// Legal moves of whichever piece stands on `square`; empty if none.
    pub fn legal_moves_from(&self, square: Square) -> ChessResult<Vec<Move>> {
        let Some(piece) = self.board.get(square) else {
            return Ok(Vec::new());
        };
        Ok(self
            .legal_moves(piece.color)?
            .iter()
            .filter(|mv| mv.start() == square)
            .copied()
            .collect())
    }

    /// Destination hints for the piece on `square`, one entry per square.
    pub fn legal_destinations(&self, square: Square) -> ChessResult<Vec<Square>> {
        let mut destinations: Vec<Square> = self
            .legal_moves_from(square)?
            .iter()
            .map(|mv| mv.end())
            .collect();
        destinations.sort();
        destinations.dedup();
        Ok(destinations)
    }

    /// Whether `color`'s king is attacked. A board without that king is never in check.
    pub fn is_checked(&self, color: Color) -> bool {
        self.board
            .king_square(color)
            .is_some_and(|king| is_square_attacked(&self.board, king, color.opposite()))
    }

    pub fn is_checkmate(&self, color: Color) -> ChessResult<bool> {
        Ok(self.is_checked(color) && self.legal_moves(color)?.is_empty())
    }

    pub fn is_stalemate(&self, color: Color) -> ChessResult<bool> {
        Ok(!self.is_checked(color) && self.legal_moves(color)?.is_empty())
    }

    /// Status from the point of view of the side to move.
    pub fn status(&self) -> ChessResult<GameStatus> {
        let side = self.side_to_move;
        if !self.legal_moves(side)?.is_empty() {
            return Ok(GameStatus::Ongoing);
        }
        if self.is_checked(side) {
            Ok(GameStatus::Checkmate { loser: side })
        } else {
            Ok(GameStatus::Stalemate { stalemated: side })
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
