//! Player fed by an external decision source, such as a human at a terminal.
//!
//! The source supplies a (from, to) pair; the pair is matched against the
//! legal moves of the position and, for promotions, the source also picks the
//! replacement piece. Pairs that match nothing are rejected and asked again.

use std::io::BufRead;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Player, PromotionChooser};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::select_move;
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::parse_long_algebraic;

pub trait MoveInput: PromotionChooser + Send {
    /// Blocks until the source names a start and target square.
    fn select_squares(&mut self, game_state: &GameState) -> ChessResult<(Square, Square)>;

    /// Called when the last pair matched no legal move.
    fn reject(&mut self, _from: Square, _to: Square) {}
}

pub struct ExternalPlayer<I: MoveInput> {
    name: String,
    input: I,
}

impl<I: MoveInput> ExternalPlayer<I> {
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<I: MoveInput> Player for ExternalPlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<Move>> {
        if game_state.legal_moves(game_state.side_to_move())?.is_empty() {
            return Ok(None);
        }

        loop {
            let (from, to) = self.input.select_squares(game_state)?;
            if let Some(mv) = select_move(game_state, from, to, &mut self.input)? {
                return Ok(Some(mv));
            }
            self.input.reject(from, to);
        }
    }
}

/// Reads long algebraic moves (`e2e4`, `e7e8n`), one per line.
///
/// A promotion letter on the line picks the piece; without one the pawn
/// becomes a queen. End of input is reported as `InputClosed`.
///
/// Several inputs may draw from one reader (two humans on one stdin), each
/// taking the next line when its side is to move.
pub struct LineInput<R: BufRead + Send> {
    reader: Arc<Mutex<R>>,
    pending_promotion: Option<PieceKind>,
}

impl<R: BufRead + Send> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self::shared(Arc::new(Mutex::new(reader)))
    }

    pub fn shared(reader: Arc<Mutex<R>>) -> Self {
        Self {
            reader,
            pending_promotion: None,
        }
    }
}

impl<R: BufRead + Send> PromotionChooser for LineInput<R> {
    fn choose_promotion(&mut self, candidates: &[PieceKind]) -> PieceKind {
        let wanted = self.pending_promotion.take().unwrap_or(PieceKind::Queen);
        if candidates.contains(&wanted) {
            wanted
        } else {
            candidates.first().copied().unwrap_or(wanted)
        }
    }
}

impl<R: BufRead + Send> MoveInput for LineInput<R> {
    fn select_squares(&mut self, _game_state: &GameState) -> ChessResult<(Square, Square)> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .lock()
                .map_err(|_| ChessError::InputClosed)?
                .read_line(&mut line)
                .map_err(|_| ChessError::InputClosed)?;
            if read == 0 {
                return Err(ChessError::InputClosed);
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_long_algebraic(&line) {
                Ok((from, to, promotion)) => {
                    self.pending_promotion = promotion;
                    return Ok((from, to));
                }
                Err(err) => warn!(input = line.trim(), %err, "unreadable move"),
            }
        }
    }

    fn reject(&mut self, from: Square, to: Square) {
        self.pending_promotion = None;
        warn!(%from, %to, "no legal move matches");
    }
}
