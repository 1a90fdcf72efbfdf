//! Full legal move generation pipeline.
//!
//! Runs piece-wise pseudo-legal generation, plays each candidate on a scratch
//! copy, drops those that leave the mover's king attacked, and finally appends
//! the castling moves, which carry their own safety test.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::PromotionChooser;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::moves::chess_move::Move;

pub fn generate_legal_moves(game_state: &GameState, color: Color) -> ChessResult<Vec<Move>> {
    game_state.king_square(color)?;

    let pseudo = game_state.pseudo_moves(color);
    let mut scratch = game_state.snapshot();
    let mut legal = Vec::<Move>::with_capacity(pseudo.len() + 2);

    for candidate in pseudo {
        let mut mv = *candidate;
        scratch.execute(&mut mv)?;

        // Illegal if own king is attacked after the move.
        let king = scratch.king_square(color)?;
        let exposed = is_square_attacked(scratch.board(), king, color.opposite());

        scratch.undo(&mut mv)?;
        if !exposed {
            legal.push(*candidate);
        }
    }

    generate_castling_moves(game_state, color, &mut legal);
    Ok(legal)
}

/// Matches a (from, to) pick against the legal moves of the piece on `from`.
///
/// Returns `None` when nothing matches. Several matches only happen for a
/// promotion, in which case `chooser` picks the replacement piece.
pub fn select_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    chooser: &mut dyn PromotionChooser,
) -> ChessResult<Option<Move>> {
    let candidates: Vec<Move> = game_state
        .legal_moves_from(from)?
        .into_iter()
        .filter(|mv| mv.end() == to)
        .collect();

    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.first().copied()),
        _ => {
            let kinds: Vec<PieceKind> = candidates.iter().filter_map(Move::promotion_kind).collect();
            let chosen = chooser.choose_promotion(&kinds);
            candidates
                .into_iter()
                .find(|mv| mv.promotion_kind() == Some(chosen))
                .map(Some)
                .ok_or_else(|| {
                    ChessError::IllegalMove(format!("{from}{to}{}", chosen.letter()))
                })
        }
    }
}
