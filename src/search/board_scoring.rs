//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so alternate heuristics can be swapped without altering search code.

use crate::game_state::game_state::GameState;

/// Score for a position where White is checkmated.
pub const WHITE_MATED_SCORE: i32 = i32::MIN;
/// Score for a position where Black is checkmated.
pub const BLACK_MATED_SCORE: i32 = i32::MAX;

#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score == WHITE_MATED_SCORE || score == BLACK_MATED_SCORE
}

pub trait BoardScorer: Send + Sync {
    /// Static score from White's point of view: positive favors White.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Sum of signed piece values over the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .occupied_squares()
            .map(|(_, piece)| piece.value())
            .sum()
    }
}
