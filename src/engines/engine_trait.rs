//! Player abstraction used by the turn coordinator.
//!
//! Every move source (search engine, random mover, human input) sits behind
//! `Player`, so either side of a game can be any of them.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub trait Player: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move of `game_state`. `None` only when
    /// that side has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<Move>>;
}

/// Resolves which piece a pawn becomes when a picked (from, to) pair matches
/// several promotion moves.
pub trait PromotionChooser {
    /// `candidates` is never empty.
    fn choose_promotion(&mut self, candidates: &[PieceKind]) -> PieceKind;
}

/// Always the same piece, falling back to the first candidate if it is not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub PieceKind);

impl Default for FixedPromotion {
    fn default() -> Self {
        Self(PieceKind::Queen)
    }
}

impl PromotionChooser for FixedPromotion {
    fn choose_promotion(&mut self, candidates: &[PieceKind]) -> PieceKind {
        if candidates.contains(&self.0) {
            self.0
        } else {
            candidates.first().copied().unwrap_or(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_promotion_prefers_its_piece() {
        let mut chooser = FixedPromotion(PieceKind::Rook);
        assert_eq!(chooser.choose_promotion(&PieceKind::PROMOTIONS), PieceKind::Rook);
        assert_eq!(chooser.choose_promotion(&[PieceKind::Bishop]), PieceKind::Bishop);
        assert_eq!(FixedPromotion::default().0, PieceKind::Queen);
    }
}
