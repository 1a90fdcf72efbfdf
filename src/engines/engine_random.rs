//! Random-move player.
//!
//! Selects uniformly from legal moves. Used for self-play diagnostics, weak
//! opponents, and as the search engine's fallback when no depth completed.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Player;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub fn pick_random_legal_move<R: Rng + ?Sized>(
    game_state: &GameState,
    rng: &mut R,
) -> ChessResult<Option<Move>> {
    let legal_moves = game_state.legal_moves(game_state.side_to_move())?;
    Ok(legal_moves.choose(rng).copied())
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible move sequence for tests and scripted self-play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<Move>> {
        pick_random_legal_move(game_state, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn random_engine_returns_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::seeded(7);
        for _ in 0..20 {
            let mv = engine.choose_move(&game).expect("choose").expect("a move");
            assert!(game
                .legal_moves(Color::White)
                .expect("moves")
                .iter()
                .any(|legal| legal.same_action(&mv)));
        }
    }

    #[test]
    fn same_seed_gives_same_choice() {
        let game = GameState::new_game();
        let first = RandomEngine::seeded(99).choose_move(&game).expect("choose");
        let second = RandomEngine::seeded(99).choose_move(&game).expect("choose");
        assert_eq!(first, second);
    }

    #[test]
    fn no_legal_moves_yields_none() {
        let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen");
        assert_eq!(RandomEngine::seeded(1).choose_move(&stalemate).expect("choose"), None);
    }
}
