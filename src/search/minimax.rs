//! Full-width minimax reference search.
//!
//! Shares node classification and forced-move depth handling with the
//! alpha-beta search but never prunes, so the two must agree on every value.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::search::alpha_beta::{child_depth, classify_node, NodeOutcome};
use crate::search::board_scoring::BoardScorer;

pub fn minimax_value(game_state: &GameState, scorer: &dyn BoardScorer, depth: u8) -> ChessResult<i32> {
    let mut scratch = game_state.snapshot();
    minimax(&mut scratch, scorer, depth, 0)
}

fn minimax(game_state: &mut GameState, scorer: &dyn BoardScorer, depth_left: u8, ply: u8) -> ChessResult<i32> {
    let moves = match classify_node(game_state, scorer, depth_left, ply)? {
        NodeOutcome::Leaf(score) => return Ok(score),
        NodeOutcome::Expand(moves) => moves,
    };

    let maximizing = game_state.side_to_move() == Color::White;
    let next_depth = child_depth(moves.len(), depth_left);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mut mv in moves {
        game_state.execute(&mut mv)?;
        let score = minimax(game_state, scorer, next_depth, ply + 1);
        game_state.undo(&mut mv)?;
        let score = score?;

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alpha_beta::alpha_beta_value;
    use crate::search::board_scoring::MaterialScorer;

    const SAMPLE_POSITIONS: [&str; 4] = [
        // Qxf7 mates.
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        // Queen trade available, rooks on open files.
        "3rk3/8/8/3q4/8/8/3Q4/3RK3 w - - 0 1",
        // Rooks facing each other over weak back ranks.
        "6k1/5ppp/8/8/8/8/5PPP/1r2R1K1 w - - 0 1",
        // Promotion race.
        "8/1P4k1/8/8/8/8/6p1/1K6 w - - 0 1",
    ];

    #[test]
    fn alpha_beta_matches_minimax_at_depth_two() {
        for fen in SAMPLE_POSITIONS {
            let game = GameState::from_fen(fen).expect("fen");
            assert_eq!(
                alpha_beta_value(&game, &MaterialScorer, 2).expect("alpha-beta"),
                minimax_value(&game, &MaterialScorer, 2).expect("minimax"),
                "value mismatch for {fen}"
            );
        }
    }

    #[test]
    fn alpha_beta_matches_minimax_at_depth_three_in_endgames() {
        for fen in &SAMPLE_POSITIONS[1..] {
            let game = GameState::from_fen(fen).expect("fen");
            assert_eq!(
                alpha_beta_value(&game, &MaterialScorer, 3).expect("alpha-beta"),
                minimax_value(&game, &MaterialScorer, 3).expect("minimax"),
                "value mismatch for {fen}"
            );
        }
    }

    #[test]
    fn minimax_sees_the_mate_in_one() {
        let game = GameState::from_fen(SAMPLE_POSITIONS[0]).expect("fen");
        assert_eq!(minimax_value(&game, &MaterialScorer, 1).expect("minimax"), i32::MAX);
    }
}
