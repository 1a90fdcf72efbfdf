//! Iterative deepening over the alpha-beta search.
//!
//! Searches depth 1, 2, 3, ... against a wall-clock deadline captured at the
//! start. Each completed depth replaces the answer; an aborted depth is
//! discarded, so the result is always the deepest fully searched one. The
//! previous best move is tried first at the next depth.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{classify_node, search_root, NodeOutcome, SearchContext, MAX_SEARCH_PLY};
use crate::search::board_scoring::{is_mate_score, BoardScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub movetime_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_PLY,
            movetime_ms: 2_000,
        }
    }
}

/// Why the deepening loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTermination {
    /// Every depth up to `max_depth` completed.
    DepthExhausted,
    /// The deadline passed inside a depth.
    TimeExpired,
    /// A completed depth proved a forced mate; deeper searches cannot change it.
    MateFound,
    /// Nothing to search: the side to move is mated or stalemated, or `max_depth` is 0.
    NoSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub termination: SearchTermination,
}

pub fn iterative_deepening_search(
    game_state: &GameState,
    scorer: &dyn BoardScorer,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let started = Instant::now();
    let deadline = started + Duration::from_millis(config.movetime_ms);

    let mut result = SearchResult {
        best_move: None,
        best_score: 0,
        reached_depth: 0,
        nodes: 0,
        elapsed_ms: 0,
        termination: SearchTermination::NoSearch,
    };

    let root_moves = match classify_node(game_state, scorer, config.max_depth, 0)? {
        NodeOutcome::Leaf(score) => {
            result.best_score = score;
            result.nodes = 1;
            return Ok(result);
        }
        NodeOutcome::Expand(moves) => moves,
    };
    debug!(root_moves = root_moves.len(), max_depth = config.max_depth, "search started");

    let mut scratch = game_state.snapshot();
    let mut ctx = SearchContext::new(scorer, Some(deadline));
    result.termination = SearchTermination::DepthExhausted;

    for depth in 1..=config.max_depth {
        let Some((best_move, best_score)) =
            search_root(&mut scratch, &mut ctx, depth, result.best_move.as_ref())?
        else {
            result.termination = SearchTermination::TimeExpired;
            break;
        };

        result.best_move = Some(best_move);
        result.best_score = best_score;
        result.reached_depth = depth;
        debug!(
            depth,
            score = best_score,
            nodes = ctx.nodes(),
            best = %best_move,
            "depth completed"
        );

        if is_mate_score(best_score) {
            result.termination = SearchTermination::MateFound;
            break;
        }
    }

    result.nodes = ctx.nodes();
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    Ok(result)
}
