//! Deadline-aware minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes over white-positive scores. The
//! search mutates one scratch state through execute/undo, so callers must
//! hand it a private snapshot. A passed deadline makes every function here
//! return `Ok(None)`, and each frame undoes its move before passing that up.

use std::time::Instant;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, BLACK_MATED_SCORE, WHITE_MATED_SCORE};

/// Hard ceiling on recursion; forced replies do not spend depth, so this bounds them.
pub const MAX_SEARCH_PLY: u8 = 64;

pub struct SearchContext<'a> {
    scorer: &'a dyn BoardScorer,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(scorer: &'a dyn BoardScorer, deadline: Option<Instant>) -> Self {
        Self {
            scorer,
            deadline,
            nodes: 0,
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() > deadline)
    }
}

pub(crate) enum NodeOutcome {
    Leaf(i32),
    Expand(Vec<Move>),
}

/// Mate is checked before the depth bound; stalemate scores 0.
pub(crate) fn classify_node(
    game_state: &GameState,
    scorer: &dyn BoardScorer,
    depth_left: u8,
    ply: u8,
) -> ChessResult<NodeOutcome> {
    let side = game_state.side_to_move();
    let moves = game_state.legal_moves(side)?;

    if moves.is_empty() {
        let score = match (game_state.is_checked(side), side) {
            (true, Color::White) => WHITE_MATED_SCORE,
            (true, Color::Black) => BLACK_MATED_SCORE,
            (false, _) => 0,
        };
        return Ok(NodeOutcome::Leaf(score));
    }

    if depth_left == 0 || ply >= MAX_SEARCH_PLY {
        return Ok(NodeOutcome::Leaf(scorer.score(game_state)));
    }

    Ok(NodeOutcome::Expand(moves.to_vec()))
}

/// A single legal reply is explored without spending depth.
#[inline]
pub(crate) fn child_depth(move_count: usize, depth_left: u8) -> u8 {
    if move_count == 1 {
        depth_left
    } else {
        depth_left.saturating_sub(1)
    }
}

pub fn alpha_beta(
    game_state: &mut GameState,
    ctx: &mut SearchContext<'_>,
    depth_left: u8,
    ply: u8,
    mut alpha: i32,
    mut beta: i32,
) -> ChessResult<Option<i32>> {
    if ctx.expired() {
        return Ok(None);
    }
    ctx.nodes += 1;

    let moves = match classify_node(game_state, ctx.scorer, depth_left, ply)? {
        NodeOutcome::Leaf(score) => return Ok(Some(score)),
        NodeOutcome::Expand(moves) => moves,
    };

    let maximizing = game_state.side_to_move() == Color::White;
    let next_depth = child_depth(moves.len(), depth_left);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mut mv in moves {
        game_state.execute(&mut mv)?;
        let child = alpha_beta(game_state, ctx, next_depth, ply + 1, alpha, beta);
        game_state.undo(&mut mv)?;

        let Some(score) = child? else {
            return Ok(None);
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(Some(best))
}

/// Best root move and its score at `depth`, or `None` when the deadline passed.
///
/// `preferred` is searched first. A later move replaces the current best
/// only with a strictly better score.
pub fn search_root(
    game_state: &mut GameState,
    ctx: &mut SearchContext<'_>,
    depth: u8,
    preferred: Option<&Move>,
) -> ChessResult<Option<(Move, i32)>> {
    if ctx.expired() {
        return Ok(None);
    }
    ctx.nodes += 1;

    let side = game_state.side_to_move();
    let mut moves = game_state.legal_moves(side)?.to_vec();
    if let Some(preferred) = preferred {
        if let Some(index) = moves.iter().position(|mv| mv.same_action(preferred)) {
            moves[..=index].rotate_right(1);
        }
    }
    let Some(first) = moves.first().copied() else {
        return Ok(None);
    };

    let maximizing = side == Color::White;
    let next_depth = child_depth(moves.len(), depth);
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best_move = first;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for candidate in moves {
        let mut mv = candidate;
        game_state.execute(&mut mv)?;
        let child = alpha_beta(game_state, ctx, next_depth, 1, alpha, beta);
        game_state.undo(&mut mv)?;

        let Some(score) = child? else {
            return Ok(None);
        };

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = candidate;
        }
        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(Some((best_move, best_score)))
}

/// Full-window alpha-beta value of `game_state` at `depth`, with no deadline.
pub fn alpha_beta_value(
    game_state: &GameState,
    scorer: &dyn BoardScorer,
    depth: u8,
) -> ChessResult<i32> {
    let mut scratch = game_state.snapshot();
    let mut ctx = SearchContext::new(scorer, None);
    let value = alpha_beta(&mut scratch, &mut ctx, depth, 0, i32::MIN, i32::MAX)?;
    // Without a deadline the search always completes.
    Ok(value.unwrap_or_default())
}
