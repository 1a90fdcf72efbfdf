//! Move-path enumeration for validating the generator against reference
//! counts. Leaves are tallied by category as well as in total.

use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = game_state.snapshot();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Same counts as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = game_state.legal_moves(game_state.side_to_move())?.to_vec();
    let mut handles = Vec::with_capacity(root_moves.len());

    for root in root_moves {
        let mut local_state = game_state.snapshot();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let mut mv = root;
            local_state.execute(&mut mv)?;
            perft_recurse(&mut local_state, depth - 1, &mut local)?;
            Ok::<PerftCounts, ChessError>(local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::SearchWorkerPanicked)??;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let side = game_state.side_to_move();
    let moves = game_state.legal_moves(side)?.to_vec();

    for mut mv in moves {
        game_state.execute(&mut mv)?;
        if depth <= 1 {
            tally_leaf(game_state, &mv, counts)?;
        } else {
            perft_recurse(game_state, depth - 1, counts)?;
        }
        game_state.undo(&mut mv)?;
    }

    Ok(())
}

/// `game_state` is the position right after `mv`.
fn tally_leaf(game_state: &GameState, mv: &Move, counts: &mut PerftCounts) -> ChessResult<()> {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.promotion_kind().is_some() {
        counts.promotions += 1;
    }

    let defender = game_state.side_to_move();
    if game_state.is_checked(defender) {
        counts.checks += 1;
        if game_state.legal_moves(defender)?.is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}
