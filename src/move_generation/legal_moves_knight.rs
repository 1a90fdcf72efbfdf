//! Knight move generation: fixed L-shaped jumps.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, piece, &KNIGHT_OFFSETS, out);
}
