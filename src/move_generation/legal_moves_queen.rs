//! Queen move generation: rook and bishop rays combined.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_ray_moves, DIAGONAL, ORTHOGONAL};
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, piece, &ORTHOGONAL, out);
    push_ray_moves(game_state, from, piece, &DIAGONAL, out);
}
