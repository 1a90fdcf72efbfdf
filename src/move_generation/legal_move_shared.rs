//! Helpers shared by the per-piece generators: direction tables, ray walks,
//! and fixed-offset steps.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Plain move from `from` to `to`, capturing whatever enemy piece stands there.
#[inline]
pub fn build_move(game_state: &GameState, piece: Piece, from: Square, to: Square) -> Move {
    Move::normal(
        piece,
        from,
        to,
        game_state.board().get(to),
        game_state.castling_rights(),
        game_state.last_move(),
    )
}

/// Walks each ray outward until the edge, a friendly piece (excluded), or an
/// enemy piece (included, then stop).
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for &(file_step, rank_step) in directions {
        let mut cursor = from.offset(file_step, rank_step);
        while let Some(to) = cursor {
            match board.get(to) {
                None => out.push(build_move(game_state, piece, from, to)),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(build_move(game_state, piece, from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(file_step, rank_step);
        }
    }
}

/// Single steps onto in-board squares not held by a friendly piece.
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let board = game_state.board();
    for &(file_step, rank_step) in offsets {
        let Some(to) = from.offset(file_step, rank_step) else {
            continue;
        };
        if board.get(to).is_some_and(|other| other.color == piece.color) {
            continue;
        }
        out.push(build_move(game_state, piece, from, to));
    }
}
