//! Pseudo-legal generation: every move that follows a piece's pattern,
//! before self-check filtering. Castling is not part of this set.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Signature shared by the per-piece generators.
pub type PieceMoveFn = fn(&GameState, Square, Piece, &mut Vec<Move>);

#[inline]
pub fn generator_for(kind: PieceKind) -> PieceMoveFn {
    match kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    }
}

/// Pseudo-legal moves of the piece on `square`; empty for an empty square.
pub fn pseudo_moves_for_square(game_state: &GameState, square: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(piece) = game_state.board().get(square) {
        generator_for(piece.kind)(game_state, square, piece, &mut out);
    }
    out
}

pub fn pseudo_moves_for_color(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (square, piece) in game_state.board().all_occupied(color) {
        generator_for(piece.kind)(game_state, square, piece, &mut out);
    }
    out
}
