//! Rook move generation along files and ranks.
//!
//! Rays stop at the board edge, before a friendly piece, or on an enemy
//! piece, which is emitted as a capture.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_ray_moves, ORTHOGONAL};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, piece, &ORTHOGONAL, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let game = GameState::from_fen("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("fen");
        let mut out = Vec::new();
        generate_rook_moves(&game, sq("d4"), Piece::new(PieceKind::Rook, Color::White), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let game = GameState::from_fen("k7/8/8/8/p7/8/P7/R6K w - - 0 1").expect("fen");
        let mut out = Vec::new();
        generate_rook_moves(&game, sq("a1"), Piece::new(PieceKind::Rook, Color::White), &mut out);

        // b1..g1 along the rank; the friendly pawn on a2 blocks the file.
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|mv| mv.end().rank() == 1));
        assert!(!out.iter().any(|mv| mv.end() == sq("h1")));
    }

    #[test]
    fn enemy_blocker_is_captured_then_ray_stops() {
        let game = GameState::from_fen("k7/8/8/8/p7/8/8/R6K w - - 0 1").expect("fen");
        let mut out = Vec::new();
        generate_rook_moves(&game, sq("a1"), Piece::new(PieceKind::Rook, Color::White), &mut out);

        let capture = out
            .iter()
            .find(|mv| mv.end() == sq("a4"))
            .expect("capture on a4");
        assert_eq!(capture.captured(), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!out.iter().any(|mv| mv.end() == sq("a5")));
    }
}
