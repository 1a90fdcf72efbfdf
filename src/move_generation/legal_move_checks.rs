//! Square attack detection from piece capture patterns.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};

/// Whether any piece of `attacker_color` could capture on `square` by its
/// attack pattern. Pawns attack diagonally only; castling never attacks.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn of the attacker attacks `square` if it stands one rank behind it
    // (from the attacker's point of view) on an adjacent file.
    let pawn = Piece::new(PieceKind::Pawn, attacker_color);
    let behind = -attacker_color.forward();
    for file_step in [-1i8, 1] {
        if square
            .offset(file_step, behind)
            .is_some_and(|from| board.get(from) == Some(pawn))
        {
            return true;
        }
    }

    let knight = Piece::new(PieceKind::Knight, attacker_color);
    if any_step_holds(board, square, &KNIGHT_OFFSETS, |p| p == knight) {
        return true;
    }

    let king = Piece::new(PieceKind::King, attacker_color);
    if any_step_holds(board, square, &KING_OFFSETS, |p| p == king) {
        return true;
    }

    let diagonal_slider = |p: Piece| {
        p.color == attacker_color && matches!(p.kind, PieceKind::Bishop | PieceKind::Queen)
    };
    if any_ray_hits(board, square, &DIAGONAL, diagonal_slider) {
        return true;
    }

    let straight_slider = |p: Piece| {
        p.color == attacker_color && matches!(p.kind, PieceKind::Rook | PieceKind::Queen)
    };
    any_ray_hits(board, square, &ORTHOGONAL, straight_slider)
}

#[inline]
fn any_step_holds(
    board: &Board,
    square: Square,
    offsets: &[(i8, i8)],
    matches: impl Fn(Piece) -> bool,
) -> bool {
    offsets.iter().any(|&(file_step, rank_step)| {
        square
            .offset(file_step, rank_step)
            .and_then(|from| board.get(from))
            .is_some_and(&matches)
    })
}

/// First occupied square along each ray decides; anything behind it is shielded.
fn any_ray_hits(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    matches: impl Fn(Piece) -> bool,
) -> bool {
    for &(file_step, rank_step) in directions {
        let mut cursor = square.offset(file_step, rank_step);
        while let Some(at) = cursor {
            if let Some(piece) = board.get(at) {
                if matches(piece) {
                    return true;
                }
                break;
            }
            cursor = at.offset(file_step, rank_step);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn board(fen: &str) -> Board {
        GameState::from_fen(fen).expect("fen").board().clone()
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let b = board("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert!(is_square_attacked(&b, sq("d5"), Color::White));
        assert!(is_square_attacked(&b, sq("f5"), Color::White));
        assert!(!is_square_attacked(&b, sq("e5"), Color::White));
        assert!(!is_square_attacked(&b, sq("d3"), Color::White));

        let b = board("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
        assert!(is_square_attacked(&b, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&b, sq("d6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let b = board("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        assert!(is_square_attacked(&b, sq("c4"), Color::Black));
        assert!(is_square_attacked(&b, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&b, sq("e4"), Color::Black));
        assert!(!is_square_attacked(&b, sq("h4"), Color::Black));
    }

    #[test]
    fn queen_knight_and_king_patterns() {
        let b = board("4k3/8/8/8/5n2/8/8/Q3K3 w - - 0 1");
        assert!(is_square_attacked(&b, sq("h8"), Color::White));
        assert!(is_square_attacked(&b, sq("e2"), Color::Black));
        assert!(is_square_attacked(&b, sq("d7"), Color::Black));
        assert!(!is_square_attacked(&b, sq("c2"), Color::Black));
    }
}
