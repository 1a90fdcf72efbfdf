//! King move generation, including castling candidates.
//!
//! Castling is produced here, at the king, but only when legal moves are
//! requested. Its safety test uses the attack patterns of the opponent's
//! pieces and never the opponent's check-filtered moves, so the two kings'
//! move sets cannot recurse into each other.

use crate::game_state::chess_rules::{castle_geometry, CastleSide};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, piece, &KING_OFFSETS, out);
}

pub fn generate_castling_moves(game_state: &GameState, color: Color, out: &mut Vec<Move>) {
    let board = game_state.board();
    let rights = game_state.castling_rights();
    let enemy = color.opposite();
    let king = Piece::new(PieceKind::King, color);
    let rook = Piece::new(PieceKind::Rook, color);

    for side in [CastleSide::Short, CastleSide::Long] {
        let allowed = match side {
            CastleSide::Short => rights.short(color),
            CastleSide::Long => rights.long(color),
        };
        if !allowed {
            continue;
        }

        let geometry = castle_geometry(color, side);
        if board.get(geometry.king_start) != Some(king) || board.get(geometry.rook_start) != Some(rook) {
            continue;
        }
        if geometry.must_be_empty.iter().any(|sq| !board.is_empty(*sq)) {
            continue;
        }
        // Cannot castle out of, through, or into check.
        if is_square_attacked(board, geometry.king_start, enemy)
            || is_square_attacked(board, geometry.king_transit, enemy)
            || is_square_attacked(board, geometry.king_end, enemy)
        {
            continue;
        }

        out.push(Move::castle(
            king,
            geometry.king_start,
            geometry.king_end,
            geometry.rook_start,
            geometry.rook_end,
            rights,
            game_state.last_move(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str, color: Color) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("fen");
        let mut out = Vec::new();
        generate_castling_moves(&game, color, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn both_castles_available_on_clear_back_rank() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White),
            vec!["e1g1", "e1c1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Color::Black),
            vec!["e8g8", "e8c8"]
        );
    }

    #[test]
    fn occupied_intervening_square_blocks_castling() {
        // Knight on b1 blocks only the long castle, even though the king never crosses b1.
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", Color::White),
            vec!["e1g1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", Color::White),
            vec!["e1c1"]
        );
    }

    #[test]
    fn attacked_king_cannot_castle() {
        assert!(castles("r3k2r/8/8/8/4r3/8/8/R3K2R w KQ - 0 1", Color::White).is_empty());
    }

    #[test]
    fn attacked_transit_square_blocks_that_side() {
        // Rook on f8 covers f1; long side stays open.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White),
            vec!["e1c1"]
        );
    }

    #[test]
    fn attacked_destination_square_blocks_that_side() {
        // Rook on c8 covers c1 only.
        assert_eq!(
            castles("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White),
            vec!["e1g1"]
        );
    }

    #[test]
    fn attacked_b_file_square_does_not_block_long_castle() {
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Color::White),
            vec!["e1g1", "e1c1"]
        );
    }

    #[test]
    fn cleared_rights_block_castling() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1", Color::White),
            vec!["e1g1"]
        );
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1", Color::White).is_empty());
    }

    #[test]
    fn pawn_attacks_only_its_diagonals() {
        // e2 pawn covers d1 and f1.
        assert_eq!(
            castles("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1", Color::White),
            Vec::<String>::new()
        );
        // A pawn on h2 only covers g1.
        assert_eq!(
            castles("4k3/8/8/8/8/8/7p/R3K2R w KQ - 0 1", Color::White),
            vec!["e1c1"]
        );
    }
}
