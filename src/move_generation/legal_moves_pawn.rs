//! Pawn move generation.
//!
//! Covers single and double advances, diagonal captures, en passant, and
//! promotion. Any move landing on the last rank is emitted as four
//! promotion variants and never as a plain move.

use crate::game_state::chess_rules::{en_passant_rank, pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = piece.color;
    let forward = side.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if board.is_empty(one_step) {
            push_pawn_move(game_state, piece, from, one_step, out);

            if from.rank() == pawn_start_rank(side) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if board.is_empty(two_step) {
                        out.push(build_move(game_state, piece, from, two_step));
                    }
                }
            }
        }
    }

    for file_step in [-1i8, 1] {
        let Some(to) = from.offset(file_step, forward) else {
            continue;
        };
        if board.get(to).is_some_and(|target| target.color != side) {
            push_pawn_move(game_state, piece, from, to, out);
        }
    }

    push_en_passant(game_state, from, piece, out);
}

/// Plain or promoting move onto `to`.
fn push_pawn_move(game_state: &GameState, piece: Piece, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.rank() != promotion_rank(piece.color) {
        out.push(build_move(game_state, piece, from, to));
        return;
    }

    let captured = game_state.board().get(to);
    for promote_to in PieceKind::PROMOTIONS {
        out.push(Move::promotion(
            piece,
            from,
            to,
            captured,
            promote_to,
            game_state.castling_rights(),
            game_state.last_move(),
        ));
    }
}

/// Only available right after an enemy double advance that lands beside this pawn.
fn push_en_passant(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if from.rank() != en_passant_rank(piece.color) {
        return;
    }
    let Some(last) = game_state.last_move() else {
        return;
    };
    if last.piece.color == piece.color || !last.is_double_pawn_push() {
        return;
    }
    if last.end.rank() != from.rank() || (last.end.file() - from.file()).abs() != 1 {
        return;
    }
    if game_state.board().get(last.end) != Some(last.piece) {
        return;
    }
    let Some(to) = last.end.offset(0, piece.color.forward()) else {
        return;
    };

    out.push(Move::en_passant(
        piece,
        from,
        to,
        last.piece,
        last.end,
        game_state.castling_rights(),
        game_state.last_move(),
    ));
}
