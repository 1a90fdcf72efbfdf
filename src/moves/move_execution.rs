//! In-place execute/undo of `Move` values against a `GameState`.
//!
//! `undo(execute(m, s), s)` restores every observable field of `s`: board
//! occupancy, castling rights, last move, and side to move. Both operations
//! invalidate the state's move caches.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{rook_home_side, CastleSide};
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::{Move, MoveKind};

pub fn execute_move(game_state: &mut GameState, mv: &mut Move) -> ChessResult<()> {
    if mv.executed {
        return Err(ChessError::MoveAlreadyExecuted(mv.to_string()));
    }
    if game_state.board.get(mv.start) != Some(mv.piece) {
        return Err(ChessError::NoPieceOnSquare(mv.start));
    }

    mv.castling_before = game_state.castling_rights;
    mv.previous_last_move = game_state.last_move;

    // Rights are narrowed against the pre-move board.
    update_castling_rights(&mut game_state.castling_rights, mv);

    let board = &mut game_state.board;
    if mv.captured.is_some() {
        board.take(mv.captured_square);
    }
    board.take(mv.start);
    match mv.kind {
        MoveKind::Promotion { promote_to } => board.place(mv.end, promote_to),
        MoveKind::Castle {
            rook_start,
            rook_end,
        } => {
            board.place(mv.end, mv.piece);
            let rook = board.take(rook_start);
            board.set(rook_end, rook);
        }
        MoveKind::Normal | MoveKind::EnPassant => board.place(mv.end, mv.piece),
    }

    game_state.last_move = Some(mv.as_last_move());
    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.invalidate_caches();
    mv.executed = true;
    Ok(())
}

pub fn undo_move(game_state: &mut GameState, mv: &mut Move) -> ChessResult<()> {
    if !mv.executed {
        return Err(ChessError::MoveNotExecuted(mv.to_string()));
    }

    let board = &mut game_state.board;
    board.take(mv.end);
    board.place(mv.start, mv.piece);
    if let Some(captured) = mv.captured {
        board.place(mv.captured_square, captured);
    }
    if let MoveKind::Castle {
        rook_start,
        rook_end,
    } = mv.kind
    {
        let rook = board.take(rook_end);
        board.set(rook_start, rook);
    }

    game_state.castling_rights = mv.castling_before;
    game_state.last_move = mv.previous_last_move;
    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.invalidate_caches();
    mv.executed = false;
    Ok(())
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    let mover = mv.piece.color;
    match mv.piece.kind {
        PieceKind::King => rights.clear_both(mover),
        PieceKind::Rook => clear_side(rights, mover, rook_home_side(mover, mv.start)),
        _ => {}
    }

    if let Some(captured) = mv.captured {
        if captured.kind == PieceKind::Rook {
            clear_side(
                rights,
                captured.color,
                rook_home_side(captured.color, mv.captured_square),
            );
        }
    }
}

fn clear_side(rights: &mut CastlingRights, color: Color, side: Option<CastleSide>) {
    match side {
        Some(CastleSide::Short) => rights.clear_short(color),
        Some(CastleSide::Long) => rights.clear_long(color),
        None => {}
    }
}
