//! FEN-to-GameState parser.
//!
//! Builds a position from Forsyth-Edwards Notation: piece placement, side to
//! move, castling rights, and the en passant target. The target square is
//! turned into the enemy double advance that created it, which is how the
//! game state tracks en passant. Clock fields are accepted and ignored.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::LastMove;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid clock field: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let last_move = parse_en_passant(en_passant_part, side_to_move, &board)?;

    Ok(GameState::from_parts(board, side_to_move, castling_rights, last_move))
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (rank, rank_str) in (1..=8i8).rev().zip(ranks) {
        let mut file = 1i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                if file > 9 {
                    return Err(invalid(&format!("rank {rank} has too many files")));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let square = Square::new(file, rank)
                .ok_or_else(|| invalid(&format!("rank {rank} has too many files")))?;
            board.place(square, piece);
            file += 1;
        }

        if file != 9 {
            return Err(invalid(&format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_short = true,
            'Q' => rights.white_long = true,
            'k' => rights.black_short = true,
            'q' => rights.black_long = true,
            _ => return Err(invalid(&format!("invalid castling character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target square sits behind a pawn of the side that just moved.
fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
    board: &Board,
) -> ChessResult<Option<LastMove>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("invalid en passant square: {en_passant_part}")))?;
    let mover = side_to_move.opposite();
    let step = mover.forward();

    let (Some(start), Some(end)) = (target.offset(0, -step), target.offset(0, step)) else {
        return Err(invalid(&format!("en passant square off the board: {target}")));
    };
    let pawn = Piece::new(PieceKind::Pawn, mover);

    let expected_rank = match mover {
        Color::White => 3,
        Color::Black => 6,
    };
    if target.rank() != expected_rank || board.get(end) != Some(pawn) || !board.is_empty(target) {
        return Err(invalid(&format!("no double advance behind {target}")));
    }

    Ok(Some(LastMove {
        piece: pawn,
        start,
        end,
    }))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.side_to_move(), Color::White);
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b -").expect("short FEN");
        assert_eq!(game_state.side_to_move(), Color::Black);
        assert_eq!(game_state.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn en_passant_target_becomes_last_double_advance() {
        let game_state =
            parse_fen("rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2").expect("fen");
        let last = game_state.last_move().expect("last move from en passant field");
        assert_eq!(last.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(last.start, algebraic_to_square("d2").expect("d2"));
        assert_eq!(last.end, algebraic_to_square("d4").expect("d4"));
        assert!(last.is_double_pawn_push());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        for bad in [
            "",
            "8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e3 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
