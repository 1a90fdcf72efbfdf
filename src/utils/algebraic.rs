//! Square conversions for coordinate notation such as `e4`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Square::try_new((file - b'a' + 1) as i8, (rank - b'0') as i8)
}

/// Convert a square to its coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.file(), a1.rank()), (1, 1));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.file(), h8.rank()), (8, 8));
        assert_eq!(square_to_algebraic(h8), "h8");
        assert_eq!(square_to_algebraic(algebraic_to_square("E4").expect("upper case")), "e4");
    }

    #[test]
    fn rejects_off_board_coordinates() {
        for bad in ["i1", "a9", "a0", "e", "e44", ""] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraic(bad.to_owned()))
            );
        }
    }
}
