//! Square-addressable piece storage.
//!
//! The board knows nothing about the rules. It stores at most one piece per
//! square and answers "no piece" for coordinates off the board, so ray walks
//! can probe one step past an edge without a separate bounds branch.

use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Pawns on ranks 2/7, back-rank pieces in canonical order.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            for (file_idx, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let file = file_idx as i8 + 1;
                board.place(Square::at(file, back_rank(color)), Piece::new(*kind, color));
                board.place(
                    Square::at(file, pawn_start_rank(color)),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Lookup by raw coordinates; off-board coordinates hold no piece.
    #[inline]
    pub fn get_at(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::new(file, rank).and_then(|sq| self.get(sq))
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Removes and returns whatever stood on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn all_occupied(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.all_occupied(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.all_occupied(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}
