//! Canonical chess-rule constants.
//!
//! Starting arrangement, pawn rank rules per color, and the fixed geometry
//! of the four castling moves.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

/// Rank a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_rank(color: Color) -> i8 {
    match color {
        Color::White => 5,
        Color::Black => 4,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Short,
    Long,
}

/// Squares touched by one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub side: CastleSide,
    pub king_start: Square,
    pub king_end: Square,
    pub rook_start: Square,
    pub rook_end: Square,
    /// Square the king passes over.
    pub king_transit: Square,
    /// Squares that must be empty (two for short, three for long).
    pub must_be_empty: &'static [Square],
}

const WHITE_SHORT: CastleGeometry = CastleGeometry {
    side: CastleSide::Short,
    king_start: Square::at(5, 1),
    king_end: Square::at(7, 1),
    rook_start: Square::at(8, 1),
    rook_end: Square::at(6, 1),
    king_transit: Square::at(6, 1),
    must_be_empty: &[Square::at(6, 1), Square::at(7, 1)],
};

const WHITE_LONG: CastleGeometry = CastleGeometry {
    side: CastleSide::Long,
    king_start: Square::at(5, 1),
    king_end: Square::at(3, 1),
    rook_start: Square::at(1, 1),
    rook_end: Square::at(4, 1),
    king_transit: Square::at(4, 1),
    must_be_empty: &[Square::at(2, 1), Square::at(3, 1), Square::at(4, 1)],
};

const BLACK_SHORT: CastleGeometry = CastleGeometry {
    side: CastleSide::Short,
    king_start: Square::at(5, 8),
    king_end: Square::at(7, 8),
    rook_start: Square::at(8, 8),
    rook_end: Square::at(6, 8),
    king_transit: Square::at(6, 8),
    must_be_empty: &[Square::at(6, 8), Square::at(7, 8)],
};

const BLACK_LONG: CastleGeometry = CastleGeometry {
    side: CastleSide::Long,
    king_start: Square::at(5, 8),
    king_end: Square::at(3, 8),
    rook_start: Square::at(1, 8),
    rook_end: Square::at(4, 8),
    king_transit: Square::at(4, 8),
    must_be_empty: &[Square::at(2, 8), Square::at(3, 8), Square::at(4, 8)],
};

#[inline]
pub const fn castle_geometry(color: Color, side: CastleSide) -> CastleGeometry {
    match (color, side) {
        (Color::White, CastleSide::Short) => WHITE_SHORT,
        (Color::White, CastleSide::Long) => WHITE_LONG,
        (Color::Black, CastleSide::Short) => BLACK_SHORT,
        (Color::Black, CastleSide::Long) => BLACK_LONG,
    }
}

/// Which castling right a rook standing on `square` guards, if any.
pub fn rook_home_side(color: Color, square: Square) -> Option<CastleSide> {
    [CastleSide::Short, CastleSide::Long]
        .into_iter()
        .find(|side| castle_geometry(color, *side).rook_start == square)
}
