//! Value types shared by every layer of the engine.
//!
//! Squares use 1-based coordinates (file 1..=8 is a..h, rank 1..=8) viewed
//! from White's side, so (1, 1) is a1.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of this color's pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in the order they are emitted by the generator.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value, unsigned. The king is worth nothing since it is never captured.
    #[inline]
    pub const fn material(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Lowercase letter as used in FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Signed material value: White positive, Black negative.
    #[inline]
    pub const fn value(self) -> i32 {
        match self.color {
            Color::White => self.kind.material(),
            Color::Black => -self.kind.material(),
        }
    }
}

/// Fixed color of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// Returns `None` for anything outside files/ranks 1..=8.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file >= 1 && file <= 8 && rank >= 1 && rank <= 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn try_new(file: i8, rank: i8) -> ChessResult<Self> {
        Self::new(file, rank).ok_or(ChessError::InvalidSquare { file, rank })
    }

    /// For compile-time constants known to be on the board.
    pub(crate) const fn at(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn offset(self, file_step: i8, rank_step: i8) -> Option<Self> {
        Self::new(self.file + file_step, self.rank + rank_step)
    }

    /// a1 is dark; colors alternate with coordinate parity.
    #[inline]
    pub const fn shade(self) -> SquareShade {
        if (self.file + self.rank) % 2 == 0 {
            SquareShade::Dark
        } else {
            SquareShade::Light
        }
    }

    /// Zero-based index with a1 = 0 and h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        ((self.rank - 1) * 8 + (self.file - 1)) as usize
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + (self.file - 1) as u8);
        write!(f, "{file}{}", self.rank)
    }
}

/// Per-color, per-side castling eligibility.
///
/// Flag order for `from_flags`/`to_flags` is white-short, white-long,
/// black-short, black-long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_short: bool,
    pub white_long: bool,
    pub black_short: bool,
    pub black_long: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_short: true,
            white_long: true,
            black_short: true,
            black_long: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_short: false,
            white_long: false,
            black_short: false,
            black_long: false,
        }
    }

    pub fn from_flags(flags: &[bool]) -> ChessResult<Self> {
        let [white_short, white_long, black_short, black_long] = flags else {
            return Err(ChessError::InvalidCastlingRights { len: flags.len() });
        };
        Ok(Self {
            white_short: *white_short,
            white_long: *white_long,
            black_short: *black_short,
            black_long: *black_long,
        })
    }

    pub const fn to_flags(self) -> [bool; 4] {
        [
            self.white_short,
            self.white_long,
            self.black_short,
            self.black_long,
        ]
    }

    #[inline]
    pub const fn short(self, color: Color) -> bool {
        match color {
            Color::White => self.white_short,
            Color::Black => self.black_short,
        }
    }

    #[inline]
    pub const fn long(self, color: Color) -> bool {
        match color {
            Color::White => self.white_long,
            Color::Black => self.black_long,
        }
    }

    pub fn clear_short(&mut self, color: Color) {
        match color {
            Color::White => self.white_short = false,
            Color::Black => self.black_short = false,
        }
    }

    pub fn clear_long(&mut self, color: Color) {
        match color {
            Color::White => self.white_long = false,
            Color::Black => self.black_long = false,
        }
    }

    pub fn clear_both(&mut self, color: Color) {
        self.clear_short(color);
        self.clear_long(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_coordinates_are_rejected_not_wrapped() {
        assert!(Square::new(0, 1).is_none());
        assert!(Square::new(9, 1).is_none());
        assert!(Square::new(1, 9).is_none());
        assert!(Square::new(8, 8).and_then(|sq| sq.offset(1, 0)).is_none());
        assert!(matches!(
            Square::try_new(3, 0),
            Err(ChessError::InvalidSquare { file: 3, rank: 0 })
        ));
    }

    #[test]
    fn square_shades_follow_parity() {
        assert_eq!(Square::at(1, 1).shade(), SquareShade::Dark);
        assert_eq!(Square::at(8, 1).shade(), SquareShade::Light);
        assert_eq!(Square::at(8, 8).shade(), SquareShade::Dark);
        assert_eq!(Square::at(4, 1).to_string(), "d1");
    }

    #[test]
    fn castling_flags_require_exactly_four_entries() {
        assert_eq!(
            CastlingRights::from_flags(&[true, false, true]),
            Err(ChessError::InvalidCastlingRights { len: 3 })
        );
        let rights = CastlingRights::from_flags(&[true, false, false, true]).expect("four flags");
        assert!(rights.short(Color::White));
        assert!(!rights.long(Color::White));
        assert!(rights.long(Color::Black));
        assert_eq!(rights.to_flags(), [true, false, false, true]);
    }

    #[test]
    fn black_material_is_negative() {
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).value(), -9);
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).value(), 3);
        assert_eq!(Piece::new(PieceKind::King, Color::White).value(), 0);
    }
}
