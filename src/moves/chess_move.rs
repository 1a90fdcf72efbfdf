//! Move values and the data needed to reverse them.
//!
//! A `Move` describes one state transition plus its inverse data: the
//! captured piece and the square it stood on, the castling rights before the
//! move, and the "last move" value it replaces. Execution and undo live in
//! `move_execution`.

use std::fmt;

use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};

/// By-value record of the most recently executed move, used for en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub piece: Piece,
    pub start: Square,
    pub end: Square,
}

impl LastMove {
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.end.rank() - self.start.rank()).abs() == 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    EnPassant,
    Castle { rook_start: Square, rook_end: Square },
    Promotion { promote_to: Piece },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub(crate) piece: Piece,
    pub(crate) start: Square,
    pub(crate) end: Square,
    pub(crate) captured: Option<Piece>,
    pub(crate) captured_square: Square,
    pub(crate) kind: MoveKind,
    pub(crate) castling_before: CastlingRights,
    pub(crate) previous_last_move: Option<LastMove>,
    pub(crate) executed: bool,
}

impl Move {
    fn base(
        piece: Piece,
        start: Square,
        end: Square,
        captured: Option<Piece>,
        kind: MoveKind,
        castling_before: CastlingRights,
        previous_last_move: Option<LastMove>,
    ) -> Self {
        Self {
            piece,
            start,
            end,
            captured,
            captured_square: end,
            kind,
            castling_before,
            previous_last_move,
            executed: false,
        }
    }

    pub fn normal(
        piece: Piece,
        start: Square,
        end: Square,
        captured: Option<Piece>,
        castling_before: CastlingRights,
        previous_last_move: Option<LastMove>,
    ) -> Self {
        Self::base(
            piece,
            start,
            end,
            captured,
            MoveKind::Normal,
            castling_before,
            previous_last_move,
        )
    }

    /// The captured pawn stands beside the capturing pawn, not on `end`.
    pub fn en_passant(
        piece: Piece,
        start: Square,
        end: Square,
        captured: Piece,
        captured_square: Square,
        castling_before: CastlingRights,
        previous_last_move: Option<LastMove>,
    ) -> Self {
        Self {
            captured_square,
            ..Self::base(
                piece,
                start,
                end,
                Some(captured),
                MoveKind::EnPassant,
                castling_before,
                previous_last_move,
            )
        }
    }

    pub fn castle(
        king: Piece,
        king_start: Square,
        king_end: Square,
        rook_start: Square,
        rook_end: Square,
        castling_before: CastlingRights,
        previous_last_move: Option<LastMove>,
    ) -> Self {
        Self::base(
            king,
            king_start,
            king_end,
            None,
            MoveKind::Castle {
                rook_start,
                rook_end,
            },
            castling_before,
            previous_last_move,
        )
    }

    pub fn promotion(
        pawn: Piece,
        start: Square,
        end: Square,
        captured: Option<Piece>,
        promote_to: PieceKind,
        castling_before: CastlingRights,
        previous_last_move: Option<LastMove>,
    ) -> Self {
        Self::base(
            pawn,
            start,
            end,
            captured,
            MoveKind::Promotion {
                promote_to: Piece::new(promote_to, pawn.color),
            },
            castling_before,
            previous_last_move,
        )
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn captured_square(&self) -> Square {
        self.captured_square
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn castling_before(&self) -> CastlingRights {
        self.castling_before
    }

    #[inline]
    pub fn previous_last_move(&self) -> Option<LastMove> {
        self.previous_last_move
    }

    #[inline]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to } => Some(promote_to.kind),
            _ => None,
        }
    }

    /// Same transition regardless of undo bookkeeping or executed flag.
    pub fn same_action(&self, other: &Move) -> bool {
        self.piece == other.piece
            && self.start == other.start
            && self.end == other.end
            && self.captured == other.captured
            && self.captured_square == other.captured_square
            && self.kind == other.kind
    }

    pub(crate) fn as_last_move(&self) -> LastMove {
        LastMove {
            piece: self.piece,
            start: self.start,
            end: self.end,
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
