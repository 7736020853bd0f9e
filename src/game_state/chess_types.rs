//! Core value types shared by the board, the rule checks and the codecs.
//!
//! Squares are numbered rank-major from White's point of view: `0` is a8,
//! `7` is h8, `56` is a1 and `63` is h1.

pub use crate::game_state::board::Board;
pub use crate::game_state::castling_rights::{CastleSide, CastlingRights};
pub use crate::game_state::game_state::GameState;

/// Board square index (`0..=63`). Anything larger is off the board.
pub type Square = u8;

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
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

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn has to stand on to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Row on which a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding the king and rooks at the start.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind without color.
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

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Promotion choices in the order the generator emits them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Content of one board cell.
///
/// Thirteen real values (empty plus six kinds in two colors) and the
/// `Unknown` sentinel handed out for off-board lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
    Unknown,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Occupied(color, kind)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Occupied(color, _) => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Occupied(_, kind) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::Occupied(color, kind)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind() == Some(PieceKind::King)
    }

    /// Compact 4-bit code: kind in bits 1..=3, color in bit 0 (white = 1).
    /// Empty is `0b0000`, unknown is `0b1110`.
    pub const fn code(self) -> u8 {
        match self {
            Piece::Empty => 0b0000,
            Piece::Unknown => 0b1110,
            Piece::Occupied(color, kind) => {
                let kind_bits = (kind.index() as u8 + 1) << 1;
                match color {
                    Color::White => kind_bits | 1,
                    Color::Black => kind_bits,
                }
            }
        }
    }

    pub const fn from_code(code: u8) -> Self {
        let color = if code & 1 == 1 {
            Color::White
        } else {
            Color::Black
        };
        let kind = match code >> 1 {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => {
                return if code == 0 {
                    Piece::Empty
                } else {
                    Piece::Unknown
                }
            }
        };
        Piece::Occupied(color, kind)
    }

    /// Letter used by FEN and the board diagram: uppercase for white,
    /// lowercase for black. `None` for empty and unknown cells.
    pub const fn letter(self) -> Option<char> {
        let Piece::Occupied(color, kind) = self else {
            return None;
        };
        let lower = match kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        Some(match color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        })
    }

    pub const fn from_letter(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::Occupied(color, kind))
    }
}

/// Every real piece value, both colors.
pub const ALL_PIECES: [Piece; 12] = [
    Piece::Occupied(Color::White, PieceKind::Pawn),
    Piece::Occupied(Color::White, PieceKind::Knight),
    Piece::Occupied(Color::White, PieceKind::Bishop),
    Piece::Occupied(Color::White, PieceKind::Rook),
    Piece::Occupied(Color::White, PieceKind::Queen),
    Piece::Occupied(Color::White, PieceKind::King),
    Piece::Occupied(Color::Black, PieceKind::Pawn),
    Piece::Occupied(Color::Black, PieceKind::Knight),
    Piece::Occupied(Color::Black, PieceKind::Bishop),
    Piece::Occupied(Color::Black, PieceKind::Rook),
    Piece::Occupied(Color::Black, PieceKind::Queen),
    Piece::Occupied(Color::Black, PieceKind::King),
];

#[inline]
pub const fn square_file(square: Square) -> i8 {
    (square % 8) as i8
}

#[inline]
pub const fn square_row(square: Square) -> i8 {
    (square / 8) as i8
}

/// Square at `(file, row)`, or `None` when off the board.
#[inline]
pub const fn square_at(file: i8, row: i8) -> Option<Square> {
    if file < 0 || file > 7 || row < 0 || row > 7 {
        None
    } else {
        Some((row * 8 + file) as Square)
    }
}

/// Shift a square by file/row deltas, refusing to wrap around board edges.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_row: i8) -> Option<Square> {
    if square > 63 {
        return None;
    }
    square_at(square_file(square) + d_file, square_row(square) + d_row)
}
