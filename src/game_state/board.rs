//! Fixed 64-cell board with value semantics.
//!
//! `Board` is `Copy`: every hypothetical probe works on its own snapshot, so
//! a scratch board can never alias the position it was taken from.

use crate::game_state::chess_rules::STARTING_BACK_ROW;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [Piece::Empty; 64],
        }
    }

    /// Standard initial arrangement.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (file, kind) in STARTING_BACK_ROW.iter().enumerate() {
            let file = file as Square;
            board.set(file, Piece::new(Color::Black, *kind));
            board.set(8 + file, Piece::new(Color::Black, PieceKind::Pawn));
            board.set(48 + file, Piece::new(Color::White, PieceKind::Pawn));
            board.set(56 + file, Piece::new(Color::White, *kind));
        }
        board
    }

    /// Piece on `square`, or `Piece::Unknown` when the square is off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Piece {
        self.cells
            .get(square as usize)
            .copied()
            .unwrap_or(Piece::Unknown)
    }

    /// Overwrite `square`. Off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        if let Some(cell) = self.cells.get_mut(square as usize) {
            *cell = piece;
        }
    }

    /// Independent copy for what-if probing.
    #[inline]
    pub fn snapshot(&self) -> Board {
        *self
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// First square holding `color`'s king, scanning from a8.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.cells
            .iter()
            .position(|piece| piece.is(color, PieceKind::King))
            .map(|index| index as Square)
    }

    /// Occupied squares with their pieces, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(square, piece)| (square as Square, *piece))
    }

    /// Squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.pieces().filter_map(move |(square, piece)| match piece {
            Piece::Occupied(c, kind) if c == color => Some((square, kind)),
            _ => None,
        })
    }
}
