use std::fmt;

use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::long_algebraic::promotion_to_char;

/// A requested move: origin, destination and the optional promotion piece.
///
/// Carries no flags. Captures, en passant and castling are all recovered
/// from the board the descriptor is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveDescriptor {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Piece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (square_to_algebraic(self.from), square_to_algebraic(self.to)) {
            (Ok(from), Ok(to)) => write!(f, "{from}{to}")?,
            _ => write!(f, "{}->{}", self.from, self.to)?,
        }
        if let Some(kind) = self.promotion.and_then(Piece::kind) {
            write!(f, "{}", promotion_to_char(kind))?;
        }
        Ok(())
    }
}
