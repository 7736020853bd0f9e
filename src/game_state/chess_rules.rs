//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed home squares that castling depends on.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Back row order, file a to file h, identical for both colors.
pub const STARTING_BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    match color {
        Color::White => 60,
        Color::Black => 4,
    }
}

#[inline]
pub const fn rook_home_square(color: Color, side: CastleSide) -> Square {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => 63,
        (Color::White, CastleSide::Queenside) => 56,
        (Color::Black, CastleSide::Kingside) => 7,
        (Color::Black, CastleSide::Queenside) => 0,
    }
}

/// Square the king lands on when castling.
#[inline]
pub const fn castle_king_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => king_home_square(color) + 2,
        CastleSide::Queenside => king_home_square(color) - 2,
    }
}

/// Square the king crosses, which is also where the rook lands.
#[inline]
pub const fn castle_transit_square(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => king_home_square(color) + 1,
        CastleSide::Queenside => king_home_square(color) - 1,
    }
}
