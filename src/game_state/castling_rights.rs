//! Castling guard bits.
//!
//! Six flags record whether each king and each castling rook is still on
//! its home square without having moved. Bits only ever clear.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

pub const ALL_CASTLE_SIDES: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

pub const GUARD_WHITE_KINGSIDE_ROOK: u8 = 1 << 2;
pub const GUARD_WHITE_KING: u8 = 1 << 3;
pub const GUARD_WHITE_QUEENSIDE_ROOK: u8 = 1 << 4;
pub const GUARD_BLACK_KINGSIDE_ROOK: u8 = 1 << 5;
pub const GUARD_BLACK_KING: u8 = 1 << 6;
pub const GUARD_BLACK_QUEENSIDE_ROOK: u8 = 1 << 7;

const ALL_GUARDS: u8 = GUARD_WHITE_KINGSIDE_ROOK
    | GUARD_WHITE_KING
    | GUARD_WHITE_QUEENSIDE_ROOK
    | GUARD_BLACK_KINGSIDE_ROOK
    | GUARD_BLACK_KING
    | GUARD_BLACK_QUEENSIDE_ROOK;

/// Monotonically narrowing set of guard bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    /// Every guard set, as at the start of a game.
    #[inline]
    pub const fn all() -> Self {
        Self(ALL_GUARDS)
    }

    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Rights holding exactly `bits`; unknown bits are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & ALL_GUARDS)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, guards: u8) -> bool {
        self.0 & guards == guards
    }

    #[inline]
    pub fn clear(&mut self, guards: u8) {
        self.0 &= !guards;
    }

    #[inline]
    pub const fn king_guard(color: Color) -> u8 {
        match color {
            Color::White => GUARD_WHITE_KING,
            Color::Black => GUARD_BLACK_KING,
        }
    }

    #[inline]
    pub const fn rook_guard(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => GUARD_WHITE_KINGSIDE_ROOK,
            (Color::White, CastleSide::Queenside) => GUARD_WHITE_QUEENSIDE_ROOK,
            (Color::Black, CastleSide::Kingside) => GUARD_BLACK_KINGSIDE_ROOK,
            (Color::Black, CastleSide::Queenside) => GUARD_BLACK_QUEENSIDE_ROOK,
        }
    }

    /// Both the king guard and that side's rook guard are still set.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::king_guard(color) | Self::rook_guard(color, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_rights_allow_every_castle() {
        let rights = CastlingRights::all();
        for color in [Color::White, Color::Black] {
            for side in ALL_CASTLE_SIDES {
                assert!(rights.can_castle(color, side));
            }
        }
    }

    #[test]
    fn clearing_king_guard_blocks_both_sides() {
        let mut rights = CastlingRights::all();
        rights.clear(CastlingRights::king_guard(Color::Black));
        assert!(!rights.can_castle(Color::Black, CastleSide::Kingside));
        assert!(!rights.can_castle(Color::Black, CastleSide::Queenside));
        assert!(rights.can_castle(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn clearing_rook_guard_blocks_one_side() {
        let mut rights = CastlingRights::all();
        rights.clear(CastlingRights::rook_guard(Color::White, CastleSide::Queenside));
        assert!(rights.can_castle(Color::White, CastleSide::Kingside));
        assert!(!rights.can_castle(Color::White, CastleSide::Queenside));
        assert!(rights.contains(GUARD_WHITE_KING));
    }

    #[test]
    fn from_bits_ignores_unused_bits() {
        assert_eq!(CastlingRights::from_bits(0xFF), CastlingRights::all());
        assert_eq!(CastlingRights::from_bits(0b11), CastlingRights::none());
    }
}
