//! King safety: is a square, or a color's king, attacked.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{first_blocker, DIAGONAL_DIRECTIONS};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::ORTHOGONAL_DIRECTIONS;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// A board without `color`'s king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        log::trace!("no {color:?} king on board, treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// Whether any piece of `defender`'s opponent attacks `square`.
///
/// An adjacent enemy king counts as an attack.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    if square > 63 {
        return false;
    }
    let attacker = defender.opposite();

    // A defender's pawn on `square` would attack exactly the squares an
    // enemy pawn has to stand on to attack `square`.
    if any_on(board, pawn_attacks(defender, square), attacker, &[PieceKind::Pawn]) {
        return true;
    }

    if any_on(board, king_targets(square), attacker, &[PieceKind::King]) {
        return true;
    }

    if any_on(board, knight_targets(square), attacker, &[PieceKind::Knight]) {
        return true;
    }

    slider_hits(board, square, attacker, &DIAGONAL_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
        || slider_hits(board, square, attacker, &ORTHOGONAL_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
}

fn slider_hits(
    board: &Board,
    square: Square,
    attacker: Color,
    directions: &[(i8, i8)],
    kinds: &[PieceKind],
) -> bool {
    directions.iter().any(|&(d_file, d_row)| {
        first_blocker(board, square, d_file, d_row)
            .is_some_and(|blocker| any_on(board, 1u64 << blocker, attacker, kinds))
    })
}

fn any_on(board: &Board, mut mask: u64, color: Color, kinds: &[PieceKind]) -> bool {
    while mask != 0 {
        let sq = mask.trailing_zeros() as Square;
        if let Piece::Occupied(c, kind) = board.get(sq) {
            if c == color && kinds.contains(&kind) {
                return true;
            }
        }
        mask &= mask - 1;
    }
    false
}
