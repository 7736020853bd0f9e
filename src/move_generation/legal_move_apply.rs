//! Unconditional move application.
//!
//! `force_apply` never validates. It is the one mutator used for real turn
//! commitment, for the validator's self-check probe and for the generator's
//! legality filter.

use crate::game_state::castling_rights::ALL_CASTLE_SIDES;
use crate::game_state::chess_rules::rook_home_square;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescriptor;

/// Apply `mv` to `board`, narrowing `rights` as kings and rooks move.
///
/// Besides relocating the piece this handles, in priority order, the
/// en passant capture (a diagonal pawn step onto an empty square), the
/// promotion overwrite, and the castling rook hop.
pub fn force_apply(board: &mut Board, rights: &mut CastlingRights, mv: &MoveDescriptor) {
    let from_piece = board.get(mv.from);
    let to_piece = board.get(mv.to);

    board.set(mv.to, from_piece);
    board.set(mv.from, Piece::Empty);

    let Piece::Occupied(color, kind) = from_piece else {
        return;
    };

    let d_file = square_file(mv.to) - square_file(mv.from);
    let mut castled = None;

    if kind == PieceKind::Pawn && to_piece.is_empty() && d_file != 0 {
        // The captured pawn sits beside the origin, one row behind the destination.
        if let Some(captured) = offset_square(mv.to, 0, -color.pawn_direction()) {
            board.set(captured, Piece::Empty);
        }
    } else if let Some(promotion) = mv.promotion {
        board.set(mv.to, promotion);
    } else if kind == PieceKind::King && is_castling_shift(color, mv.from, mv.to) {
        let side = if d_file > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        // Midpoint of origin and destination is the square the king crossed.
        let crossed = (mv.from + mv.to) / 2;
        board.set(crossed, Piece::new(color, PieceKind::Rook));
        board.set(rook_home_square(color, side), Piece::Empty);
        castled = Some(side);
    }

    update_castling_rights(rights, color, kind, mv, castled);

    // A rook taken on its home corner can no longer castle.
    if let Piece::Occupied(victim, PieceKind::Rook) = to_piece {
        clear_rook_guard_on(rights, victim, mv.to);
    }
}

/// Copy-then-apply convenience for what-if probes.
#[inline]
pub fn applied(
    board: &Board,
    rights: CastlingRights,
    mv: &MoveDescriptor,
) -> (Board, CastlingRights) {
    let mut scratch = board.snapshot();
    let mut scratch_rights = rights;
    force_apply(&mut scratch, &mut scratch_rights, mv);
    (scratch, scratch_rights)
}

/// Two-file king shift along its own back rank.
#[inline]
pub fn is_castling_shift(color: Color, from: Square, to: Square) -> bool {
    from < 64
        && to < 64
        && square_row(from) == color.back_row()
        && square_row(to) == square_row(from)
        && (square_file(to) - square_file(from)).abs() == 2
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    color: Color,
    kind: PieceKind,
    mv: &MoveDescriptor,
    castled: Option<CastleSide>,
) {
    match kind {
        PieceKind::King => {
            rights.clear(CastlingRights::king_guard(color));
            if let Some(side) = castled {
                rights.clear(CastlingRights::rook_guard(color, side));
            }
        }
        PieceKind::Rook => clear_rook_guard_on(rights, color, mv.from),
        _ => {}
    }
}

fn clear_rook_guard_on(rights: &mut CastlingRights, color: Color, square: Square) {
    for side in ALL_CASTLE_SIDES {
        if rook_home_square(color, side) == square {
            rights.clear(CastlingRights::rook_guard(color, side));
        }
    }
}
