//! Single-move legality.
//!
//! Validation runs in two phases. Phase A checks the move's shape for the
//! piece on the origin square. Phase B applies the move to a scratch copy
//! and refuses it if the mover's own king is left in check; this is the
//! only place enforcing king safety, for every piece type alike.

use crate::chess_errors::MoveRejection;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{applied, is_castling_shift};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::{
    check_castling, check_destination, check_promotion, is_en_passant_capture,
};
use crate::moves::bishop_moves::{is_path_clear, on_same_diagonal};
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_step;
use crate::moves::move_descriptions::MoveDescriptor;
use crate::moves::queen_moves::on_queen_line;
use crate::moves::rook_moves::on_same_line;

/// Accept or reject `mv`.
#[inline]
pub fn is_legal_move(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    mv: &MoveDescriptor,
) -> bool {
    validate_move(board, prior_board, rights, mv).is_ok()
}

/// Accept `mv`, or say why it is refused.
pub fn validate_move(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    mv: &MoveDescriptor,
) -> Result<(), MoveRejection> {
    let mover = check_shape(board, prior_board, rights, mv)?;

    let (scratch, _) = applied(board, rights, mv);
    if is_king_in_check(&scratch, mover) {
        log::trace!("rejecting {mv}: leaves {mover:?} king in check");
        return Err(MoveRejection::ExposesOwnKing);
    }

    Ok(())
}

/// Phase A. Returns the mover's color when the shape is acceptable.
pub fn check_shape(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    mv: &MoveDescriptor,
) -> Result<Color, MoveRejection> {
    if mv.from == mv.to {
        return Err(MoveRejection::SameSquare);
    }
    if mv.from > 63 || mv.to > 63 {
        return Err(MoveRejection::OutOfBounds);
    }

    let Piece::Occupied(mover, kind) = board.get(mv.from) else {
        return Err(MoveRejection::EmptyOrigin);
    };
    check_destination(board, mover, mv.to)?;

    match kind {
        PieceKind::Pawn => check_pawn(board, prior_board, mover, mv)?,
        PieceKind::Knight => {
            no_promotion(mv)?;
            if !is_knight_step(mv.from, mv.to) {
                return Err(MoveRejection::IllegalGeometry);
            }
        }
        PieceKind::Bishop => check_slider(board, mv, on_same_diagonal)?,
        PieceKind::Rook => check_slider(board, mv, on_same_line)?,
        PieceKind::Queen => check_slider(board, mv, on_queen_line)?,
        PieceKind::King => {
            no_promotion(mv)?;
            if !is_king_step(mv.from, mv.to) {
                if !is_castling_shift(mover, mv.from, mv.to) {
                    return Err(MoveRejection::IllegalGeometry);
                }
                check_castling(board, rights, mover, mv.from, mv.to)?;
            }
        }
    }

    Ok(mover)
}

fn check_pawn(
    board: &Board,
    prior_board: &Board,
    mover: Color,
    mv: &MoveDescriptor,
) -> Result<(), MoveRejection> {
    let dir = mover.pawn_direction();
    let d_file = square_file(mv.to) - square_file(mv.from);
    let d_row = square_row(mv.to) - square_row(mv.from);
    let target = board.get(mv.to);

    if d_file == 0 && d_row == dir {
        if !target.is_empty() {
            return Err(MoveRejection::BlockedPath);
        }
        return check_promotion(mover, mv.to, mv.promotion);
    }

    if d_file == 0 && d_row == 2 * dir {
        if square_row(mv.from) != mover.pawn_home_row() {
            return Err(MoveRejection::IllegalGeometry);
        }
        no_promotion(mv)?;
        let crossed_empty =
            offset_square(mv.from, 0, dir).is_some_and(|crossed| board.is_empty_at(crossed));
        if !crossed_empty || !target.is_empty() {
            return Err(MoveRejection::BlockedPath);
        }
        return Ok(());
    }

    if d_file.abs() == 1 && d_row == dir {
        if target.belongs_to(mover.opposite()) {
            return check_promotion(mover, mv.to, mv.promotion);
        }
        if !is_en_passant_capture(board, prior_board, mover, mv.from, mv.to) {
            return Err(MoveRejection::InvalidEnPassant);
        }
        return no_promotion(mv);
    }

    Err(MoveRejection::IllegalGeometry)
}

fn check_slider(
    board: &Board,
    mv: &MoveDescriptor,
    aligned: fn(Square, Square) -> bool,
) -> Result<(), MoveRejection> {
    no_promotion(mv)?;
    if !aligned(mv.from, mv.to) {
        return Err(MoveRejection::IllegalGeometry);
    }
    if !is_path_clear(board, mv.from, mv.to) {
        return Err(MoveRejection::BlockedPath);
    }
    Ok(())
}

#[inline]
fn no_promotion(mv: &MoveDescriptor) -> Result<(), MoveRejection> {
    match mv.promotion {
        None => Ok(()),
        Some(_) => Err(MoveRejection::IllegalPromotion),
    }
}
