//! Shape predicates shared by the validator and the generator.
//!
//! Keeping one definition of each special rule (promotion, en passant,
//! castling) means the enumerated move set and the set of descriptors the
//! validator accepts cannot drift apart.

use crate::chess_errors::MoveRejection;
use crate::game_state::chess_rules::{castle_transit_square, king_home_square, rook_home_square};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::bishop_moves::is_path_clear;
use crate::moves::move_descriptions::MoveDescriptor;

/// Destination may receive a piece of `mover`: empty, or an enemy that is not a king.
#[inline]
pub fn check_destination(board: &Board, mover: Color, to: Square) -> Result<(), MoveRejection> {
    match board.get(to) {
        Piece::Empty => Ok(()),
        Piece::Occupied(_, PieceKind::King) => Err(MoveRejection::KingOnDestination),
        Piece::Occupied(color, _) if color == mover => Err(MoveRejection::OwnPieceOnDestination),
        Piece::Occupied(_, _) => Ok(()),
        Piece::Unknown => Err(MoveRejection::OutOfBounds),
    }
}

/// Push a move to every square in `targets` that `side` may land on.
pub fn push_mask_targets(
    board: &Board,
    side: Color,
    from: Square,
    mut targets: u64,
    out: &mut Vec<MoveDescriptor>,
) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        if check_destination(board, side, to).is_ok() {
            out.push(MoveDescriptor::new(from, to));
        }
        targets &= targets - 1;
    }
}

#[inline]
pub fn is_capturable(piece: Piece, mover: Color) -> bool {
    matches!(piece, Piece::Occupied(color, kind) if color != mover && kind != PieceKind::King)
}

/// Promotion is required exactly on the far row, and then must be a knight,
/// bishop, rook or queen of the mover's color.
pub fn check_promotion(
    mover: Color,
    to: Square,
    promotion: Option<Piece>,
) -> Result<(), MoveRejection> {
    let reaches_far_row = square_row(to) == mover.promotion_row();
    match (reaches_far_row, promotion) {
        (false, None) => Ok(()),
        (true, Some(Piece::Occupied(color, kind))) if color == mover && kind.is_promotion_target() => {
            Ok(())
        }
        _ => Err(MoveRejection::IllegalPromotion),
    }
}

/// Whether a diagonal pawn step from `from` onto the empty `to` is an
/// en passant capture.
///
/// There is no stored en passant square. Eligibility is read off the prior
/// board: the enemy pawn beside the mover must be new on its square and
/// the square it skipped (our destination) must have been empty, which is
/// what a double push one ply ago leaves behind.
pub fn is_en_passant_capture(
    board: &Board,
    prior_board: &Board,
    mover: Color,
    from: Square,
    to: Square,
) -> bool {
    if from > 63 || to > 63 {
        return false;
    }
    let dir = mover.pawn_direction();
    let d_file = square_file(to) - square_file(from);
    let d_row = square_row(to) - square_row(from);
    if d_file.abs() != 1 || d_row != dir || square_row(from) != mover.en_passant_row() {
        return false;
    }
    if !board.is_empty_at(to) {
        return false;
    }
    let Some(passed) = offset_square(to, 0, -dir) else {
        return false;
    };

    board.get(passed).is(mover.opposite(), PieceKind::Pawn)
        && prior_board.is_empty_at(passed)
        && prior_board.is_empty_at(to)
}

/// Side a two-file king shift castles towards.
#[inline]
pub fn castle_side(from: Square, to: Square) -> CastleSide {
    if to > from {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    }
}

/// Castling preconditions for `mover`'s king going from `from` to `to`.
///
/// Expects `to` to be two files away on the back rank.
pub fn check_castling(
    board: &Board,
    rights: CastlingRights,
    mover: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    if from != king_home_square(mover) {
        return Err(MoveRejection::IllegalGeometry);
    }
    let side = castle_side(from, to);
    if !rights.can_castle(mover, side) {
        return Err(MoveRejection::LostCastlingRight);
    }
    if is_square_attacked(board, from, mover) {
        return Err(MoveRejection::CastlingThroughCheck);
    }

    let rook_square = rook_home_square(mover, side);
    if !board.get(rook_square).is(mover, PieceKind::Rook) || !is_path_clear(board, from, rook_square)
    {
        return Err(MoveRejection::CastlingPathBlocked);
    }

    let crossed = castle_transit_square(mover, side);
    if is_square_attacked(board, crossed, mover) || is_square_attacked(board, to, mover) {
        return Err(MoveRejection::CastlingThroughCheck);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn promotion_rules() {
        let white_queen = Some(Piece::new(Color::White, PieceKind::Queen));
        assert!(check_promotion(Color::White, sq("e8"), white_queen).is_ok());
        assert!(check_promotion(Color::White, sq("e8"), None).is_err());
        assert!(check_promotion(Color::White, sq("e7"), white_queen).is_err());
        assert!(check_promotion(
            Color::White,
            sq("e8"),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        )
        .is_err());
        assert!(check_promotion(
            Color::Black,
            sq("a1"),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        )
        .is_ok());
        assert!(check_promotion(
            Color::Black,
            sq("a1"),
            Some(Piece::new(Color::Black, PieceKind::King))
        )
        .is_err());
    }

    #[test]
    fn destination_rules() {
        let board = Board::new_game();
        assert_eq!(
            check_destination(&board, Color::White, sq("e1")),
            Err(MoveRejection::KingOnDestination)
        );
        assert_eq!(
            check_destination(&board, Color::White, sq("d1")),
            Err(MoveRejection::OwnPieceOnDestination)
        );
        assert!(check_destination(&board, Color::White, sq("d8")).is_ok());
        assert!(check_destination(&board, Color::White, sq("d4")).is_ok());
    }

    #[test]
    fn en_passant_needs_a_fresh_double_push() {
        let mut prior = Board::empty();
        prior.set(sq("e2"), Piece::new(Color::White, PieceKind::Pawn));
        prior.set(sq("d4"), Piece::new(Color::Black, PieceKind::Pawn));
        let mut board = Board::empty();
        board.set(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
        board.set(sq("d4"), Piece::new(Color::Black, PieceKind::Pawn));

        assert!(is_en_passant_capture(&board, &prior, Color::Black, sq("d4"), sq("e3")));
        // The same position one ply later: the pawn was already on e4.
        assert!(!is_en_passant_capture(&board, &board, Color::Black, sq("d4"), sq("e3")));

        // A single push from e3 does not qualify.
        let mut single = Board::empty();
        single.set(sq("e3"), Piece::new(Color::White, PieceKind::Pawn));
        single.set(sq("d4"), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(!is_en_passant_capture(&board, &single, Color::Black, sq("d4"), sq("e3")));
    }
}
