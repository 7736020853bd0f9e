//! Bishop rays and the sliding-piece helpers shared with rooks and queens.
//!
//! A ray runs from the square next to the origin to the board edge and
//! stops at the first occupied square, which is included in the result so
//! callers can decide whether it is a capture.

use crate::game_state::chess_types::{offset_square, square_file, square_row, Board, Square};

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Squares a bishop on `square` reaches on `board`, blockers included.
#[inline]
pub fn bishop_attacks(board: &Board, square: Square) -> u64 {
    DIAGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_file, d_row)| acc | trace_ray(board, square, d_file, d_row))
}

/// `from` and `to` share a diagonal.
#[inline]
pub fn on_same_diagonal(from: Square, to: Square) -> bool {
    from != to
        && (square_file(to) - square_file(from)).abs() == (square_row(to) - square_row(from)).abs()
}

pub fn trace_ray(board: &Board, square: Square, d_file: i8, d_row: i8) -> u64 {
    let mut attacks = 0u64;
    let mut current = offset_square(square, d_file, d_row);

    while let Some(target) = current {
        attacks |= 1u64 << target;
        if !board.is_empty_at(target) {
            break;
        }
        current = offset_square(target, d_file, d_row);
    }

    attacks
}

/// First occupied square along a ray, if any.
pub fn first_blocker(board: &Board, square: Square, d_file: i8, d_row: i8) -> Option<Square> {
    let mut current = offset_square(square, d_file, d_row);
    while let Some(target) = current {
        if !board.is_empty_at(target) {
            return Some(target);
        }
        current = offset_square(target, d_file, d_row);
    }
    None
}

/// Every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a shared rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_file = (square_file(to) - square_file(from)).signum();
    let d_row = (square_row(to) - square_row(from)).signum();
    let mut current = offset_square(from, d_file, d_row);

    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty_at(square) {
            return false;
        }
        current = offset_square(square, d_file, d_row);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, is_path_clear, on_same_diagonal};
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_on_empty_board_sees_thirteen_squares_from_d4() {
        assert_eq!(bishop_attacks(&Board::empty(), 35).count_ones(), 13);
    }

    #[test]
    fn bishop_ray_stops_at_first_blocker() {
        let mut board = Board::empty();
        // Blocker on f6 (21), seen from d4 (35).
        board.set(21, Piece::new(Color::Black, PieceKind::Knight));
        let attacks = bishop_attacks(&board, 35);
        assert_ne!(attacks & (1u64 << 21), 0);
        assert_eq!(attacks & (1u64 << 14), 0);
    }

    #[test]
    fn diagonal_and_path_checks() {
        let board = Board::new_game();
        assert!(on_same_diagonal(61, 34));
        assert!(!on_same_diagonal(61, 35));
        // f1 to c4 is blocked by the e2 pawn at the start.
        assert!(!is_path_clear(&board, 61, 34));
        // Adjacent squares have nothing in between.
        assert!(is_path_clear(&board, 61, 52));
    }
}
