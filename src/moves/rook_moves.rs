use crate::game_state::chess_types::{square_file, square_row, Board, Square};
use crate::moves::bishop_moves::trace_ray;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_attacks(board: &Board, square: Square) -> u64 {
    ORTHOGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_file, d_row)| acc | trace_ray(board, square, d_file, d_row))
}

/// `from` and `to` share a rank or a file.
#[inline]
pub fn on_same_line(from: Square, to: Square) -> bool {
    from != to && (square_file(from) == square_file(to) || square_row(from) == square_row(to))
}
