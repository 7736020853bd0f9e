use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::{bishop_attacks, on_same_diagonal};
use crate::moves::rook_moves::{on_same_line, rook_attacks};

#[inline]
pub fn queen_attacks(board: &Board, square: Square) -> u64 {
    bishop_attacks(board, square) | rook_attacks(board, square)
}

#[inline]
pub fn on_queen_line(from: Square, to: Square) -> bool {
    on_same_diagonal(from, to) || on_same_line(from, to)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_on_empty_board_sees_twenty_seven_squares_from_d4() {
        assert_eq!(queen_attacks(&Board::empty(), 35).count_ones(), 27);
    }

    #[test]
    fn queen_attacks_match_union_with_blockers() {
        let mut board = Board::empty();
        board.set(19, Piece::new(Color::White, PieceKind::Pawn));
        board.set(38, Piece::new(Color::Black, PieceKind::Pawn));
        let attacks = queen_attacks(&board, 35);

        assert_ne!(attacks & (1u64 << 19), 0);
        assert_ne!(attacks & (1u64 << 38), 0);
        assert_eq!(attacks & (1u64 << 3), 0);
        assert_eq!(attacks & (1u64 << 39), 0);
    }
}
