use crate::game_state::chess_types::{Color, Square};
use crate::moves::knight_moves::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    if square > 63 {
        return 0;
    }
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(row_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        table[sq] = set_if_valid(file - 1, row + row_step) | set_if_valid(file + 1, row + row_step);
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_attacks_point_toward_rank_eight() {
        // e4 (36) attacks d5 (27) and f5 (29).
        assert_eq!(pawn_attacks(Color::White, 36), (1u64 << 27) | (1u64 << 29));
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        // a7 (8) attacks b6 (17) only.
        assert_eq!(pawn_attacks(Color::Black, 8), 1u64 << 17);
    }
}
