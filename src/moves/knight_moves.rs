//! Knight geometry.
//!
//! The eight jumps are the file/row deltas (±1, ±2) and (±2, ±1). Targets
//! are precomputed per square as a mask with bit `n` standing for square `n`.

use crate::game_state::chess_types::{square_file, square_row, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_knight_targets();

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    if square > 63 {
        return 0;
    }
    KNIGHT_TARGETS[square as usize]
}

/// `to` is exactly one knight jump away from `from`.
#[inline]
pub fn is_knight_step(from: Square, to: Square) -> bool {
    let d_file = (square_file(to) - square_file(from)).abs();
    let d_row = (square_row(to) - square_row(from)).abs();
    from < 64 && to < 64 && ((d_file == 1 && d_row == 2) || (d_file == 2 && d_row == 1))
}

const fn generate_knight_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KNIGHT_OFFSETS.len() {
            let (d_file, d_row) = KNIGHT_OFFSETS[i];
            targets |= set_if_valid(file + d_file as i32, row + d_row as i32);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(file: i32, row: i32) -> u64 {
    if file < 0 || file > 7 || row < 0 || row > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::{is_knight_step, knight_targets, KNIGHT_TARGETS};

    // d4 is file 3, row 4 in a8-first numbering.
    const D4: u8 = 35;

    #[test]
    fn knight_on_d4_reaches_all_eight_squares() {
        let expected = [
            18u8, // c6
            20,   // e6
            25,   // b5
            29,   // f5
            41,   // b3
            45,   // f3
            50,   // c2
            52,   // e2
        ];
        assert_eq!(knight_targets(D4).count_ones(), 8);
        for target in expected {
            assert_ne!(knight_targets(D4) & (1u64 << target), 0, "missing {target}");
            assert!(is_knight_step(D4, target));
        }
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        assert_eq!(KNIGHT_TARGETS[0].count_ones(), 2);
        assert_eq!(KNIGHT_TARGETS[63].count_ones(), 2);
        assert_eq!(KNIGHT_TARGETS[63], (1u64 << 46) | (1u64 << 53));
    }

    #[test]
    fn edge_jumps_do_not_wrap() {
        // h5 (31) to a6 (16) is 15 squares apart but not a knight jump.
        assert!(!is_knight_step(31, 16));
        assert_eq!(knight_targets(31) & (1u64 << 16), 0);
        // g1 (62) to a3 (40) differs by 22: two rows, far files.
        assert!(!is_knight_step(62, 40));
    }

    #[test]
    fn step_predicate_agrees_with_table_everywhere() {
        for from in 0..64u8 {
            for to in 0..64u8 {
                let in_table = knight_targets(from) & (1u64 << to) != 0;
                assert_eq!(in_table, is_knight_step(from, to), "{from}->{to}");
            }
        }
    }
}
