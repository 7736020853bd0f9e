use crate::game_state::chess_types::{square_file, square_row, Square};
use crate::moves::knight_moves::set_if_valid;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    if square > 63 {
        return 0;
    }
    KING_TARGETS[square as usize]
}

#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    let d_file = (square_file(to) - square_file(from)).abs();
    let d_row = (square_row(to) - square_row(from)).abs();
    from < 64 && to < 64 && from != to && d_file <= 1 && d_row <= 1
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KING_OFFSETS.len() {
            let (d_file, d_row) = KING_OFFSETS[i];
            targets |= set_if_valid(file + d_file as i32, row + d_row as i32);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
