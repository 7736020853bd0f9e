use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_mask_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::MoveDescriptor;

pub fn generate_bishop_moves(board: &Board, side: Color, out: &mut Vec<MoveDescriptor>) {
    for (from, kind) in board.pieces_of(side) {
        if kind == PieceKind::Bishop {
            push_mask_targets(board, side, from, bishop_attacks(board, from), out);
        }
    }
}
