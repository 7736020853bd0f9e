use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_mask_targets;
use crate::moves::move_descriptions::MoveDescriptor;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &Board, side: Color, out: &mut Vec<MoveDescriptor>) {
    for (from, kind) in board.pieces_of(side) {
        if kind == PieceKind::Rook {
            push_mask_targets(board, side, from, rook_attacks(board, from), out);
        }
    }
}
