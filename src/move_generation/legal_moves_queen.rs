use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_mask_targets;
use crate::moves::move_descriptions::MoveDescriptor;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, side: Color, out: &mut Vec<MoveDescriptor>) {
    for (from, kind) in board.pieces_of(side) {
        if kind == PieceKind::Queen {
            push_mask_targets(board, side, from, queen_attacks(board, from), out);
        }
    }
}
