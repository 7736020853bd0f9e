use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_mask_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::MoveDescriptor;

pub fn generate_knight_moves(board: &Board, side: Color, out: &mut Vec<MoveDescriptor>) {
    for (from, kind) in board.pieces_of(side) {
        if kind == PieceKind::Knight {
            push_mask_targets(board, side, from, knight_targets(from), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_in_centre_has_eight_pseudo_moves() {
        let mut board = Board::empty();
        board.set(35, Piece::new(Color::White, PieceKind::Knight));
        let mut out = Vec::new();
        generate_knight_moves(&board, Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn start_position_knights_have_four_moves() {
        let mut out = Vec::new();
        generate_knight_moves(&Board::new_game(), Color::Black, &mut out);
        assert_eq!(out.len(), 4);
    }
}
