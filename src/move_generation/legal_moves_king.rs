use crate::game_state::castling_rights::ALL_CASTLE_SIDES;
use crate::game_state::chess_rules::castle_king_target;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{check_castling, push_mask_targets};
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::MoveDescriptor;

pub fn generate_king_moves(
    board: &Board,
    rights: CastlingRights,
    side: Color,
    out: &mut Vec<MoveDescriptor>,
) {
    for (from, kind) in board.pieces_of(side) {
        if kind == PieceKind::King {
            push_mask_targets(board, side, from, king_targets(from), out);
            generate_castling_moves(board, rights, side, from, out);
        }
    }
}

/// Castling candidates, gated by the same checks the validator applies.
fn generate_castling_moves(
    board: &Board,
    rights: CastlingRights,
    side: Color,
    king_from: Square,
    out: &mut Vec<MoveDescriptor>,
) {
    for castle in ALL_CASTLE_SIDES {
        let to = castle_king_target(side, castle);
        if check_castling(board, rights, side, king_from, to).is_ok() {
            out.push(MoveDescriptor::new(king_from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn castling_candidates_follow_rights() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&game.board, game.castling_rights, Color::White, &mut out);
        // d1, d2, e2, f2, f1 plus both castles.
        assert_eq!(out.len(), 7);
        assert!(out.iter().any(|m| m.from == 60 && m.to == 62));
        assert!(out.iter().any(|m| m.from == 60 && m.to == 58));

        let mut out = Vec::new();
        generate_king_moves(&game.board, CastlingRights::none(), Color::White, &mut out);
        assert_eq!(out.len(), 5);
    }
}
