use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_capturable, is_en_passant_capture};
use crate::moves::move_descriptions::MoveDescriptor;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(
    board: &Board,
    prior_board: &Board,
    side: Color,
    out: &mut Vec<MoveDescriptor>,
) {
    let dir = side.pawn_direction();

    for (from, kind) in board.pieces_of(side) {
        if kind != PieceKind::Pawn {
            continue;
        }

        if let Some(one_step) = offset_square(from, 0, dir) {
            if board.is_empty_at(one_step) {
                push_pawn_move(side, from, one_step, out);

                if square_row(from) == side.pawn_home_row() {
                    if let Some(two_step) = offset_square(from, 0, 2 * dir) {
                        if board.is_empty_at(two_step) {
                            out.push(MoveDescriptor::new(from, two_step));
                        }
                    }
                }
            }
        }

        let mut attacks = pawn_attacks(side, from);
        while attacks != 0 {
            let to = attacks.trailing_zeros() as Square;
            if is_capturable(board.get(to), side) {
                push_pawn_move(side, from, to, out);
            } else if is_en_passant_capture(board, prior_board, side, from, to) {
                out.push(MoveDescriptor::new(from, to));
            }
            attacks &= attacks - 1;
        }
    }
}

/// Plain move, or one move per promotion piece on the far row.
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<MoveDescriptor>) {
    if square_row(to) == side.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(MoveDescriptor::with_promotion(from, to, Piece::new(side, kind)));
        }
    } else {
        out.push(MoveDescriptor::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    fn pawn_moves(fen: &str, side: Color) -> Vec<String> {
        let game = parse_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game.board, &game.prior_board, side, &mut out);
        out.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn start_position_has_sixteen_pawn_moves() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game.board, &game.prior_board, Color::White, &mut out);
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", Color::White);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&"a7a8q".to_owned()));
        assert!(moves.contains(&"a7b8n".to_owned()));
    }

    #[test]
    fn en_passant_is_generated_only_right_after_the_double_push() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Color::White);
        assert!(moves.contains(&"e5d6".to_owned()));

        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1", Color::White);
        assert!(!moves.contains(&"e5d6".to_owned()));
    }

    #[test]
    fn pawns_never_capture_kings() {
        let moves = pawn_moves("8/8/8/3k4/4P3/8/8/4K3 w - - 0 1", Color::White);
        assert_eq!(moves, vec!["e4e5".to_owned()]);
    }
}
