//! Full legal move generation pipeline.
//!
//! Pass 1 collects pseudo-legal candidates from the piece-wise generators.
//! Pass 2 applies each candidate to a scratch copy and drops the ones that
//! leave the mover's own king in check.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::applied;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::MoveDescriptor;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let side = game_state.side_to_move;
        let pseudo = pseudo_legal_moves(
            &game_state.board,
            &game_state.prior_board,
            game_state.castling_rights,
            side,
        );
        let pseudo_count = pseudo.len();

        let mut legal = Vec::with_capacity(pseudo_count);
        for mv in pseudo {
            let (board_after, rights_after) = applied(&game_state.board, game_state.castling_rights, &mv);
            if is_king_in_check(&board_after, side) {
                continue;
            }
            legal.push(GeneratedMove {
                move_description: mv,
                game_after_move: GameState {
                    board: board_after,
                    prior_board: game_state.board,
                    castling_rights: rights_after,
                    side_to_move: side.opposite(),
                },
            });
        }

        log::debug!(
            "{side:?}: {pseudo_count} pseudo-legal, {} legal",
            legal.len()
        );
        legal
    }
}

/// Pass 1: every candidate satisfying its piece's movement geometry,
/// castling included, without the self-check filter.
pub fn pseudo_legal_moves(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    side: Color,
) -> Vec<MoveDescriptor> {
    let mut pseudo = Vec::with_capacity(128);

    generate_pawn_moves(board, prior_board, side, &mut pseudo);
    generate_knight_moves(board, side, &mut pseudo);
    generate_bishop_moves(board, side, &mut pseudo);
    generate_rook_moves(board, side, &mut pseudo);
    generate_queen_moves(board, side, &mut pseudo);
    generate_king_moves(board, rights, side, &mut pseudo);

    pseudo
}

/// Every legal move for `side`. Empty when `side` has none; callers pair
/// that with `is_king_in_check` to tell checkmate from stalemate.
pub fn legal_moves(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    side: Color,
) -> Vec<MoveDescriptor> {
    let mut moves = pseudo_legal_moves(board, prior_board, rights, side);
    moves.retain(|mv| {
        let (board_after, _) = applied(board, rights, mv);
        !is_king_in_check(&board_after, side)
    });
    moves
}
