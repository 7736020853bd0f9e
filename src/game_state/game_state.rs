//! Position plus the context needed to judge the next move.
//!
//! A `GameState` carries the current board, the board one ply earlier (the
//! only source of en passant eligibility), the castling guard bits and the
//! side to move. Turns are committed through `play`, which validates first
//! and then force-applies.

use crate::chess_errors::{ChessErrors, MoveRejection};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::force_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_validator::validate_move;
use crate::moves::move_descriptions::MoveDescriptor;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::long_algebraic_to_move_description;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub prior_board: Board,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial arrangement, white to move, every guard bit set.
    /// The prior board equals the current one, so no en passant is possible.
    pub fn new_game() -> Self {
        let board = Board::new_game();
        Self {
            board,
            prior_board: board,
            castling_rights: CastlingRights::all(),
            side_to_move: Color::White,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Validate and commit `mv` for the side to move.
    pub fn play(&mut self, mv: &MoveDescriptor) -> Result<(), ChessErrors> {
        if let Piece::Occupied(owner, _) = self.board.get(mv.from) {
            if owner != self.side_to_move {
                return Err(ChessErrors::IllegalMove {
                    mv: mv.to_string(),
                    reason: MoveRejection::WrongSideToMove(owner),
                });
            }
        }

        validate_move(&self.board, &self.prior_board, self.castling_rights, mv).map_err(
            |reason| ChessErrors::IllegalMove {
                mv: mv.to_string(),
                reason,
            },
        )?;

        self.prior_board = self.board;
        force_apply(&mut self.board, &mut self.castling_rights, mv);
        self.side_to_move = self.side_to_move.opposite();

        log::debug!(
            "played {mv}; {:?} to move, rights {:#08b}",
            self.side_to_move,
            self.castling_rights.bits()
        );
        Ok(())
    }

    /// Parse move text such as `e2e4` or `e7e8q` and play it.
    pub fn play_long_algebraic(&mut self, text: &str) -> Result<MoveDescriptor, ChessErrors> {
        let mv = long_algebraic_to_move_description(text, self)?;
        self.play(&mv)?;
        Ok(mv)
    }

    /// Legal moves for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> Vec<MoveDescriptor> {
        legal_moves(
            &self.board,
            &self.prior_board,
            self.castling_rights,
            self.side_to_move,
        )
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::{ChessErrors, MoveRejection};
    use crate::game_state::castling_rights::*;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn new_game_defaults() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.castling_rights, CastlingRights::all());
        assert_eq!(game.board, game.prior_board);
        assert_eq!(game.legal_moves().len(), 20);
        assert!(!game.is_in_check());
    }

    #[test]
    fn play_shifts_prior_board_and_flips_side() {
        let mut game = GameState::new_game();
        let before = game.board;
        game.play_long_algebraic("e2e4").expect("e2e4 is legal");
        assert_eq!(game.prior_board, before);
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.board.get(sq("e4")), Piece::new(Color::White, PieceKind::Pawn));
    }

    #[test]
    fn wrong_side_is_refused() {
        let mut game = GameState::new_game();
        let err = game
            .play_long_algebraic("e7e5")
            .expect_err("black cannot move first");
        assert_eq!(
            err,
            ChessErrors::IllegalMove {
                mv: "e7e5".to_owned(),
                reason: MoveRejection::WrongSideToMove(Color::Black),
            }
        );
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let err = game.play_long_algebraic("e2e5").expect_err("triple push");
        assert!(matches!(err, ChessErrors::IllegalMove { .. }));
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn en_passant_over_real_turns() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "d7d5", "e4e5", "f7f5"] {
            game.play_long_algebraic(text).expect("opening move is legal");
        }
        game.play_long_algebraic("e5f6").expect("en passant right after f7f5");
        assert!(game.board.is_empty_at(sq("f5")));
        assert_eq!(game.board.get(sq("f6")), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(game.side_to_move, Color::Black);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "a7a6", "e4e5", "d7d5", "a2a3", "a6a5"] {
            game.play_long_algebraic(text).expect("setup move is legal");
        }
        let err = game.play_long_algebraic("e5d6").expect_err("window has closed");
        assert!(matches!(
            err,
            ChessErrors::IllegalMove {
                reason: MoveRejection::InvalidEnPassant,
                ..
            }
        ));
    }

    #[test]
    fn castling_through_real_turns() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
            game.play_long_algebraic(text).expect("opening move is legal");
        }
        game.play_long_algebraic("e1g1").expect("kingside castle");
        assert_eq!(game.board.get(sq("g1")), Piece::new(Color::White, PieceKind::King));
        assert_eq!(game.board.get(sq("f1")), Piece::new(Color::White, PieceKind::Rook));
        assert!(!game.castling_rights.contains(GUARD_WHITE_KING));
        assert!(game.castling_rights.contains(GUARD_BLACK_KING));
    }
}
