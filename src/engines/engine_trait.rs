//! Engine abstraction.
//!
//! An engine picks one move for the side to move in a `GameState` and
//! reports `info string` lines alongside it, in the manner of UCI engines.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<MoveDescriptor>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    /// Option names are matched case-insensitively. Unknown names are an error.
    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessErrors> {
        Err(ChessErrors::UnknownOption(name.to_owned()))
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors>;
}
