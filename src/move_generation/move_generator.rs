use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescriptor;

/// A legal move together with the position it leads to.
///
/// `game_after_move` already has the side flipped and the prior board set to
/// the position the move was played from, so it can be fed straight back
/// into a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub move_description: MoveDescriptor,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
