//! Uniform random-move engine.
//!
//! Picks uniformly among the legal moves. It does no search or evaluation
//! and is used for diagnostics and as a stand-in opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::MoveDescriptor;

/// Settings for `RandomEngine`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible picks. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

pub struct RandomEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rng: rng_for(config),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for RandomEngine {
    fn new_game(&mut self) {
        self.rng = rng_for(self.config);
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        if !name.eq_ignore_ascii_case("Seed") {
            return Err(ChessErrors::UnknownOption(name.to_owned()));
        }

        let value = value.trim();
        self.config.seed = if value.is_empty() || value.eq_ignore_ascii_case("none") {
            None
        } else {
            let parsed = value
                .parse::<u64>()
                .map_err(|_| ChessErrors::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            Some(parsed)
        };
        self.rng = rng_for(self.config);
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors> {
        let moves = game_state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            moves.len()
        ));
        if let Some(seed) = self.config.seed {
            out.info_lines
                .push(format!("info string random_engine seed {seed}"));
        }

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

/// Uniformly random legal move for `side`, or `None` when there is none.
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    prior_board: &Board,
    rights: CastlingRights,
    side: Color,
    rng: &mut R,
) -> Option<MoveDescriptor> {
    legal_moves(board, prior_board, rights, side)
        .as_slice()
        .choose(rng)
        .copied()
}

fn rng_for(config: EngineConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
