//! Perft: exhaustive legal-move tree counting.
//!
//! Each child position carries the board it was reached from as its prior
//! board, so en passant windows open and close exactly as in real play.

use std::thread;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::force_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Leaf statistics, in the categories published perft tables use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, &mv, depth, &mut total);
    }
    total
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return perft(generator, game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generator, game_state, mv, depth, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    })
}

/// Node count only, with bulk counting at the last ply.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = game_state.legal_moves();
    match depth {
        1 => moves.len() as u64,
        _ => moves
            .iter()
            .map(|mv| {
                let mut child = game_state.clone();
                child.prior_board = child.board;
                force_apply(&mut child.board, &mut child.castling_rights, mv);
                child.side_to_move = child.side_to_move.opposite();
                perft_nodes(&child, depth - 1)
            })
            .sum(),
    }
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &GameState,
    mv: &GeneratedMove,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    if remaining == 1 {
        classify_leaf(parent, mv, counts);
        return;
    }

    let child_state = &mv.game_after_move;
    for child in generator.generate_legal_moves(child_state) {
        perft_recurse(generator, child_state, &child, remaining - 1, counts);
    }
}

fn classify_leaf(parent: &GameState, mv: &GeneratedMove, counts: &mut PerftCounts) {
    let desc = mv.move_description;
    let moved = parent.board.get(desc.from);
    let target = parent.board.get(desc.to);
    let d_file = (square_file(desc.to) - square_file(desc.from)).abs();

    counts.nodes += 1;

    let is_en_passant = moved.kind() == Some(PieceKind::Pawn) && target.is_empty() && d_file == 1;
    if is_en_passant {
        counts.en_passant += 1;
    }
    if is_en_passant || !target.is_empty() {
        counts.captures += 1;
    }
    if moved.kind() == Some(PieceKind::King) && d_file == 2 {
        counts.castles += 1;
    }
    if desc.promotion.is_some() {
        counts.promotions += 1;
    }

    let after = &mv.game_after_move;
    if is_king_in_check(&after.board, after.side_to_move) {
        counts.checks += 1;
        let replies = legal_moves(
            &after.board,
            &after.prior_board,
            after.castling_rights,
            after.side_to_move,
        );
        if replies.is_empty() {
            counts.checkmates += 1;
        }
    }
}
