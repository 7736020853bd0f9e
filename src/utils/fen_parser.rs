//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move and castling availability. Move
//! clocks are accepted but not kept. The en passant field has no slot of
//! its own in `GameState`; when present it is turned into a prior board in
//! which the double-pushed pawn still stands on its origin square.

use crate::chess_errors::ChessErrors;
use crate::game_state::castling_rights::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let invalid = |msg: &str| ChessErrors::InvalidFen(format!("{msg}: {fen:?}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid("move clocks must be numbers"))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let prior_board = match en_passant_part {
        "-" => board,
        square => prior_board_for_en_passant(&board, side_to_move, square)?,
    };

    Ok(GameState {
        board,
        prior_board,
        castling_rights,
        side_to_move,
    })
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut file = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_letter(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;
            if file >= 8 {
                return Err(ChessErrors::InvalidFen("rank has too many files".to_owned()));
            }

            board.set((row * 8 + file) as Square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFen(format!(
                "rank {row_str:?} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

/// Each FEN letter grants the king guard plus the matching rook guard.
fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(CastlingRights::none());
    }

    let mut bits = 0u8;
    for ch in castling_part.chars() {
        bits |= match ch {
            'K' => GUARD_WHITE_KING | GUARD_WHITE_KINGSIDE_ROOK,
            'Q' => GUARD_WHITE_KING | GUARD_WHITE_QUEENSIDE_ROOK,
            'k' => GUARD_BLACK_KING | GUARD_BLACK_KINGSIDE_ROOK,
            'q' => GUARD_BLACK_KING | GUARD_BLACK_QUEENSIDE_ROOK,
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
    }

    Ok(CastlingRights::from_bits(bits))
}

/// Rebuild the board as it stood before the double push that made
/// `en_passant_part` the skipped square.
fn prior_board_for_en_passant(
    board: &Board,
    side_to_move: Color,
    en_passant_part: &str,
) -> Result<Board, ChessErrors> {
    let skipped = algebraic_to_square(en_passant_part)?;
    let pusher = side_to_move.opposite();
    let dir = pusher.pawn_direction();
    let bad_target =
        || ChessErrors::InvalidFen(format!("no double push explains en passant square {en_passant_part}"));

    if square_row(skipped) != pusher.pawn_home_row() + dir || !board.is_empty_at(skipped) {
        return Err(bad_target());
    }
    let (Some(landed), Some(origin)) = (
        offset_square(skipped, 0, dir),
        offset_square(skipped, 0, -dir),
    ) else {
        return Err(bad_target());
    };
    if !board.get(landed).is(pusher, PieceKind::Pawn) || !board.is_empty_at(origin) {
        return Err(bad_target());
    }

    let mut prior = board.snapshot();
    prior.set(landed, Piece::Empty);
    prior.set(origin, Piece::new(pusher, PieceKind::Pawn));
    Ok(prior)
}
