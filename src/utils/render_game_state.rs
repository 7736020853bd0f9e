//! Text views of a board.
//!
//! `render_board` is the compact diagram: one letter per square (uppercase
//! white, lowercase black, space for empty), a8 first, a newline after every
//! eight cells. `parse_board_diagram` reads it back. `render_game_state` is a
//! labelled Unicode view meant for terminals and test output.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for square in 0..64u8 {
        out.push(board.get(square).letter().unwrap_or(' '));
        if square % 8 == 7 {
            out.push('\n');
        }
    }
    out
}

/// Inverse of `render_board`. The final newline is optional.
pub fn parse_board_diagram(diagram: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = diagram.strip_suffix('\n').unwrap_or(diagram).split('\n').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidBoardDiagram(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != 8 {
            return Err(ChessErrors::InvalidBoardDiagram(format!(
                "row {} has {} cells",
                row + 1,
                cells.len()
            )));
        }
        for (file, ch) in cells.into_iter().enumerate() {
            let piece = match ch {
                ' ' => Piece::Empty,
                _ => Piece::from_letter(ch).ok_or_else(|| {
                    ChessErrors::InvalidBoardDiagram(format!("unexpected character {ch:?}"))
                })?,
            };
            board.set((row * 8 + file) as Square, piece);
        }
    }

    Ok(board)
}

/// Render the position to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            let piece = game_state.board.get(row * 8 + file);
            out.push(piece_to_unicode(piece).unwrap_or('·'));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("{:?} to move", game_state.side_to_move));
    if game_state.is_in_check() {
        out.push_str(", in check");
    }

    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let Piece::Occupied(color, kind) = piece else {
        return None;
    };
    Some(match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    })
}
