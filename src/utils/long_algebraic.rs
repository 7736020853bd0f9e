use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::MoveDescriptor;
use crate::utils::algebraic::algebraic_to_square;

/// Parse move text against `game_state`.
///
/// The promotion letter is lowercase and colorless in the text; the piece
/// takes the color of whatever stands on the origin square. Legality is not
/// checked here.
pub fn long_algebraic_to_move_description(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<MoveDescriptor, ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveText(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let Some(letter) = long_algebraic[4..].chars().next() else {
        return Ok(MoveDescriptor::new(from, to));
    };

    let kind = char_to_promotion(letter)?;
    let color = game_state.board.get(from).color().ok_or_else(invalid)?;
    Ok(MoveDescriptor::with_promotion(from, to, Piece::new(color, kind)))
}

/// Lowercase promotion letter for `kind`.
#[inline]
pub fn promotion_to_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    match ch {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidPromotionChar(ch)),
    }
}
