//! FEN-like position codec.
//!
//! `position color halfmoves fullmoves [deploystate]`

use super::builder::BoardBuilder;
use super::error::FenError;
use super::san;
use super::state::Board;
use super::types::stack::is_legal_stack;
use super::types::{Color, PieceContent, PieceKind, PieceSlot, Square, FILES, RANKS};

/// Parses a FEN-like string into a `Board`. The optional 5th (deploy-state)
/// field is validated for syntax but a session is not reconstructed from it
/// — deploy sessions are runtime-only state, consistent with treating the
/// virtual board as never persisted mid-session.
pub fn parse(fen: &str) -> Result<Board, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(FenError::TooFewParts { found: parts.len() });
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != RANKS {
        return Err(FenError::InvalidRank { rank: rows.len() });
    }

    let mut builder = BoardBuilder::empty();
    for (row_from_top, row) in rows.iter().enumerate() {
        let rank = RANKS - 1 - row_from_top; // rows go rank12 -> rank1
        let mut file = 0usize;
        let mut chars = row.chars().peekable();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                let mut digits = String::new();
                while chars.peek().is_some_and(char::is_ascii_digit) {
                    digits.push(chars.next().unwrap());
                }
                let run: usize = digits.parse().map_err(|_| FenError::InvalidRank { rank })?;
                file += run;
            } else if c == '(' {
                chars.next();
                let mut inner = String::new();
                loop {
                    match chars.next() {
                        Some(')') => break,
                        Some(ch) => inner.push(ch),
                        None => {
                            return Err(FenError::InvalidStackNotation {
                                found: row.to_string(),
                            })
                        }
                    }
                }
                let slots = parse_piece_run(&inner)?;
                if slots.len() < 2 {
                    return Err(FenError::InvalidStackNotation {
                        found: inner,
                    });
                }
                let carrier = slots[0];
                let carried = slots[1..].to_vec();
                let carried_kinds: Vec<PieceKind> = carried.iter().map(|p| p.kind).collect();
                if !is_legal_stack(carrier.kind, &carried_kinds) {
                    return Err(FenError::IllegalStackComposition { found: inner });
                }
                let sq = Square::try_new(rank, file).ok_or(FenError::TooManyFiles {
                    rank,
                    files: file + 1,
                })?;
                builder = builder.stack(sq, carrier, carried);
                file += 1;
            } else {
                let slot = parse_single_token(&mut chars)?;
                let sq = Square::try_new(rank, file).ok_or(FenError::TooManyFiles {
                    rank,
                    files: file + 1,
                })?;
                builder = if slot.heroic {
                    builder.heroic_piece(sq, slot.kind, slot.color)
                } else {
                    builder.piece(sq, slot.kind, slot.color)
                };
                file += 1;
            }
        }
        if file != FILES {
            return Err(FenError::TooManyFiles { rank, files: file });
        }
    }

    let color = Color::from_char(
        parts[1]
            .chars()
            .next()
            .ok_or_else(|| FenError::InvalidSideToMove {
                found: parts[1].to_string(),
            })?,
    )
    .ok_or_else(|| FenError::InvalidSideToMove {
        found: parts[1].to_string(),
    })?;
    builder = builder.side_to_move(color);

    let fullmoves: u32 = parts[3]
        .parse()
        .map_err(|_| FenError::InvalidSideToMove {
            found: parts[3].to_string(),
        })?;
    builder = builder.fullmove_number(fullmoves);

    if let Some(&deploy_field) = parts.get(4) {
        san::parse_deploy_sequence(deploy_field).map_err(|_| FenError::InvalidDeployState {
            found: deploy_field.to_string(),
        })?;
    }

    Ok(builder.build())
}

fn parse_single_token(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<PieceSlot, FenError> {
    let heroic = if chars.peek() == Some(&'+') {
        chars.next();
        true
    } else {
        false
    };
    let c = chars.next().ok_or(FenError::InvalidPiece { char: ' ' })?;
    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
    let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Blue };
    let mut slot = PieceSlot::new(kind, color);
    slot.heroic = heroic;
    Ok(slot)
}

fn parse_piece_run(s: &str) -> Result<Vec<PieceSlot>, FenError> {
    let mut chars = s.chars().peekable();
    let mut out = Vec::new();
    while chars.peek().is_some() {
        out.push(parse_single_token(&mut chars)?);
    }
    Ok(out)
}

/// Serializes `board` to its FEN-like string.
#[must_use]
pub fn serialize(board: &Board) -> String {
    let mut rows = Vec::with_capacity(RANKS);
    for rank in (0..RANKS).rev() {
        let mut row = String::new();
        let mut empty_run = 0usize;
        for file in 0..FILES {
            let sq = Square::new(rank, file);
            match board.piece_at(sq) {
                None => empty_run += 1,
                Some(content) => {
                    if empty_run > 0 {
                        row.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    row.push_str(&content_to_fen(content));
                }
            }
        }
        if empty_run > 0 {
            row.push_str(&empty_run.to_string());
        }
        rows.push(row);
    }

    format!(
        "{} {} {} {}",
        rows.join("/"),
        board.side_to_move().to_char(),
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

fn content_to_fen(content: &PieceContent) -> String {
    match content {
        PieceContent::Single(p) => slot_to_fen(p),
        PieceContent::Stack { carrier, carried } => {
            let mut s = String::from("(");
            s.push_str(&slot_to_fen(carrier));
            for p in carried {
                s.push_str(&slot_to_fen(p));
            }
            s.push(')');
            s
        }
    }
}

fn slot_to_fen(p: &PieceSlot) -> String {
    let mut s = String::new();
    if p.heroic {
        s.push('+');
    }
    s.push(p.kind.to_fen_char(p.color));
    s
}

/// The fixed starting position (must be reproducible
/// bit-for-bit from the canonical starting FEN).
#[must_use]
pub fn starting_fen() -> String {
    serialize(&BoardBuilder::starting_position().build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_round_trips() {
        let board = BoardBuilder::starting_position().build();
        let text = serialize(&board);
        let reparsed = parse(&text).unwrap();
        assert_eq!(serialize(&reparsed), text);
        assert_eq!(reparsed.side_to_move(), Color::Red);
        assert_eq!(reparsed.fullmove_number(), 1);
    }

    #[test]
    fn heroic_marker_round_trips() {
        let board = BoardBuilder::empty()
            .heroic_piece("e5".parse().unwrap(), PieceKind::Tank, Color::Red)
            .piece("e12".parse().unwrap(), PieceKind::Commander, Color::Blue)
            .piece("e1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .fullmove_number(3)
            .build();
        let text = serialize(&board);
        assert!(text.contains("+T"));
        let reparsed = parse(&text).unwrap();
        assert!(reparsed.piece_at("e5".parse().unwrap()).unwrap().carrier().heroic);
        assert_eq!(reparsed.fullmove_number(), 3);
    }

    #[test]
    fn stack_notation_round_trips() {
        let carrier = PieceSlot::new(PieceKind::Navy, Color::Red);
        let carried = vec![
            PieceSlot::new(PieceKind::Tank, Color::Red),
            PieceSlot::new(PieceKind::Infantry, Color::Red),
        ];
        let board = BoardBuilder::empty()
            .stack("a5".parse().unwrap(), carrier, carried)
            .piece("e1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .piece("e12".parse().unwrap(), PieceKind::Commander, Color::Blue)
            .build();
        let text = serialize(&board);
        assert!(text.contains("(NTI)"));
        let reparsed = parse(&text).unwrap();
        let content = reparsed.piece_at("a5".parse().unwrap()).unwrap();
        assert_eq!(content.flatten().len(), 3);
    }

    #[test]
    fn rejects_too_few_fields() {
        assert!(matches!(parse("8/8/8/8/8/8/8/8/8/8/8/8 r"), Err(FenError::TooFewParts { .. })));
    }

    #[test]
    fn rejects_wrong_rank_count() {
        assert!(matches!(
            parse("11/11/11 r 0 1"),
            Err(FenError::InvalidRank { .. })
        ));
    }

    #[test]
    fn rejects_illegal_stack_composition() {
        let fen = "11/11/11/11/11/4(CI)6/11/11/11/11/11/11 r 0 1";
        assert!(matches!(
            parse(fen),
            Err(FenError::IllegalStackComposition { .. })
        ));
    }

    #[test]
    fn rejects_malformed_deploy_state() {
        let board = BoardBuilder::empty()
            .stack(
                "e5".parse().unwrap(),
                PieceSlot::new(PieceKind::Navy, Color::Red),
                vec![PieceSlot::new(PieceKind::Tank, Color::Red)],
            )
            .piece("e1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .piece("e12".parse().unwrap(), PieceKind::Commander, Color::Blue)
            .build();
        let base = serialize(&board);
        let fen = format!("{base} not-a-deploy-state");
        assert!(matches!(parse(&fen), Err(FenError::InvalidDeployState { .. })));
    }
}
