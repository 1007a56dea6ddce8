//! Standard notation for CoTuLenh moves.
//!
//! Grammar (all literal forms this notation supports):
//!
//! - `Tc3` — ordinary move.
//! - `Txc3` — capture.
//! - `+Cg7` — a `+` prefix marks a mover that was already heroic.
//! - `(TIM)c3` — a stack relocates as its carrier; the whole composition is
//!   named instead of a single letter.
//! - `Txc3(TI)` / `Ic3(TI)` — a `Combine` move: the resulting stack
//!   composition is appended after the destination.
//! - `Aa5` — stay-capture: attacker letter plus the target square, with no
//!   `x` (the attacker never moves, so the capture marker would be
//!   misleading).
//! - `e5:Nd7,Td5,Ie6` / `e5:I-,Nd7` — a deploy sequence: origin square,
//!   colon, comma-separated elements (`X-` stays, `X[x]dest` moves), an
//!   ongoing session gets a trailing `...`.
//!
//! Disambiguation: there is no canonical example of
//! file/rank disambiguation syntax. Rather than invent one, this codec
//! resolves the ambiguity through the public error surface instead: when a
//! SAN string matches more than one legal move, `parse` returns
//! `MoveError::AmbiguousMove`, mirroring the `SANAmbiguous` failure the
//! external API already documents. Callers facing that error disambiguate
//! by supplying a `Move` value directly rather than a ambiguous string.

use super::deploy::DeploySession;
use super::error::MoveError;
use super::legality;
use super::state::Board;
use super::types::{Move, MoveKind, PieceContent, PieceKind, Square};

fn composition_to_san(kinds: &[PieceKind]) -> String {
    let mut s = String::from("(");
    for k in kinds {
        s.push(k.to_char().to_ascii_uppercase());
    }
    s.push(')');
    s
}

/// Render a single legal move in canonical notation. `board` must reflect
/// the position *before* `mv` is applied (stack composition lookups read
/// the origin square as it stood pre-move).
#[must_use]
pub fn move_to_san(board: &Board, mv: &Move) -> String {
    match mv.kind {
        MoveKind::DeployStay => {
            return format!("{}-", mv.piece.to_char().to_ascii_uppercase());
        }
        MoveKind::DeployCommit | MoveKind::DeployCancel => {
            return String::new();
        }
        _ => {}
    }

    let mut san = String::new();
    if mv.piece_was_heroic {
        san.push('+');
    }

    let is_stack_move = board
        .piece_at(mv.from)
        .is_some_and(PieceContent::is_stack)
        && !matches!(mv.kind, MoveKind::Combine);
    if is_stack_move {
        let kinds: Vec<PieceKind> = board
            .piece_at(mv.from)
            .map(|c| c.flatten().iter().map(|p| p.kind).collect())
            .unwrap_or_default();
        san.push_str(&composition_to_san(&kinds));
    } else {
        san.push(mv.piece.to_char().to_ascii_uppercase());
    }

    if matches!(mv.kind, MoveKind::Capture | MoveKind::SuicideCapture) {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if mv.kind == MoveKind::Combine {
        if let Some(content) = &mv.combined_into {
            let kinds: Vec<PieceKind> = content.flatten().iter().map(|p| p.kind).collect();
            san.push_str(&composition_to_san(&kinds));
        }
    }

    san
}

/// Render a deploy session's recorded elements as `origin:elem,elem,...`.
/// A still-open session gets a trailing `...`; a
/// finished one (passed after `can_commit()` becomes true) omits it.
#[must_use]
pub fn deploy_session_to_san(session: &DeploySession) -> String {
    let mut elems: Vec<String> = Vec::new();
    for step in session.steps() {
        let letter = step.piece.kind.to_char().to_ascii_uppercase();
        if step.captured.is_some() {
            elems.push(format!("{letter}x{}", step.destination));
        } else {
            elems.push(format!("{letter}{}", step.destination));
        }
    }
    for piece in session.stayed() {
        elems.push(format!("{}-", piece.kind.to_char().to_ascii_uppercase()));
    }
    let mut out = format!("{}:{}", session.origin(), elems.join(","));
    if !session.can_commit() {
        out.push_str("...");
    }
    out
}

struct ParsedSan {
    heroic: bool,
    composition: Option<Vec<PieceKind>>,
    piece: PieceKind,
    has_x: bool,
    dest: Square,
    combine: Option<Vec<PieceKind>>,
}

fn parse_kind_letter(c: char) -> Result<PieceKind, MoveError> {
    PieceKind::from_char(c).ok_or(MoveError::InvalidPiece { char: c })
}

fn parse_parenthesized(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<Vec<PieceKind>, MoveError> {
    debug_assert_eq!(chars.peek(), Some(&'('));
    chars.next();
    let mut out = Vec::new();
    loop {
        match chars.next() {
            Some(')') => break,
            Some(c) => out.push(parse_kind_letter(c)?),
            None => {
                return Err(MoveError::InvalidPiece { char: '(' });
            }
        }
    }
    Ok(out)
}

fn parse_square_token(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<Square, MoveError> {
    let mut s = String::new();
    if let Some(&c) = chars.peek() {
        if c.is_ascii_lowercase() {
            s.push(c);
            chars.next();
        }
    }
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            s.push(c);
            chars.next();
        } else {
            break;
        }
    }
    s.parse::<Square>()
        .map_err(|_| MoveError::InvalidSquare { notation: s })
}

fn parse_shape(san: &str) -> Result<ParsedSan, MoveError> {
    if san.is_empty() {
        return Err(MoveError::Empty);
    }
    let trimmed = san.trim_end_matches(['+', '#']);
    if trimmed.is_empty() {
        return Err(MoveError::Empty);
    }
    let mut chars = trimmed.chars().peekable();

    let heroic = if chars.peek() == Some(&'+') {
        chars.next();
        true
    } else {
        false
    };

    let composition = if chars.peek() == Some(&'(') {
        Some(parse_parenthesized(&mut chars)?)
    } else {
        None
    };

    let piece = if let Some(ref kinds) = composition {
        *kinds.first().ok_or(MoveError::Empty)?
    } else {
        let c = chars.next().ok_or(MoveError::Empty)?;
        parse_kind_letter(c)?
    };

    let has_x = if chars.peek() == Some(&'x') {
        chars.next();
        true
    } else {
        false
    };

    let dest = parse_square_token(&mut chars)?;

    let combine = if chars.peek() == Some(&'(') {
        Some(parse_parenthesized(&mut chars)?)
    } else {
        None
    };

    Ok(ParsedSan {
        heroic,
        composition,
        piece,
        has_x,
        dest,
        combine,
    })
}

/// Parse `san` against the legal moves available in `board`'s current
/// position. Returns `MoveError::IllegalMove` when nothing matches and
/// `MoveError::AmbiguousMove` when more than one legal move does.
pub fn parse_san(board: &mut Board, san: &str) -> Result<Move, MoveError> {
    let san = san.trim();
    let parsed = parse_shape(san)?;

    let side = board.side_to_move();
    let legal = legality::generate_legal_moves(board, side);

    let matches: Vec<&Move> = legal
        .iter()
        .filter(|mv| mv.piece == parsed.piece)
        .filter(|mv| mv.to == parsed.dest)
        .filter(|mv| mv.piece_was_heroic == parsed.heroic)
        .filter(|mv| {
            if parsed.has_x {
                matches!(mv.kind, MoveKind::Capture | MoveKind::SuicideCapture)
            } else {
                matches!(mv.kind, MoveKind::Normal | MoveKind::StayCapture | MoveKind::Combine)
            }
        })
        .filter(|mv| match (&parsed.combine, &mv.combined_into) {
            (None, None) => true,
            (Some(want), Some(content)) => {
                let got: Vec<PieceKind> = content.flatten().iter().map(|p| p.kind).collect();
                &got == want
            }
            _ => false,
        })
        .filter(|mv| match &parsed.composition {
            None => true,
            Some(want) => board
                .piece_at(mv.from)
                .map(|c| c.flatten().iter().map(|p| p.kind).collect::<Vec<_>>())
                .is_some_and(|got| &got == want),
        })
        .collect();

    match matches.len() {
        0 => Err(MoveError::IllegalMove {
            notation: san.to_string(),
        }),
        1 => Ok(matches[0].clone()),
        _ => Err(MoveError::AmbiguousMove {
            notation: san.to_string(),
        }),
    }
}

/// One element of a parsed deploy sequence: either a move of `piece` to
/// `destination`, or a stay (`destination` is `None`).
pub struct DeployElement {
    pub piece: PieceKind,
    pub destination: Option<Square>,
}

/// Parse `origin:elem,elem,...` (the trailing `...` of an in-progress
/// session, if present, is accepted and ignored).
pub fn parse_deploy_sequence(text: &str) -> Result<(Square, Vec<DeployElement>), MoveError> {
    let text = text.trim().trim_end_matches("...");
    let (origin_str, rest) = text.split_once(':').ok_or_else(|| MoveError::InvalidDeploySequence {
        notation: text.to_string(),
    })?;
    let origin: Square = origin_str
        .parse()
        .map_err(|_| MoveError::InvalidSquare {
            notation: origin_str.to_string(),
        })?;

    let mut elements = Vec::new();
    for token in rest.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        elements.push(parse_deploy_element(token)?);
    }

    Ok((origin, elements))
}

/// Parse a single deploy element (`X-` or `X[x]dest`), without an origin
/// prefix — used both by `parse_deploy_sequence` and by callers applying one
/// deploy step at a time against an already-active session.
pub fn parse_deploy_element(token: &str) -> Result<DeployElement, MoveError> {
    let token = token.trim();
    let mut chars = token.chars();
    let piece_char = chars.next().ok_or_else(|| MoveError::InvalidDeploySequence {
        notation: token.to_string(),
    })?;
    let piece = parse_kind_letter(piece_char)?;
    let remainder: String = chars.collect();
    if remainder == "-" {
        return Ok(DeployElement {
            piece,
            destination: None,
        });
    }
    let remainder = remainder.strip_prefix('x').unwrap_or(&remainder);
    let dest: Square = remainder
        .parse()
        .map_err(|_| MoveError::InvalidSquare {
            notation: remainder.to_string(),
        })?;
    Ok(DeployElement {
        piece,
        destination: Some(dest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::BoardBuilder;
    use crate::board::types::Color;

    #[test]
    fn normal_move_round_trips() {
        let mut board = BoardBuilder::starting_position().build();
        let legal = legality::generate_legal_moves(&mut board, Color::Red);
        let mv = legal.iter().next().expect("starting position has moves");
        let san = move_to_san(&board, mv);
        let parsed = parse_san(&mut board, &san).expect("round trip parses");
        assert_eq!(&parsed, mv);
    }

    #[test]
    fn capture_uses_x_marker() {
        let board = BoardBuilder::empty()
            .piece(Square::new(4, 4), PieceKind::Tank, Color::Red)
            .piece(Square::new(5, 4), PieceKind::Infantry, Color::Blue)
            .side_to_move(Color::Red)
            .build();
        let mv = Move::capture(
            PieceKind::Tank,
            Color::Red,
            false,
            Square::new(4, 4),
            Square::new(5, 4),
            *board.piece_at(Square::new(5, 4)).unwrap().carrier(),
        );
        let san = move_to_san(&board, &mv);
        assert!(san.contains('x'));
    }

    #[test]
    fn stack_move_uses_parenthesized_composition() {
        use crate::board::types::PieceSlot;
        let board = BoardBuilder::empty()
            .stack(
                Square::new(4, 4),
                PieceSlot::new(PieceKind::Navy, Color::Red),
                vec![PieceSlot::new(PieceKind::Tank, Color::Red)],
            )
            .side_to_move(Color::Red)
            .build();
        let mv = Move::normal(PieceKind::Navy, Color::Red, false, Square::new(4, 4), Square::new(3, 4));
        let san = move_to_san(&board, &mv);
        assert!(san.starts_with("(NT)"));
    }

    #[test]
    fn deploy_sequence_parses() {
        let (origin, elems) = parse_deploy_sequence("e5:Nd7,Td5,Ie6").unwrap();
        assert_eq!(origin, "e5".parse().unwrap());
        assert_eq!(elems.len(), 3);
        assert_eq!(elems[0].piece, PieceKind::Navy);
        assert_eq!(elems[0].destination, Some("d7".parse().unwrap()));
    }

    #[test]
    fn deploy_sequence_with_stay_parses() {
        let (_, elems) = parse_deploy_sequence("e5:I-,Nd7").unwrap();
        assert_eq!(elems[0].piece, PieceKind::Infantry);
        assert!(elems[0].destination.is_none());
        assert_eq!(elems[1].piece, PieceKind::Navy);
    }
}
