//! Air Force: omnidirectional, terrain-blind, and immune to piece blocking
//! for both movement and capture. The only obstacle is enemy air-defense
//! coverage, evaluated square-by-square along each ray.

use crate::board::state::Board;
use crate::board::types::{Move, MoveList, PieceSlot, Square};

use super::common::ALL_EIGHT;

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let range = piece.range();
    let enemy_zone = board.air_defense().zone_for(piece.color.opponent());

    for &(dr, df) in &ALL_EIGHT {
        let mut path_blocked = false;
        let mut cur = from;
        for _ in 0..range {
            if path_blocked {
                break;
            }
            let Some(to) = cur.offset(dr, df) else {
                break;
            };
            cur = to;
            let level = enemy_zone.level(to);

            match board.piece_at(to) {
                None => {
                    if level == 0 {
                        moves.push(Move::normal(piece.kind, piece.color, piece.heroic, from, to));
                    }
                }
                Some(content) => {
                    if content.color() != piece.color {
                        let captured = *content.carrier();
                        push_air_capture(&mut moves, piece, from, to, captured, level);
                    }
                    // Friendly-occupied squares simply cannot be landed on or
                    // captured; the ray still continues past them.
                }
            }

            if level > 1 {
                path_blocked = true;
            }
        }
    }
    moves
}

fn push_air_capture(
    moves: &mut MoveList,
    piece: PieceSlot,
    from: Square,
    to: Square,
    captured: PieceSlot,
    level: u8,
) {
    match level {
        0 => moves.push(Move::capture(piece.kind, piece.color, piece.heroic, from, to, captured)),
        1 => moves.push(Move::suicide_capture(
            piece.kind,
            piece.color,
            piece.heroic,
            from,
            to,
            captured,
        )),
        _ => {} // source count >= 2: capture forbidden outright
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::BoardBuilder;
    use crate::board::types::{Color, MoveKind, PieceKind};

    #[test]
    fn single_source_coverage_is_suicide_capture() {
        let board = BoardBuilder::empty()
            .piece("e5".parse().unwrap(), PieceKind::AirForce, Color::Red)
            .piece("e7".parse().unwrap(), PieceKind::Tank, Color::Blue)
            .piece("f6".parse().unwrap(), PieceKind::AntiAir, Color::Blue)
            .piece("c1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .piece("c12".parse().unwrap(), PieceKind::Commander, Color::Blue)
            .build();
        let e5 = "e5".parse().unwrap();
        let piece = *board.carrier_at(e5).unwrap();
        let moves = generate(&board, e5, piece);
        let capture = moves
            .iter()
            .find(|m| m.to == "e7".parse().unwrap())
            .expect("air force should see the tank on e7");
        assert_eq!(capture.kind, MoveKind::SuicideCapture);
    }

    #[test]
    fn double_source_coverage_forbids_capture() {
        let board = BoardBuilder::empty()
            .piece("e5".parse().unwrap(), PieceKind::AirForce, Color::Red)
            .piece("e7".parse().unwrap(), PieceKind::Tank, Color::Blue)
            .piece("f6".parse().unwrap(), PieceKind::AntiAir, Color::Blue)
            .piece("f7".parse().unwrap(), PieceKind::AntiAir, Color::Blue)
            .piece("c1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .piece("c12".parse().unwrap(), PieceKind::Commander, Color::Blue)
            .build();
        let e5 = "e5".parse().unwrap();
        let piece = *board.carrier_at(e5).unwrap();
        let moves = generate(&board, e5, piece);
        assert!(!moves.iter().any(|m| m.to == "e7".parse().unwrap()));
    }
}
