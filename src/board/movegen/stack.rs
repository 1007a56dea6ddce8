//! Combine-move generation: a lone piece sliding onto a friendly lone piece
//! forms a carrier/cargo stack when the resulting composition is legal.
//! Ordinary stack movement needs no dedicated generator —
//! a stack moves exactly as its carrier would alone; see `movegen::mod`.

use crate::board::state::Board;
use crate::board::types::stack::is_valid_cargo;
use crate::board::types::{Move, MoveList, PieceContent, PieceSlot, Square};

use super::common::{directions_for, terrain_ok_for};

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let dirs = directions_for(piece.omnidirectional());
    let range = piece.range();
    let terrain_ok = terrain_ok_for(piece.kind);

    for &(dr, df) in dirs {
        let mut cur = from;
        for _ in 0..range {
            let Some(next) = cur.offset(dr, df) else {
                break;
            };
            if !terrain_ok(next) {
                break;
            }
            let Some(content) = board.piece_at(next) else {
                cur = next;
                continue;
            };
            if content.color() != piece.color {
                break; // enemy blocks further sliding; no combine with enemies
            }
            if let PieceContent::Single(target) = content {
                if let Some(result) = try_combine(piece, *target) {
                    moves.push(Move::combine(piece.kind, piece.color, piece.heroic, from, next, result));
                }
            }
            break; // friendly piece (combinable or not) blocks further sliding
        }
    }
    moves
}

fn try_combine(mover: PieceSlot, target: PieceSlot) -> Option<PieceContent> {
    if is_valid_cargo(target.kind, mover.kind) {
        return Some(PieceContent::Stack {
            carrier: target,
            carried: vec![mover],
        });
    }
    if is_valid_cargo(mover.kind, target.kind) {
        return Some(PieceContent::Stack {
            carrier: mover,
            carried: vec![target],
        });
    }
    None
}
