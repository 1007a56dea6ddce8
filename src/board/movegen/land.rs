//! Move generation for the plain land sliders: Infantry, Militia, Engineer,
//! Anti-Air, Commander, and heroic Headquarter. These all share the same
//! shape — blocked movement, blocked adjacent-or-ranged capture, land-only
//! terrain — differing only in range and direction set. Anti-Air is also a
//! heavy piece and additionally obeys the bridge-crossing
//! rule when sliding between rank halves; Engineer is explicitly exempt
//! from that rule even though its range can occasionally
//! reach across the rank-6/7 seam once heroic.

use crate::board::state::Board;
use crate::board::terrain;
use crate::board::types::{Move, MoveList, PieceKind, PieceSlot, Square};

use super::common::{
    directions_for, land_or_mixed, slide_captures_blocked, slide_empty, slide_empty_heavy,
};

pub(crate) fn generate(board: &Board, from: Square, piece: PieceSlot) -> MoveList {
    let mut moves = MoveList::new();
    let dirs = directions_for(piece.omnidirectional());
    let range = piece.range();
    let heavy = piece.kind == PieceKind::AntiAir;
    let capture_terrain_ok = move |sq: Square| land_or_mixed(sq) && (!heavy || !terrain::needs_bridge(from, sq));

    let empty_targets = if heavy {
        slide_empty_heavy(board, from, dirs, range, land_or_mixed)
    } else {
        slide_empty(board, from, dirs, range, land_or_mixed)
    };
    for to in empty_targets {
        moves.push(Move::normal(piece.kind, piece.color, piece.heroic, from, to));
    }
    for (to, captured) in slide_captures_blocked(board, from, piece.color, dirs, range, capture_terrain_ok) {
        moves.push(Move::capture(
            piece.kind,
            piece.color,
            piece.heroic,
            from,
            to,
            captured,
        ));
    }
    moves
}
