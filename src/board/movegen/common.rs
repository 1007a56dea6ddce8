//! Shared sliding/ray helpers used by the per-piece generators.

use crate::board::state::Board;
use crate::board::terrain;
use crate::board::types::{Color, PieceSlot, Square};

/// Like `slide_empty`, but additionally forbids crossing the rank-6/7
/// boundary off a bridge file — the heavy-piece bridge-crossing rule
/// shared by Artillery, Missile, and Anti-Air.
pub(super) fn slide_empty_heavy(
    board: &Board,
    from: Square,
    dirs: &[(i32, i32)],
    range: u32,
    terrain_ok: impl Fn(Square) -> bool,
) -> Vec<Square> {
    let mut out = Vec::new();
    for &(dr, df) in dirs {
        let mut cur = from;
        for _ in 0..range {
            let Some(next) = cur.offset(dr, df) else {
                break;
            };
            if !terrain_ok(next) || !board.is_empty(next) || terrain::needs_bridge(from, next) {
                break;
            }
            out.push(next);
            cur = next;
        }
    }
    out
}

pub(super) const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ALL_EIGHT: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(super) fn directions_for(omnidirectional: bool) -> &'static [(i32, i32)] {
    if omnidirectional {
        &ALL_EIGHT
    } else {
        &ORTHOGONAL
    }
}

/// Squares reachable by sliding empty, stopping at the first occupied square
/// or the first square failing `terrain_ok`.
pub(super) fn slide_empty(
    board: &Board,
    from: Square,
    dirs: &[(i32, i32)],
    range: u32,
    terrain_ok: impl Fn(Square) -> bool,
) -> Vec<Square> {
    let mut out = Vec::new();
    for &(dr, df) in dirs {
        let mut cur = from;
        for _ in 0..range {
            let Some(next) = cur.offset(dr, df) else {
                break;
            };
            if !terrain_ok(next) || !board.is_empty(next) {
                break;
            }
            out.push(next);
            cur = next;
        }
    }
    out
}

/// Enemy-occupied squares reachable along each ray, blocked by the first
/// occupied square encountered (friendly or enemy) — ordinary adjacent/slide
/// capture semantics.
pub(super) fn slide_captures_blocked(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i32, i32)],
    range: u32,
    terrain_ok: impl Fn(Square) -> bool,
) -> Vec<(Square, PieceSlot)> {
    let mut out = Vec::new();
    for &(dr, df) in dirs {
        let mut cur = from;
        for _ in 0..range {
            let Some(next) = cur.offset(dr, df) else {
                break;
            };
            if !terrain_ok(next) {
                break;
            }
            match board.piece_at(next) {
                None => {
                    cur = next;
                    continue;
                }
                Some(content) => {
                    if content.color() != color {
                        out.push((next, *content.carrier()));
                    }
                    break;
                }
            }
        }
    }
    out
}

/// Enemy-occupied squares within range along each ray, ignoring intervening
/// pieces entirely (indirect fire / shoot-over). `terrain_ok` still gates
/// which squares are reachable by the projectile itself.
pub(super) fn ray_captures_unblocked(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i32, i32)],
    range: u32,
    terrain_ok: impl Fn(Square) -> bool,
) -> Vec<(Square, PieceSlot)> {
    let mut out = Vec::new();
    for &(dr, df) in dirs {
        let mut cur = from;
        for _ in 0..range {
            let Some(next) = cur.offset(dr, df) else {
                break;
            };
            if !terrain_ok(next) {
                break;
            }
            if let Some(content) = board.piece_at(next) {
                if content.color() != color {
                    out.push((next, *content.carrier()));
                }
            }
            cur = next;
        }
    }
    out
}

use crate::board::types::Move;

/// Builds a capture move, downgrading to a `StayCapture` when the attacker's
/// own terrain gate forbids it from occupying the target square (e.g.
/// Artillery firing indirectly at a Navy sitting on water).
pub(super) fn capture_or_stay(
    piece: PieceSlot,
    from: Square,
    to: Square,
    captured: PieceSlot,
    attacker_can_occupy: impl Fn(Square) -> bool,
) -> Move {
    if attacker_can_occupy(to) {
        Move::capture(piece.kind, piece.color, piece.heroic, from, to, captured)
    } else {
        Move::stay_capture(piece.kind, piece.color, piece.heroic, from, to, captured)
    }
}

pub(super) fn land_or_mixed(sq: Square) -> bool {
    !matches!(terrain::terrain_at(sq), terrain::Terrain::Water)
}

pub(super) fn water_or_mixed(sq: Square) -> bool {
    !matches!(terrain::terrain_at(sq), terrain::Terrain::Land)
}

pub(super) fn any_terrain(_sq: Square) -> bool {
    true
}

/// The terrain predicate a piece kind's own movement obeys, for use by the
/// combine-move generator (which must respect the mover's normal terrain
/// gate even though it is sliding onto a friendly square, not an enemy one).
pub(super) fn terrain_ok_for(kind: crate::board::types::PieceKind) -> fn(Square) -> bool {
    use crate::board::types::PieceKind;
    match kind {
        PieceKind::Navy => water_or_mixed,
        PieceKind::AirForce => any_terrain,
        _ => land_or_mixed,
    }
}
