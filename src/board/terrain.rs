//! Static terrain classification and bridge-crossing rules.
//!
//! Computed once into `once_cell::sync::Lazy` tables, the same pattern used
//! elsewhere in this crate for precomputed attack tables.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square, FILES, NUM_SQUARES, RANKS};

/// The terrain class of a single square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Terrain {
    Water,
    Land,
    Mixed,
    Bridge,
}

const MIXED_SQUARES: [(usize, usize); 4] = [
    (5, 3), // d6 (rank idx 5, file idx 3)
    (5, 4), // e6
    (6, 3), // d7
    (6, 4), // e7
];

const BRIDGE_SQUARES: [(usize, usize); 4] = [
    (5, 5), // f6
    (6, 5), // f7
    (5, 7), // h6
    (6, 7), // h7
];

const WATER_FILES: usize = 2; // files a, b

fn classify(sq: Square) -> Terrain {
    let (rank, file) = (sq.rank(), sq.file());
    if BRIDGE_SQUARES.contains(&(rank, file)) {
        return Terrain::Bridge;
    }
    if MIXED_SQUARES.contains(&(rank, file)) {
        return Terrain::Mixed;
    }
    if file < WATER_FILES {
        return Terrain::Water;
    }
    Terrain::Land
}

struct TerrainTables {
    classes: Vec<Terrain>,
    water: Bitboard,
    land: Bitboard,
    mixed: Bitboard,
    bridge: Bitboard,
}

static TABLES: Lazy<TerrainTables> = Lazy::new(|| {
    let mut classes = Vec::with_capacity(NUM_SQUARES);
    let mut water = Bitboard::empty();
    let mut land = Bitboard::empty();
    let mut mixed = Bitboard::empty();
    let mut bridge = Bitboard::empty();

    for idx in 0..NUM_SQUARES {
        let sq = Square::from_index(idx);
        let class = classify(sq);
        match class {
            Terrain::Water => water.set(sq),
            Terrain::Land => land.set(sq),
            Terrain::Mixed => mixed.set(sq),
            Terrain::Bridge => bridge.set(sq),
        }
        classes.push(class);
    }

    TerrainTables {
        classes,
        water,
        land,
        mixed,
        bridge,
    }
});

/// The terrain class of `sq`.
#[must_use]
pub fn terrain_at(sq: Square) -> Terrain {
    TABLES.classes[sq.as_index()]
}

#[must_use]
pub fn is_water(sq: Square) -> bool {
    matches!(terrain_at(sq), Terrain::Water)
}

#[must_use]
pub fn is_land(sq: Square) -> bool {
    matches!(terrain_at(sq), Terrain::Land)
}

#[must_use]
pub fn is_mixed(sq: Square) -> bool {
    matches!(terrain_at(sq), Terrain::Mixed)
}

#[must_use]
pub fn is_bridge(sq: Square) -> bool {
    matches!(terrain_at(sq), Terrain::Bridge)
}

/// Navy may occupy water, mixed, or bridge squares.
#[must_use]
pub fn navy_passable(sq: Square) -> bool {
    !matches!(terrain_at(sq), Terrain::Land)
}

/// Land pieces (everything but Navy and Air Force) may occupy land, mixed, or
/// bridge squares.
#[must_use]
pub fn land_passable(sq: Square) -> bool {
    !matches!(terrain_at(sq), Terrain::Water)
}

#[must_use]
pub fn water_mask() -> Bitboard {
    TABLES.water
}

#[must_use]
pub fn land_mask() -> Bitboard {
    TABLES.land
}

#[must_use]
pub fn mixed_mask() -> Bitboard {
    TABLES.mixed
}

#[must_use]
pub fn bridge_mask() -> Bitboard {
    TABLES.bridge
}

const RANK_HALF_BOUNDARY: usize = 6; // ranks 1-6 (idx 0-5) vs 7-12 (idx 6-11)

/// Whether the half-to-half crossing from `from` to `to` would need to pass
/// through a bridge square, for a heavy piece sliding along a single file.
#[must_use]
pub fn needs_bridge(from: Square, to: Square) -> bool {
    if from.file() != to.file() {
        return false;
    }
    let lo = from.rank().min(to.rank());
    let hi = from.rank().max(to.rank());
    if lo >= RANK_HALF_BOUNDARY || hi < RANK_HALF_BOUNDARY {
        return false; // doesn't cross the boundary
    }
    // Crosses the boundary: legal only if the file has a bridge at the seam.
    let file = from.file();
    !BRIDGE_SQUARES
        .iter()
        .any(|&(rank, f)| f == file && (rank == RANK_HALF_BOUNDARY - 1 || rank == RANK_HALF_BOUNDARY))
}

/// Total number of files/ranks, re-exported for convenience of callers doing
/// their own iteration.
#[must_use]
pub const fn board_dims() -> (usize, usize) {
    (FILES, RANKS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_files_are_a_and_b() {
        assert!(is_water(Square::new(0, 0)));
        assert!(is_water(Square::new(11, 1)));
        assert!(!is_water(Square::new(0, 2)));
    }

    #[test]
    fn mixed_squares_are_correct() {
        let d6: Square = "d6".parse().unwrap();
        let e7: Square = "e7".parse().unwrap();
        assert!(is_mixed(d6));
        assert!(is_mixed(e7));
    }

    #[test]
    fn bridge_squares_are_correct() {
        let f6: Square = "f6".parse().unwrap();
        let h7: Square = "h7".parse().unwrap();
        assert!(is_bridge(f6));
        assert!(is_bridge(h7));
    }

    #[test]
    fn needs_bridge_across_halves_without_bridge_file() {
        let c6: Square = "c6".parse().unwrap();
        let c7: Square = "c7".parse().unwrap();
        assert!(needs_bridge(c6, c7));
    }

    #[test]
    fn no_bridge_needed_on_bridge_file() {
        let f6: Square = "f6".parse().unwrap();
        let f7: Square = "f7".parse().unwrap();
        assert!(!needs_bridge(f6, f7));
    }

    #[test]
    fn no_bridge_needed_within_one_half() {
        let c2: Square = "c2".parse().unwrap();
        let c5: Square = "c5".parse().unwrap();
        assert!(!needs_bridge(c2, c5));
    }
}
