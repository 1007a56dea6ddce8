//! Air-defense zone derivation.
//!
//! A zone tracks, per square, how many air-defense *sources* cover it, since
//! the Air Force suicide-capture rule distinguishes single-source coverage
//! (suicide capture allowed) from multi-source coverage (capture forbidden
//! outright).

use super::types::{Color, NUM_SQUARES};
use super::Square;

/// Per-color air-defense coverage counts.
#[derive(Clone, Debug)]
pub struct AirDefenseZone {
    counts: Vec<u8>,
}

impl AirDefenseZone {
    fn empty() -> Self {
        AirDefenseZone {
            counts: vec![0; NUM_SQUARES],
        }
    }

    /// Number of independent air-defense sources covering `sq`.
    #[must_use]
    pub fn level(&self, sq: Square) -> u8 {
        self.counts[sq.as_index()]
    }

    /// Whether `sq` is covered by at least one source.
    #[must_use]
    pub fn covers(&self, sq: Square) -> bool {
        self.level(sq) > 0
    }

    fn add_source(&mut self, center: Square, radius: u32) {
        for idx in 0..NUM_SQUARES {
            let target = Square::from_index(idx);
            if center.chebyshev_distance(target) as u32 <= radius {
                self.counts[idx] = self.counts[idx].saturating_add(1);
            }
        }
    }
}

/// The pair of per-color air-defense zones for a position.
#[derive(Clone, Debug)]
pub struct AirDefenseZones {
    pub red: AirDefenseZone,
    pub blue: AirDefenseZone,
}

impl AirDefenseZones {
    #[must_use]
    pub fn empty() -> Self {
        AirDefenseZones {
            red: AirDefenseZone::empty(),
            blue: AirDefenseZone::empty(),
        }
    }

    #[must_use]
    pub fn zone_for(&self, color: Color) -> &AirDefenseZone {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    fn zone_for_mut(&mut self, color: Color) -> &mut AirDefenseZone {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        }
    }

    pub(crate) fn register_source(&mut self, color: Color, at: Square, radius: u32) {
        self.zone_for_mut(color).add_source(at, radius);
    }
}

impl Default for AirDefenseZones {
    fn default() -> Self {
        Self::empty()
    }
}
