//! The table of legal carrier/cargo stack compositions.
//!
//! The composition table is implementation-defined, naming
//! only two examples as notation (`(TIM)`, `(NTI)`). This resolves the open
//! question: Navy is the primary carrier (it is the only piece that crosses
//! both water and land-adjacent squares, so it plausibly ferries a landing
//! party), and Tank can tow up to two light infantry-class units overland.
//! See `DESIGN.md` for the full rationale.

use super::piece::PieceKind;

/// Maximum distinct carried pieces for a given carrier, or `None` if the
/// piece cannot carry at all.
#[must_use]
pub fn carrier_capacity(carrier: PieceKind) -> Option<usize> {
    match carrier {
        PieceKind::Navy => Some(3),
        PieceKind::Tank => Some(2),
        _ => None,
    }
}

/// Whether `cargo` is a piece kind the given carrier is permitted to carry.
#[must_use]
pub fn is_valid_cargo(carrier: PieceKind, cargo: PieceKind) -> bool {
    if cargo == carrier {
        return false;
    }
    match carrier {
        PieceKind::Navy => !matches!(cargo, PieceKind::Navy | PieceKind::AirForce),
        PieceKind::Tank => matches!(
            cargo,
            PieceKind::Infantry | PieceKind::Militia | PieceKind::Engineer
        ),
        _ => false,
    }
}

/// Validate a full proposed stack composition (carrier + carried set): capacity,
/// distinctness, and per-cargo legality.
#[must_use]
pub fn is_legal_stack(carrier: PieceKind, carried: &[PieceKind]) -> bool {
    let Some(cap) = carrier_capacity(carrier) else {
        return false;
    };
    if carried.is_empty() || carried.len() > cap {
        return false;
    }
    let mut seen = Vec::with_capacity(carried.len());
    for &k in carried {
        if seen.contains(&k) || !is_valid_cargo(carrier, k) {
            return false;
        }
        seen.push(k);
    }
    true
}
