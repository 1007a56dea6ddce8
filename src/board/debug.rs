//! Debug-only structural invariant checks (stack invariants,
//! commander uniqueness, occupancy/square consistency) that should never
//! surface in correct use. Invoked from `make_unmake`/`deploy` in debug
//! builds and covered by its own tests below.

use super::error::StackError;
use super::state::Board;
use super::types::stack::is_legal_stack;
use super::types::{PieceContent, PieceKind, MAX_STACK_CARRIED, NUM_SQUARES};

#[cfg(debug_assertions)]
impl Board {
    /// Checks every square's stack well-formedness and commander
    /// uniqueness/position-cache consistency. Returns the first violation
    /// found, if any; a clean position returns `Ok(())`.
    pub(crate) fn check_invariants(&self) -> Result<(), StackError> {
        let mut commander_count = [0u32; 2];

        for idx in 0..NUM_SQUARES {
            let Some(content) = &self.squares[idx] else {
                continue;
            };
            if let PieceContent::Stack { carrier, carried } = content {
                if carried.is_empty() || carried.len() > MAX_STACK_CARRIED {
                    return Err(StackError::TooManyCarried {
                        count: carried.len(),
                        max: MAX_STACK_CARRIED,
                    });
                }
                let mut seen = vec![carrier.kind];
                for piece in carried {
                    if piece.color != carrier.color {
                        return Err(StackError::MixedColor);
                    }
                    if seen.contains(&piece.kind) {
                        return Err(StackError::DuplicateType {
                            kind: format!("{:?}", piece.kind),
                        });
                    }
                    seen.push(piece.kind);
                }
                let carried_kinds: Vec<PieceKind> = carried.iter().map(|p| p.kind).collect();
                if !is_legal_stack(carrier.kind, &carried_kinds) {
                    return Err(StackError::IllegalComposition);
                }
            }
            if content.carrier().kind == PieceKind::Commander {
                commander_count[content.color().index()] += 1;
            }
        }

        if commander_count[0] > 1 || commander_count[1] > 1 {
            return Err(StackError::DuplicateCommander);
        }

        for (idx, cached) in self.commanders.iter().enumerate() {
            let Some(sq) = cached else { continue };
            let on_board = self.piece_at(*sq).is_some_and(|c| {
                c.carrier().kind == PieceKind::Commander && c.color().index() == idx
            });
            if !on_board {
                return Err(StackError::InvalidSquare { index: sq.as_index() });
            }
        }

        Ok(())
    }
}

#[cfg(all(test, debug_assertions))]
mod tests {
    use super::*;
    use crate::board::builder::BoardBuilder;
    use crate::board::types::{Color, PieceSlot};

    #[test]
    fn starting_position_has_no_invariant_violations() {
        let board = BoardBuilder::starting_position().build();
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn oversized_stack_is_flagged() {
        let board = BoardBuilder::empty()
            .stack(
                "e5".parse().unwrap(),
                PieceSlot::new(PieceKind::Navy, Color::Red),
                vec![
                    PieceSlot::new(PieceKind::Tank, Color::Red),
                    PieceSlot::new(PieceKind::Infantry, Color::Red),
                    PieceSlot::new(PieceKind::Militia, Color::Red),
                    PieceSlot::new(PieceKind::Engineer, Color::Red),
                ],
            )
            .build();
        assert_eq!(
            board.check_invariants(),
            Err(StackError::TooManyCarried { count: 4, max: MAX_STACK_CARRIED })
        );
    }

    #[test]
    fn mixed_color_stack_is_flagged() {
        let board = BoardBuilder::empty()
            .stack(
                "e5".parse().unwrap(),
                PieceSlot::new(PieceKind::Navy, Color::Red),
                vec![PieceSlot::new(PieceKind::Tank, Color::Blue)],
            )
            .build();
        assert_eq!(board.check_invariants(), Err(StackError::MixedColor));
    }

    #[test]
    fn illegal_carrier_composition_is_flagged() {
        let board = BoardBuilder::empty()
            .stack(
                "e5".parse().unwrap(),
                PieceSlot::new(PieceKind::Commander, Color::Red),
                vec![PieceSlot::new(PieceKind::Infantry, Color::Red)],
            )
            .build();
        assert_eq!(board.check_invariants(), Err(StackError::IllegalComposition));
    }

    #[test]
    fn duplicate_commander_is_flagged() {
        let board = BoardBuilder::empty()
            .piece("e1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .piece("f1".parse().unwrap(), PieceKind::Commander, Color::Red)
            .build();
        assert_eq!(board.check_invariants(), Err(StackError::DuplicateCommander));
    }
}
