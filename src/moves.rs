//! Productive-move generation.
//!
//! The full legal move set (any amphipod to any reachable cell) branches far
//! too wide to search. Only two move classes can ever appear on an optimal
//! solution, and they are the only ones emitted here:
//!
//! 1. hallway -> the deepest open cell of the mover's home room;
//! 2. out of an unsettled room, either straight into the home room when the
//!    route is open (and then no other move is offered for that amphipod),
//!    or to each reachable hallway stop.
//!
//! An amphipod with no productive move simply contributes nothing; a
//! non-goal state with an empty move set is a dead end for the solver.

use smallvec::SmallVec;

use crate::burrow::{Amphipod, Position, HALLWAY_STOPS, HALLWAY_Y};
use crate::state::State;

/// One amphipod relocation, with its unweighted step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub amphipod: Amphipod,
    pub steps: u32,
}

impl Move {
    /// Weighted cost of the move.
    pub fn cost(&self) -> u64 {
        self.steps as u64 * self.amphipod.step_cost()
    }
}

/// Move lists stay small: at most one move per hallway occupant (up to
/// seven of them) and at most seven per unblocked room occupant (at most
/// one per column), so 35 caps the worst case.
pub type MoveList = SmallVec<[Move; 35]>;

/// Enumerate every productive move available in `state`.
pub fn productive_moves(state: &State) -> MoveList {
    let burrow = state.burrow();
    let mut moves = MoveList::new();

    for (from, amphipod) in state.occupancies() {
        if burrow.is_hallway(from) {
            // Hallway amphipods have exactly one possible destination: the
            // deepest open cell of their home room.
            if let Some(slot) = state.deepest_open_slot(amphipod) {
                if state.hallway_clear(from.x, slot.x) {
                    moves.push(Move {
                        from,
                        to: slot,
                        amphipod,
                        steps: burrow.path_length(from, slot),
                    });
                }
            }
            continue;
        }

        // In a room. Nothing to do once the room below the entrance holds
        // only the right kind, and nothing possible while blocked from above.
        if from.x == amphipod.home_column() && state.room_settled(amphipod) {
            continue;
        }
        if !state.room_above_clear(from) {
            continue;
        }

        // Straight into the home room when possible; any detour through the
        // hallway would only add cost.
        if from.x != amphipod.home_column() {
            if let Some(slot) = state.deepest_open_slot(amphipod) {
                if state.hallway_clear(from.x, slot.x) {
                    moves.push(Move {
                        from,
                        to: slot,
                        amphipod,
                        steps: burrow.path_length(from, slot),
                    });
                    continue;
                }
            }
        }

        for x in HALLWAY_STOPS {
            let to = Position::new(x, HALLWAY_Y);
            if state.occupant(to).is_none() && state.hallway_clear(from.x, x) {
                moves.push(Move {
                    from,
                    to,
                    amphipod,
                    steps: burrow.path_length(from, to),
                });
            }
        }
    }

    moves
}
