//! Minimum-cost solver for the amphipod burrow sorting puzzle.
//!
//! Given a burrow diagram (a hallway above four side rooms of configurable
//! depth), this crate searches for the cheapest sequence of legal amphipod
//! moves that sorts every amphipod into its home room, or proves that no
//! such sequence exists.

pub mod burrow;
pub mod moves;
pub mod solver;
pub mod state;

// Re-export main types
pub use burrow::{Amphipod, Burrow, Position};
pub use moves::{productive_moves, Move, MoveList};
pub use solver::{solve, Algorithm, Cost, SolverConfig, SolverResult};
pub use state::{ParseError, State};
