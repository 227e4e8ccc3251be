//! Occupancy state: which amphipod stands on which cell.
//!
//! A `State` is never mutated after construction. Applying a move builds a
//! fresh value, so states already used as memo keys stay stable. Occupancy
//! lives in a `BTreeMap`, whose sorted iteration makes the derived `Eq` and
//! `Hash` independent of insertion order.

use std::collections::BTreeMap;
use std::fmt;

use crate::burrow::{
    Amphipod, Burrow, Position, HALLWAY_MAX_X, HALLWAY_MIN_X, HALLWAY_Y, ROOM_COLUMNS, ROOM_TOP_Y,
};
use crate::moves::Move;

/// Error rejecting a malformed burrow diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer lines than the smallest possible burrow (one room row).
    DiagramTooShort,
    /// A character that is neither wall, floor, nor amphipod symbol.
    UnknownSymbol { symbol: char, x: i32, y: i32 },
    /// An amphipod on a cell that is not a hallway stop or room cell.
    InvalidPosition { symbol: char, x: i32, y: i32 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::DiagramTooShort => {
                write!(f, "diagram too short: need at least one room row")
            }
            ParseError::UnknownSymbol { symbol, x, y } => {
                write!(f, "unknown symbol {:?} at column {}, row {}", symbol, x, y)
            }
            ParseError::InvalidPosition { symbol, x, y } => {
                write!(
                    f,
                    "amphipod {:?} at column {}, row {} is outside the burrow",
                    symbol, x, y
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// One configuration of all amphipods, plus the topology it lives on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    occupancy: BTreeMap<Position, Amphipod>,
    burrow: Burrow,
}

impl State {
    /// Build a state from explicit occupancies. Positions must be distinct
    /// hallway stops or room cells; only tests and the parser construct
    /// states, so this is a debug-level contract.
    pub fn from_occupancies<I>(burrow: Burrow, occupancies: I) -> Self
    where
        I: IntoIterator<Item = (Position, Amphipod)>,
    {
        let occupancy: BTreeMap<Position, Amphipod> = occupancies.into_iter().collect();
        debug_assert!(occupancy
            .keys()
            .all(|&pos| burrow.is_hallway(pos) || burrow.is_room_cell(pos)));
        Self { occupancy, burrow }
    }

    /// Parse the puzzle's ASCII diagram. Room depth is taken from the line
    /// count: top wall, hallway, `depth` room rows, bottom wall.
    pub fn parse(input: &str) -> Result<State, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        if lines.len() < 4 {
            return Err(ParseError::DiagramTooShort);
        }
        let burrow = Burrow::new(lines.len() as i32 - 3);

        let mut occupancy = BTreeMap::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, symbol) in line.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match symbol {
                    '#' | '.' | ' ' => {}
                    _ => {
                        let amphipod =
                            Amphipod::from_symbol(symbol).ok_or(ParseError::UnknownSymbol {
                                symbol,
                                x: pos.x,
                                y: pos.y,
                            })?;
                        let valid_hallway =
                            burrow.is_hallway(pos) && !burrow.is_room_column(pos.x);
                        if !valid_hallway && !burrow.is_room_cell(pos) {
                            return Err(ParseError::InvalidPosition {
                                symbol,
                                x: pos.x,
                                y: pos.y,
                            });
                        }
                        occupancy.insert(pos, amphipod);
                    }
                }
            }
        }

        Ok(Self { occupancy, burrow })
    }

    pub fn burrow(&self) -> Burrow {
        self.burrow
    }

    pub fn occupant(&self, pos: Position) -> Option<Amphipod> {
        self.occupancy.get(&pos).copied()
    }

    /// Iterate all occupied cells in position order.
    pub fn occupancies(&self) -> impl Iterator<Item = (Position, Amphipod)> + '_ {
        self.occupancy.iter().map(|(&pos, &amphipod)| (pos, amphipod))
    }

    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// True when every amphipod stands in its home column.
    pub fn is_goal(&self) -> bool {
        self.occupancies()
            .all(|(pos, amphipod)| pos.x == amphipod.home_column())
    }

    /// True when `kind`'s home room holds no amphipod of another kind.
    /// A settled room is never moved out of.
    pub fn room_settled(&self, kind: Amphipod) -> bool {
        let column = kind.home_column();
        self.occupancies()
            .filter(|&(pos, _)| pos.x == column && pos.y > HALLWAY_Y)
            .all(|(_, occupant)| occupant == kind)
    }

    /// True when every hallway cell strictly between the two columns is
    /// free. Entrance columns block like any other hallway cell; they are
    /// just never occupied in a reachable state.
    pub fn hallway_clear(&self, from_x: i32, to_x: i32) -> bool {
        let (lo, hi) = if from_x < to_x {
            (from_x + 1, to_x - 1)
        } else {
            (to_x + 1, from_x - 1)
        };
        (lo..=hi).all(|x| self.occupant(Position::new(x, HALLWAY_Y)).is_none())
    }

    /// True when every room cell above `pos` in its column is free, so the
    /// occupant there can climb out into the hallway.
    pub fn room_above_clear(&self, pos: Position) -> bool {
        (ROOM_TOP_Y..pos.y).all(|y| self.occupant(Position::new(pos.x, y)).is_none())
    }

    /// Lowest free cell in `kind`'s home room, or `None` while any amphipod
    /// of another kind is still in that room (the room cannot be entered
    /// at all then).
    pub fn deepest_open_slot(&self, kind: Amphipod) -> Option<Position> {
        let column = kind.home_column();
        let mut slot = None;
        for y in self.burrow.room_rows().rev() {
            let pos = Position::new(column, y);
            match self.occupant(pos) {
                Some(occupant) if occupant != kind => return None,
                Some(_) => {}
                None if slot.is_none() => slot = Some(pos),
                None => {}
            }
        }
        slot
    }

    /// Derive the state after one move. The source cell must be occupied by
    /// the moving amphipod and the target cell free.
    pub fn apply(&self, mv: &Move) -> State {
        debug_assert_eq!(self.occupant(mv.from), Some(mv.amphipod));
        debug_assert!(self.occupant(mv.to).is_none());
        let mut occupancy = self.occupancy.clone();
        occupancy.remove(&mv.from);
        occupancy.insert(mv.to, mv.amphipod);
        State {
            occupancy,
            burrow: self.burrow,
        }
    }

    /// The part-two variant of a folded (depth 2) burrow: two extra room
    /// rows are slid in between the existing ones, holding
    /// `D C B A` and then `D B A C` left to right. Existing occupants below
    /// the first room row shift down by two. The insertion rule only makes
    /// sense for a folded burrow, so any other depth yields `None`.
    pub fn unfolded(&self) -> Option<State> {
        if self.burrow.depth() != 2 {
            return None;
        }
        const INSERTED: [[Amphipod; 4]; 2] = [
            [
                Amphipod::Desert,
                Amphipod::Copper,
                Amphipod::Bronze,
                Amphipod::Amber,
            ],
            [
                Amphipod::Desert,
                Amphipod::Bronze,
                Amphipod::Amber,
                Amphipod::Copper,
            ],
        ];

        let mut occupancy = BTreeMap::new();
        for (pos, amphipod) in self.occupancies() {
            let pos = if pos.y > ROOM_TOP_Y {
                Position::new(pos.x, pos.y + 2)
            } else {
                pos
            };
            occupancy.insert(pos, amphipod);
        }
        for (row_offset, row) in INSERTED.iter().enumerate() {
            for (room, &amphipod) in row.iter().enumerate() {
                let pos = Position::new(ROOM_COLUMNS[room], ROOM_TOP_Y + 1 + row_offset as i32);
                occupancy.insert(pos, amphipod);
            }
        }

        Some(State {
            occupancy,
            burrow: Burrow::new(self.burrow.depth() + 2),
        })
    }
}

/// Renders the diagram form of the state, walls included.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |pos: Position| {
            self.occupant(pos)
                .map(Amphipod::symbol)
                .unwrap_or('.')
        };

        writeln!(f, "#############")?;
        write!(f, "#")?;
        for x in HALLWAY_MIN_X..=HALLWAY_MAX_X {
            write!(f, "{}", cell(Position::new(x, HALLWAY_Y)))?;
        }
        writeln!(f, "#")?;
        for y in self.burrow.room_rows() {
            let (prefix, suffix) = if y == ROOM_TOP_Y {
                ("###", "###")
            } else {
                ("  #", "#")
            };
            write!(f, "{}", prefix)?;
            for x in ROOM_COLUMNS {
                write!(f, "{}#", cell(Position::new(x, y)))?;
            }
            // The top room row's trailing wall is already the last '#'.
            writeln!(f, "{}", &suffix[1..])?;
        }
        writeln!(f, "  #########")
    }
}
