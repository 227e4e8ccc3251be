//! Geometry of the burrow: the hallway, the side rooms, and the four
//! amphipod kinds with their fixed home columns and step costs.
//!
//! Everything here is pure topology. Nothing in this module knows about
//! occupancy or search; those live in `state` and `solver`.

/// Amphipod kind. The set is closed, so per-kind behavior is plain match
/// tables rather than trait dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amphipod {
    Amber,
    Bronze,
    Copper,
    Desert,
}

impl Amphipod {
    pub const ALL: [Amphipod; 4] = [
        Amphipod::Amber,
        Amphipod::Bronze,
        Amphipod::Copper,
        Amphipod::Desert,
    ];

    /// Column of the side room this kind must end up in.
    pub fn home_column(self) -> i32 {
        match self {
            Amphipod::Amber => 3,
            Amphipod::Bronze => 5,
            Amphipod::Copper => 7,
            Amphipod::Desert => 9,
        }
    }

    /// Energy spent per step moved.
    pub fn step_cost(self) -> u64 {
        match self {
            Amphipod::Amber => 1,
            Amphipod::Bronze => 10,
            Amphipod::Copper => 100,
            Amphipod::Desert => 1000,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Amphipod::Amber => 'A',
            Amphipod::Bronze => 'B',
            Amphipod::Copper => 'C',
            Amphipod::Desert => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Amphipod> {
        match symbol {
            'A' => Some(Amphipod::Amber),
            'B' => Some(Amphipod::Bronze),
            'C' => Some(Amphipod::Copper),
            'D' => Some(Amphipod::Desert),
            _ => None,
        }
    }
}

/// Position on the burrow grid. `x` is the column, `y` the row, both
/// matching the puzzle diagram (top-left wall is 0,0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The fixed burrow topology: one hallway row above four side rooms of
/// uniform, configurable depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burrow {
    depth: i32,
}

/// Row the hallway occupies.
pub const HALLWAY_Y: i32 = 1;
/// Leftmost and rightmost hallway columns.
pub const HALLWAY_MIN_X: i32 = 1;
pub const HALLWAY_MAX_X: i32 = 11;
/// Columns of the four side rooms, left to right.
pub const ROOM_COLUMNS: [i32; 4] = [3, 5, 7, 9];
/// Topmost row inside a side room.
pub const ROOM_TOP_Y: i32 = 2;

/// Hallway columns an amphipod may stop at. The cells directly above a
/// room entrance are transit-only.
pub const HALLWAY_STOPS: [i32; 7] = [1, 2, 4, 6, 8, 10, 11];

impl Burrow {
    pub fn new(depth: i32) -> Self {
        debug_assert!(depth >= 1);
        Self { depth }
    }

    /// Number of cells in each side room.
    pub fn depth(self) -> i32 {
        self.depth
    }

    pub fn is_hallway(self, pos: Position) -> bool {
        pos.y == HALLWAY_Y && (HALLWAY_MIN_X..=HALLWAY_MAX_X).contains(&pos.x)
    }

    pub fn is_room_column(self, x: i32) -> bool {
        ROOM_COLUMNS.contains(&x)
    }

    /// Bottom row of a side room.
    pub fn room_bottom_y(self) -> i32 {
        ROOM_TOP_Y + self.depth - 1
    }

    /// Rows of every side room, top to bottom.
    pub fn room_rows(self) -> std::ops::RangeInclusive<i32> {
        ROOM_TOP_Y..=self.room_bottom_y()
    }

    pub fn is_room_cell(self, pos: Position) -> bool {
        self.is_room_column(pos.x) && self.room_rows().contains(&pos.y)
    }

    /// Unweighted step count between two cells routed through the hallway:
    /// up out of a room, across, and down into a room. Does not check that
    /// the route is unobstructed.
    pub fn path_length(self, from: Position, to: Position) -> u32 {
        let up = from.y - HALLWAY_Y;
        let down = to.y - HALLWAY_Y;
        let across = (from.x - to.x).abs();
        (up + across + down) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_columns_and_costs() {
        assert_eq!(Amphipod::Amber.home_column(), 3);
        assert_eq!(Amphipod::Desert.home_column(), 9);
        assert_eq!(Amphipod::Amber.step_cost(), 1);
        assert_eq!(Amphipod::Bronze.step_cost(), 10);
        assert_eq!(Amphipod::Copper.step_cost(), 100);
        assert_eq!(Amphipod::Desert.step_cost(), 1000);
    }

    #[test]
    fn test_symbol_round_trip() {
        for kind in Amphipod::ALL {
            assert_eq!(Amphipod::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(Amphipod::from_symbol('E'), None);
    }

    #[test]
    fn test_hallway_bounds() {
        let burrow = Burrow::new(2);
        assert!(burrow.is_hallway(Position::new(1, 1)));
        assert!(burrow.is_hallway(Position::new(11, 1)));
        assert!(!burrow.is_hallway(Position::new(0, 1)));
        assert!(!burrow.is_hallway(Position::new(12, 1)));
        assert!(!burrow.is_hallway(Position::new(3, 2)));
    }

    #[test]
    fn test_hallway_stops_exclude_entrances() {
        for x in ROOM_COLUMNS {
            assert!(!HALLWAY_STOPS.contains(&x));
        }
    }

    #[test]
    fn test_room_cells_respect_depth() {
        let folded = Burrow::new(2);
        assert!(folded.is_room_cell(Position::new(3, 2)));
        assert!(folded.is_room_cell(Position::new(9, 3)));
        assert!(!folded.is_room_cell(Position::new(9, 4)));
        assert!(!folded.is_room_cell(Position::new(4, 2)));

        let unfolded = Burrow::new(4);
        assert!(unfolded.is_room_cell(Position::new(9, 5)));
        assert!(!unfolded.is_room_cell(Position::new(9, 6)));
    }

    #[test]
    fn test_path_length_room_to_hallway() {
        let burrow = Burrow::new(2);
        // Out of (3,3): two steps up, three across.
        assert_eq!(
            burrow.path_length(Position::new(3, 3), Position::new(6, 1)),
            5
        );
    }

    #[test]
    fn test_path_length_hallway_to_room() {
        let burrow = Burrow::new(2);
        assert_eq!(
            burrow.path_length(Position::new(1, 1), Position::new(9, 3)),
            10
        );
    }

    #[test]
    fn test_path_length_room_to_room() {
        let burrow = Burrow::new(2);
        // (3,2) up one, across two, down one into (5,2).
        assert_eq!(
            burrow.path_length(Position::new(3, 2), Position::new(5, 2)),
            4
        );
    }
}
