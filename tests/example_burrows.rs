use std::time::Duration;

use burrow_solver::{solve, Algorithm, Amphipod, Burrow, Position, SolverConfig, State};

const SAMPLE: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########";

#[test]
fn test_sample_burrow() {
    let state = State::parse(SAMPLE).expect("sample diagram parses");
    let result = solve(&state, &SolverConfig::default());
    assert_eq!(result.cost, Some(12521));
    assert!(result.search_exhausted);
}

#[test]
fn test_sample_burrow_best_first() {
    let state = State::parse(SAMPLE).expect("sample diagram parses");
    let config = SolverConfig {
        algorithm: Algorithm::BestFirst,
        ..SolverConfig::default()
    };
    let result = solve(&state, &config);
    assert_eq!(result.cost, Some(12521));
}

#[test]
fn test_sample_burrow_unfolded() {
    let state = State::parse(SAMPLE)
        .expect("sample diagram parses")
        .unfolded()
        .expect("sample diagram is folded");
    let config = SolverConfig {
        timeout: Duration::from_secs(300),
        algorithm: Algorithm::BestFirst,
    };
    let result = solve(&state, &config);
    assert_eq!(result.cost, Some(44169));
}

#[test]
fn test_two_amphipod_swap() {
    let state = State::from_occupancies(
        Burrow::new(2),
        [
            (Position::new(3, 2), Amphipod::Bronze),
            (Position::new(5, 2), Amphipod::Amber),
        ],
    );
    let result = solve(&state, &SolverConfig::default());
    // Amber clears out past the entrances to stop 6 (stop 4 would block
    // Bronze's crossing), Bronze crosses into (5,3) at 10x, Amber comes
    // back into (3,3): 2 + 50 + 5.
    let burrow = state.burrow();
    let expected = burrow.path_length(Position::new(5, 2), Position::new(6, 1)) as u64
        + burrow.path_length(Position::new(3, 2), Position::new(5, 3)) as u64 * 10
        + burrow.path_length(Position::new(6, 1), Position::new(3, 3)) as u64;
    assert_eq!(expected, 57);
    assert_eq!(result.cost, Some(expected));
}

#[test]
fn test_blocked_hallway_has_no_solution() {
    // Copper and Amber stand between each other and their home rooms.
    let state = State::from_occupancies(
        Burrow::new(2),
        [
            (Position::new(4, 1), Amphipod::Copper),
            (Position::new(6, 1), Amphipod::Amber),
        ],
    );
    let result = solve(&state, &SolverConfig::default());
    assert_eq!(result.cost, None);
    assert!(result.search_exhausted);
}
