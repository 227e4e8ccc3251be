//! Minimum-cost search over the state graph spanned by the productive
//! moves.
//!
//! The primary algorithm is a memoized recursion: the minimum cost from a
//! state to the goal is the cheapest move-plus-remainder over its
//! successors, with every fully resolved state cached in a memo table owned
//! by the running search. Recursion depth is bounded by the number of moves
//! on a solution path (each amphipod moves at most twice), so the stack
//! stays shallow even on unfolded burrows.
//!
//! A uniform-cost frontier search (min-heap keyed by accumulated cost) is
//! available as an alternative for very large instances.
//!
//! "No solution" is a normal outcome, reported as an absent cost, never as
//! a sentinel value.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::{Duration, Instant};

use crate::moves::productive_moves;
use crate::state::State;

/// Total weighted movement cost.
pub type Cost = u64;

/// Which search backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Memoized recursive minimum-cost-to-goal.
    #[default]
    Memoized,
    /// Uniform-cost frontier (Dijkstra over the implicit graph).
    BestFirst,
}

/// Configuration for a search run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum time to search before giving up.
    pub timeout: Duration,
    pub algorithm: Algorithm,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            algorithm: Algorithm::Memoized,
        }
    }
}

/// Outcome of a search run.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Minimum total cost to sort the burrow, or `None` when no solution
    /// exists (or the deadline expired first).
    pub cost: Option<Cost>,
    /// Whether the reachable state space was fully resolved. `false` with
    /// an absent cost means the deadline expired; `true` with an absent
    /// cost means the configuration is proven unsolvable.
    pub search_exhausted: bool,
    /// States expanded (move generation runs).
    pub states_expanded: usize,
    /// Expansions avoided by the memo (or, for the frontier search, states
    /// skipped because a cheaper route was already known).
    pub memo_hits: usize,
    pub time_elapsed_ms: u64,
}

/// Signals that the deadline expired mid-search. The unwind must not leave
/// half-resolved entries in the memo.
struct DeadlineExpired;

#[derive(Default)]
struct SearchStats {
    states_expanded: usize,
    memo_hits: usize,
}

/// Memo table mapping a state to its minimum cost to goal, with `None`
/// recording states proven unsolvable. Deterministic move generation over a
/// finite graph means an unsolvable verdict can never change, so those are
/// cached permanently too.
type Memo = HashMap<State, Option<Cost>>;

fn min_cost_to_goal(
    state: &State,
    memo: &mut Memo,
    stats: &mut SearchStats,
    deadline: Instant,
) -> Result<Option<Cost>, DeadlineExpired> {
    if state.is_goal() {
        return Ok(Some(0));
    }
    if let Some(&cached) = memo.get(state) {
        stats.memo_hits += 1;
        return Ok(cached);
    }
    if Instant::now() > deadline {
        return Err(DeadlineExpired);
    }
    stats.states_expanded += 1;

    let mut best: Option<Cost> = None;
    for mv in productive_moves(state) {
        let successor = state.apply(&mv);
        if let Some(remainder) = min_cost_to_goal(&successor, memo, stats, deadline)? {
            let total = mv.cost() + remainder;
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }

    memo.insert(state.clone(), best);
    Ok(best)
}

/// Entry in the best-first frontier, ordered so the heap pops the cheapest
/// accumulated cost first.
#[derive(PartialEq, Eq)]
struct FrontierEntry {
    cost: Cost,
    state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse for min-heap behavior.
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn best_first(
    initial: &State,
    stats: &mut SearchStats,
    deadline: Instant,
) -> Result<Option<Cost>, DeadlineExpired> {
    let mut best_known: HashMap<State, Cost> = HashMap::new();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    best_known.insert(initial.clone(), 0);
    frontier.push(FrontierEntry {
        cost: 0,
        state: initial.clone(),
    });

    while let Some(FrontierEntry { cost, state }) = frontier.pop() {
        if Instant::now() > deadline {
            return Err(DeadlineExpired);
        }
        if state.is_goal() {
            return Ok(Some(cost));
        }
        // Stale entry: a cheaper route to this state was found after it
        // was pushed.
        if best_known.get(&state).is_some_and(|&known| known < cost) {
            stats.memo_hits += 1;
            continue;
        }
        stats.states_expanded += 1;

        for mv in productive_moves(&state) {
            let successor = state.apply(&mv);
            let successor_cost = cost + mv.cost();
            match best_known.get(&successor) {
                Some(&known) if known <= successor_cost => {
                    stats.memo_hits += 1;
                }
                _ => {
                    best_known.insert(successor.clone(), successor_cost);
                    frontier.push(FrontierEntry {
                        cost: successor_cost,
                        state: successor,
                    });
                }
            }
        }
    }

    Ok(None)
}

/// Search for the minimum total cost to sort `initial`. Each call owns a
/// fresh memo table, so independent runs (say the folded and unfolded
/// variants of one input) cannot contaminate each other.
pub fn solve(initial: &State, config: &SolverConfig) -> SolverResult {
    let start = Instant::now();
    let deadline = start + config.timeout;
    let mut stats = SearchStats::default();

    let outcome = match config.algorithm {
        Algorithm::Memoized => {
            let mut memo = Memo::new();
            min_cost_to_goal(initial, &mut memo, &mut stats, deadline)
        }
        Algorithm::BestFirst => best_first(initial, &mut stats, deadline),
    };

    let (cost, search_exhausted) = match outcome {
        Ok(cost) => (cost, true),
        Err(DeadlineExpired) => (None, false),
    };

    SolverResult {
        cost,
        search_exhausted,
        states_expanded: stats.states_expanded,
        memo_hits: stats.memo_hits,
        time_elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
