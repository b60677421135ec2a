//! Breadth-first search for the minimum presses to a target light diagram

use super::{validate_buttons, SolverError};
use crate::machine::Button;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Default cap on distinct light states explored per solve
pub const DEFAULT_STATE_CAP: usize = 1 << 20;

/// Shortest-path search over the boolean light state space
///
/// Nodes are light diagrams, edges are button presses. The frontier is
/// processed in strict FIFO order, so the depth at which a state is first
/// dequeued is its minimum press count. A visited set of dequeued states
/// prevents re-expansion; FIFO order guarantees no shorter path to a
/// visited state can appear later. The state space is finite (2^lights),
/// so exhausting the queue without hitting the target means the target is
/// unreachable.
#[derive(Debug, Clone)]
pub struct ToggleSearch {
    state_cap: usize,
}

/// Statistics from one toggle search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Distinct states dequeued and expanded
    pub states_explored: usize,
    /// Largest queue length observed
    pub frontier_peak: usize,
}

impl ToggleSearch {
    /// Create a search with the default explored-state cap
    pub fn new() -> Self {
        Self {
            state_cap: DEFAULT_STATE_CAP,
        }
    }

    /// Create a search with an explicit explored-state cap
    ///
    /// Exceeding the cap reports `Unreachable` rather than running the
    /// full closure; useful when the light diagram is wide.
    pub fn with_state_cap(state_cap: usize) -> Self {
        Self { state_cap }
    }

    /// Minimum number of presses to reach `target` from all-off
    pub fn solve(&self, target: &[bool], buttons: &[Button]) -> Result<u64, SolverError> {
        self.solve_with_stats(target, buttons).map(|(presses, _)| presses)
    }

    /// Solve and report search statistics alongside the press count
    pub fn solve_with_stats(
        &self,
        target: &[bool],
        buttons: &[Button],
    ) -> Result<(u64, SearchStats), SolverError> {
        validate_buttons(buttons, target.len())?;

        let mut stats = SearchStats::default();
        let mut visited: HashSet<Vec<bool>> = HashSet::new();
        let mut queue: VecDeque<(Vec<bool>, u64)> = VecDeque::new();
        queue.push_back((vec![false; target.len()], 0));

        while let Some((state, depth)) = queue.pop_front() {
            if !visited.insert(state.clone()) {
                continue;
            }
            stats.states_explored += 1;

            if state.as_slice() == target {
                return Ok((depth, stats));
            }

            if stats.states_explored >= self.state_cap {
                return Err(SolverError::Unreachable);
            }

            for button in buttons {
                queue.push_back((button.toggle(&state), depth + 1));
            }
            stats.frontier_peak = stats.frontier_peak.max(queue.len());
        }

        // Reachable closure exhausted without hitting the target
        Err(SolverError::Unreachable)
    }
}

impl Default for ToggleSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Toggle Search Statistics:")?;
        writeln!(f, "  States explored: {}", self.states_explored)?;
        writeln!(f, "  Frontier peak: {}", self.frontier_peak)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons(wirings: &[&[usize]]) -> Vec<Button> {
        wirings.iter().map(|w| Button::new(w.to_vec())).collect()
    }

    /// Exhaustive check: minimum press count by enumerating all press
    /// sequences up to a depth bound. Only usable for tiny instances.
    fn brute_force_min_presses(target: &[bool], buttons: &[Button], max_depth: u64) -> Option<u64> {
        let mut frontier = vec![vec![false; target.len()]];
        for depth in 0..=max_depth {
            if frontier.iter().any(|s| s.as_slice() == target) {
                return Some(depth);
            }
            frontier = frontier
                .iter()
                .flat_map(|s| buttons.iter().map(move |b| b.toggle(s)))
                .collect();
        }
        None
    }

    #[test]
    fn test_zero_presses_for_all_off_target() {
        let search = ToggleSearch::new();
        let result = search.solve(&[false, false, false], &buttons(&[&[0], &[1, 2]]));
        assert_eq!(result, Ok(0));
    }

    #[test]
    fn test_single_press() {
        let search = ToggleSearch::new();
        let result = search.solve(&[true, true, false], &buttons(&[&[0, 1], &[2]]));
        assert_eq!(result, Ok(1));
    }

    #[test]
    fn test_three_light_scenario() {
        // [#.#] with buttons (0,1) (1,2) (0,2): pressing (0,1) then (1,2)
        // lights 0 and 2, so the minimum is 2 presses
        let search = ToggleSearch::new();
        let target = [true, false, true];
        let panel = buttons(&[&[0, 1], &[1, 2], &[0, 2]]);

        assert_eq!(search.solve(&target, &panel), Ok(2));
        assert_eq!(brute_force_min_presses(&target, &panel, 4), Some(2));
    }

    #[test]
    fn test_matches_brute_force_on_small_instances() {
        let search = ToggleSearch::new();
        let panel = buttons(&[&[0, 1], &[1, 2], &[2, 3], &[0, 3]]);

        for pattern in 0u8..16 {
            let target: Vec<bool> = (0..4).map(|i| pattern & (1 << i) != 0).collect();
            let expected = brute_force_min_presses(&target, &panel, 6);
            let actual = search.solve(&target, &panel).ok();
            assert_eq!(actual, expected, "target {:?}", target);
        }
    }

    #[test]
    fn test_unreachable_with_no_buttons() {
        let search = ToggleSearch::new();
        let result = search.solve(&[true], &[]);
        assert_eq!(result, Err(SolverError::Unreachable));
    }

    #[test]
    fn test_unreachable_when_cell_has_no_wiring() {
        // No button touches light 2, so it can never turn on
        let search = ToggleSearch::new();
        let result = search.solve(&[false, false, true], &buttons(&[&[0], &[0, 1]]));
        assert_eq!(result, Err(SolverError::Unreachable));
    }

    #[test]
    fn test_double_press_cancels() {
        // An odd target parity forces an odd press count even though a
        // single button could reach it and return
        let search = ToggleSearch::new();
        let panel = buttons(&[&[0]]);

        assert_eq!(search.solve(&[true], &panel), Ok(1));
        assert_eq!(search.solve(&[false], &panel), Ok(0));
    }

    #[test]
    fn test_malformed_button_rejected() {
        let search = ToggleSearch::new();
        let result = search.solve(&[true, false], &buttons(&[&[0, 5]]));
        assert_eq!(
            result,
            Err(SolverError::MalformedButton {
                button: 0,
                index: 5,
                len: 2
            })
        );
    }

    #[test]
    fn test_determinism() {
        let search = ToggleSearch::new();
        let target = [true, false, true, true];
        let panel = buttons(&[&[0, 1], &[1, 2], &[2, 3], &[0, 3], &[1, 3]]);

        let first = search.solve(&target, &panel);
        for _ in 0..5 {
            assert_eq!(search.solve(&target, &panel), first);
        }
    }

    #[test]
    fn test_state_cap_reports_unreachable() {
        let search = ToggleSearch::with_state_cap(2);
        // Needs more than two explored states to find
        let result = search.solve(&[true, true, true], &buttons(&[&[0], &[1], &[2]]));
        assert_eq!(result, Err(SolverError::Unreachable));
    }

    #[test]
    fn test_stats_reported() {
        let search = ToggleSearch::new();
        let (presses, stats) = search
            .solve_with_stats(&[true, false, true], &buttons(&[&[0, 1], &[1, 2], &[0, 2]]))
            .unwrap();

        assert_eq!(presses, 2);
        assert!(stats.states_explored >= 2);
        assert!(stats.frontier_peak > 0);
    }
}
