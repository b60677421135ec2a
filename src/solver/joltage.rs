//! Exact minimization of total presses for a joltage counter target
//!
//! Joltage counters are unbounded, so a breadth-first search over counter
//! vectors does not terminate on real inputs; it only looks workable on
//! tiny examples. The counters are therefore never searched directly.
//! Instead the per-button usage-counts are the variables: with `k_i >= 0`
//! presses of button `i`, reaching the target means
//!
//! ```text
//! for every cell j:  sum of k_i over buttons wired to j  ==  target[j]
//! ```
//!
//! and the objective is to minimize `sum k_i`. This integer program is
//! solved exactly by depth-first branch-and-bound: every wired cell caps
//! its buttons at the remaining target (`k_i <= min remaining over wired
//! cells`), so the search tree is finite, and admissible lower bounds
//! prune it hard.

use super::{validate_buttons, SolverError};
use crate::machine::Button;
use std::fmt;

/// Exact usage-count optimizer for joltage targets
#[derive(Debug, Clone, Default)]
pub struct JoltageOptimizer;

/// Statistics from one optimization run
#[derive(Debug, Clone, Default)]
pub struct OptimizerStats {
    /// Branch-and-bound nodes visited
    pub nodes_explored: usize,
}

impl JoltageOptimizer {
    /// Create a new optimizer
    pub fn new() -> Self {
        Self
    }

    /// Minimum total presses so the counters equal `target`, from all-zero
    pub fn solve(&self, target: &[u64], buttons: &[Button]) -> Result<u64, SolverError> {
        self.solve_with_stats(target, buttons).map(|(presses, _)| presses)
    }

    /// Solve and report optimizer statistics alongside the press count
    pub fn solve_with_stats(
        &self,
        target: &[u64],
        buttons: &[Button],
    ) -> Result<(u64, OptimizerStats), SolverError> {
        validate_buttons(buttons, target.len())?;

        let mut search = BranchAndBound::new(target, buttons);
        let mut remaining = target.to_vec();
        search.descend(0, &mut remaining, 0);

        let stats = OptimizerStats {
            nodes_explored: search.nodes_explored,
        };
        match search.best {
            Some(presses) => Ok((presses, stats)),
            None => Err(SolverError::Infeasible),
        }
    }
}

/// Depth-first branch-and-bound over press counts, one button per level
///
/// All state is owned by a single solve call.
struct BranchAndBound<'a> {
    buttons: &'a [Button],
    /// For each cell, the last button position wired to it (None if no
    /// button touches the cell)
    last_wired: Vec<Option<usize>>,
    /// Largest button size among `buttons[pos..]`, per position
    suffix_max_size: Vec<usize>,
    best: Option<u64>,
    nodes_explored: usize,
}

impl<'a> BranchAndBound<'a> {
    fn new(target: &[u64], buttons: &'a [Button]) -> Self {
        let mut last_wired = vec![None; target.len()];
        for (pos, button) in buttons.iter().enumerate() {
            for &j in button.indices() {
                last_wired[j] = Some(pos);
            }
        }

        let mut suffix_max_size = vec![0usize; buttons.len() + 1];
        for pos in (0..buttons.len()).rev() {
            suffix_max_size[pos] = suffix_max_size[pos + 1].max(buttons[pos].len());
        }

        Self {
            buttons,
            last_wired,
            suffix_max_size,
            best: None,
            nodes_explored: 0,
        }
    }

    /// Fix press counts for `buttons[pos..]`, with `remaining` holding the
    /// still-unmet portion of the target and `used` the presses spent so far
    fn descend(&mut self, pos: usize, remaining: &mut Vec<u64>, used: u64) {
        self.nodes_explored += 1;

        let Some(bound) = self.lower_bound(pos, remaining) else {
            // Some unmet cell has no unfixed button left
            return;
        };
        if let Some(best) = self.best {
            if used + bound >= best {
                return;
            }
        }

        if pos == self.buttons.len() {
            // All counts fixed; the lower bound is zero here, so the
            // target is met exactly
            self.best = Some(used);
            return;
        }

        let button = &self.buttons[pos];
        let cap = button
            .indices()
            .iter()
            .map(|&j| remaining[j])
            .min()
            .unwrap_or(0);

        // High counts first: feasible leaves tend to consume large targets
        // early, giving the bound a tight incumbent to prune against
        for presses in (0..=cap).rev() {
            for &j in button.indices() {
                remaining[j] -= presses;
            }
            self.descend(pos + 1, remaining, used + presses);
            for &j in button.indices() {
                remaining[j] += presses;
            }
        }
    }

    /// Admissible lower bound on the presses still needed, or None if the
    /// remaining target is provably unmeetable from `pos`
    fn lower_bound(&self, pos: usize, remaining: &[u64]) -> Option<u64> {
        let mut max_cell = 0u64;
        let mut total = 0u64;
        for (j, &rem) in remaining.iter().enumerate() {
            if rem == 0 {
                continue;
            }
            match self.last_wired[j] {
                Some(last) if last >= pos => {}
                _ => return None,
            }
            max_cell = max_cell.max(rem);
            total += rem;
        }

        if total == 0 {
            return Some(0);
        }

        // Each press raises a cell by at most one, and raises at most
        // suffix_max_size cells at once
        let width = self.suffix_max_size[pos] as u64;
        Some(max_cell.max(total.div_ceil(width)))
    }
}

impl fmt::Display for OptimizerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Joltage Optimizer Statistics:")?;
        writeln!(f, "  Nodes explored: {}", self.nodes_explored)?;
        Ok(())
    }
}
