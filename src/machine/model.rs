//! Machine and button domain types

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wiring button on a machine's control panel
///
/// A button is a fixed set of cell indices. Pressing it toggles those
/// indices on the light diagram, or adds one joltage to each of them on
/// the counter bank. Indices are stored sorted and deduplicated so that
/// equal buttons compare equal regardless of input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    indices: Vec<usize>,
}

impl Button {
    /// Create a button from a list of cell indices
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// The cell indices this button is wired to
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of cells this button touches
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the button is wired to nothing
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest cell index this button references, if any
    pub fn max_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Toggle this button's cells on a light state, returning the new state
    pub fn toggle(&self, state: &[bool]) -> Vec<bool> {
        let mut next = state.to_vec();
        for &i in &self.indices {
            next[i] = !next[i];
        }
        next
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.indices.iter().join(","))
    }
}

/// One factory machine puzzle instance
///
/// Holds both targets: the light diagram for the toggle problem and the
/// joltage counters for the accumulation problem. The initial state is
/// always all-off / all-zero; only the targets are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Target light diagram (true = lit)
    pub lights: Vec<bool>,
    /// Buttons available on this machine, in panel order
    pub buttons: Vec<Button>,
    /// Target joltage counters
    pub joltage: Vec<u64>,
}

impl Machine {
    /// Create a new machine
    pub fn new(lights: Vec<bool>, buttons: Vec<Button>, joltage: Vec<u64>) -> Self {
        Self {
            lights,
            buttons,
            joltage,
        }
    }

    /// Number of lights on the diagram
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Number of lights that must end up lit
    pub fn lit_count(&self) -> usize {
        self.lights.iter().filter(|&&l| l).count()
    }

    /// Sum of the joltage targets
    pub fn total_joltage(&self) -> u64 {
        self.joltage.iter().sum()
    }

    /// Size of the boolean state space the toggle search ranges over
    ///
    /// None if the diagram is too wide to count (more than 127 lights).
    pub fn state_space_size(&self) -> Option<u128> {
        if self.lights.len() < 128 {
            Some(1u128 << self.lights.len())
        } else {
            None
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagram: String = self.lights.iter().map(|&l| if l { '#' } else { '.' }).collect();
        write!(f, "[{}]", diagram)?;
        for button in &self.buttons {
            write!(f, " {}", button)?;
        }
        write!(f, " {{{}}}", self.joltage.iter().join(","))
    }
}
