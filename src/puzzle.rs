use std::collections::{HashMap, VecDeque};
use std::fmt::{Display, Formatter};

use crate::color::Color;
use crate::solver;
use crate::solver::{Solution, SolverFailure};
use crate::tube::{Tube, TUBE_CAPACITY};

/// Reasons a [`Puzzle`] cannot be constructed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PuzzleError {
    /// Some color's total unit count across all tubes is not a multiple of [`TUBE_CAPACITY`],
    /// so no arrangement of whole tubes can ever absorb it and no solved state exists.
    UnsolvableComposition {
        /// The offending color.
        color: Color,
        /// Its total unit count across all tubes.
        total: usize,
    },
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsolvableComposition { color, total } => {
                write!(f, "color {} has {} units, not a multiple of {}", color, total, TUBE_CAPACITY)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// An ordered collection of [`Tube`]s.
///
/// [`Puzzle`]s should be built using a [`PuzzleBuilder`](crate::builder::PuzzleBuilder), which
/// assigns tube ids and applies the composition check. Construction reorders tubes so that empty
/// tubes sit at the back, with relative order otherwise preserved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    pub(crate) tubes: VecDeque<Tube>,
}

impl Puzzle {
    /// Assemble a puzzle from `tubes`, validating its composition.
    ///
    /// Every color's total unit count must be a multiple of [`TUBE_CAPACITY`], otherwise
    /// construction fails with [`PuzzleError::UnsolvableComposition`] and no puzzle is observable.
    /// Use [`new_unchecked`](Self::new_unchecked) to bypass the check for partial fixtures.
    pub fn new(tubes: Vec<Tube>) -> Result<Self, PuzzleError> {
        let mut totals: HashMap<Color, usize> = HashMap::new();
        for run in tubes.iter().flat_map(Tube::runs) {
            *totals.entry(run.color()).or_insert(0) += run.count();
        }

        for (color, total) in totals {
            if total % TUBE_CAPACITY != 0 {
                return Err(PuzzleError::UnsolvableComposition { color, total });
            }
        }

        Ok(Self::new_unchecked(tubes))
    }

    /// Assemble a puzzle without the composition check.
    ///
    /// Tubes are still partitioned non-empty-first. Intended for deliberately partial or invalid
    /// fixtures; a puzzle with an off-multiple color can never reach a solved state.
    pub fn new_unchecked(tubes: Vec<Tube>) -> Self {
        let (filled, empty): (Vec<_>, Vec<_>) = tubes.into_iter().partition(|tube| !tube.is_empty());

        Self { tubes: filled.into_iter().chain(empty).collect() }
    }

    /// Whether this puzzle holds no tubes at all.
    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    /// The number of tubes in this puzzle.
    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    /// Whether every tube is solved (see [`Tube::solved`]). Vacuously true for no tubes.
    pub fn solved(&self) -> bool {
        self.tubes.iter().all(Tube::solved)
    }

    /// The tubes in this puzzle, in search order (non-empty first).
    pub fn tubes(&self) -> impl Iterator<Item = &Tube> {
        self.tubes.iter()
    }

    /// The tube at `index` in search order, if present.
    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }

    /// Remove and return the front tube, or [`None`] if the puzzle holds no tubes.
    pub fn pop_front(&mut self) -> Option<Tube> {
        self.tubes.pop_front()
    }

    /// Insert `tube` at the front of the tube order.
    pub fn push_front(&mut self, tube: Tube) {
        self.tubes.push_front(tube);
    }

    /// Append `tube` at the back of the tube order.
    pub fn push_back(&mut self, tube: Tube) {
        self.tubes.push_back(tube);
    }

    /// Solves this puzzle, deferring to the crate's depth-bounded backtracking search.
    ///
    /// `budget` is a hard ceiling on the length of the pour sequence (and on recursion depth),
    /// not a heuristic: a solvable puzzle is reported as
    /// [`SolverFailure::BudgetExceeded`] if the budget is too small to reach its solution.
    ///
    /// Returns the first [`Solution`] found, in deterministic tube order, or a
    /// [`SolverFailure`] carrying the puzzle back in its entry state.
    pub fn solve(self, budget: u32) -> Result<Solution, SolverFailure> {
        solver::solve(self, budget)
    }
}
