#![warn(missing_docs)]

//! # `decant`
//!
//! A solver for water-sort puzzles: fixed-capacity tubes hold stacked colored units, a move pours
//! the top contiguous same-colored run from one tube onto another if capacity and color rules
//! allow, and the puzzle is solved when every tube is either empty or filled with a single color.
//! Begin by building a puzzle object using a [`PuzzleBuilder`](builder::PuzzleBuilder), then call
//! [`solve()`](crate::Puzzle::solve) with a move budget, consuming the puzzle and yielding a
//! solved version of the puzzle along with the pour sequence that reaches it.
//!
//! # Internals
//! Tube contents are run-length encoded: a tube is an ordered stack of `{color, count}` runs in
//! which adjacent runs never share a color, so "the current top color and how many units of it"
//! is a single [`peek`](crate::Tube::peek) rather than a rescan.
//!
//! The search is a depth-first, exhaustive, backtracking exploration of pour moves. Each
//! recursive call mutates its own copy of the puzzle, snapshotting a destination tube before a
//! tentative pour and restoring it verbatim when the branch dies, so a failed branch leaves no
//! trace. There is no visited-state memoization; termination relies entirely on the move budget,
//! which is a hard ceiling on path length and recursion depth. The first solution found wins and
//! the search short-circuits. A budget too small to settle the question is reported as its own
//! outcome, distinct from "no solution exists within budget".

pub use color::{Color, ColorRun};
pub use puzzle::{Puzzle, PuzzleError};
pub use solver::{Move, Solution, SolverFailure};
pub use tube::{Tube, TubeError, TubeId, TUBE_CAPACITY};

pub mod builder;
pub(crate) mod color;
pub(crate) mod puzzle;
pub(crate) mod solver;
pub(crate) mod tube;
