use std::fmt::{Display, Formatter};

use crate::puzzle::Puzzle;
use crate::tube::TubeId;

/// A single pour, transferring the entire top run of one tube onto another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// Id of the tube poured from.
    pub from: TubeId,
    /// Id of the tube poured onto.
    pub to: TubeId,
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02} -> {:02}", self.from, self.to)
    }
}

/// A solved puzzle along with the pour sequence that reaches it, as returned by
/// [`Puzzle::solve`].
#[derive(Clone, Debug)]
pub struct Solution {
    puzzle: Puzzle,
    moves: Vec<Move>,
}

impl Solution {
    /// The puzzle in its solved state.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The pours that transform the initial state into [`puzzle`](Self::puzzle), in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Decompose into the solved puzzle and the move path.
    pub fn into_parts(self) -> (Puzzle, Vec<Move>) {
        (self.puzzle, self.moves)
    }
}

/// Reasons [`Puzzle::solve`] may fail. Both variants carry the puzzle back in its entry state.
#[derive(Clone, Debug)]
pub enum SolverFailure {
    /// Every pour sequence reachable within the budget was explored and none reaches a solved
    /// state. This is a normal negative result, not an error in the caller's setup.
    NoSolution(Puzzle),
    /// The move budget went negative on some branch before the search space was exhausted.
    /// The budget is too small to tell "no solution" from "not yet explored"; retry with a
    /// larger one.
    BudgetExceeded(Puzzle),
}

impl SolverFailure {
    /// The puzzle as it stood when [`Puzzle::solve`] was called.
    pub fn puzzle(&self) -> &Puzzle {
        match self {
            Self::NoSolution(puzzle) | Self::BudgetExceeded(puzzle) => puzzle,
        }
    }
}

impl Display for SolverFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSolution(_) => write!(f, "no pour sequence within budget solves the puzzle"),
            Self::BudgetExceeded(_) => write!(f, "move budget exhausted before the search space"),
        }
    }
}

impl std::error::Error for SolverFailure {}

// Distinguishes the budget going negative, which aborts the whole search, from an exhausted
// branch, which merely backtracks.
struct BudgetViolation;

pub(crate) fn solve(puzzle: Puzzle, budget: u32) -> Result<Solution, SolverFailure> {
    let mut path = Vec::new();
    match search(&puzzle, i64::from(budget), &mut path) {
        Ok(Some(solved)) => Ok(Solution { puzzle: solved, moves: path }),
        Ok(None) => Err(SolverFailure::NoSolution(puzzle)),
        Err(BudgetViolation) => Err(SolverFailure::BudgetExceeded(puzzle)),
    }
}

/// Depth-first backtracking over pour moves.
///
/// Each call operates on its own copy of `puzzle`; `path` always holds exactly the moves still
/// on the stack of the active branch. The first solution found wins, so exploration order (tube
/// order, then destination order) decides which solution is returned when several exist.
fn search(
    puzzle: &Puzzle,
    budget: i64,
    path: &mut Vec<Move>,
) -> Result<Option<Puzzle>, BudgetViolation> {
    if puzzle.solved() {
        return Ok(Some(puzzle.clone()));
    }

    // unreachable through the builder, which never yields an unsolved tubeless puzzle
    if puzzle.is_empty() {
        return Ok(None);
    }

    if budget < 0 {
        return Err(BudgetViolation);
    }

    let mut working = puzzle.clone();
    for source in 0..working.tubes.len() {
        let Some(run) = working.tubes[source].pop() else {
            continue;
        };
        let from = working.tubes[source].id();

        for dest in 0..working.tubes.len() {
            if working.tubes[dest].id() == from {
                continue;
            }

            // pouring into an empty tube from a now-empty source swaps two empties; prune
            if working.tubes[dest].is_empty() && working.tubes[source].is_empty() {
                continue;
            }

            if !working.tubes[dest].fits(run.color(), run.count()) {
                continue;
            }

            let undo = working.tubes[dest].snapshot();
            working.tubes[dest].push(run).unwrap(); // cannot fail, fits() holds
            path.push(Move { from, to: working.tubes[dest].id() });

            if let Some(done) = search(&working, budget - 1, path)? {
                return Ok(Some(done));
            }

            working.tubes[dest].restore(undo);
            path.pop();
        }

        // no destination accepted the run; return it to its source tube
        working.tubes[source].push(run).unwrap(); // cannot fail, the run was just popped
    }

    Ok(None)
}
