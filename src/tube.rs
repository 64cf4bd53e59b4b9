use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::color::{Color, ColorRun};

/// The fixed number of units every tube can hold.
pub const TUBE_CAPACITY: usize = 4;

/// Identifies a [`Tube`] across copies of a puzzle.
pub type TubeId = usize;

/// Reasons a [`Tube`] operation may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TubeError {
    /// The top run of an empty tube was requested.
    ///
    /// Raised by [`Tube::peek`] only; [`Tube::pop`] on an empty tube is a defined no-op.
    EmptyAccess,
    /// A push would raise the tube's contents above [`TUBE_CAPACITY`].
    CapacityExceeded,
}

impl Display for TubeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAccess => write!(f, "peeked an empty tube"),
            Self::CapacityExceeded => write!(f, "push would exceed tube capacity"),
        }
    }
}

impl std::error::Error for TubeError {}

/// A capacity-bounded stack of [`ColorRun`]s, the puzzle's primary mutable container.
///
/// Runs are stored bottom-to-top; the last run is the top of the tube. Adjacent runs never share
/// a color: [`push`](Self::push) merges a same-colored push into the existing top run, and
/// construction from a flat color list run-length-encodes it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tube {
    id: TubeId,
    runs: Vec<ColorRun>,
}

impl Tube {
    /// Construct a tube from a flat list of per-unit colors, given bottom-to-top.
    ///
    /// Consecutive equal colors collapse into a single run. Fails with
    /// [`CapacityExceeded`](TubeError::CapacityExceeded) if the list holds more than
    /// [`TUBE_CAPACITY`] units.
    pub fn new(id: TubeId, colors: impl IntoIterator<Item = Color>) -> Result<Self, TubeError> {
        let runs = colors
            .into_iter()
            .map(ColorRun::from)
            .coalesce(|top, unit| {
                if top.color() == unit.color() {
                    Ok(ColorRun::new(top.color(), top.count() + unit.count()))
                } else {
                    Err((top, unit))
                }
            })
            .collect_vec();

        let tube = Self { id, runs };
        if tube.size() > TUBE_CAPACITY {
            return Err(TubeError::CapacityExceeded);
        }

        Ok(tube)
    }

    /// Construct an empty tube.
    pub fn empty(id: TubeId) -> Self {
        Self { id, runs: Vec::new() }
    }

    /// Construct a tube holding exactly `count` units of one color, built via repeated push.
    ///
    /// Fails with [`CapacityExceeded`](TubeError::CapacityExceeded) if `count` exceeds
    /// [`TUBE_CAPACITY`].
    pub fn filled(id: TubeId, color: Color, count: usize) -> Result<Self, TubeError> {
        let mut tube = Self::empty(id);
        for _ in 0..count {
            tube.push(color)?;
        }

        Ok(tube)
    }

    /// This tube's identity, stable across [`Clone`]s.
    pub fn id(&self) -> TubeId {
        self.id
    }

    /// Whether this tube holds no units.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Whether this tube holds exactly [`TUBE_CAPACITY`] units.
    pub fn is_full(&self) -> bool {
        self.size() == TUBE_CAPACITY
    }

    /// The total number of units across all runs.
    pub fn size(&self) -> usize {
        self.runs.iter().map(ColorRun::count).sum()
    }

    /// The top run, without removing it.
    ///
    /// Fails with [`EmptyAccess`](TubeError::EmptyAccess) if the tube is empty.
    pub fn peek(&self) -> Result<ColorRun, TubeError> {
        self.runs.last().copied().ok_or(TubeError::EmptyAccess)
    }

    /// Remove and return the entire top run, or [`None`] if the tube is empty.
    pub fn pop(&mut self) -> Option<ColorRun> {
        self.runs.pop()
    }

    /// Push a single unit ([`Color`]) or a whole [`ColorRun`] onto this tube.
    ///
    /// A same-colored push merges into the existing top run; otherwise a new run is appended.
    /// Fails with [`CapacityExceeded`](TubeError::CapacityExceeded), before any mutation, if the
    /// tube is full or the pushed units do not fit in the remaining space.
    pub fn push(&mut self, unit_or_run: impl Into<ColorRun>) -> Result<(), TubeError> {
        let run = unit_or_run.into();
        if self.is_full() || self.size() + run.count() > TUBE_CAPACITY {
            return Err(TubeError::CapacityExceeded);
        }

        match self.runs.last_mut() {
            Some(top) if top.color() == run.color() => top.grow_by(run.count()),
            _ => self.runs.push(run),
        }

        Ok(())
    }

    /// The legality predicate for pouring: whether `count` units of `color` may be pushed.
    ///
    /// True iff the tube is not full and either is empty or its top run matches `color` with
    /// `count` units of space remaining.
    pub fn fits(&self, color: Color, count: usize) -> bool {
        if self.is_full() {
            return false;
        }

        if self.is_empty() {
            return true;
        }

        // peek cannot fail here; the tube is non-empty
        self.peek().is_ok_and(|top| top.color() == color && self.size() + count <= TUBE_CAPACITY)
    }

    /// Whether this tube needs no further pours: empty, or full with a single run.
    pub fn solved(&self) -> bool {
        self.is_empty() || (self.is_full() && self.runs.len() == 1)
    }

    /// The runs in this tube, bottom-to-top.
    pub fn runs(&self) -> impl Iterator<Item = &ColorRun> {
        self.runs.iter()
    }

    pub(crate) fn snapshot(&self) -> Vec<ColorRun> {
        self.runs.clone()
    }

    pub(crate) fn restore(&mut self, runs: Vec<ColorRun>) {
        self.runs = runs;
    }
}
