//! Fluent construction of [`Puzzle`]s.
//!
//! A [`PuzzleBuilder`] collects tubes, assigns ids from its own monotonically increasing counter
//! when the caller does not supply one, and applies the per-color composition check on
//! [`build`](PuzzleBuilder::build) unless told not to.

use std::fmt::{Display, Formatter};

use crate::color::Color;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::tube::{Tube, TubeError, TubeId};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tube was given more units than [`TUBE_CAPACITY`](crate::TUBE_CAPACITY).
    TubeOverfilled,
    /// An explicitly assigned tube id collides with a tube already added.
    DuplicateTubeId,
}

/// Reasons [`PuzzleBuilder::build`] may fail.
#[derive(Clone, Debug)]
pub enum BuildError {
    /// The builder entered an invalid state while building; all collected reasons are included.
    Invalid(Vec<BuilderInvalidReason>),
    /// The assembled tubes fail the per-color composition check.
    Composition(PuzzleError),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(reasons) => write!(f, "builder invalidated: {:?}", reasons),
            Self::Composition(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<PuzzleError> for BuildError {
    fn from(err: PuzzleError) -> Self {
        Self::Composition(err)
    }
}

/// A builder for [`Puzzle`]s.
///
/// Builder methods chain on `&mut Self` and never fail on the spot; a bad call (an overfilled
/// tube, a duplicate id) instead invalidates the builder, after which every further call does
/// nothing and [`build`](Self::build) reports the collected [`BuilderInvalidReason`]s.
/// Builders can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct PuzzleBuilder {
    tubes: Vec<Tube>,
    next_id: TubeId,
    check_composition: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleBuilder {
    /// Construct a builder holding no tubes. Auto-assigned tube ids count up from 1.
    pub fn new() -> Self {
        Self {
            tubes: Vec::new(),
            next_id: 1,
            check_composition: true,
            invalid_reasons: Vec::new(),
        }
    }

    fn claim_id(&mut self) -> TubeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert(&mut self, tube: Result<Tube, TubeError>) {
        match tube {
            Ok(tube) => self.tubes.push(tube),
            Err(_) => self.invalid_reasons.push(BuilderInvalidReason::TubeOverfilled),
        }
    }

    /// Add a tube holding `colors`, given bottom-to-top, under an auto-assigned id.
    ///
    /// May invalidate the builder with [`TubeOverfilled`](BuilderInvalidReason::TubeOverfilled)
    /// if `colors` holds more than [`TUBE_CAPACITY`](crate::TUBE_CAPACITY) units.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_tube(&mut self, colors: &[Color]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let id = self.claim_id();
        self.insert(Tube::new(id, colors.iter().copied()));
        self
    }

    /// Add a tube holding `colors` under a caller-assigned id.
    ///
    /// Subsequent auto-assigned ids continue above `id`, so the two schemes can be mixed.
    ///
    /// May invalidate the builder with [`TubeOverfilled`](BuilderInvalidReason::TubeOverfilled)
    /// or [`DuplicateTubeId`](BuilderInvalidReason::DuplicateTubeId).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_tube_with_id(&mut self, id: TubeId, colors: &[Color]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.tubes.iter().any(|tube| tube.id() == id) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateTubeId);
            return self;
        }

        self.next_id = self.next_id.max(id + 1);
        self.insert(Tube::new(id, colors.iter().copied()));
        self
    }

    /// Add an empty tube under an auto-assigned id.
    ///
    /// If the builder is in an invalid state, this function does nothing.
    pub fn add_empty(&mut self) -> &mut Self {
        self.add_tube(&[])
    }

    /// Add a tube holding `count` units of a single `color`, under an auto-assigned id.
    /// `count` equal to [`TUBE_CAPACITY`](crate::TUBE_CAPACITY) yields a tube that is already solved.
    ///
    /// May invalidate the builder with [`TubeOverfilled`](BuilderInvalidReason::TubeOverfilled)
    /// if `count` exceeds [`TUBE_CAPACITY`](crate::TUBE_CAPACITY).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_filled(&mut self, color: Color, count: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let id = self.claim_id();
        self.insert(Tube::filled(id, color, count));
        self
    }

    /// Skip the per-color composition check on [`build`](Self::build), allowing deliberately
    /// partial or unsolvable fixtures.
    pub fn allow_partial(&mut self) -> &mut Self {
        self.check_composition = false;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    ///
    /// Fails with [`BuildError::Invalid`] if the builder was invalidated, or with
    /// [`BuildError::Composition`] if the check is enabled and some color's total unit count is
    /// not a multiple of [`TUBE_CAPACITY`](crate::TUBE_CAPACITY).
    pub fn build(&self) -> Result<Puzzle, BuildError> {
        if !self.invalid_reasons.is_empty() {
            return Err(BuildError::Invalid(self.invalid_reasons.clone()));
        }

        if self.check_composition {
            Ok(Puzzle::new(self.tubes.clone())?)
        } else {
            Ok(Puzzle::new_unchecked(self.tubes.clone()))
        }
    }
}
