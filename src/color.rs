use std::fmt::{Display, Formatter};

use strum::VariantArray;

/// The closed palette of unit colors found in the reference puzzles.
///
/// The palette is enumerable via [`strum::VariantArray`]; nothing about the solver depends on its
/// exact size.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Blue,
    LightBlue,
    LightGreen,
    Purple,
    Fuchsia,
    Grey,
    Orange,
    Yellow,
    Pink,
    Teal,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Red => "RE",
            Self::Green => "GR",
            Self::Blue => "BL",
            Self::LightBlue => "LB",
            Self::LightGreen => "LG",
            Self::Purple => "PU",
            Self::Fuchsia => "FU",
            Self::Grey => "GY",
            Self::Orange => "OR",
            Self::Yellow => "YE",
            Self::Pink => "PI",
            Self::Teal => "TE",
        })
    }
}

/// One or more contiguous units of the same color, as stacked inside a [`Tube`](crate::Tube).
///
/// A run's count is at least 1. Runs held by a tube never exceed
/// [`TUBE_CAPACITY`](crate::TUBE_CAPACITY), and adjacent runs in a tube never share a color;
/// both invariants are maintained by the tube's operations, which reject pushes that do not fit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ColorRun {
    color: Color,
    count: usize,
}

impl ColorRun {
    /// Construct a run of `count` units of `color`. A `count` of zero is taken as 1.
    pub fn new(color: Color, count: usize) -> Self {
        Self { color, count: count.max(1) }
    }

    /// The color shared by every unit in this run.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The number of units in this run.
    pub fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn grow_by(&mut self, count: usize) {
        self.count += count;
    }
}

impl From<Color> for ColorRun {
    /// A single unit of `color`.
    fn from(color: Color) -> Self {
        Self { color, count: 1 }
    }
}

impl Display for ColorRun {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.color, self.count)
    }
}
