use strum::VariantArray;

use crate::location::Location;

/// A cardinal step direction between two grid-adjacent cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Attempt the step from `location` in the direction specified by `self`.
    ///
    /// Off-grid results wrap below zero and are caught by bounds checks at the
    /// call site, as no board is large enough for the wrapped coordinate to
    /// land back in range.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Determine the direction of travel from `a` to `b` by attempting every
    /// step until one works.
    ///
    /// Returns [`None`] for locations which are not grid-adjacent.
    pub fn between(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
