use strum::{FromRepr, VariantArray};

use crate::direction::Direction;

/// One of the six fixed pipe shapes a player may place in an open cell.
///
/// Each shape admits flow through exactly two of its four sides. The
/// discriminants match the integer selector used at the presentation
/// boundary, where `1..=6` names a shape and `0`/`-1` means "no pipe".
#[derive(Copy, Clone, VariantArray, FromRepr, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[repr(i8)]
pub enum PipeKind {
    Vertical = 1,
    Horizontal = 2,
    ElbowUpRight = 3,
    ElbowUpLeft = 4,
    ElbowDownRight = 5,
    ElbowDownLeft = 6,
}

impl PipeKind {
    /// Decode the boundary selector. Any value outside `1..=6` (notably `0`
    /// and `-1`) decodes to [`None`].
    pub fn from_selector(selector: i8) -> Option<Self> {
        Self::from_repr(selector)
    }

    /// Encode this shape back into its boundary selector.
    pub fn selector(&self) -> i8 {
        *self as i8
    }

    /// The two sides this shape opens toward.
    pub fn openings(&self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::Up, Direction::Down],
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::ElbowUpRight => [Direction::Up, Direction::Right],
            Self::ElbowUpLeft => [Direction::Up, Direction::Left],
            Self::ElbowDownRight => [Direction::Down, Direction::Right],
            Self::ElbowDownLeft => [Direction::Down, Direction::Left],
        }
    }

    /// Whether this shape opens toward `direction`.
    pub fn opens(&self, direction: Direction) -> bool {
        self.openings().contains(&direction)
    }

    /// The directional compatibility rule between adjacent pieces: flow may
    /// travel from `self` into `next` along `direction` only if `self` opens
    /// toward the travel direction and `next` opens back toward `self`.
    pub fn fits(&self, next: PipeKind, direction: Direction) -> bool {
        self.opens(direction) && next.opens(direction.invert())
    }
}
