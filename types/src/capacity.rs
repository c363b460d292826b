//! Grid capacity (number of visible slots).

use serde::{Deserialize, Serialize};

/// Error returned when a slot count is not one of the supported layouts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    #[error("Unsupported layout size {0} (expected one of 1, 2, 4, 6, 9)")]
    Unsupported(u32),

    #[error("Invalid layout value '{0}'")]
    Invalid(String),
}

/// Number of visible slots in the wall.
///
/// Only the layouts the grid knows how to arrange are representable, so an
/// unsupported size can never reach the slot assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Capacity {
    /// Single full-size player
    One,
    /// Two players side by side
    Two,
    /// 2x2 grid
    #[default]
    Four,
    /// 3x2 grid
    Six,
    /// 3x3 grid
    Nine,
}

impl Capacity {
    /// All supported layouts, smallest first.
    pub const ALL: [Capacity; 5] = [
        Capacity::One,
        Capacity::Two,
        Capacity::Four,
        Capacity::Six,
        Capacity::Nine,
    ];

    /// Number of slots.
    pub const fn slots(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Nine => 9,
        }
    }

    /// Grid geometry as `(columns, rows)`.
    pub const fn grid(self) -> (usize, usize) {
        match self {
            Self::One => (1, 1),
            Self::Two => (2, 1),
            Self::Four => (2, 2),
            Self::Six => (3, 2),
            Self::Nine => (3, 3),
        }
    }

    /// Layout selected by a digit key, if any.
    pub fn from_digit(key: char) -> Option<Self> {
        key.to_digit(10).and_then(|d| Self::try_from(d).ok())
    }

    /// Human-readable label used by layout pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "Single",
            Self::Two => "Side by side",
            Self::Four => "2 x 2",
            Self::Six => "3 x 2",
            Self::Nine => "3 x 3",
        }
    }
}

impl TryFrom<u32> for Capacity {
    type Error = CapacityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            9 => Ok(Self::Nine),
            other => Err(CapacityError::Unsupported(other)),
        }
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> Self {
        capacity.slots() as u32
    }
}

impl std::str::FromStr for Capacity {
    type Err = CapacityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| CapacityError::Invalid(s.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slots())
    }
}
