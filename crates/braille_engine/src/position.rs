use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// A cell coordinate on the braille grid.
///
/// Positions order row-major (y first, then x), so a `BTreeSet<Position>`
/// iterates cells in reading order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn with_y(self, y: i32) -> Position {
        Position { x: self.x, y }
    }

    pub fn with_x(self, x: i32) -> Position {
        Position { x, y: self.y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Position::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Position::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }

    /// Clamps the position into `[0, width) × [0, height)`.
    pub fn clamp_to(self, width: i32, height: i32) -> Self {
        Position::new(self.x.clamp(0, (width - 1).max(0)), self.y.clamp(0, (height - 1).max(0)))
    }

    /// The canonical `"x,y"` key used by selection sets and dot maps.
    pub fn to_cell_key(self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Parses a `"x,y"` cell key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCellKey`] if the key is not two comma separated integers.
    pub fn from_cell_key(key: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidCellKey { key: key.to_string() };
        let (x, y) = key.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Position::new(x, y))
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_cell_key(s)
    }
}

impl Add<Position> for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Position> for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign<Position> for Position {
    fn sub_assign(&mut self, rhs: Position) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

impl From<(usize, usize)> for Position {
    fn from(value: (usize, usize)) -> Self {
        Position {
            x: value.0 as i32,
            y: value.1 as i32,
        }
    }
}
