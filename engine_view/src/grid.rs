//! Tile positions and facing directions.

use serde::{Deserialize, Serialize};

/// A discrete tile position on the current map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another tile.
    pub fn manhattan_distance(&self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The tile one step in the given direction.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal facing direction.
///
/// Numeric codes follow the engine's numpad convention: 2 = down, 4 = left,
/// 6 = right, 8 = up. "Down" points toward increasing y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// Decode a numpad direction code.
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            2 => Some(Direction::Down),
            4 => Some(Direction::Left),
            6 => Some(Direction::Right),
            8 => Some(Direction::Up),
            _ => None,
        }
    }

    /// The engine's numpad code for this direction.
    pub fn code(&self) -> u8 {
        match self {
            Direction::Down => 2,
            Direction::Left => 4,
            Direction::Right => 6,
            Direction::Up => 8,
        }
    }

    /// Unit offset in tile coordinates.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
        }
    }

    /// The opposite direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(5, 5);
        assert_eq!(a.manhattan_distance(Position::new(5, 5)), 0);
        assert_eq!(a.manhattan_distance(Position::new(5, 4)), 1);
        assert_eq!(a.manhattan_distance(Position::new(6, 6)), 2);
        assert_eq!(a.manhattan_distance(Position::new(3, 5)), 2);
    }

    #[test]
    fn test_step() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::Down), Position::new(2, 3));
        assert_eq!(origin.step(Direction::Up), Position::new(2, 1));
        assert_eq!(origin.step(Direction::Left), Position::new(1, 2));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 2));
    }

    #[test]
    fn test_direction_codes() {
        for direction in [
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Up,
        ] {
            assert_eq!(Direction::from_code(direction.code()), Some(direction));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(5), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite().opposite(), Direction::Right);
    }
}
