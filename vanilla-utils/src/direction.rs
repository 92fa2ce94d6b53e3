//! The six axis-aligned directions.

use crate::BlockPos;

/// Six cardinal directions used for neighbor traversal.
///
/// Directions are never persisted; the declaration order is the sampling
/// order used by the fluid rules, which keeps tie-breaking deterministic.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Upward (+Y direction)
    Up = 0,
    /// Downward (-Y direction)
    Down = 1,
    /// North (-Z direction)
    North = 2,
    /// South (+Z direction)
    South = 3,
    /// East (+X direction)
    East = 4,
    /// West (-X direction)
    West = 5,
}

impl Direction {
    /// All six directions in sampling order.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The four horizontal directions in sampling order.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::East => (1, 0, 0),
            Self::West => (-1, 0, 0),
        }
    }

    /// Returns true for the four directions in the XZ plane.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Up | Self::Down)
    }

    /// Returns a new `BlockPos` relative to the given position in this direction.
    #[must_use]
    pub const fn relative(self, pos: &BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }
}
