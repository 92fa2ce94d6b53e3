// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::fmt::{self, Display};

use bitflags::bitflags;

use crate::math::{Vector2, Vector3};

// A raw block state id. Using the registry this id can be derived into a block and it's current properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockStateId(pub u16);

// A chunk position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos(pub Vector2<i32>);

impl ChunkPos {
    /// Creates a chunk position from chunk coordinates.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self(Vector2::new(x, z))
    }

    /// Returns the chunk containing the given block.
    #[must_use]
    pub const fn from_block(pos: &BlockPos) -> Self {
        Self::new(pos.0.x >> 4, pos.0.z >> 4)
    }
}

// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns this position moved by the given deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    #[must_use]
    pub const fn above(&self) -> Self {
        self.offset(0, 1, 0)
    }

    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

bitflags! {
    /// Flags controlling the side effects of a block write.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UpdateFlags: u8 {
        /// Raise neighbor-changed for the six adjacent positions.
        const NOTIFY_NEIGHBORS = 1;
        /// Run the new state's `on_place` hook.
        const RUN_ON_PLACE = 1 << 1;
        /// Everything a normal world write does.
        const UPDATE_ALL = Self::NOTIFY_NEIGHBORS.bits() | Self::RUN_ON_PLACE.bits();
        /// Write the state only.
        const UPDATE_NONE = 0;
    }
}
