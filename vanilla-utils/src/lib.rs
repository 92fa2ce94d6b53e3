//! Shared value types for the vanilla server crates.

pub mod direction;
pub mod locks;
pub mod math;
pub mod types;

pub use direction::Direction;
pub use types::{BlockPos, BlockStateId, ChunkPos};
