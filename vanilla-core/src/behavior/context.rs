//! Context passed to placement rules.

use vanilla_registry::BlockRef;
use vanilla_utils::{BlockPos, Direction};

use crate::world::World;

/// Where and how a block is being placed.
pub struct BlockPlaceContext<'a> {
    /// The world being placed into.
    pub world: &'a World,
    /// Target position.
    pub pos: BlockPos,
    /// The block being placed.
    pub block: BlockRef,
    /// Face of the block that was clicked to place against.
    pub clicked_face: Direction,
}
