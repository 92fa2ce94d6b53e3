//! The per-block-kind rule interface.

use vanilla_registry::BlockRef;
use vanilla_utils::{BlockPos, BlockStateId};

use crate::behavior::context::BlockPlaceContext;
use crate::world::World;

/// Rules attached to one block kind.
///
/// Implementations are looked up by block key in
/// [`BlockBehaviorRegistry`](super::BlockBehaviorRegistry) and shared between
/// every position holding that block.
pub trait BlockBehaviour: Send + Sync {
    /// Returns true if the block may be placed at `pos`.
    fn can_place(&self, _world: &World, _pos: BlockPos) -> bool {
        true
    }

    /// Returns the state to write when the block is placed, or `None` to
    /// refuse the placement.
    fn get_state_for_placement(&self, context: &BlockPlaceContext<'_>) -> Option<BlockStateId>;

    /// Called after `state` has been written at `pos`, replacing `old_state`.
    fn on_place(&self, _state: BlockStateId, _world: &World, _pos: BlockPos, _old_state: BlockStateId) {
    }

    /// Called when one of the six blocks around `pos` changed to a state of
    /// `source_block`.
    fn handle_neighbor_changed(
        &self,
        _state: BlockStateId,
        _world: &World,
        _pos: BlockPos,
        _source_block: BlockRef,
    ) {
    }
}

/// Behaviour for blocks without special rules: placement yields the default state.
pub struct DefaultBlockBehaviour {
    block: BlockRef,
}

impl DefaultBlockBehaviour {
    /// Creates the default behaviour for `block`.
    #[must_use]
    pub const fn new(block: BlockRef) -> Self {
        Self { block }
    }
}

impl BlockBehaviour for DefaultBlockBehaviour {
    fn get_state_for_placement(&self, _context: &BlockPlaceContext<'_>) -> Option<BlockStateId> {
        Some(self.block.default_state())
    }
}
