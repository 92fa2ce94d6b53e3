//! Liquid block behavior.

use std::sync::Arc;

use vanilla_registry::BlockRef;
use vanilla_registry::blocks::block_state_ext::BlockStateExt;
use vanilla_utils::BlockPos;
use vanilla_utils::BlockStateId;

use crate::behavior::block::BlockBehaviour;
use crate::behavior::context::BlockPlaceContext;
use crate::config::PlacementPolicy;
use crate::fluid::FluidBehaviour;
use crate::world::World;

/// Behavior for liquid blocks.
///
/// Any change next to a liquid, or the liquid being written, schedules a
/// recomputation of its level after the fluid's tick delay.
pub struct LiquidBlockBehavior {
    block: BlockRef,
    fluid: Arc<dyn FluidBehaviour>,
    placement_policy: PlacementPolicy,
}

impl LiquidBlockBehavior {
    /// Creates a new liquid block behavior.
    #[must_use]
    pub fn new(
        block: BlockRef,
        fluid: Arc<dyn FluidBehaviour>,
        placement_policy: PlacementPolicy,
    ) -> Self {
        Self {
            block,
            fluid,
            placement_policy,
        }
    }

    fn schedule(&self, world: &World, pos: BlockPos) {
        world.schedule_fluid_tick(pos, self.fluid.fluid_type(), self.fluid.tick_delay());
    }
}

impl BlockBehaviour for LiquidBlockBehavior {
    fn can_place(&self, world: &World, pos: BlockPos) -> bool {
        match self.placement_policy {
            PlacementPolicy::Always => true,
            PlacementPolicy::Replaceable => {
                if !world.is_in_valid_bounds(&pos) {
                    return false;
                }
                let target = world.get_block_state(&pos).get_block();
                target.config.is_air || (target.config.replaceable && !target.config.liquid)
            }
        }
    }

    /// Always a source, whichever face was clicked.
    fn get_state_for_placement(&self, _context: &BlockPlaceContext<'_>) -> Option<BlockStateId> {
        Some(self.block.default_state())
    }

    fn on_place(&self, _state: BlockStateId, world: &World, pos: BlockPos, _old_state: BlockStateId) {
        self.schedule(world, pos);
    }

    fn handle_neighbor_changed(
        &self,
        _state: BlockStateId,
        world: &World,
        pos: BlockPos,
        _source_block: BlockRef,
    ) {
        self.schedule(world, pos);
    }
}
