//! Outward and downward spreading of a fluid into empty neighbours.

use smallvec::SmallVec;
use vanilla_registry::blocks::block_state_ext::BlockStateExt;
use vanilla_registry::vanilla_blocks;
use vanilla_utils::types::UpdateFlags;
use vanilla_utils::{BlockPos, BlockStateId, Direction};

use super::fluid_state::{FluidState, LiquidCodec};
use super::neighbors::NeighborSample;
use crate::config::DownwardSpread;
use crate::world::World;

/// One write the spread step will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadTarget {
    /// Side of the origin being filled.
    pub direction: Direction,
    /// Position being filled.
    pub pos: BlockPos,
    /// State written there.
    pub state: BlockStateId,
}

/// Up to four writes; downward spread is always a single one.
pub type SpreadPlan = SmallVec<[SpreadTarget; 4]>;

/// Plans where fluid at `current` flows, from one neighbour sample.
///
/// - plain air below: fill it according to `downward`, nothing else
/// - the same fluid below: nothing
/// - anything else below: each horizontal air neighbour gets one level
///   deeper than `current`, unless that passes [`FluidState::MAX_LEVEL`]
///
/// Only positions read as air in `neighbors` are targeted. Cave and void air
/// below do not take a downward flow but still allow the sideways one.
#[must_use]
pub fn plan_spread(
    codec: &LiquidCodec,
    current: FluidState,
    neighbors: &NeighborSample,
    downward: DownwardSpread,
) -> SpreadPlan {
    let mut plan = SpreadPlan::new();
    let below = neighbors.get(Direction::Down);

    if below == vanilla_blocks::AIR.default_state() {
        plan.push(SpreadTarget {
            direction: Direction::Down,
            pos: neighbors.position(Direction::Down),
            state: codec.encode_state(downward.state()),
        });
        return plan;
    }
    if codec.decode(below).is_some() {
        return plan;
    }

    let next_level = current.level + 1;
    if next_level > FluidState::MAX_LEVEL {
        return plan;
    }
    let state = codec.encode(next_level, false);
    for direction in Direction::HORIZONTAL {
        if neighbors.get(direction).is_air() {
            plan.push(SpreadTarget {
                direction,
                pos: neighbors.position(direction),
                state,
            });
        }
    }
    plan
}

/// Writes every planned target. Each write notifies its own neighbours.
///
/// Returns how many writes changed the world.
pub fn apply(world: &World, plan: &SpreadPlan) -> usize {
    plan.iter()
        .filter(|target| world.set_block(target.pos, target.state, UpdateFlags::UPDATE_ALL))
        .count()
}
