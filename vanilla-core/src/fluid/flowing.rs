//! Level recomputation for flowing fluids.
//!
//! A flowing block's level is derived from its neighbours each time it ticks:
//! it sits one level below the shallowest supporting neighbour, becomes a source
//! between two sources, and disappears once it would pass
//! [`FluidState::MAX_LEVEL`].

use vanilla_registry::FluidId;
use vanilla_utils::{BlockPos, Direction};

use super::fluid_state::{FluidState, LiquidCodec};
use super::neighbors::NeighborSample;
use crate::world::World;

/// Trait for fluid behavior implementations.
pub trait FluidBehaviour: Send + Sync {
    /// Returns the fluid this behaviour simulates.
    fn fluid_type(&self) -> FluidId;

    /// Returns the delay between a trigger and the recomputation, in ticks.
    fn tick_delay(&self) -> u32;

    /// Called when a scheduled tick fires for this fluid.
    fn tick(&self, world: &World, pos: BlockPos);
}

/// Outcome of recomputing one flowing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// The stored level is still correct.
    Keep,
    /// The block becomes this (non-falling) level.
    Set(u8),
    /// The block is past the spread limit and becomes air.
    Remove,
}

/// Computes the next level of a block currently holding `current`.
///
/// Sources never change. For flowing blocks:
/// - two or more horizontal source neighbours make a new source
/// - fluid directly above pins the level to 1
/// - otherwise the level is one more than the shallowest horizontal neighbour
///   of the same fluid, or two more than the current level with no support
///
/// Neighbours that are not this liquid contribute nothing.
#[must_use]
pub fn recompute_level(
    codec: &LiquidCodec,
    current: FluidState,
    neighbors: &NeighborSample,
) -> LevelChange {
    if current.is_source() {
        return LevelChange::Keep;
    }

    let mut source_count = 0u8;
    let mut distance = current.level + 1;

    for (direction, state) in neighbors.iter() {
        if direction == Direction::Down {
            continue;
        }
        let Some(neighbor) = codec.decode(state) else {
            continue;
        };
        // Fluid above only pins the distance, it never counts as a source
        if direction == Direction::Up {
            distance = 0;
            continue;
        }
        if neighbor.is_source() {
            source_count += 1;
        }
        distance = distance.min(neighbor.level);
    }

    let candidate = if source_count >= 2 {
        0
    } else if distance < FluidState::MAX_LEVEL {
        distance + 1
    } else {
        return LevelChange::Remove;
    };

    if candidate == current.level {
        LevelChange::Keep
    } else {
        LevelChange::Set(candidate)
    }
}

#[cfg(test)]
mod tests {
    use vanilla_registry::vanilla_blocks;

    use super::*;
    use crate::world::{BlockGetter, RamGrid, VoxelGrid};

    fn water() -> LiquidCodec {
        LiquidCodec::new(&vanilla_blocks::WATER)
    }

    fn recompute(grid: &RamGrid, pos: BlockPos) -> LevelChange {
        let codec = water();
        let current = codec
            .decode(grid.get_block_state(&pos))
            .expect("position should hold water");
        recompute_level(&codec, current, &NeighborSample::sample(grid, pos))
    }

    #[test]
    fn test_source_is_stable() {
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, water().encode(0, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Keep);
    }

    #[test]
    fn test_one_below_shallowest_neighbor() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(5, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(3, false));
        grid.set_block_state(BlockPos::new(-1, 1, 0), codec.encode(1, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Set(2));
    }

    #[test]
    fn test_unsupported_decays_by_two() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(2, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Set(4));
    }

    #[test]
    fn test_two_sources_merge() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(1, false));
        grid.set_block_state(BlockPos::new(0, 1, -1), codec.encode(0, false));
        grid.set_block_state(BlockPos::new(0, 1, 1), codec.encode(0, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Set(0));
    }

    #[test]
    fn test_source_below_does_not_count() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(1, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(0, false));
        grid.set_block_state(pos.below(), codec.encode(0, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Keep);
    }

    #[test]
    fn test_fluid_above_wins() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(6, false));
        grid.set_block_state(pos.above(), codec.encode(4, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(2, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Set(1));
    }

    #[test]
    fn test_source_above_is_not_counted() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(1, false));
        grid.set_block_state(pos.above(), codec.encode(0, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(0, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Keep);
    }

    #[test]
    fn test_past_max_level_is_removed() {
        let codec = water();
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(7, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(7, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Remove);

        // One level shallower neighbour keeps it at the limit
        grid.set_block_state(BlockPos::new(1, 1, 0), codec.encode(6, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Keep);
    }

    #[test]
    fn test_other_liquids_do_not_contribute() {
        let codec = water();
        let lava = LiquidCodec::new(&vanilla_blocks::LAVA);
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(0, 1, 0);
        grid.set_block_state(pos, codec.encode(3, false));
        grid.set_block_state(BlockPos::new(1, 1, 0), lava.encode(0, false));
        grid.set_block_state(BlockPos::new(-1, 1, 0), lava.encode(0, false));
        grid.set_block_state(pos.above(), lava.encode(0, false));
        assert_eq!(recompute(&grid, pos), LevelChange::Set(5));
    }
}
