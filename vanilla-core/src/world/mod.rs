//! This module contains the `World` struct, which owns the voxel grid and
//! drives block events and scheduled fluid ticks.
use std::sync::atomic::{AtomicU64, Ordering};

use vanilla_registry::blocks::block_state_ext::BlockStateExt;
use vanilla_registry::{BlockRef, FluidId, REGISTRY, vanilla_blocks};
use vanilla_utils::locks::{SyncMutex, SyncRwLock};
use vanilla_utils::types::UpdateFlags;
use vanilla_utils::{BlockPos, BlockStateId, ChunkPos, Direction};

use crate::behavior::{BehaviorError, Behaviors, BlockPlaceContext};
use crate::config::FluidConfig;
use crate::ticks::LevelTicks;

mod grid;

pub use grid::{BlockGetter, RamGrid, VoxelGrid};

/// A struct that represents a world.
///
/// Block writes go through [`World::set_block`], which raises placement and
/// neighbour events. Rules react by scheduling fluid ticks, which only run
/// inside [`World::tick`].
pub struct World {
    grid: SyncRwLock<Box<dyn VoxelGrid>>,
    behaviors: Behaviors,
    fluid_ticks: SyncMutex<LevelTicks<FluidId>>,
    fluid_config: FluidConfig,
    game_time: AtomicU64,
}

impl World {
    /// Creates a world with the vanilla rule set.
    #[must_use]
    pub fn new(grid: impl VoxelGrid + 'static, fluid_config: FluidConfig) -> Self {
        let behaviors = Behaviors::vanilla(&fluid_config);
        Self::with_behaviors(grid, behaviors, fluid_config)
    }

    /// Creates a world dispatching through the given rule tables.
    #[must_use]
    pub fn with_behaviors(
        grid: impl VoxelGrid + 'static,
        behaviors: Behaviors,
        fluid_config: FluidConfig,
    ) -> Self {
        Self {
            grid: SyncRwLock::new(Box::new(grid)),
            behaviors,
            fluid_ticks: SyncMutex::new(LevelTicks::new()),
            fluid_config,
            game_time: AtomicU64::new(0),
        }
    }

    /// The rule tables of this world.
    #[must_use]
    pub const fn behaviors(&self) -> &Behaviors {
        &self.behaviors
    }

    /// The fluid settings this world was created with.
    #[must_use]
    pub const fn fluid_config(&self) -> &FluidConfig {
        &self.fluid_config
    }

    /// Number of game ticks run so far.
    #[must_use]
    pub fn game_time(&self) -> u64 {
        self.game_time.load(Ordering::Acquire)
    }

    /// Gets the block state at `pos`. Positions outside the world read as air.
    #[must_use]
    pub fn get_block_state(&self, pos: &BlockPos) -> BlockStateId {
        self.grid.read().get_block_state(pos)
    }

    /// Returns true if `pos` is within the vertical bounds of the world.
    #[must_use]
    pub fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        self.grid.read().is_in_valid_bounds(pos)
    }

    /// Returns true if `pos` holds water at any level.
    #[must_use]
    pub fn is_water_at(&self, pos: &BlockPos) -> bool {
        self.get_block_state(pos).is_block(&vanilla_blocks::WATER)
    }

    /// Writes `state` at `pos` and raises the events selected by `flags`.
    ///
    /// Returns false if the write was rejected or did not change anything;
    /// no events are raised in that case.
    pub fn set_block(&self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool {
        let old_state = {
            let mut grid = self.grid.write();
            let Some(old_state) = grid.set_block_state(pos, state) else {
                log::debug!("Rejected block write outside the world at {pos}");
                return false;
            };
            old_state
        };
        if old_state == state {
            return false;
        }

        let block = state.get_block();
        if flags.contains(UpdateFlags::RUN_ON_PLACE) {
            self.behaviors
                .blocks
                .on_place(block, state, self, pos, old_state);
        }
        if flags.contains(UpdateFlags::NOTIFY_NEIGHBORS) {
            self.update_neighbors_at(pos, block);
        }
        true
    }

    /// Raises neighbour-changed on the six blocks around `pos`.
    pub fn update_neighbors_at(&self, pos: BlockPos, source_block: BlockRef) {
        for direction in Direction::ALL {
            let neighbor_pos = direction.relative(&pos);
            let neighbor_state = self.get_block_state(&neighbor_pos);
            self.behaviors.blocks.on_neighbor_changed(
                neighbor_state.get_block(),
                neighbor_state,
                self,
                neighbor_pos,
                source_block,
            );
        }
    }

    /// Places `block` at `pos` the way a player would.
    ///
    /// # Errors
    /// [`BehaviorError::Unregistered`] if `block` has no rules,
    /// [`BehaviorError::PlacementRejected`] if the rules refuse or `pos` is
    /// outside the world.
    pub fn place_block(
        &self,
        pos: BlockPos,
        block: BlockRef,
        clicked_face: Direction,
    ) -> Result<BlockStateId, BehaviorError> {
        let blocks = &self.behaviors.blocks;
        if !blocks.contains(block) {
            return Err(BehaviorError::Unregistered(block.key));
        }
        if !self.is_in_valid_bounds(&pos) || !blocks.can_place(block, self, pos) {
            return Err(BehaviorError::PlacementRejected {
                block: block.key,
                pos,
            });
        }

        let context = BlockPlaceContext {
            world: self,
            pos,
            block,
            clicked_face,
        };
        let state = blocks.get_state_for_placement(&context)?;
        self.set_block(pos, state, UpdateFlags::UPDATE_ALL);
        Ok(state)
    }

    /// Schedules a fluid recomputation at `pos` after `delay` ticks.
    ///
    /// Returns false if one is already pending there; the pending one keeps
    /// its deadline. Safe to call from any thread.
    pub fn schedule_fluid_tick(&self, pos: BlockPos, fluid: FluidId, delay: u32) -> bool {
        let now = self.game_time();
        let scheduled = self.fluid_ticks.lock().schedule(pos, fluid, now, delay);
        if scheduled {
            log::trace!("Scheduled fluid tick at {pos} for tick {}", now + u64::from(delay));
        }
        scheduled
    }

    /// Returns true if a fluid recomputation is pending at `pos`.
    #[must_use]
    pub fn has_scheduled_fluid_tick(&self, pos: BlockPos, fluid: FluidId) -> bool {
        self.fluid_ticks.lock().has_scheduled_tick(pos, fluid)
    }

    /// Number of pending fluid recomputations.
    #[must_use]
    pub fn pending_fluid_ticks(&self) -> usize {
        self.fluid_ticks.lock().count()
    }

    /// Makes a chunk resident in the grid.
    pub fn load_chunk(&self, pos: ChunkPos) {
        self.grid.write().load_chunk(pos);
    }

    /// Drops a chunk together with its pending fluid ticks.
    pub fn unload_chunk(&self, pos: ChunkPos) -> bool {
        let dropped = self
            .fluid_ticks
            .lock()
            .remove_container(&pos)
            .map_or(0, |ticks| ticks.count());
        if dropped > 0 {
            log::debug!("Dropped {dropped} fluid ticks with chunk {pos:?}");
        }
        self.grid.write().unload_chunk(pos)
    }

    /// Advances the game clock by one tick and runs every fluid tick that is
    /// now due, up to `max_recomputations_per_tick`.
    ///
    /// Returns the number of recomputations run.
    pub fn tick(&self) -> usize {
        let now = self.game_time.fetch_add(1, Ordering::AcqRel) + 1;
        let max_ticks = self.fluid_config.max_recomputations_per_tick;

        // Take the due ticks first so rules can schedule new ones while running
        let (due, deferred) = {
            let mut fluid_ticks = self.fluid_ticks.lock();
            let due = fluid_ticks.tick(now, max_ticks);
            (due, fluid_ticks.has_due(now))
        };
        if deferred {
            log::warn!("Fluid tick limit of {max_ticks} reached at tick {now}, deferring the rest");
        }

        let _span = tracing::trace_span!("fluid_ticks", tick = now, count = due.len()).entered();
        for &(pos, fluid) in &due {
            match self.behaviors.fluids.get(fluid) {
                Some(behavior) => behavior.tick(self, pos),
                None => log::warn!(
                    "No behaviour for fluid {} scheduled at {pos}",
                    REGISTRY.fluids.name_of(fluid)
                ),
            }
        }
        due.len()
    }
}

impl BlockGetter for World {
    fn get_block_state(&self, pos: &BlockPos) -> BlockStateId {
        World::get_block_state(self, pos)
    }
}
