//! Water fluid implementation.

use vanilla_registry::{FluidId, vanilla_blocks};
use vanilla_utils::types::UpdateFlags;
use vanilla_utils::BlockPos;

use super::flowing::{FluidBehaviour, LevelChange, recompute_level};
use super::fluid_state::LiquidCodec;
use super::neighbors::NeighborSample;
use super::spread::{apply, plan_spread};
use crate::config::{DownwardSpread, FluidConfig};
use crate::world::World;

/// Water fluid behavior.
pub struct WaterFluid {
    codec: LiquidCodec,
    tick_delay: u32,
    downward: DownwardSpread,
}

impl WaterFluid {
    /// Creates water with the timing and downward rule from `config`.
    #[must_use]
    pub fn new(config: &FluidConfig) -> Self {
        Self {
            codec: LiquidCodec::new(&vanilla_blocks::WATER),
            tick_delay: config.recompute_delay_ticks,
            downward: config.downward_spread,
        }
    }
}

impl FluidBehaviour for WaterFluid {
    fn fluid_type(&self) -> FluidId {
        FluidId::WATER
    }

    fn tick_delay(&self) -> u32 {
        self.tick_delay
    }

    fn tick(&self, world: &World, pos: BlockPos) {
        let Some(current) = self.codec.decode(world.get_block_state(&pos)) else {
            log::trace!("Stale water tick at {pos}, block is no longer water");
            return;
        };

        let neighbors = NeighborSample::sample(world, pos);

        match recompute_level(&self.codec, current, &neighbors) {
            LevelChange::Keep => {}
            LevelChange::Set(level) => {
                world.set_block(pos, self.codec.encode(level, false), UpdateFlags::UPDATE_ALL);
            }
            LevelChange::Remove => {
                log::debug!("Water at {pos} drained past level {}", current.level);
                world.set_block(
                    pos,
                    vanilla_blocks::AIR.default_state(),
                    UpdateFlags::UPDATE_ALL,
                );
                return;
            }
        }

        // Spread from the level read at the start of this pass
        let plan = plan_spread(&self.codec, current, &neighbors, self.downward);
        let written = apply(world, &plan);
        if written > 0 {
            log::trace!("Water at {pos} spread into {written} blocks");
        }
    }
}
