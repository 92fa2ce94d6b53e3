//! Block behaviour system.
//!
//! Rules are attached to block kinds through tables rather than per-block
//! types: the world looks up the rules of whatever block sits at a position
//! and forwards placement and neighbour events to them.

pub mod block;
pub mod blocks;
pub mod context;
mod registry;

use std::sync::Arc;

use thiserror::Error;
use vanilla_registry::vanilla_blocks;
use vanilla_utils::BlockPos;

pub use block::{BlockBehaviour, DefaultBlockBehaviour};
pub use blocks::LiquidBlockBehavior;
pub use context::BlockPlaceContext;
pub use registry::BlockBehaviorRegistry;

use crate::config::FluidConfig;
use crate::fluid::{FluidBehaviorRegistry, FluidBehaviour, WaterFluid};

/// Errors raised by placement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// The block kind has no registered rules.
    #[error("no behaviour registered for block {0}")]
    Unregistered(&'static str),
    /// The rules refused the placement or the target is outside the world.
    #[error("cannot place {block} at {pos}")]
    PlacementRejected {
        /// Key of the block being placed.
        block: &'static str,
        /// Target position.
        pos: BlockPos,
    },
}

/// Every rule table a world dispatches through.
#[derive(Default)]
pub struct Behaviors {
    /// Rules per block kind.
    pub blocks: BlockBehaviorRegistry,
    /// Rules per fluid, run by scheduled fluid ticks.
    pub fluids: FluidBehaviorRegistry,
}

impl Behaviors {
    /// The vanilla rule set: water flows, every other block uses the default rules.
    #[must_use]
    pub fn vanilla(config: &FluidConfig) -> Self {
        let water: Arc<dyn FluidBehaviour> = Arc::new(WaterFluid::new(config));

        let mut fluids = FluidBehaviorRegistry::new();
        fluids.register(water.clone());

        let mut blocks = BlockBehaviorRegistry::new();
        for block in vanilla_blocks::ALL {
            blocks.register(block, Arc::new(DefaultBlockBehaviour::new(block)));
        }
        blocks.register(
            &vanilla_blocks::WATER,
            Arc::new(LiquidBlockBehavior::new(
                &vanilla_blocks::WATER,
                water,
                config.placement_policy,
            )),
        );

        Self { blocks, fluids }
    }
}
