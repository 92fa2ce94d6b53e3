//! Fluid behavior system.
//!
//! A fluid block re-evaluates itself a short delay after any neighbour
//! changes: it samples its six neighbours, recomputes its level, and spreads
//! into empty space. Writes raise further neighbour changes, so propagation
//! is emergent and bounded by decay.

pub mod flowing;
pub mod fluid_state;
pub mod neighbors;
pub mod spread;
mod water;

use std::sync::Arc;

use rustc_hash::FxHashMap;
use vanilla_registry::{FluidId, REGISTRY};

pub use flowing::{FluidBehaviour, LevelChange, recompute_level};
pub use fluid_state::{FluidState, LiquidCodec};
pub use neighbors::NeighborSample;
pub use spread::{SpreadPlan, SpreadTarget, plan_spread};
pub use water::WaterFluid;

/// Fluid behaviours, looked up by fluid id when a scheduled tick fires.
#[derive(Default)]
pub struct FluidBehaviorRegistry {
    behaviors: FxHashMap<FluidId, Arc<dyn FluidBehaviour>>,
}

impl FluidBehaviorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a behaviour under its own fluid id. A later registration
    /// for the same fluid replaces the earlier one.
    pub fn register(&mut self, behavior: Arc<dyn FluidBehaviour>) {
        let fluid = behavior.fluid_type();
        if self.behaviors.insert(fluid, behavior).is_some() {
            log::debug!(
                "Replaced fluid behaviour for {}",
                REGISTRY.fluids.name_of(fluid)
            );
        }
    }

    /// Gets the behaviour for a fluid.
    #[must_use]
    pub fn get(&self, fluid: FluidId) -> Option<&Arc<dyn FluidBehaviour>> {
        self.behaviors.get(&fluid)
    }
}
