//! Static game data: the block table and the fluid ids.

use std::sync::LazyLock;

pub mod blocks;
pub mod fluid;
pub mod vanilla_blocks;

pub use blocks::{Block, BlockConfig, BlockRef, BlockRegistry};
pub use fluid::{FluidEntry, FluidId, FluidRegistry};

/// Registries that stop accepting entries once the server is running.
pub trait RegistryExt {
    /// Prevents further registration.
    fn freeze(&mut self);
}

/// All registries the server knows about.
pub struct Registry {
    /// Block kinds and their state id ranges.
    pub blocks: BlockRegistry,
    /// Fluid kinds.
    pub fluids: FluidRegistry,
}

impl Registry {
    /// Builds a frozen registry containing every vanilla block and fluid.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut blocks = BlockRegistry::new();
        for block in vanilla_blocks::ALL {
            blocks.register(block);
        }
        blocks.freeze();

        let mut fluids = FluidRegistry::new();
        fluids.register(fluid::vanilla::EMPTY);
        fluids.register(fluid::vanilla::WATER);
        fluids.register(fluid::vanilla::LAVA);
        fluids.freeze();

        log::debug!(
            "Registry loaded: {} blocks, {} block states",
            blocks.len(),
            blocks.state_count()
        );

        Self { blocks, fluids }
    }
}

/// The global vanilla registry.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new_vanilla);
