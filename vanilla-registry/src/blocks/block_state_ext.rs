//! Convenience lookups on raw state ids.

use vanilla_utils::BlockStateId;

use crate::REGISTRY;
use crate::blocks::BlockRef;

/// Resolves raw state ids through the global registry.
pub trait BlockStateExt {
    /// The block this state belongs to. Unknown ids resolve to air.
    fn get_block(&self) -> BlockRef;

    /// True for air, cave air and void air.
    fn is_air(&self) -> bool {
        self.get_block().config.is_air
    }

    /// True if this state is one of `block`'s states.
    fn is_block(&self, block: BlockRef) -> bool {
        self.get_block() == block
    }
}

impl BlockStateExt for BlockStateId {
    fn get_block(&self) -> BlockRef {
        REGISTRY.blocks.by_state_id(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla_blocks;

    #[test]
    fn test_air_variants() {
        assert!(vanilla_blocks::AIR.default_state().is_air());
        assert!(vanilla_blocks::CAVE_AIR.default_state().is_air());
        assert!(vanilla_blocks::VOID_AIR.default_state().is_air());
        assert!(!vanilla_blocks::STONE.default_state().is_air());
        assert!(!vanilla_blocks::WATER.default_state().is_air());
    }

    #[test]
    fn test_is_block() {
        let state = vanilla_blocks::WATER.state_at(5).expect("in range");
        assert!(state.is_block(&vanilla_blocks::WATER));
        assert!(!state.is_block(&vanilla_blocks::LAVA));
    }
}
