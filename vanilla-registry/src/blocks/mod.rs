//! Block kinds and the mapping from raw state ids back to them.
//!
//! Every block owns a contiguous range of state ids starting at
//! `first_state`. Resolving a state id is a binary search over those ranges.

pub mod block_state_ext;

use rustc_hash::FxHashMap;
use vanilla_utils::BlockStateId;

use crate::RegistryExt;
use crate::vanilla_blocks;

/// A reference to a registered block.
pub type BlockRef = &'static Block;

/// Physical flags of a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockConfig {
    /// Air, cave air and void air.
    pub is_air: bool,
    /// Can be overwritten by placement (short grass, snow layers).
    pub replaceable: bool,
    /// Entities collide with it.
    pub has_collision: bool,
    /// The block is a liquid (water, lava).
    pub liquid: bool,
}

impl BlockConfig {
    /// A full solid block.
    pub const SOLID: Self = Self {
        is_air: false,
        replaceable: false,
        has_collision: true,
        liquid: false,
    };

    /// One of the air variants.
    pub const AIR: Self = Self {
        is_air: true,
        replaceable: true,
        has_collision: false,
        liquid: false,
    };

    /// A liquid block.
    pub const LIQUID: Self = Self {
        is_air: false,
        replaceable: true,
        has_collision: false,
        liquid: true,
    };
}

/// A block kind.
#[derive(Debug, PartialEq, Eq)]
pub struct Block {
    /// The registry key, without namespace.
    pub key: &'static str,
    /// Physical flags.
    pub config: BlockConfig,
    /// The first state id owned by this block.
    pub first_state: u16,
    /// How many consecutive state ids this block owns.
    pub state_count: u16,
    /// Offset of the default state within the range.
    pub default_offset: u16,
}

impl Block {
    /// Returns the default state of this block.
    #[must_use]
    pub const fn default_state(&self) -> BlockStateId {
        BlockStateId(self.first_state + self.default_offset)
    }

    /// Returns the state at `offset` within this block's range.
    #[must_use]
    pub fn state_at(&self, offset: u16) -> Option<BlockStateId> {
        (offset < self.state_count).then(|| BlockStateId(self.first_state + offset))
    }

    /// Returns the offset of `state` within this block's range, if it belongs to it.
    #[must_use]
    pub fn state_offset(&self, state: BlockStateId) -> Option<u16> {
        state
            .0
            .checked_sub(self.first_state)
            .filter(|offset| *offset < self.state_count)
    }

    /// Returns true if `state` belongs to this block.
    #[must_use]
    pub fn has_state(&self, state: BlockStateId) -> bool {
        self.state_offset(state).is_some()
    }
}

/// Lookup table for block kinds.
pub struct BlockRegistry {
    /// Sorted by `first_state`.
    blocks: Vec<BlockRef>,
    by_key: FxHashMap<&'static str, BlockRef>,
    allows_registering: bool,
}

impl BlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            by_key: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers a block.
    ///
    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(&mut self, block: BlockRef) {
        assert!(
            self.allows_registering,
            "Cannot register block after registry is frozen"
        );
        let index = self
            .blocks
            .partition_point(|b| b.first_state < block.first_state);
        debug_assert!(
            self.blocks
                .get(index)
                .is_none_or(|next| block.first_state + block.state_count <= next.first_state),
            "state range of {} overlaps another block",
            block.key
        );
        self.blocks.insert(index, block);
        self.by_key.insert(block.key, block);
    }

    /// Resolves a state id to its block. Unknown ids resolve to air.
    #[must_use]
    pub fn by_state_id(&self, state: BlockStateId) -> BlockRef {
        let index = self.blocks.partition_point(|b| b.first_state <= state.0);
        index
            .checked_sub(1)
            .map(|i| self.blocks[i])
            .filter(|b| b.has_state(state))
            .unwrap_or(&vanilla_blocks::AIR)
    }

    /// Looks up a block by key, e.g. `"water"`.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<BlockRef> {
        self.by_key.get(key).copied()
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of state ids across all blocks.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.blocks.iter().map(|b| usize::from(b.state_count)).sum()
    }

    /// Iterates blocks in state id order.
    pub fn iter(&self) -> impl Iterator<Item = BlockRef> + '_ {
        self.blocks.iter().copied()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REGISTRY;

    #[test]
    fn test_state_ranges_do_not_overlap() {
        let mut expected_next = 0;
        for block in REGISTRY.blocks.iter() {
            assert_eq!(block.first_state, expected_next, "gap before {}", block.key);
            assert!(block.default_offset < block.state_count);
            expected_next = block.first_state + block.state_count;
        }
    }

    #[test]
    fn test_by_state_id() {
        let water = &vanilla_blocks::WATER;
        for offset in 0..water.state_count {
            let state = water.state_at(offset).expect("in range");
            assert_eq!(REGISTRY.blocks.by_state_id(state), water);
        }
        assert_eq!(REGISTRY.blocks.by_state_id(BlockStateId(0)), &vanilla_blocks::AIR);
        assert_eq!(
            REGISTRY.blocks.by_state_id(BlockStateId(u16::MAX)),
            &vanilla_blocks::AIR
        );
    }

    #[test]
    fn test_by_key() {
        assert_eq!(REGISTRY.blocks.by_key("stone"), Some(&vanilla_blocks::STONE));
        assert!(REGISTRY.blocks.by_key("not_a_block").is_none());
    }

    #[test]
    #[should_panic(expected = "frozen")]
    fn test_frozen_registry_rejects() {
        let mut registry = BlockRegistry::new();
        registry.freeze();
        registry.register(&vanilla_blocks::STONE);
    }
}
