//! Block behaviour registry for looking up rules by block kind.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use vanilla_registry::BlockRef;
use vanilla_utils::{BlockPos, BlockStateId};

use super::BehaviorError;
use super::block::BlockBehaviour;
use super::context::BlockPlaceContext;
use crate::world::World;

/// Maps block kinds to their rules. Blocks without an entry have no rules.
#[derive(Default)]
pub struct BlockBehaviorRegistry {
    behaviors: FxHashMap<&'static str, Arc<dyn BlockBehaviour>>,
}

impl BlockBehaviorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rules for `block`. Last registration wins.
    pub fn register(&mut self, block: BlockRef, behavior: Arc<dyn BlockBehaviour>) {
        if self.behaviors.insert(block.key, behavior).is_some() {
            log::debug!("Replaced block behaviour for {}", block.key);
        }
    }

    /// Gets the rules for `block`.
    #[must_use]
    pub fn get(&self, block: BlockRef) -> Option<&Arc<dyn BlockBehaviour>> {
        self.behaviors.get(block.key)
    }

    /// Returns true if `block` has registered rules.
    #[must_use]
    pub fn contains(&self, block: BlockRef) -> bool {
        self.behaviors.contains_key(block.key)
    }

    /// Returns true if `block` may be placed at `pos`. Unregistered blocks
    /// may not be placed anywhere.
    #[must_use]
    pub fn can_place(&self, block: BlockRef, world: &World, pos: BlockPos) -> bool {
        self.get(block)
            .is_some_and(|behavior| behavior.can_place(world, pos))
    }

    /// Asks the rules of `context.block` for the state to place.
    ///
    /// # Errors
    /// [`BehaviorError::Unregistered`] if the block has no rules and
    /// [`BehaviorError::PlacementRejected`] if the rules refuse.
    pub fn get_state_for_placement(
        &self,
        context: &BlockPlaceContext<'_>,
    ) -> Result<BlockStateId, BehaviorError> {
        let behavior = self
            .get(context.block)
            .ok_or(BehaviorError::Unregistered(context.block.key))?;
        behavior
            .get_state_for_placement(context)
            .ok_or(BehaviorError::PlacementRejected {
                block: context.block.key,
                pos: context.pos,
            })
    }

    /// Forwards a neighbour change to the rules of `block`, if any.
    pub fn on_neighbor_changed(
        &self,
        block: BlockRef,
        state: BlockStateId,
        world: &World,
        pos: BlockPos,
        source_block: BlockRef,
    ) {
        if let Some(behavior) = self.get(block) {
            behavior.handle_neighbor_changed(state, world, pos, source_block);
        }
    }

    /// Forwards a placement notification to the rules of `block`, if any.
    pub fn on_place(
        &self,
        block: BlockRef,
        state: BlockStateId,
        world: &World,
        pos: BlockPos,
        old_state: BlockStateId,
    ) {
        if let Some(behavior) = self.get(block) {
            behavior.on_place(state, world, pos, old_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use vanilla_registry::vanilla_blocks;
    use vanilla_utils::Direction;

    use super::*;
    use crate::behavior::{Behaviors, DefaultBlockBehaviour};
    use crate::config::FluidConfig;
    use crate::world::RamGrid;

    struct AlwaysDirt;

    impl BlockBehaviour for AlwaysDirt {
        fn get_state_for_placement(&self, _context: &BlockPlaceContext<'_>) -> Option<BlockStateId> {
            Some(vanilla_blocks::DIRT.default_state())
        }
    }

    struct Refuses;

    impl BlockBehaviour for Refuses {
        fn can_place(&self, _world: &World, _pos: BlockPos) -> bool {
            false
        }

        fn get_state_for_placement(&self, _context: &BlockPlaceContext<'_>) -> Option<BlockStateId> {
            None
        }
    }

    fn context(world: &World, block: BlockRef) -> BlockPlaceContext<'_> {
        BlockPlaceContext {
            world,
            pos: BlockPos::new(0, 0, 0),
            block,
            clicked_face: Direction::Up,
        }
    }

    #[test]
    fn test_last_registration_wins() {
        let world = World::with_behaviors(RamGrid::new(0, 16), Behaviors::default(), FluidConfig::default());
        let mut registry = BlockBehaviorRegistry::new();
        let stone = &vanilla_blocks::STONE;

        registry.register(stone, Arc::new(DefaultBlockBehaviour::new(stone)));
        assert_eq!(
            registry.get_state_for_placement(&context(&world, stone)),
            Ok(stone.default_state())
        );

        registry.register(stone, Arc::new(AlwaysDirt));
        assert_eq!(
            registry.get_state_for_placement(&context(&world, stone)),
            Ok(vanilla_blocks::DIRT.default_state())
        );
    }

    #[test]
    fn test_unregistered_and_refused() {
        let world = World::with_behaviors(RamGrid::new(0, 16), Behaviors::default(), FluidConfig::default());
        let mut registry = BlockBehaviorRegistry::new();
        let glass = &vanilla_blocks::GLASS;
        let pos = BlockPos::new(0, 0, 0);

        assert_eq!(
            registry.get_state_for_placement(&context(&world, glass)),
            Err(BehaviorError::Unregistered("glass"))
        );
        assert!(!registry.can_place(glass, &world, pos));

        registry.register(glass, Arc::new(Refuses));
        assert!(registry.contains(glass));
        assert!(!registry.can_place(glass, &world, pos));
        assert_eq!(
            registry.get_state_for_placement(&context(&world, glass)),
            Err(BehaviorError::PlacementRejected { block: "glass", pos })
        );
    }
}
