//! Snapshot of the six blocks around a position.

use vanilla_utils::{BlockPos, BlockStateId, Direction};

use crate::world::BlockGetter;

/// The six neighbours of `origin`, read once, in [`Direction::ALL`] order.
#[derive(Debug, Clone, Copy)]
pub struct NeighborSample {
    origin: BlockPos,
    states: [(Direction, BlockStateId); 6],
}

impl NeighborSample {
    /// Reads the six neighbours of `pos`. Does not mutate the grid.
    pub fn sample<G: BlockGetter + ?Sized>(grid: &G, pos: BlockPos) -> Self {
        let states = Direction::ALL.map(|dir| (dir, grid.get_block_state(&dir.relative(&pos))));
        Self {
            origin: pos,
            states,
        }
    }

    /// The sampled position.
    #[must_use]
    pub const fn origin(&self) -> BlockPos {
        self.origin
    }

    /// The state read in `dir`.
    #[must_use]
    pub const fn get(&self, dir: Direction) -> BlockStateId {
        self.states[dir as usize].1
    }

    /// The position of the neighbour in `dir`.
    #[must_use]
    pub const fn position(&self, dir: Direction) -> BlockPos {
        dir.relative(&self.origin)
    }

    /// Iterates the samples in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, BlockStateId)> + '_ {
        self.states.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use vanilla_registry::vanilla_blocks;

    use super::*;
    use crate::world::{RamGrid, VoxelGrid};

    #[test]
    fn test_sample_order_and_values() {
        let mut grid = RamGrid::new(0, 64);
        let pos = BlockPos::new(5, 10, 5);
        grid.set_block_state(pos.above(), vanilla_blocks::STONE.default_state());
        grid.set_block_state(BlockPos::new(6, 10, 5), vanilla_blocks::DIRT.default_state());

        let sample = NeighborSample::sample(&grid, pos);
        let dirs: Vec<Direction> = sample.iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());

        assert_eq!(sample.get(Direction::Up), vanilla_blocks::STONE.default_state());
        assert_eq!(sample.get(Direction::East), vanilla_blocks::DIRT.default_state());
        assert_eq!(sample.get(Direction::West), vanilla_blocks::AIR.default_state());
        assert_eq!(sample.position(Direction::Down), BlockPos::new(5, 9, 5));
    }

    #[test]
    fn test_out_of_bounds_reads_air() {
        let grid = RamGrid::new(0, 16);
        let sample = NeighborSample::sample(&grid, BlockPos::new(0, 0, 0));
        assert_eq!(sample.get(Direction::Down), vanilla_blocks::AIR.default_state());
    }
}
