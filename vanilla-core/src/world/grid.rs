//! Block storage behind the world.
//!
//! The world only needs per-position reads and writes, so storage is a trait.
//! [`RamGrid`] keeps everything in memory and never persists.

use rustc_hash::FxHashMap;
use vanilla_registry::vanilla_blocks;
use vanilla_utils::{BlockPos, BlockStateId, ChunkPos};

/// Read access to block states.
pub trait BlockGetter {
    /// Returns the state at `pos`. Positions outside the world read as air.
    fn get_block_state(&self, pos: &BlockPos) -> BlockStateId;
}

/// A mutable voxel grid.
pub trait VoxelGrid: BlockGetter + Send + Sync {
    /// Replaces the state at `pos`.
    ///
    /// Returns the previous state, or `None` if the write was rejected
    /// because `pos` is outside the world.
    fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) -> Option<BlockStateId>;

    /// Returns true if `pos` is within the vertical bounds of the world.
    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool;

    /// Makes a chunk resident. Loading a resident chunk does nothing.
    fn load_chunk(&mut self, pos: ChunkPos);

    /// Drops a chunk and its blocks. Returns false if it was not resident.
    fn unload_chunk(&mut self, pos: ChunkPos) -> bool;

    /// Returns true if the chunk is resident.
    fn is_chunk_loaded(&self, pos: ChunkPos) -> bool;
}

const SECTION_SIZE: i32 = 16;
const SECTION_VOLUME: usize = 16 * 16 * 16;

type SectionStates = Box<[BlockStateId; SECTION_VOLUME]>;

/// One column of 16x16x16 sections. Sections holding only air are not allocated.
struct RamChunk {
    sections: Box<[Option<SectionStates>]>,
}

impl RamChunk {
    fn new(section_count: usize) -> Self {
        Self {
            sections: (0..section_count).map(|_| None).collect(),
        }
    }

    #[inline]
    fn index(pos: &BlockPos) -> usize {
        (((pos.y() & 15) << 8) | ((pos.z() & 15) << 4) | (pos.x() & 15)) as usize
    }

    fn get(&self, section: usize, pos: &BlockPos) -> BlockStateId {
        self.sections
            .get(section)
            .and_then(Option::as_ref)
            .map_or(vanilla_blocks::AIR.default_state(), |states| {
                states[Self::index(pos)]
            })
    }

    fn set(&mut self, section: usize, pos: &BlockPos, state: BlockStateId) -> BlockStateId {
        let air = vanilla_blocks::AIR.default_state();
        let slot = &mut self.sections[section];
        if let Some(states) = slot.as_mut() {
            return std::mem::replace(&mut states[Self::index(pos)], state);
        }
        if state != air {
            let mut states = Box::new([air; SECTION_VOLUME]);
            states[Self::index(pos)] = state;
            *slot = Some(states);
        }
        air
    }
}

/// In-memory voxel grid bounded vertically by `min_y` and `height`.
///
/// Chunks are created on first write or [`VoxelGrid::load_chunk`].
pub struct RamGrid {
    min_y: i32,
    height: i32,
    chunks: FxHashMap<ChunkPos, RamChunk>,
}

impl RamGrid {
    /// Creates an empty grid. `height` is rounded up to whole sections.
    #[must_use]
    pub fn new(min_y: i32, height: u32) -> Self {
        let max_sections = i32::MAX / SECTION_SIZE;
        let sections = i32::try_from(height.div_ceil(SECTION_SIZE.unsigned_abs()))
            .map_or(max_sections, |sections| sections.min(max_sections));
        let height = sections * SECTION_SIZE;
        Self {
            min_y,
            height,
            chunks: FxHashMap::default(),
        }
    }

    /// Lowest valid block y.
    #[must_use]
    pub const fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Number of valid block layers.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Number of resident chunks.
    #[must_use]
    pub fn loaded_chunks(&self) -> usize {
        self.chunks.len()
    }

    fn section_count(&self) -> usize {
        (self.height / SECTION_SIZE) as usize
    }

    fn section_index(&self, pos: &BlockPos) -> usize {
        ((pos.y() - self.min_y) / SECTION_SIZE) as usize
    }
}

impl BlockGetter for RamGrid {
    fn get_block_state(&self, pos: &BlockPos) -> BlockStateId {
        if !self.is_in_valid_bounds(pos) {
            return vanilla_blocks::AIR.default_state();
        }
        self.chunks
            .get(&ChunkPos::from_block(pos))
            .map_or(vanilla_blocks::AIR.default_state(), |chunk| {
                chunk.get(self.section_index(pos), pos)
            })
    }
}

impl VoxelGrid for RamGrid {
    fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) -> Option<BlockStateId> {
        if !self.is_in_valid_bounds(&pos) {
            return None;
        }
        let section = self.section_index(&pos);
        let section_count = self.section_count();
        let chunk = self
            .chunks
            .entry(ChunkPos::from_block(&pos))
            .or_insert_with(|| RamChunk::new(section_count));
        Some(chunk.set(section, &pos, state))
    }

    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        pos.y() >= self.min_y && pos.y() < self.min_y + self.height
    }

    fn load_chunk(&mut self, pos: ChunkPos) {
        let section_count = self.section_count();
        self.chunks
            .entry(pos)
            .or_insert_with(|| RamChunk::new(section_count));
    }

    fn unload_chunk(&mut self, pos: ChunkPos) -> bool {
        self.chunks.remove(&pos).is_some()
    }

    fn is_chunk_loaded(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let mut grid = RamGrid::new(-64, 128);
        let pos = BlockPos::new(-17, -40, 33);
        let stone = vanilla_blocks::STONE.default_state();

        assert_eq!(grid.get_block_state(&pos), vanilla_blocks::AIR.default_state());
        assert_eq!(
            grid.set_block_state(pos, stone),
            Some(vanilla_blocks::AIR.default_state())
        );
        assert_eq!(grid.get_block_state(&pos), stone);
        assert_eq!(grid.set_block_state(pos, stone), Some(stone));

        // Neighbouring cells are untouched
        assert_eq!(grid.get_block_state(&pos.above()), vanilla_blocks::AIR.default_state());
        assert_eq!(
            grid.get_block_state(&BlockPos::new(-16, -40, 33)),
            vanilla_blocks::AIR.default_state()
        );
    }

    #[test]
    fn test_height_rounds_up_to_sections() {
        assert_eq!(RamGrid::new(0, 16).height(), 16);
        assert_eq!(RamGrid::new(0, 20).height(), 32);
        assert_eq!(RamGrid::new(-64, 1).height(), 16);

        let grid = RamGrid::new(-64, 20);
        assert!(grid.is_in_valid_bounds(&BlockPos::new(0, -33, 0)));
        assert!(!grid.is_in_valid_bounds(&BlockPos::new(0, -32, 0)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = RamGrid::new(0, 16);
        let above = BlockPos::new(0, 16, 0);
        let below = BlockPos::new(0, -1, 0);

        assert!(!grid.is_in_valid_bounds(&above));
        assert!(grid.is_in_valid_bounds(&BlockPos::new(0, 15, 0)));
        assert_eq!(grid.set_block_state(above, vanilla_blocks::STONE.default_state()), None);
        assert_eq!(grid.set_block_state(below, vanilla_blocks::STONE.default_state()), None);
        assert_eq!(grid.get_block_state(&below), vanilla_blocks::AIR.default_state());
        assert_eq!(grid.loaded_chunks(), 0);
    }

    #[test]
    fn test_unload_drops_blocks() {
        let mut grid = RamGrid::new(0, 16);
        let pos = BlockPos::new(3, 3, 3);
        grid.set_block_state(pos, vanilla_blocks::DIRT.default_state());

        assert!(grid.is_chunk_loaded(ChunkPos::new(0, 0)));
        assert!(grid.unload_chunk(ChunkPos::new(0, 0)));
        assert!(!grid.unload_chunk(ChunkPos::new(0, 0)));
        assert_eq!(grid.get_block_state(&pos), vanilla_blocks::AIR.default_state());
    }

    #[test]
    fn test_load_chunk() {
        let mut grid = RamGrid::new(0, 32);
        grid.load_chunk(ChunkPos::new(-1, 2));
        grid.load_chunk(ChunkPos::new(-1, 2));
        assert_eq!(grid.loaded_chunks(), 1);
        assert!(grid.is_chunk_loaded(ChunkPos::new(-1, 2)));
    }
}
