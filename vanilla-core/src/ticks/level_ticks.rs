//! World-level scheduled tick coordinator.

use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use vanilla_utils::{BlockPos, ChunkPos};

use super::{LevelChunkTicks, ScheduledTick};

/// World-level coordinator for scheduled ticks.
///
/// # Architecture
///
/// - Each chunk with pending ticks has a `LevelChunkTicks` in `all_containers`,
///   created the first time something is scheduled there
/// - `next_tick_for_container` tracks the earliest trigger tick per chunk
///   so chunks with nothing due are skipped
/// - `tick()` merges the due ticks of every chunk into one global order
pub struct LevelTicks<T: Copy + Eq + Hash> {
    /// Map of chunk position to chunk tick container.
    all_containers: FxHashMap<ChunkPos, LevelChunkTicks<T>>,
    /// Tracks the earliest scheduled tick for each chunk.
    next_tick_for_container: FxHashMap<ChunkPos, u64>,
    /// Counter for generating unique sub-tick order values.
    sub_tick_counter: u64,
}

impl<T: Copy + Eq + Hash> LevelTicks<T> {
    /// Creates a new empty world tick coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            all_containers: FxHashMap::default(),
            next_tick_for_container: FxHashMap::default(),
            sub_tick_counter: 0,
        }
    }

    /// Drops every pending tick of a chunk, e.g. when it is unloaded.
    ///
    /// Returns the container if the chunk had one.
    pub fn remove_container(&mut self, pos: &ChunkPos) -> Option<LevelChunkTicks<T>> {
        self.next_tick_for_container.remove(pos);
        self.all_containers.remove(pos)
    }

    /// Schedules a tick at the given position.
    ///
    /// The tick will fire at `current_tick + delay`. Returns `false` if a tick
    /// for the same position and type is already pending; the pending one keeps
    /// its timing.
    pub fn schedule(&mut self, pos: BlockPos, tick_type: T, current_tick: u64, delay: u32) -> bool {
        let chunk_pos = ChunkPos::from_block(&pos);
        let trigger_tick = current_tick + u64::from(delay);

        let container = self.all_containers.entry(chunk_pos).or_default();
        if container.has_scheduled_tick(pos, tick_type) {
            return false;
        }

        let sub_tick_order = self.sub_tick_counter;
        self.sub_tick_counter += 1;

        if container.schedule(ScheduledTick::new(tick_type, pos, trigger_tick, sub_tick_order)) {
            self.next_tick_for_container
                .entry(chunk_pos)
                .and_modify(|earliest| {
                    if trigger_tick < *earliest {
                        *earliest = trigger_tick;
                    }
                })
                .or_insert(trigger_tick);
            true
        } else {
            false
        }
    }

    /// Checks if a tick is already scheduled for the given position and type.
    #[must_use]
    pub fn has_scheduled_tick(&self, pos: BlockPos, tick_type: T) -> bool {
        self.all_containers
            .get(&ChunkPos::from_block(&pos))
            .is_some_and(|c| c.has_scheduled_tick(pos, tick_type))
    }

    /// Removes every tick due at or before `current_tick`, up to `max_ticks`.
    ///
    /// Returns the (position, type) pairs in firing order: earliest trigger
    /// tick first, then scheduling order. Ticks beyond the cap stay queued
    /// for the next call.
    #[must_use]
    pub fn tick(&mut self, current_tick: u64, max_ticks: usize) -> Vec<(BlockPos, T)> {
        let chunks_to_tick: Vec<ChunkPos> = self
            .next_tick_for_container
            .iter()
            .filter(|(_, earliest)| **earliest <= current_tick)
            .map(|(pos, _)| *pos)
            .collect();

        let mut result = Vec::new();

        // Merge the due ticks of all chunks in global order
        let mut merged_heap: BinaryHeap<ScheduledTick<T>> = BinaryHeap::new();
        for chunk_pos in &chunks_to_tick {
            if let Some(tick) = self.all_containers.get(chunk_pos).and_then(LevelChunkTicks::peek)
                && tick.trigger_tick <= current_tick
            {
                merged_heap.push(tick.clone());
            }
        }

        while result.len() < max_ticks {
            let Some(next) = merged_heap.pop() else {
                break;
            };
            let chunk_pos = ChunkPos::from_block(&next.pos);
            let Some(container) = self.all_containers.get_mut(&chunk_pos) else {
                continue;
            };
            let Some(tick) = container.poll() else {
                continue;
            };
            result.push((tick.pos, tick.tick_type));

            if let Some(following) = container.peek()
                && following.trigger_tick <= current_tick
            {
                merged_heap.push(following.clone());
            }
        }

        for chunk_pos in chunks_to_tick {
            let next = self.all_containers.get(&chunk_pos).and_then(|c| c.peek());
            if let Some(next) = next {
                self.next_tick_for_container
                    .insert(chunk_pos, next.trigger_tick);
            } else {
                self.next_tick_for_container.remove(&chunk_pos);
                self.all_containers.remove(&chunk_pos);
            }
        }

        result
    }

    /// Returns true if any tick is due at or before `current_tick`.
    #[must_use]
    pub fn has_due(&self, current_tick: u64) -> bool {
        self.next_tick_for_container
            .values()
            .any(|earliest| *earliest <= current_tick)
    }

    /// Returns the total number of scheduled ticks across all chunks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.all_containers
            .values()
            .map(LevelChunkTicks::count)
            .sum()
    }
}

impl<T: Copy + Eq + Hash> Default for LevelTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_due_after_cap() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();
        level_ticks.schedule(BlockPos::new(0, 0, 0), 1, 0, 1);
        level_ticks.schedule(BlockPos::new(40, 0, 0), 1, 0, 1);
        level_ticks.schedule(BlockPos::new(80, 0, 0), 1, 0, 5);

        assert!(!level_ticks.has_due(0));
        assert!(level_ticks.has_due(1));

        // Exactly the cap was due, nothing due is left behind
        assert_eq!(level_ticks.tick(1, 2).len(), 2);
        assert!(!level_ticks.has_due(1));
        assert_eq!(level_ticks.count(), 1);

        level_ticks.schedule(BlockPos::new(0, 0, 0), 1, 1, 4);
        assert_eq!(level_ticks.tick(5, 1).len(), 1);
        assert!(level_ticks.has_due(5));
    }

    #[test]
    fn test_schedule_and_tick() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();

        let pos1 = BlockPos::new(5, 64, 5);
        let pos2 = BlockPos::new(10, 64, 10);

        level_ticks.schedule(pos1, 1, 100, 10); // fires at tick 110
        level_ticks.schedule(pos2, 2, 100, 5); // fires at tick 105

        assert_eq!(level_ticks.count(), 2);

        // Tick at 104 - nothing should fire
        let fired = level_ticks.tick(104, 100);
        assert!(fired.is_empty());

        // Tick at 105 - pos2 should fire
        let fired = level_ticks.tick(105, 100);
        assert_eq!(fired, vec![(pos2, 2)]);

        // Tick at 110 - pos1 should fire
        let fired = level_ticks.tick(110, 100);
        assert_eq!(fired, vec![(pos1, 1)]);

        assert_eq!(level_ticks.count(), 0);
    }

    #[test]
    fn test_deduplication() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();
        let pos = BlockPos::new(5, 64, 5);

        // First schedule succeeds
        assert!(level_ticks.schedule(pos, 1, 100, 10));
        // Second schedule for same pos+type fails
        assert!(!level_ticks.schedule(pos, 1, 100, 20));
        assert!(level_ticks.has_scheduled_tick(pos, 1));

        assert_eq!(level_ticks.count(), 1);

        // The tick should fire at 110 (first scheduled), not 120
        let fired = level_ticks.tick(110, 100);
        assert_eq!(fired.len(), 1);
        assert!(!level_ticks.has_scheduled_tick(pos, 1));

        let fired = level_ticks.tick(120, 100);
        assert!(fired.is_empty());
    }

    #[test]
    fn test_order_across_chunks() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();
        let a = BlockPos::new(0, 0, 0);
        let b = BlockPos::new(40, 0, 0);
        let c = BlockPos::new(-20, 0, 7);

        level_ticks.schedule(a, 1, 0, 10);
        level_ticks.schedule(b, 1, 0, 10);
        level_ticks.schedule(c, 1, 0, 5);

        let fired: Vec<BlockPos> = level_ticks.tick(10, 100).into_iter().map(|(p, _)| p).collect();
        assert_eq!(fired, vec![c, a, b]);
    }

    #[test]
    fn test_max_ticks_leaves_rest_queued() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();
        for x in 0..5 {
            level_ticks.schedule(BlockPos::new(x * 16, 0, 0), 1, 0, 1);
        }

        assert_eq!(level_ticks.tick(1, 3).len(), 3);
        assert_eq!(level_ticks.count(), 2);
        assert_eq!(level_ticks.tick(2, 3).len(), 2);
        assert_eq!(level_ticks.count(), 0);
    }

    #[test]
    fn test_remove_container() {
        let mut level_ticks: LevelTicks<u32> = LevelTicks::new();
        let inside = BlockPos::new(3, 0, 3);
        let outside = BlockPos::new(30, 0, 3);
        level_ticks.schedule(inside, 1, 0, 1);
        level_ticks.schedule(outside, 1, 0, 1);

        assert!(level_ticks.remove_container(&ChunkPos::new(0, 0)).is_some());
        assert!(!level_ticks.has_scheduled_tick(inside, 1));

        let fired = level_ticks.tick(1, 100);
        assert_eq!(fired, vec![(outside, 1)]);
    }
}
