//! Per-chunk scheduled tick storage.

use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use vanilla_utils::BlockPos;

use super::{ScheduledTick, TickKey};

/// Per-chunk storage for scheduled ticks.
///
/// This struct manages scheduled ticks for a single chunk, providing:
/// - A priority queue ordered by trigger time
/// - Deduplication so a (pos, type) pair is pending at most once
///
/// When a tick is scheduled for a position that already has a pending tick,
/// the new tick is ignored and the existing one keeps its timing.
pub struct LevelChunkTicks<T: Copy + Eq + Hash> {
    /// Priority queue of scheduled ticks, ordered by trigger time.
    tick_queue: BinaryHeap<ScheduledTick<T>>,
    /// Set of (pos, type) pairs that currently have a pending tick.
    ticks_per_position: FxHashSet<TickKey<T>>,
}

impl<T: Copy + Eq + Hash> LevelChunkTicks<T> {
    /// Creates a new empty chunk tick container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_queue: BinaryHeap::new(),
            ticks_per_position: FxHashSet::default(),
        }
    }

    /// Schedules a tick if one isn't already pending for this (pos, type).
    ///
    /// Returns `true` if the tick was scheduled, `false` if one already exists.
    pub fn schedule(&mut self, tick: ScheduledTick<T>) -> bool {
        if self.ticks_per_position.insert(TickKey::from(&tick)) {
            self.tick_queue.push(tick);
            true
        } else {
            // Already pending, keep existing timing
            false
        }
    }

    /// Returns a reference to the next tick to fire, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&ScheduledTick<T>> {
        self.tick_queue.peek()
    }

    /// Removes and returns the next tick to fire.
    ///
    /// Also removes it from the deduplication set, so the position can be
    /// scheduled again while the returned tick runs.
    pub fn poll(&mut self) -> Option<ScheduledTick<T>> {
        let tick = self.tick_queue.pop()?;
        self.ticks_per_position.remove(&TickKey::from(&tick));
        Some(tick)
    }

    /// Checks if a tick is pending for the given position and type.
    pub fn has_scheduled_tick(&self, pos: BlockPos, tick_type: T) -> bool {
        self.ticks_per_position
            .contains(&TickKey { pos, tick_type })
    }

    /// Returns the number of pending ticks in this chunk.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tick_queue.len()
    }

    /// Returns `true` if there are no pending ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tick_queue.is_empty()
    }
}

impl<T: Copy + Eq + Hash> Default for LevelChunkTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}
