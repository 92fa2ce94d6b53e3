//! Scheduled tick types.

use std::cmp::Ordering;

use vanilla_utils::BlockPos;

/// A pending recomputation for a block or fluid.
///
/// A tick fires once the game clock reaches `trigger_tick`. Ticks due on the
/// same game tick run in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct ScheduledTick<T> {
    /// The type being ticked (fluid id for fluid ticks).
    pub tick_type: T,
    /// The position to recompute.
    pub pos: BlockPos,
    /// The absolute game tick when this should fire.
    pub trigger_tick: u64,
    /// Sub-tick ordering for ticks with the same `trigger_tick`.
    /// Lower values run first.
    pub sub_tick_order: u64,
}

impl<T> ScheduledTick<T> {
    /// Creates a new scheduled tick.
    pub fn new(tick_type: T, pos: BlockPos, trigger_tick: u64, sub_tick_order: u64) -> Self {
        Self {
            tick_type,
            pos,
            trigger_tick,
            sub_tick_order,
        }
    }
}

impl<T> PartialEq for ScheduledTick<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trigger_tick == other.trigger_tick && self.sub_tick_order == other.sub_tick_order
    }
}

impl<T> Eq for ScheduledTick<T> {}

impl<T> PartialOrd for ScheduledTick<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTick<T> {
    /// Ordering for the priority queue.
    ///
    /// Note: `BinaryHeap` is a max-heap, so we reverse the comparison
    /// to get earliest ticks first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .trigger_tick
            .cmp(&self.trigger_tick)
            .then_with(|| other.sub_tick_order.cmp(&self.sub_tick_order))
    }
}

/// Key for deduplication in the pending set.
///
/// Only considers position and type - ignores timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickKey<T> {
    /// The position of the block/fluid.
    pub pos: BlockPos,
    /// The type being ticked.
    pub tick_type: T,
}

impl<T: Copy> From<&ScheduledTick<T>> for TickKey<T> {
    fn from(tick: &ScheduledTick<T>) -> Self {
        Self {
            pos: tick.pos,
            tick_type: tick.tick_type,
        }
    }
}
