//! Scheduled tick system for fluids.
//!
//! Fluids schedule a delayed recomputation of their own position whenever a
//! neighbour changes. The tables here keep at most one pending tick per
//! (position, type) pair.
//!
//! # Architecture
//!
//! - [`ScheduledTick`] - A single scheduled tick entry
//! - [`LevelChunkTicks`] - Per-chunk tick storage with deduplication
//! - [`LevelTicks`] - World-level coordinator that manages all chunk ticks

mod chunk_ticks;
mod level_ticks;
mod scheduled_tick;

pub use chunk_ticks::LevelChunkTicks;
pub use level_ticks::LevelTicks;
pub use scheduled_tick::{ScheduledTick, TickKey};
