//! # Vanilla
//!
//! The server binary library: world bootstrap and the game tick loop.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]
use std::sync::Arc;
use std::time::Duration;

use tokio::select;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use vanilla_core::world::RamGrid;
use vanilla_core::{ServerConfig, World};
use vanilla_registry::REGISTRY;
use vanilla_utils::ChunkPos;

/// Logging setup.
pub mod logger;

/// Chunks around the origin loaded before the first tick, in each direction.
pub const SPAWN_CHUNK_RADIUS: i32 = 2;

/// The main server struct.
pub struct VanillaServer {
    /// The cancellation token for graceful shutdown.
    pub cancel_token: CancellationToken,
    /// The simulated world.
    pub world: Arc<World>,
    /// The configuration the server was started with.
    pub config: ServerConfig,
}

impl VanillaServer {
    /// Creates the world and loads the spawn chunks.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        log::info!("Starting Vanilla Server");
        log::info!(
            "Loaded {} blocks with {} states",
            REGISTRY.blocks.len(),
            REGISTRY.blocks.state_count()
        );

        let world = World::new(
            RamGrid::new(config.min_y, config.height),
            config.fluid.clone(),
        );
        for x in -SPAWN_CHUNK_RADIUS..=SPAWN_CHUNK_RADIUS {
            for z in -SPAWN_CHUNK_RADIUS..=SPAWN_CHUNK_RADIUS {
                world.load_chunk(ChunkPos::new(x, z));
            }
        }
        log::info!(
            "Prepared spawn area for level \"{}\"",
            config.level_name
        );

        Self {
            cancel_token: CancellationToken::new(),
            world: Arc::new(world),
            config,
        }
    }

    /// Length of one game tick.
    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.config.tick_rate.max(1)))
    }

    /// Runs the tick loop until [`VanillaServer::stop`] is called.
    pub async fn run(&self) {
        log::info!("Started Vanilla Server");

        let mut ticker = interval(self.tick_duration());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            select! {
                biased;
                () = self.cancel_token.cancelled() => break,
                _ = ticker.tick() => {
                    let ran = self.world.tick();
                    if ran > 0 {
                        log::trace!("Tick {}: {ran} fluid recomputations", self.world.game_time());
                    }
                }
            }
        }

        log::info!(
            "Stopped after {} ticks with {} fluid ticks pending",
            self.world.game_time(),
            self.world.pending_fluid_ticks()
        );
    }

    /// Stops the server.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}
