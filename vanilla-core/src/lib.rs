//! # Vanilla Core
//!
//! Gameplay rules of the vanilla server: block behaviours, fluid simulation,
//! scheduled ticks and the world that drives them.

pub mod behavior;
pub mod config;
pub mod fluid;
pub mod ticks;
pub mod world;

pub use config::{ConfigError, FluidConfig, ServerConfig};
pub use world::World;
