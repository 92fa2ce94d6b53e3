//! Block behavior implementations for vanilla blocks.

mod liquid_block;

pub use liquid_block::LiquidBlockBehavior;
