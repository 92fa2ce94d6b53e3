//! The vanilla block table.
//!
//! State ids are assigned contiguously in declaration order. Liquids own
//! sixteen states, one per raw `level` value.

use crate::blocks::{Block, BlockConfig};

const fn single(key: &'static str, config: BlockConfig, state: u16) -> Block {
    Block {
        key,
        config,
        first_state: state,
        state_count: 1,
        default_offset: 0,
    }
}

const fn liquid(key: &'static str, first_state: u16) -> Block {
    Block {
        key,
        config: BlockConfig::LIQUID,
        first_state,
        state_count: 16,
        default_offset: 0,
    }
}

pub static AIR: Block = single("air", BlockConfig::AIR, 0);
pub static STONE: Block = single("stone", BlockConfig::SOLID, 1);
/// `snowy=true` at offset 0, `snowy=false` at offset 1.
pub static GRASS_BLOCK: Block = Block {
    key: "grass_block",
    config: BlockConfig::SOLID,
    first_state: 2,
    state_count: 2,
    default_offset: 1,
};
pub static DIRT: Block = single("dirt", BlockConfig::SOLID, 4);
pub static COBBLESTONE: Block = single("cobblestone", BlockConfig::SOLID, 5);
pub static BEDROCK: Block = single("bedrock", BlockConfig::SOLID, 6);
pub static WATER: Block = liquid("water", 7);
pub static LAVA: Block = liquid("lava", 23);
pub static SAND: Block = single("sand", BlockConfig::SOLID, 39);
pub static GRAVEL: Block = single("gravel", BlockConfig::SOLID, 40);
pub static OBSIDIAN: Block = single("obsidian", BlockConfig::SOLID, 41);
pub static GLASS: Block = single("glass", BlockConfig::SOLID, 42);
pub static SHORT_GRASS: Block = single(
    "short_grass",
    BlockConfig {
        is_air: false,
        replaceable: true,
        has_collision: false,
        liquid: false,
    },
    43,
);
pub static TORCH: Block = single(
    "torch",
    BlockConfig {
        is_air: false,
        replaceable: false,
        has_collision: false,
        liquid: false,
    },
    44,
);
pub static CAVE_AIR: Block = single("cave_air", BlockConfig::AIR, 45);
pub static VOID_AIR: Block = single("void_air", BlockConfig::AIR, 46);

/// Every vanilla block, in state id order.
pub static ALL: [&Block; 16] = [
    &AIR,
    &STONE,
    &GRASS_BLOCK,
    &DIRT,
    &COBBLESTONE,
    &BEDROCK,
    &WATER,
    &LAVA,
    &SAND,
    &GRAVEL,
    &OBSIDIAN,
    &GLASS,
    &SHORT_GRASS,
    &TORCH,
    &CAVE_AIR,
    &VOID_AIR,
];
