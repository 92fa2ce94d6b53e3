use super::{FluidEntry, FluidId};

pub const EMPTY: FluidEntry = FluidEntry {
    id: FluidId::EMPTY,
    name: "empty",
};

pub const WATER: FluidEntry = FluidEntry {
    id: FluidId::WATER,
    name: "water",
};

pub const LAVA: FluidEntry = FluidEntry {
    id: FluidId::LAVA,
    name: "lava",
};
