/// Fluid id, matching the vanilla registry order.
///
/// Vanilla also registers `flowing_water` and `flowing_lava`; here the
/// flowing variants are the same fluid with a non-zero level, so only the
/// still ids exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FluidId(pub u16);

impl FluidId {
    pub const EMPTY: FluidId = FluidId(0);
    pub const WATER: FluidId = FluidId(2);
    pub const LAVA: FluidId = FluidId(4);

    /// Returns true if this is the empty fluid
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

pub struct FluidEntry {
    pub id: FluidId,
    pub name: &'static str,
}
