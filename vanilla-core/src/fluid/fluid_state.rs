//! Conversion between liquid block states and fluid levels.

use vanilla_registry::BlockRef;
use vanilla_utils::BlockStateId;

/// The decoded fluid content of a liquid block.
///
/// `level` 0 is a source; 1..=7 is flowing, higher is further from a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidState {
    /// Fill level in `0..=MAX_LEVEL`.
    pub level: u8,
    /// Set for fluid falling down a column.
    pub falling: bool,
}

impl FluidState {
    /// The highest storable level. One past this is a removal.
    pub const MAX_LEVEL: u8 = 7;

    /// A still source block.
    pub const SOURCE: Self = Self {
        level: 0,
        falling: false,
    };

    /// Creates a non-falling state at `level`.
    #[must_use]
    pub const fn flowing(level: u8) -> Self {
        Self {
            level,
            falling: false,
        }
    }

    /// Returns true for level 0.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        self.level == 0
    }
}

/// Maps fluid states to the sixteen block states of one liquid block.
///
/// The raw `level` block property is `level + 8` when falling.
#[derive(Debug, Clone, Copy)]
pub struct LiquidCodec {
    block: BlockRef,
}

impl LiquidCodec {
    /// Creates a codec for `block`, which must own at least sixteen states.
    #[must_use]
    pub fn new(block: BlockRef) -> Self {
        debug_assert!(block.state_count >= 16, "{} is not a liquid", block.key);
        Self { block }
    }

    /// The liquid block this codec encodes.
    #[must_use]
    pub const fn block(&self) -> BlockRef {
        self.block
    }

    /// Decodes `state`, or `None` if it is not a state of this liquid.
    #[must_use]
    pub fn decode(&self, state: BlockStateId) -> Option<FluidState> {
        let raw = self.block.state_offset(state)?;
        Some(FluidState {
            level: (raw % 8) as u8,
            falling: raw >= 8,
        })
    }

    /// Encodes a level and falling flag into a block state.
    #[must_use]
    pub fn encode(&self, level: u8, falling: bool) -> BlockStateId {
        debug_assert!(
            level <= FluidState::MAX_LEVEL,
            "fluid level {level} is out of range"
        );
        let raw = u16::from(level & 7) + if falling { 8 } else { 0 };
        BlockStateId(self.block.first_state + raw)
    }

    /// Encodes a decoded state.
    #[must_use]
    pub fn encode_state(&self, state: FluidState) -> BlockStateId {
        self.encode(state.level, state.falling)
    }
}
