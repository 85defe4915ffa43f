// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
/// Discrete simulation tick.
///
/// The simulation advances in integer ticks with a fixed `dt`. This newtype
/// keeps tick indices from being confused with frame counters or durations.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    index: u64,
}

impl Tick {
    /// The first tick of a simulation.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new tick with the given index.
    #[must_use]
    pub const fn new(index: u64) -> Self {
        Self { index }
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Returns the following tick (saturating at `u64::MAX`).
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            index: self.index.saturating_add(1),
        }
    }
}

impl core::fmt::Display for Tick {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.index)
    }
}
