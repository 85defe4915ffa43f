// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seeded randomness for reproducible test inputs.

/// xorshift64* generator. Never use outside tests.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator; a zero seed is replaced with 1.
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// Next value in the xorshift64* sequence.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Value in `[0, upper)` by modulo reduction; `upper == 0` yields 0.
    pub fn below(&mut self, upper: u64) -> u64 {
        if upper == 0 {
            0
        } else {
            self.next_u64() % upper
        }
    }

    /// `true` with probability `1 / n`.
    pub fn one_in(&mut self, n: u64) -> bool {
        self.below(n) == 0
    }

    /// A random button state, held for a random run of ticks so scripts look
    /// like play rather than noise.
    pub fn intent_sample(&mut self) -> IntentSample {
        let move_direction = match self.below(3) {
            0 => -1,
            1 => 0,
            _ => 1,
        };
        IntentSample {
            move_direction,
            wants_jump: self.one_in(3),
            wants_run: self.one_in(2),
            wants_crouch: self.one_in(8),
            hold_ticks: 1 + self.below(24),
        }
    }
}

/// Raw fields of one scripted intent, plus how long it is held.
///
/// Mirrors the intent record without depending on the crate that defines it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntentSample {
    /// `-1`, `0` or `1`.
    pub move_direction: i8,
    /// Jump held.
    pub wants_jump: bool,
    /// Run held.
    pub wants_run: bool,
    /// Crouch held.
    pub wants_crouch: bool,
    /// Ticks to hold this state.
    pub hold_ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift64::new(0x1ED6E);
        let mut b = XorShift64::new(0x1ED6E);
        for _ in 0..32 {
            assert_eq!(a.intent_sample(), b.intent_sample());
        }
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = XorShift64::new(0);
        for _ in 0..256 {
            let s = rng.intent_sample();
            assert!((-1..=1).contains(&s.move_direction));
            assert!((1..=24).contains(&s.hold_ticks));
        }
    }
}
