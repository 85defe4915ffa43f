// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Float canonicalisation.
//!
//! Two states that compare equal must hash equal. IEEE-754 breaks that in two
//! places: `-0.0 == 0.0` with different bit patterns, and NaN payloads that
//! vary by platform. Everything that feeds a digest goes through
//! [`canonical_bits`].

/// Canonical quiet NaN bit pattern (positive, quiet, zero payload).
pub const CANONICAL_NAN_BITS: u32 = 0x7fc0_0000;

/// Returns `value` with `-0.0` folded to `+0.0` and any NaN replaced by the
/// canonical quiet NaN.
pub fn canonical_f32(value: f32) -> f32 {
    if value.is_nan() {
        f32::from_bits(CANONICAL_NAN_BITS)
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Little-endian bytes of the canonicalised value.
pub fn canonical_bits(value: f32) -> [u8; 4] {
    canonical_f32(value).to_bits().to_le_bytes()
}
