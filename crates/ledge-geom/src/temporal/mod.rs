// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Temporal types used for fixed-step simulation.

#[doc = "Discrete simulation ticks (u64 newtype)."]
pub mod tick;
