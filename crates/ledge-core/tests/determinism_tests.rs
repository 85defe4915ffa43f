// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{replay, script};
use ledge_core::{PhysicsConfig, World};
use ledge_dry_tests::{boxed_tiles, pit_level, slope_level};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

const SEED_BYTES: [u8; 32] = [
    0x1e, 0xd9, 0x3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

fn pinned_runner(cases: u32) -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(
        PropConfig {
            cases,
            ..PropConfig::default()
        },
        rng,
    )
}

#[test]
fn identical_scripts_yield_identical_digest_streams() {
    let mut runner = pinned_runner(24);
    runner
        .run(&(any::<u64>(), 1usize..400), |(seed, ticks)| {
            let intents = script(seed, ticks);
            let mut a = World::new(PhysicsConfig::default(), slope_level()).expect("world a");
            let mut b = World::new(PhysicsConfig::default(), slope_level()).expect("world b");
            let da = replay(&mut a, &intents);
            let db = replay(&mut b, &intents);
            prop_assert_eq!(da, db);
            prop_assert_eq!(a.snapshot(), b.snapshot());
            prop_assert_eq!(a.view(), b.view());
            Ok(())
        })
        .expect("replays should agree");
}

#[test]
fn restoring_a_snapshot_replays_the_same_future() {
    let mut runner = pinned_runner(16);
    runner
        .run(&(any::<u64>(), 1usize..200, 1usize..200), |(seed, head, tail)| {
            let intents = script(seed, head + tail);
            let (before, after) = intents.split_at(head);

            let mut world = World::new(PhysicsConfig::default(), boxed_tiles()).expect("world");
            replay(&mut world, before);
            let mark = world.snapshot();
            let first = replay(&mut world, after);
            let end = world.snapshot();

            world.restore(&mark);
            prop_assert_eq!(world.snapshot(), mark);
            let second = replay(&mut world, after);
            prop_assert_eq!(first, second);
            prop_assert_eq!(world.snapshot(), end);
            Ok(())
        })
        .expect("rollback should be exact");
}

#[test]
fn snapshot_carries_over_to_a_fresh_world() {
    let intents = script(0x5eed, 300);
    let (before, after) = intents.split_at(120);

    let mut source = World::new(PhysicsConfig::default(), pit_level()).expect("source");
    replay(&mut source, before);
    let mark = source.snapshot();
    let expected = replay(&mut source, after);

    let mut fresh = World::new(PhysicsConfig::default(), pit_level()).expect("fresh");
    fresh.restore(&mark);
    assert_eq!(fresh.tick(), mark.tick);
    assert_eq!(replay(&mut fresh, after), expected);
}

#[test]
fn digest_tracks_tick_and_state() {
    let mut world = World::new(PhysicsConfig::default(), slope_level()).expect("world");
    let genesis = world.digest();
    assert_eq!(genesis, world.digest(), "digest is a pure read");

    world.advance(ledge_core::Intent::idle());
    let idle = world.digest();
    assert_ne!(genesis, idle, "tick index is part of the digest");

    let mut other = World::new(PhysicsConfig::default(), slope_level()).expect("other");
    other.advance(common::walk(1));
    assert_ne!(other.digest(), idle, "diverging actors diverge digests");
}

#[test]
fn different_configs_diverge() {
    let intents = vec![common::walk(1); 60];
    let mut slow = World::new(PhysicsConfig::default(), slope_level()).expect("slow");
    let fast_config = PhysicsConfig {
        walk_speed: 96.0,
        run_speed: 160.0,
        ..PhysicsConfig::default()
    };
    let mut fast = World::new(fast_config, slope_level()).expect("fast");
    replay(&mut slow, &intents);
    replay(&mut fast, &intents);
    assert_eq!(slow.tick(), fast.tick());
    assert_ne!(slow.digest(), fast.digest());
}
