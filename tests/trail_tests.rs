// Host-side tests for the cursor trail queue.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod schedule {
    include!("../src/core/schedule.rs");
}
mod trail {
    include!("../src/core/trail.rs");
}

use constants::*;
use schedule::*;
use trail::*;

#[test]
fn trail_never_exceeds_capacity() {
    let mut t = Trail::default();
    for _ in 0..100 {
        t.spawn();
        assert!(t.len() <= TRAIL_CAPACITY);
    }
    assert_eq!(t.len(), 15);
}

#[test]
fn no_eviction_until_capacity_is_passed() {
    let mut t = Trail::default();
    for _ in 0..TRAIL_CAPACITY {
        assert_eq!(t.spawn().evicted, None);
    }
    assert!(t.spawn().evicted.is_some());
}

#[test]
fn eviction_removes_oldest_first() {
    let mut t = Trail::default();
    let ids: Vec<MarkerId> = (0..TRAIL_CAPACITY).map(|_| t.spawn().id).collect();

    let next = t.spawn();
    assert_eq!(next.evicted, Some(ids[0]));
    assert!(!t.contains(ids[0]));
    assert_eq!(t.oldest(), Some(ids[1]));

    let after = t.spawn();
    assert_eq!(after.evicted, Some(ids[1]));
}

#[test]
fn eviction_skips_markers_that_already_expired() {
    let mut t = Trail::with_capacity(3);
    let a = t.spawn().id;
    let b = t.spawn().id;
    let c = t.spawn().id;
    assert!(t.expire(b));

    assert_eq!(t.spawn().evicted, None);
    assert_eq!(t.spawn().evicted, Some(a));
    assert_eq!(t.spawn().evicted, Some(c));
}

#[test]
fn markers_expire_after_their_lifetime() {
    let mut t = Trail::default();
    let mut timeline = Timeline::new();
    let s = t.spawn();
    assert_eq!(s.expiry.delay_ms, TRAIL_LIFETIME_MS);
    timeline.schedule(s.expiry);

    assert!(timeline.advance(999).is_empty());
    assert_eq!(timeline.advance(1), vec![s.id]);
    assert!(t.expire(s.id));
    assert!(t.is_empty());
}

#[test]
fn late_expiry_of_evicted_marker_is_a_no_op() {
    let mut t = Trail::default();
    let mut timeline = Timeline::new();

    let first = t.spawn();
    timeline.schedule(first.expiry);
    for _ in 0..TRAIL_CAPACITY {
        timeline.schedule(t.spawn().expiry);
    }
    assert!(!t.contains(first.id));

    let fired = timeline.advance(u64::from(TRAIL_LIFETIME_MS));
    assert_eq!(fired.len(), TRAIL_CAPACITY + 1);
    assert_eq!(fired[0], first.id);

    let removed: Vec<bool> = fired.iter().map(|id| t.expire(*id)).collect();
    assert!(!removed[0], "evicted marker should already be gone");
    assert!(removed[1..].iter().all(|r| *r));
    assert!(t.is_empty());

    // A second expiry for the same marker changes nothing either.
    assert!(!t.expire(first.id));
}

#[test]
fn markers_spawned_apart_expire_in_creation_order() {
    let mut t = Trail::default();
    let mut timeline = Timeline::new();

    let a = t.spawn();
    timeline.schedule(a.expiry);
    assert!(timeline.advance(400).is_empty());
    let b = t.spawn();
    timeline.schedule(b.expiry);

    let due = timeline.advance(600);
    assert_eq!(due, vec![a.id]);
    for id in due {
        t.expire(id);
    }
    assert_eq!(t.len(), 1);
    assert_eq!(t.oldest(), Some(b.id));

    assert_eq!(timeline.advance(400), vec![b.id]);
}

#[test]
fn burst_of_moves_keeps_newest_markers() {
    let mut t = Trail::default();
    let ids: Vec<MarkerId> = (0..40).map(|_| t.spawn().id).collect();
    for id in &ids[..25] {
        assert!(!t.contains(*id));
    }
    for id in &ids[25..] {
        assert!(t.contains(*id));
    }
}
