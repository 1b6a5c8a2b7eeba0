//! Lock state Unit Tests.
//!
//! Verifies acquisition, retention, and every release condition of the lock transition.

use memops_core::common::Segment;
use memops_core::core::units::lsu::lock::{LockInputs, LockState};

fn requested(active: Option<Segment>, issued: Option<Segment>) -> LockInputs {
    LockInputs {
        requested: true,
        active,
        issued,
        fault: false,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Acquire and hold
// ══════════════════════════════════════════════════════════

#[test]
fn acquired_on_active_segment() {
    for segment in [Segment::Global, Segment::Local] {
        let next = LockState::Unlocked.next(true, &requested(Some(segment), None));
        assert_eq!(next, LockState::Held(segment));
    }
}

#[test]
fn not_acquired_while_idle() {
    let next = LockState::Unlocked.next(true, &requested(None, Some(Segment::Global)));
    assert_eq!(next, LockState::Unlocked);
}

#[test]
fn held_across_idle_gap() {
    let held = LockState::Held(Segment::Global);
    assert_eq!(held.next(true, &requested(None, None)), held);
}

#[test]
fn held_when_issuing_to_same_segment() {
    let held = LockState::Held(Segment::Local);
    assert_eq!(held.next(true, &requested(None, Some(Segment::Local))), held);
}

// ══════════════════════════════════════════════════════════
// 2. Release
// ══════════════════════════════════════════════════════════

#[test]
fn released_when_request_drops() {
    let inputs = LockInputs {
        requested: false,
        ..requested(Some(Segment::Global), None)
    };
    assert_eq!(
        LockState::Held(Segment::Global).next(true, &inputs),
        LockState::Unlocked
    );
}

#[test]
fn released_on_fault() {
    let inputs = LockInputs {
        fault: true,
        ..requested(Some(Segment::Global), None)
    };
    assert_eq!(
        LockState::Held(Segment::Global).next(true, &inputs),
        LockState::Unlocked
    );
}

#[test]
fn released_by_opposite_segment_request() {
    for segment in [Segment::Global, Segment::Local] {
        let inputs = requested(None, Some(segment.opposite()));
        assert_eq!(
            LockState::Held(segment).next(true, &inputs),
            LockState::Unlocked
        );
    }
}

#[test]
fn inert_when_disabled() {
    let held = LockState::Held(Segment::Global);
    assert_eq!(
        held.next(false, &requested(Some(Segment::Global), None)),
        LockState::Unlocked
    );
}

// ══════════════════════════════════════════════════════════
// 3. Claims
// ══════════════════════════════════════════════════════════

#[test]
fn claims_follow_active_or_held_segment() {
    assert!(LockState::Unlocked.claims(Segment::Local, Some(Segment::Local)));
    assert!(!LockState::Unlocked.claims(Segment::Global, Some(Segment::Local)));
    assert!(LockState::Held(Segment::Global).claims(Segment::Global, None));
    assert!(!LockState::Held(Segment::Global).claims(Segment::Local, None));
    assert!(!LockState::Unlocked.claims(Segment::Global, None));
}
