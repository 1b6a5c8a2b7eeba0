//! Property checker Unit Tests.
//!
//! Feeds hand-built interface waveforms to the checker and verifies that each invariant
//! is reported on the tick it breaks.

use memops_core::common::{PropertyViolation, Segment};
use memops_core::core::monitor::PropertyChecker;
use memops_core::core::pipeline::signals::{BusRequest, BusResponse, StatusOutputs, TickOutputs};

fn idle() -> TickOutputs {
    TickOutputs::default()
}

fn strobing(segment: Segment) -> TickOutputs {
    let global = segment == Segment::Global;
    TickOutputs {
        bus: BusRequest {
            claim_global: global,
            claim_local: !global,
            strobe_global: global,
            strobe_local: !global,
            ..BusRequest::default()
        },
        status: StatusOutputs {
            busy: true,
            read_busy: true,
            ..StatusOutputs::default()
        },
    }
}

fn waiting(segment: Segment) -> TickOutputs {
    let mut out = strobing(segment);
    out.bus.strobe_global = false;
    out.bus.strobe_local = false;
    out
}

fn read_valid() -> TickOutputs {
    TickOutputs {
        status: StatusOutputs {
            valid: true,
            read_busy: true,
            ..StatusOutputs::default()
        },
        ..TickOutputs::default()
    }
}

/// Runs `waveform` through a fresh checker and returns the first violation.
fn first_violation(waveform: &[(TickOutputs, BusResponse)]) -> Option<PropertyViolation> {
    let mut checker = PropertyChecker::new();
    waveform
        .iter()
        .find_map(|(out, resp)| checker.check(out, resp).err())
}

// ══════════════════════════════════════════════════════════
// 1. Legal waveforms
// ══════════════════════════════════════════════════════════

#[test]
fn read_with_stall_and_latency_passes() {
    let waveform = [
        (idle(), BusResponse::IDLE),
        (strobing(Segment::Local), BusResponse::STALL),
        (strobing(Segment::Local), BusResponse::IDLE),
        (waiting(Segment::Local), BusResponse::ack(5)),
        (read_valid(), BusResponse::IDLE),
        (idle(), BusResponse::IDLE),
    ];
    assert_eq!(first_violation(&waveform), None);
}

#[test]
fn ticks_are_counted() {
    let mut checker = PropertyChecker::new();
    for _ in 0..4 {
        assert!(checker.check(&idle(), &BusResponse::IDLE).is_ok());
    }
    assert_eq!(checker.ticks(), 4);
}

// ══════════════════════════════════════════════════════════
// 2. Single-tick invariants
// ══════════════════════════════════════════════════════════

#[test]
fn both_claims_rejected() {
    let mut out = waiting(Segment::Global);
    out.bus.claim_local = true;
    assert_eq!(
        first_violation(&[(idle(), BusResponse::IDLE), (out, BusResponse::IDLE)]),
        Some(PropertyViolation::BothSegmentsClaimed { tick: 1 })
    );
}

#[test]
fn strobe_without_claim_rejected() {
    let mut out = strobing(Segment::Local);
    out.bus.claim_local = false;
    out.bus.claim_global = true;
    assert_eq!(
        first_violation(&[(out, BusResponse::IDLE)]),
        Some(PropertyViolation::StrobeWithoutClaim {
            tick: 0,
            segment: Segment::Local
        })
    );
}

#[test]
fn valid_and_error_together_rejected() {
    let mut out = read_valid();
    out.status.error = true;
    assert_eq!(
        first_violation(&[(out, BusResponse::IDLE)]),
        Some(PropertyViolation::ValidAndError { tick: 0 })
    );
}

#[test]
fn pulse_while_busy_rejected() {
    let mut out = strobing(Segment::Global);
    out.status.error = true;
    assert_eq!(
        first_violation(&[(out, BusResponse::IDLE)]),
        Some(PropertyViolation::PulseWhileBusy { tick: 0 })
    );
}

#[test]
fn busy_without_claim_rejected() {
    let out = TickOutputs {
        status: StatusOutputs {
            busy: true,
            ..StatusOutputs::default()
        },
        ..TickOutputs::default()
    };
    assert_eq!(
        first_violation(&[(out, BusResponse::IDLE)]),
        Some(PropertyViolation::BusyWithoutClaim { tick: 0 })
    );
}

#[test]
fn valid_without_read_busy_rejected() {
    let mut out = read_valid();
    out.status.read_busy = false;
    assert_eq!(
        first_violation(&[(out, BusResponse::IDLE)]),
        Some(PropertyViolation::ValidWithoutReadBusy { tick: 0 })
    );
}

// ══════════════════════════════════════════════════════════
// 3. Cross-tick invariants
// ══════════════════════════════════════════════════════════

#[test]
fn valid_without_ack_rejected() {
    let waveform = [
        (waiting(Segment::Global), BusResponse::IDLE),
        (read_valid(), BusResponse::IDLE),
    ];
    assert_eq!(
        first_violation(&waveform),
        Some(PropertyViolation::SpuriousValid { tick: 1 })
    );
}

#[test]
fn valid_after_write_ack_rejected() {
    let mut write = waiting(Segment::Global);
    write.bus.write = true;
    let waveform = [(write, BusResponse::ack(0)), (read_valid(), BusResponse::IDLE)];
    assert_eq!(
        first_violation(&waveform),
        Some(PropertyViolation::SpuriousValid { tick: 1 })
    );
}

#[test]
fn valid_on_first_tick_rejected() {
    assert_eq!(
        first_violation(&[(read_valid(), BusResponse::IDLE)]),
        Some(PropertyViolation::SpuriousValid { tick: 0 })
    );
}

#[test]
fn stalled_strobe_dropped_rejected() {
    let waveform = [
        (strobing(Segment::Global), BusResponse::STALL),
        (waiting(Segment::Global), BusResponse::IDLE),
    ];
    assert_eq!(
        first_violation(&waveform),
        Some(PropertyViolation::StrobeDropped {
            tick: 1,
            segment: Segment::Global
        })
    );
}

#[test]
fn reset_forgets_history() {
    let mut checker = PropertyChecker::new();
    assert!(
        checker
            .check(&strobing(Segment::Global), &BusResponse::STALL)
            .is_ok()
    );
    checker.reset();
    assert!(checker.check(&idle(), &BusResponse::IDLE).is_ok());
}
