//! Model memory Unit Tests.
//!
//! Verifies the stall and latency handshake, byte-enable writes, and window checks.

use memops_core::core::pipeline::signals::{BusRequest, BusResponse};
use memops_core::soc::memory::SegmentMemory;
use memops_core::soc::memory::controller::{AccessTiming, ScriptedController, SimpleController};
use memops_core::soc::traits::Responder;

const BASE: u32 = 0x1000;

fn memory(stall: u64, latency: u64) -> SegmentMemory {
    SegmentMemory::new("SRAM0", BASE, 0x100, Box::new(SimpleController::new(stall, latency)))
}

fn strobe(addr: u32) -> BusRequest {
    BusRequest {
        claim_global: true,
        strobe_global: true,
        addr,
        sel: 0b1111,
        ..BusRequest::default()
    }
}

fn write(addr: u32, data: u32, sel: u8) -> BusRequest {
    BusRequest {
        write: true,
        data,
        sel,
        ..strobe(addr)
    }
}

fn waiting(req: BusRequest) -> BusRequest {
    BusRequest {
        strobe_global: false,
        ..req
    }
}

// ══════════════════════════════════════════════════════════
// 1. Handshake timing
// ══════════════════════════════════════════════════════════

#[test]
fn zero_latency_acks_on_accept() {
    let mut mem = memory(0, 0);
    assert!(mem.poke(BASE, 0xCAFE_F00D));
    assert_eq!(mem.respond(&strobe(BASE)), BusResponse::ack(0xCAFE_F00D));
}

#[test]
fn latency_delays_ack() {
    let mut mem = memory(0, 2);
    assert!(mem.poke(BASE + 4, 7));
    assert_eq!(mem.respond(&strobe(BASE + 4)), BusResponse::IDLE);
    assert_eq!(mem.respond(&waiting(strobe(BASE + 4))), BusResponse::IDLE);
    assert_eq!(mem.respond(&waiting(strobe(BASE + 4))), BusResponse::ack(7));
    assert_eq!(mem.respond(&waiting(strobe(BASE + 4))), BusResponse::IDLE);
}

#[test]
fn stall_holds_strobe_before_accept() {
    let mut mem = memory(2, 0);
    assert_eq!(mem.respond(&strobe(BASE)), BusResponse::STALL);
    assert_eq!(mem.respond(&strobe(BASE)), BusResponse::STALL);
    assert_eq!(mem.respond(&strobe(BASE)), BusResponse::ack(0));
}

#[test]
fn scripted_timing_applies_per_access() {
    let script = [AccessTiming {
        stall: 1,
        latency: 0,
    }];
    let timing = ScriptedController::new(script, AccessTiming::default());
    let mut mem = SegmentMemory::new("SRAM0", BASE, 0x100, Box::new(timing));

    assert_eq!(mem.respond(&strobe(BASE)), BusResponse::STALL);
    assert!(mem.respond(&strobe(BASE)).ack);
    assert!(mem.respond(&strobe(BASE)).ack);
}

#[test]
fn dropped_claim_abandons_access() {
    let mut mem = memory(0, 3);
    let _ = mem.respond(&strobe(BASE));
    let _ = mem.respond(&BusRequest::default());
    for _ in 0..4 {
        assert_eq!(mem.respond(&waiting(strobe(BASE))), BusResponse::IDLE);
    }
}

#[test]
fn reset_abandons_access() {
    let mut mem = memory(0, 1);
    let _ = mem.respond(&strobe(BASE));
    mem.reset();
    assert_eq!(mem.respond(&waiting(strobe(BASE))), BusResponse::IDLE);
}

// ══════════════════════════════════════════════════════════
// 2. Storage
// ══════════════════════════════════════════════════════════

#[test]
fn byte_enables_limit_write() {
    let mut mem = memory(0, 0);
    assert!(mem.poke(BASE, 0x1122_3344));
    assert!(mem.respond(&write(BASE, 0xAAAA_AAAA, 0b0100)).ack);
    assert_eq!(mem.peek(BASE), Some(0x11AA_3344));
    assert!(mem.respond(&write(BASE, 0xBBBB_BBBB, 0b0011)).ack);
    assert_eq!(mem.peek(BASE), Some(0x11AA_BBBB));
}

#[test]
fn out_of_window_is_bus_error() {
    let mut mem = memory(0, 0);
    assert_eq!(mem.respond(&strobe(BASE - 4)), BusResponse::ERR);
    assert_eq!(mem.respond(&strobe(BASE + 0x100)), BusResponse::ERR);
    assert!(!mem.poke(BASE + 0x100, 1));
    assert_eq!(mem.peek(BASE + 0x100), None);
}

#[test]
fn error_respects_latency() {
    let mut mem = memory(0, 1);
    assert_eq!(mem.respond(&strobe(0)), BusResponse::IDLE);
    assert_eq!(mem.respond(&waiting(strobe(0))), BusResponse::ERR);
}

#[test]
fn exposes_name_and_size() {
    let mut mem = memory(0, 0);
    assert_eq!(mem.name(), "SRAM0");
    assert_eq!(mem.size(), 0x100);
    assert!(mem.as_memory_mut().is_some());
}
