//! Randomized request streams.
//!
//! Drives the simulator with arbitrary requests, lock levels, and responder timings, and
//! relies on the property checker to reject any tick that breaks an interface invariant.

use memops_core::common::AccessWidth;
use memops_core::config::{Config, ControllerConfig};
use memops_core::core::pipeline::signals::{MemoryRequest, RequesterInputs};
use memops_core::soc::memory::SegmentMemory;
use memops_core::soc::memory::controller::{AccessTiming, ScriptedController};
use memops_core::{Simulator, System};
use proptest::prelude::*;

const MEMORY_SIZE: u32 = 0x1000;
const LOCAL_BASE: u32 = 0xFF00_0000;

fn timing() -> impl Strategy<Value = AccessTiming> {
    (0u64..4, 0u64..4).prop_map(|(stall, latency)| AccessTiming { stall, latency })
}

fn addr() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0..MEMORY_SIZE,
        4 => (0..MEMORY_SIZE).prop_map(|a| LOCAL_BASE + a),
        1 => Just(0x0010_0000u32),
        1 => Just(LOCAL_BASE + 0x0080_0000),
    ]
}

fn request() -> impl Strategy<Value = Option<MemoryRequest>> {
    let width = prop_oneof![
        Just(AccessWidth::Byte),
        Just(AccessWidth::Half),
        Just(AccessWidth::Word),
    ];
    proptest::option::weighted(
        0.5,
        (width, any::<bool>(), addr(), any::<u32>(), any::<u8>()).prop_map(
            |(width, write, addr, data, tag)| {
                if write {
                    MemoryRequest::write(width, addr, data, tag)
                } else {
                    MemoryRequest::read(width, addr, tag)
                }
            },
        ),
    )
}

fn inputs() -> impl Strategy<Value = RequesterInputs> {
    (request(), any::<bool>()).prop_map(|(request, lock)| RequesterInputs { request, lock })
}

fn controller() -> impl Strategy<Value = ControllerConfig> {
    (any::<[bool; 6]>()).prop_map(|t| ControllerConfig {
        enable_local_segment: t[0],
        enable_lock: t[1],
        enable_alignment_check: t[2],
        zero_result_on_idle: t[3],
        little_endian: t[4],
        zero_fill_lanes: t[5],
        ..ControllerConfig::default()
    })
}

fn memory(name: &str, base: u32, script: Vec<AccessTiming>) -> Box<SegmentMemory> {
    let timing = ScriptedController::new(script, AccessTiming::default());
    Box::new(SegmentMemory::new(name, base, MEMORY_SIZE, Box::new(timing)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_streams_keep_interface_properties(
        controller in controller(),
        global in proptest::collection::vec(timing(), 0..16),
        local in proptest::collection::vec(timing(), 0..16),
        stream in proptest::collection::vec(inputs(), 1..200),
    ) {
        let config = Config { controller, ..Config::default() };
        let system = System::with_responders(
            memory("SRAM0", 0, global),
            memory("LRAM0", LOCAL_BASE, local),
        );
        let mut sim = Simulator::new(system, &config).with_property_checks();

        for inputs in &stream {
            let out = sim.tick(inputs);
            prop_assert!(out.is_ok(), "{:?}", out);
        }
        for _ in 0..16 {
            let out = sim.tick(&RequesterInputs::IDLE);
            prop_assert!(out.is_ok(), "{:?}", out);
        }
        prop_assert!(!sim.controller.is_busy());
        prop_assert_eq!(sim.outputs().bus.claim(), None);
    }
}
