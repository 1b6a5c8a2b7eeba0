//! Configuration system for the bus controller model.
//!
//! This module defines all configuration structures used to parameterize the model. It provides:
//! 1. **Defaults:** Baseline build options of the controller and the model memories.
//! 2. **Structures:** Controller options (feature toggles, byte order) and system layout.
//! 3. **Validation:** Rejection of memory layouts the two-segment decode cannot reach.
//!
//! Configuration is resolved once before operation begins. Use `Config::default()` or
//! parse JSON with [`Config::from_json`].

use serde::Deserialize;
use thiserror::Error;

use crate::common::Segment;
use crate::common::constants::{BYTE_OFFSET_MASK, LOCAL_APERTURE, TOP_BYTE_SHIFT};
use crate::common::data::Endianness;

/// Default configuration constants.
///
/// These values define the baseline build of the controller when not explicitly
/// overridden.
mod defaults {
    /// Local-bus decoding is built in.
    pub const ENABLE_LOCAL_SEGMENT: bool = true;

    /// Bus locking is built in.
    pub const ENABLE_LOCK: bool = true;

    /// Misaligned requests are rejected.
    pub const ENABLE_ALIGNMENT_CHECK: bool = true;

    /// The result register follows the read data bus between completions.
    pub const ZERO_RESULT_ON_IDLE: bool = false;

    /// Big-endian lane ordering.
    pub const LITTLE_ENDIAN: bool = false;

    /// Unused write lanes carry duplicated payload.
    pub const ZERO_FILL_LANES: bool = false;

    /// Base of the global model memory.
    pub const GLOBAL_BASE: u32 = 0x0000_0000;

    /// Size of the global model memory (64 KiB).
    pub const GLOBAL_SIZE: u32 = 64 * 1024;

    /// Base of the local model memory, at the start of the aperture.
    pub const LOCAL_BASE: u32 = (super::LOCAL_APERTURE as u32) << super::TOP_BYTE_SHIFT;

    /// Size of the local model memory (4 KiB).
    pub const LOCAL_SIZE: u32 = 4 * 1024;

    /// Ticks from acceptance to acknowledgement.
    pub const LATENCY: u64 = 1;

    /// Ticks a strobe is stalled before the responder accepts it.
    pub const STALL_CYCLES: u64 = 0;
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a [`Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A segment memory has zero size.
    #[error("{0} memory has zero size")]
    EmptySegment(Segment),

    /// A segment memory base or size is not a whole number of bus words.
    #[error("{0} memory is not word aligned")]
    UnalignedSegment(Segment),

    /// A segment memory extends past the end of the address space.
    #[error("{0} memory wraps the address space")]
    SegmentWraps(Segment),

    /// The global and local memories share addresses.
    #[error("global and local memories overlap")]
    OverlappingSegments,

    /// The local memory lies outside the local aperture, so no request can reach it.
    #[error("local memory at {base:#010x} is outside aperture {aperture:#04x}")]
    LocalOutsideAperture {
        /// Configured local memory base.
        base: u32,
        /// Configured aperture marker.
        aperture: u8,
    },
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use memops_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.controller.enable_lock);
/// assert_eq!(config.controller.local_aperture, 0xFF);
/// ```
///
/// Loading from JSON, with omitted fields taking their defaults:
///
/// ```
/// use memops_core::config::Config;
///
/// let json = r#"{
///     "controller": { "little_endian": true, "zero_result_on_idle": true },
///     "system": { "latency": 3, "stall_cycles": 2 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.controller.little_endian);
/// assert!(config.controller.enable_alignment_check);
/// assert_eq!(config.system.latency, 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Controller build options
    #[serde(default)]
    pub controller: ControllerConfig,
    /// Model memories attached to each segment
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error of
    /// [`Config::validate`] for an unreachable memory layout.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both model memories are non-empty, word aligned, disjoint, and reachable.
    ///
    /// # Errors
    ///
    /// Returns the first layout problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sys = &self.system;
        let windows = [
            (Segment::Global, sys.global_base, sys.global_size),
            (Segment::Local, sys.local_base, sys.local_size),
        ];
        for (segment, base, size) in windows {
            if size == 0 {
                return Err(ConfigError::EmptySegment(segment));
            }
            if (base | size) & BYTE_OFFSET_MASK != 0 {
                return Err(ConfigError::UnalignedSegment(segment));
            }
            if base.checked_add(size - 1).is_none() {
                return Err(ConfigError::SegmentWraps(segment));
            }
        }

        let global_end = u64::from(sys.global_base) + u64::from(sys.global_size);
        let local_end = u64::from(sys.local_base) + u64::from(sys.local_size);
        if u64::from(sys.global_base) < local_end && u64::from(sys.local_base) < global_end {
            return Err(ConfigError::OverlappingSegments);
        }

        let aperture = self.controller.local_aperture;
        if self.controller.enable_local_segment
            && (sys.local_base >> TOP_BYTE_SHIFT) as u8 != aperture
        {
            return Err(ConfigError::LocalOutsideAperture {
                base: sys.local_base,
                aperture,
            });
        }
        Ok(())
    }
}

/// Controller build options.
///
/// The five feature toggles plus lane fill and the aperture marker. Options are fixed for
/// the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Decode the local aperture to the local segment
    pub enable_local_segment: bool,

    /// Honour the requester's lock across consecutive transactions
    pub enable_lock: bool,

    /// Reject misaligned halfword and word requests
    pub enable_alignment_check: bool,

    /// Force the result register to zero on ticks without an acknowledgement
    pub zero_result_on_idle: bool,

    /// Map the lowest address to data bits 7:0 instead of 31:24
    pub little_endian: bool,

    /// Zero unused write lanes and idle bus fields instead of duplicating payload
    pub zero_fill_lanes: bool,

    /// Top address byte that selects the local segment
    pub local_aperture: u8,
}

impl ControllerConfig {
    /// Returns the configured lane ordering.
    pub const fn endianness(&self) -> Endianness {
        if self.little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enable_local_segment: defaults::ENABLE_LOCAL_SEGMENT,
            enable_lock: defaults::ENABLE_LOCK,
            enable_alignment_check: defaults::ENABLE_ALIGNMENT_CHECK,
            zero_result_on_idle: defaults::ZERO_RESULT_ON_IDLE,
            little_endian: defaults::LITTLE_ENDIAN,
            zero_fill_lanes: defaults::ZERO_FILL_LANES,
            local_aperture: LOCAL_APERTURE,
        }
    }
}

/// Layout and timing of the model memories behind each segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Global memory base address
    pub global_base: u32,

    /// Global memory size in bytes
    pub global_size: u32,

    /// Local memory base address
    pub local_base: u32,

    /// Local memory size in bytes
    pub local_size: u32,

    /// Ticks from strobe acceptance to acknowledgement
    pub latency: u64,

    /// Ticks each strobe is stalled before acceptance
    pub stall_cycles: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            global_base: defaults::GLOBAL_BASE,
            global_size: defaults::GLOBAL_SIZE,
            local_base: defaults::LOCAL_BASE,
            local_size: defaults::LOCAL_SIZE,
            latency: defaults::LATENCY,
            stall_cycles: defaults::STALL_CYCLES,
        }
    }
}
