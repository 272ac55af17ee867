//! RoboSwitch Register Access Driver
//!
//! A `no_std`, `no_alloc` Rust driver for indirect register access to
//! RoboSwitch (BCM53xx) multi-port Ethernet switch ASICs over MDIO.
//!
//! The switch exposes 8/16/32/48/64-bit registers across 256 logical pages,
//! but the MDIO management bus can only move 16 bits at a time through a
//! 5-bit register field on a fixed pseudo-PHY address. This crate
//! synthesizes wide, paged register access out of narrow bus transactions:
//! page selection (with per-handle caching), opcode-triggered operations
//! with bounded completion polling, and value splitting/reassembly across
//! the four 16-bit data slots.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Switch Layer** ([`switch`]): Device handle, indirect access
//!    protocol, chip identification, link personality
//! 2. **HAL Layer** ([`hal`]): The [`MdioBus`] transport boundary
//! 3. **Sync Layer** ([`sync`], optional): Critical-section serialized
//!    handle sharing
//!
//! # Supported Chips
//!
//! - BCM5325 / BCM539x (Fast Ethernet)
//! - BCM5365 (Fast Ethernet)
//! - BCM53125 / BCM53128 (Gigabit)
//!
//! All of these speak the same pseudo-PHY access protocol; the family only
//! decides the fabricated link personality.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for error and status types
//! - `critical-section`: Enable the [`sync`] module with [`SharedSwitch`]
//!
//! # Example
//!
//! ```ignore
//! use roboswitch::{MdioBus, Switch};
//! use embedded_hal::delay::DelayNs;
//!
//! // Your MDIO and delay implementations (from your MAC driver / HAL)
//! let mut switch = Switch::new(mdio, delay);
//!
//! // Identify the chip behind the pseudo-PHY
//! let family = switch.detect_chip()?;
//! let link = family.link_status();
//!
//! // Paged register access at any width
//! let port_ctrl: u8 = switch.read8(0x00, 0x01)?;
//! switch.write16(0x00, 0x2c, 0x0083)?;
//! let mib_counter: u64 = switch.read64(0x20, 0x50)?;
//! ```
//!
//! # Concurrency
//!
//! One access is in flight per handle at a time; `&mut self` on every
//! operation enforces that. Distinct handles on distinct buses are fully
//! independent. To share one handle across contexts, wrap it in
//! [`SharedSwitch`] (requires the `critical-section` feature) or an
//! equivalent external lock held across each whole call.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod hal;
pub mod switch;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AccessError, BusError, BusResult, ConfigError, ConfigResult, Error, Result};
pub use hal::mdio::MdioBus;
pub use switch::chip::{ChipFamily, PHY_ID_FAMILY_MASK};
pub use switch::device::Switch;
pub use switch::link::{Duplex, LinkStatus, Speed};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedSwitch;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::hal::mdio::{MAX_PHY_ADDR, MAX_REG_ADDR};
    pub use crate::internal::constants::{OP_POLL_ATTEMPTS, OP_POLL_INTERVAL_US};
    pub use crate::internal::regs::{PSEUDO_PHY_ADDR, PSEUDO_PHY_ADDR_ALT};
}
