//! Core switch components
//!
//! This module contains the essential building blocks for talking to the
//! switch through its pseudo-PHY:
//!
//! - [`device`] - The [`Switch`] handle: construction, lifecycle, page cache
//! - [`access`] - The indirect register access protocol (paged, 8..64-bit)
//! - [`chip`] - Switch family identification
//! - [`link`] - Link personality types reported to the host stack
//!
//! # Example
//!
//! ```ignore
//! use roboswitch::{MdioBus, Switch};
//!
//! let mut switch = Switch::new(mdio, delay);
//! let port_state = switch.read16(0x01, 0x00)?;
//! ```

// Submodules
pub mod access;
pub mod chip;
pub mod device;
pub mod link;

// Re-exports for convenience
pub use chip::{ChipFamily, PHY_ID_FAMILY_MASK};
pub use device::Switch;
pub use link::{Duplex, LinkStatus, Speed};
