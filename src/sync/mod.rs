//! Synchronization and Concurrency Support
//!
//! The indirect access protocol permits exactly one in-flight access per
//! chip: the data slots and the page cache are shared mutable state scoped
//! to one [`Switch`](crate::Switch) handle. Within one thread `&mut self`
//! enforces that statically; when a handle must be shared across contexts
//! (main loop plus ISR, or multiple tasks), the caller needs a coarse lock
//! around every whole read/write call. This module provides that lock.
//!
//! - **Primitives** (`primitives`): Low-level synchronization types
//!   - [`CriticalSectionCell`] - critical-section protected interior mutability
//!
//! - **Shared Wrappers** (`shared`): serialized switch handles
//!   - [`SharedSwitch`] - closure-scoped exclusive access to a handle
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use roboswitch::sync::SharedSwitch;
//!
//! let shared = SharedSwitch::new(Switch::new(mdio, delay));
//!
//! shared.with(|switch| {
//!     switch.write16(0x00, 0x2c, 0x0083)
//! })?;
//! ```

// Primitives module (requires critical-section)
mod primitives;

pub use primitives::CriticalSectionCell;

// Shared wrappers (requires critical-section)
mod shared;

pub use shared::SharedSwitch;
