//! Internal constants
//!
//! Centralized timing and protocol bounds. Public values are re-exported
//! through [`crate::constants`].

/// Maximum completion-poll iterations per access
///
/// The access fails with a timeout if the opcode bits are still set after
/// this many polls of the address register.
pub const OP_POLL_ATTEMPTS: u32 = 5;

/// Delay between completion polls in microseconds
pub const OP_POLL_INTERVAL_US: u32 = 10;
