//! Error types for the RoboSwitch driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: The underlying MDIO transaction itself failed
//! - [`AccessError`]: The bus worked but the indirect access protocol failed
//! - [`ConfigError`]: Construction and chip detection failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.
//!
//! The distinction between [`BusError`] and [`AccessError::Timeout`] matters
//! to callers: a bus error means a transaction never happened, while a
//! timeout means every transaction succeeded but the switch never cleared
//! the pending opcode bits within the bounded poll window.

// =============================================================================
// Bus Errors
// =============================================================================

/// MDIO transport errors
///
/// Raised by [`MdioBus`](crate::hal::mdio::MdioBus) implementations when a
/// single 16-bit bus transaction fails. The driver never retries these; they
/// abort the whole access and propagate verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge the transaction
    NoAck,
    /// Bus-level fault (electrical, arbitration, controller error)
    Fault,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::NoAck => "no acknowledge from device",
            BusError::Fault => "bus fault",
        }
    }
}

// =============================================================================
// Access Errors
// =============================================================================

/// Indirect access protocol errors
///
/// These errors mean the management bus itself is healthy but the switch
/// did not complete the requested register operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessError {
    /// The switch never cleared the pending opcode bits within the
    /// bounded poll window
    Timeout,
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AccessError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessError::Timeout => "operation completion timed out",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Construction and chip detection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pseudo-PHY address outside the 5-bit MDIO range
    InvalidAddress,
    /// The pseudo-PHY identifier does not match any known switch family
    UnknownChip,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidAddress => "invalid pseudo-PHY address",
            ConfigError::UnknownChip => "unknown switch chip",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Bus(BusError::NoAck)) => { /* ... */ }
///     Err(Error::Access(AccessError::Timeout)) => { /* ... */ }
///     Err(Error::Config(ConfigError::UnknownChip)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// MDIO transport error
    Bus(BusError),
    /// Indirect access protocol error
    Access(AccessError),
    /// Configuration error
    Config(ConfigError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::Access(e) => write!(f, "access: {}", e.as_str()),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<AccessError> for Error {
    fn from(e: AccessError) -> Self {
        Error::Access(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Result type alias for switch operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for raw bus transactions
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
