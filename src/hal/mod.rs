//! Hardware Abstraction Layer
//!
//! This module defines the bus boundary the driver sits on. The driver never
//! touches hardware itself; it consumes an [`mdio::MdioBus`] implementation
//! provided by the host MAC's management interface.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait for 16-bit management-register transactions
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL (e.g., `esp_hal::delay::Delay`).

pub mod mdio;

// Re-export commonly used types
pub use mdio::MdioBus;
