//! Switch device handle
//!
//! One [`Switch`] represents one physical chip bound to one MDIO bus. The
//! handle owns the bus and delay provider and carries the per-handle page
//! cache; everything register-shaped goes through the access methods in
//! [`super::access`].

use embedded_hal::delay::DelayNs;

use super::chip::ChipFamily;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::{MAX_PHY_ADDR, MdioBus};
use crate::internal::regs::{PSEUDO_PHY_ADDR, phy_id};

// =============================================================================
// Switch Handle
// =============================================================================

/// Handle for one switch chip on one MDIO bus
///
/// All register access is `&mut self`: the protocol allows exactly one
/// access in flight per chip, and the data-slot staging registers plus the
/// page cache are shared mutable state scoped to this handle. Distinct
/// handles (distinct chips on distinct buses) are fully independent and may
/// be driven from different threads.
///
/// The page cache starts out unknown, which forces the very first access to
/// issue a page select regardless of the requested page (including page 0).
///
/// # Example
///
/// ```ignore
/// use roboswitch::Switch;
///
/// let mut switch = Switch::new(mdio, delay);
/// let family = switch.detect_chip()?;
/// switch.reset();
/// let ports = switch.read16(0x00, 0x48)?;
/// ```
#[derive(Debug)]
pub struct Switch<B: MdioBus, D: DelayNs> {
    /// MDIO transport for all transactions of this chip
    pub(crate) bus: B,
    /// Delay provider for completion polling
    pub(crate) delay: D,
    /// Pseudo-PHY address the chip answers on
    pub(crate) pseudo_addr: u8,
    /// Last page confirmed selected on the bus, `None` until the first
    /// successful select after construction or reset
    pub(crate) current_page: Option<u8>,
}

impl<B: MdioBus, D: DelayNs> Switch<B, D> {
    /// Create a new handle on the standard pseudo-PHY address (0x1e)
    /// (const, suitable for static initialization)
    pub const fn new(bus: B, delay: D) -> Self {
        Self {
            bus,
            delay,
            pseudo_addr: PSEUDO_PHY_ADDR,
            current_page: None,
        }
    }

    /// Create a new handle on a non-standard pseudo-PHY address
    ///
    /// Some boards strap the pseudo-PHY to address 0 instead of 0x1e.
    /// Returns [`ConfigError::InvalidAddress`] if the address does not fit
    /// the 5-bit MDIO device field.
    pub fn with_address(bus: B, delay: D, pseudo_addr: u8) -> ConfigResult<Self> {
        if pseudo_addr > MAX_PHY_ADDR {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(Self {
            bus,
            delay,
            pseudo_addr,
            current_page: None,
        })
    }

    /// The pseudo-PHY address this handle talks to
    pub fn pseudo_address(&self) -> u8 {
        self.pseudo_addr
    }

    /// The page currently cached as selected, if any
    ///
    /// Diagnostic only. `None` means no page select has been confirmed
    /// since construction or the last [`reset`](Self::reset).
    pub fn cached_page(&self) -> Option<u8> {
        self.current_page
    }

    /// Identify the chip family from the pseudo-PHY identifier registers
    ///
    /// These are plain Clause 22 registers on the pseudo-PHY itself, so
    /// detection works before any indirect access has been performed.
    pub fn detect_chip(&mut self) -> Result<ChipFamily> {
        let id1 = self.bus.read(self.pseudo_addr, phy_id::PHYIDR1)?;
        let id2 = self.bus.read(self.pseudo_addr, phy_id::PHYIDR2)?;
        let phy_id = (u32::from(id1) << 16) | u32::from(id2);
        Ok(ChipFamily::from_phy_id(phy_id)?)
    }

    /// Reset the handle after an external device reset
    ///
    /// The device-model layer performs the actual switch reset through the
    /// register facade; afterwards the chip's page selection is unknown, so
    /// this drops the cached page and the next access re-selects.
    pub fn reset(&mut self) {
        self.invalidate_page_cache();
    }

    /// Drop the cached page so the next access issues a page select
    pub fn invalidate_page_cache(&mut self) {
        self.current_page = None;
    }

    /// Tear the handle down, returning the bus and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
