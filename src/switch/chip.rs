//! Switch family identification
//!
//! RoboSwitch chips answer on the pseudo-PHY with a standard IEEE 802.3
//! identifier. The family is all the device-model layer needs from this
//! crate: it picks the capability table and the fabricated link speed.

use super::link::LinkStatus;
use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Known PHY Identifiers
// =============================================================================

/// Pseudo-PHY identifier of the BCM5325 and BCM539x family
pub const BCM5325_PHY_ID: u32 = 0x0143_bc00;

/// Pseudo-PHY identifier of the BCM5365
pub const BCM5365_PHY_ID: u32 = 0x0040_6000;

/// Pseudo-PHY identifier of the BCM53125 and BCM53128 family
pub const BCM53125_PHY_ID: u32 = 0x0362_5c00;

/// Mask applied to the composed identifier before family matching
/// (revision and low model bits vary within a family)
pub const PHY_ID_FAMILY_MASK: u32 = 0x1fff_fc00;

// =============================================================================
// Chip Family
// =============================================================================

/// Switch chip family, as identified from the pseudo-PHY id registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipFamily {
    /// BCM5325 / BCM539x (Fast Ethernet)
    Bcm5325,
    /// BCM5365 (Fast Ethernet)
    Bcm5365,
    /// BCM53125 / BCM53128 (Gigabit)
    Bcm53125,
}

impl ChipFamily {
    /// Match a composed 32-bit PHY identifier (`(id1 << 16) | id2`) against
    /// the known families.
    pub const fn from_phy_id(phy_id: u32) -> ConfigResult<Self> {
        match phy_id & PHY_ID_FAMILY_MASK {
            BCM5325_PHY_ID => Ok(ChipFamily::Bcm5325),
            BCM5365_PHY_ID => Ok(ChipFamily::Bcm5365),
            BCM53125_PHY_ID => Ok(ChipFamily::Bcm53125),
            _ => Err(ConfigError::UnknownChip),
        }
    }

    /// Returns the family name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ChipFamily::Bcm5325 => "BCM5325/BCM539x",
            ChipFamily::Bcm5365 => "BCM5365",
            ChipFamily::Bcm53125 => "BCM53125/BCM53128",
        }
    }

    /// Whether the family is Fast Ethernet only (no gigabit ports)
    pub const fn is_fast_ethernet(self) -> bool {
        matches!(self, ChipFamily::Bcm5325 | ChipFamily::Bcm5365)
    }

    /// Fabricated link status reported to the host stack for this family
    ///
    /// The management port has no negotiation; the link is always up, full
    /// duplex, at the family's top speed.
    pub const fn link_status(self) -> LinkStatus {
        if self.is_fast_ethernet() {
            LinkStatus::fast_full()
        } else {
            LinkStatus::gigabit_full()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
