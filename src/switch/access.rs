//! Indirect register access protocol
//!
//! The switch's real register space is 8/16/32/48/64-bit registers spread
//! over 256 logical pages, far more than the 5-bit MDIO register field can
//! address. Every access is therefore synthesized from narrow transactions
//! against the pseudo-PHY:
//!
//! 1. Select the target page (skipped when the cached page already matches)
//! 2. Write the register number plus a read/write opcode bit to the
//!    address register, which triggers the operation
//! 3. Poll the address register until the opcode bits clear, bounded
//! 4. Exchange the wide value through the four 16-bit data slots,
//!    low-order slot first
//!
//! For writes the data slots are fully staged *before* step 2, so the
//! switch never sees a write trigger for partially staged data. For reads
//! the slots are drained only after step 3 confirms completion.
//!
//! There is no partial-completion recovery: any failure surfaces as a
//! whole-operation failure and the caller decides whether to retry from
//! scratch. The page cache reflects only confirmed selects, so a retry
//! after a failed select re-issues it.

use embedded_hal::delay::DelayNs;

use super::device::Switch;
use crate::error::{AccessError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::constants::{OP_POLL_ATTEMPTS, OP_POLL_INTERVAL_US};
use crate::internal::regs::{ADDR_OP_READ, ADDR_OP_WRITE, PAGE_ENABLE, mii};

// =============================================================================
// Opcode
// =============================================================================

/// Access direction, encoded as one of two mutually exclusive bits in the
/// address word. The switch clears the bit once the operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Opcode {
    /// Latch the addressed register into the data slots
    Read,
    /// Commit the staged data slots to the addressed register
    Write,
}

impl Opcode {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            Opcode::Read => ADDR_OP_READ,
            Opcode::Write => ADDR_OP_WRITE,
        }
    }
}

// =============================================================================
// Operation Sequencer
// =============================================================================

impl<B: MdioBus, D: DelayNs> Switch<B, D> {
    /// Make `page` the selected page, eliding the bus write when the cache
    /// already matches.
    ///
    /// The cache is updated only after the select succeeds on the bus; a
    /// transport failure leaves it untouched so a retried access re-selects
    /// instead of assuming the select happened.
    fn select_page(&mut self, page: u8) -> Result<()> {
        if self.current_page == Some(page) {
            return Ok(());
        }

        let word = (u16::from(page) << 8) | PAGE_ENABLE;
        self.bus.write(self.pseudo_addr, mii::PAGE, word)?;
        self.current_page = Some(page);
        Ok(())
    }

    /// Trigger one register operation and wait for the switch to finish it.
    ///
    /// On success the data slots are ready for the caller's next step:
    /// loaded for a completed read, consumed for a completed write. If the
    /// opcode bits are still set after [`OP_POLL_ATTEMPTS`] polls the access
    /// fails with [`AccessError::Timeout`]; the bounded window is final at
    /// this layer.
    ///
    /// The page cache is deliberately not rolled back when a step after a
    /// successful select fails: the page really was selected.
    fn run_op(&mut self, page: u8, reg: u8, op: Opcode) -> Result<()> {
        self.select_page(page)?;

        let word = (u16::from(reg) << 8) | op.bits();
        self.bus.write(self.pseudo_addr, mii::ADDR, word)?;

        for _ in 0..OP_POLL_ATTEMPTS {
            let status = self.bus.read(self.pseudo_addr, mii::ADDR)?;
            if status & (ADDR_OP_READ | ADDR_OP_WRITE) == 0 {
                return Ok(());
            }
            self.delay.delay_us(OP_POLL_INTERVAL_US);
        }

        Err(AccessError::Timeout.into())
    }

    // =========================================================================
    // Width Codec
    // =========================================================================

    /// Run a read and drain `slots` data slots, slot `i` landing at bit
    /// offset `16 * i`.
    fn read_slots(&mut self, page: u8, reg: u8, slots: u8) -> Result<u64> {
        self.run_op(page, reg, Opcode::Read)?;

        let mut value = 0u64;
        for i in 0..slots {
            let word = self.bus.read(self.pseudo_addr, mii::DATA0 + i)?;
            value |= u64::from(word) << (16 * u32::from(i));
        }
        Ok(value)
    }

    /// Stage `slots` data slots in ascending order, then trigger the write.
    ///
    /// A failed slot write aborts before the trigger is ever issued, so the
    /// switch never commits partially staged data. A failed trigger leaves
    /// the slots holding the staged (now stale) value; they are a pure
    /// transient relay, so the next access simply overwrites them.
    fn write_slots(&mut self, page: u8, reg: u8, value: u64, slots: u8) -> Result<()> {
        for i in 0..slots {
            let word = (value >> (16 * u32::from(i))) as u16;
            self.bus.write(self.pseudo_addr, mii::DATA0 + i, word)?;
        }

        self.run_op(page, reg, Opcode::Write)
    }

    // =========================================================================
    // Register Facade
    // =========================================================================

    /// Read an 8-bit register
    ///
    /// The value occupies the low byte of data slot 0; the upper byte of
    /// the slot is undefined and masked off.
    pub fn read8(&mut self, page: u8, reg: u8) -> Result<u8> {
        Ok(self.read_slots(page, reg, 1)? as u8)
    }

    /// Read a 16-bit register
    pub fn read16(&mut self, page: u8, reg: u8) -> Result<u16> {
        Ok(self.read_slots(page, reg, 1)? as u16)
    }

    /// Read a 32-bit register
    pub fn read32(&mut self, page: u8, reg: u8) -> Result<u32> {
        Ok(self.read_slots(page, reg, 2)? as u32)
    }

    /// Read a 48-bit register (returned in the low 48 bits)
    pub fn read48(&mut self, page: u8, reg: u8) -> Result<u64> {
        self.read_slots(page, reg, 3)
    }

    /// Read a 64-bit register
    pub fn read64(&mut self, page: u8, reg: u8) -> Result<u64> {
        self.read_slots(page, reg, 4)
    }

    /// Write an 8-bit register
    pub fn write8(&mut self, page: u8, reg: u8, value: u8) -> Result<()> {
        self.write_slots(page, reg, u64::from(value), 1)
    }

    /// Write a 16-bit register
    pub fn write16(&mut self, page: u8, reg: u8, value: u16) -> Result<()> {
        self.write_slots(page, reg, u64::from(value), 1)
    }

    /// Write a 32-bit register
    pub fn write32(&mut self, page: u8, reg: u8, value: u32) -> Result<()> {
        self.write_slots(page, reg, u64::from(value), 2)
    }

    /// Write a 48-bit register (the upper 16 bits of `value` are ignored)
    pub fn write48(&mut self, page: u8, reg: u8, value: u64) -> Result<()> {
        self.write_slots(page, reg, value, 3)
    }

    /// Write a 64-bit register
    pub fn write64(&mut self, page: u8, reg: u8, value: u64) -> Result<()> {
        self.write_slots(page, reg, value, 4)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
