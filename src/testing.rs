//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the switch driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::vec::Vec;

use crate::error::{BusError, BusResult};
use crate::hal::mdio::MdioBus;
use crate::internal::regs::{ADDR_OP_READ, ADDR_OP_WRITE, PAGE_ENABLE, mii};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus emulating the switch's pseudo-PHY protocol
///
/// The mock behaves like a chip behind a real management bus: a page-select
/// write moves its page pointer, an address write with an opcode bit runs
/// the operation against a paged 64-bit backing store through the data
/// slots, and the address register reads back with the opcode bits cleared
/// once the operation is done. Busy-poll counts and per-register faults can
/// be scripted to exercise the driver's failure paths.
///
/// All state lives in `RefCell`s, and [`MdioBus`] is implemented for
/// `&MockMdioBus` as well, so a test can keep a shared handle for
/// inspection while the driver owns another.
///
/// # Example
///
/// ```ignore
/// let bus = MockMdioBus::new();
/// bus.set_wide_register(0x01, 0x00, 0x0102_0304);
///
/// let mut switch = Switch::new(&bus, MockDelay::new());
/// assert_eq!(switch.read32(0x01, 0x00).unwrap(), 0x0102_0304);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Raw 16-bit pseudo-PHY registers (data slots, id registers, ...)
    regs: RefCell<HashMap<u8, u16>>,
    /// Paged wide-register backing store: (page, reg) -> value
    store: RefCell<HashMap<(u8, u8), u64>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// Page pointer, as moved by page-select writes
    page: RefCell<u8>,
    /// Last word written to the address register
    addr_reg: RefCell<u16>,
    /// Polls left that still report the current operation pending
    pending: RefCell<u32>,
    /// Scripted pending polls per operation
    busy_polls: RefCell<u32>,
    /// Report every operation as pending forever
    always_busy: RefCell<bool>,
    /// Fail writes to this register number
    fail_write_reg: RefCell<Option<u8>>,
    /// Fail reads from this register number
    fail_read_reg: RefCell<Option<u8>>,
}

impl MockMdioBus {
    /// Create a new mock bus with an empty register space
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Scripting
    // =========================================================================

    /// Seed a wide register in the paged backing store
    pub fn set_wide_register(&self, page: u8, reg: u8, value: u64) {
        self.store.borrow_mut().insert((page, reg), value);
    }

    /// Current value of a wide register (for test verification)
    pub fn wide_register(&self, page: u8, reg: u8) -> Option<u64> {
        self.store.borrow().get(&(page, reg)).copied()
    }

    /// Seed a raw pseudo-PHY register (e.g. the Clause 22 id registers)
    pub fn set_phy_register(&self, reg_addr: u8, value: u16) {
        self.regs.borrow_mut().insert(reg_addr, value);
    }

    /// Report the next operations as pending for `polls` status reads
    pub fn set_busy_polls(&self, polls: u32) {
        *self.busy_polls.borrow_mut() = polls;
    }

    /// Report every operation as pending forever (never processed)
    pub fn set_always_busy(&self, busy: bool) {
        *self.always_busy.borrow_mut() = busy;
    }

    /// Fail every write to `reg_addr` with [`BusError::NoAck`]
    pub fn fail_writes_to(&self, reg_addr: u8) {
        *self.fail_write_reg.borrow_mut() = Some(reg_addr);
    }

    /// Fail every read from `reg_addr` with [`BusError::NoAck`]
    pub fn fail_reads_to(&self, reg_addr: u8) {
        *self.fail_read_reg.borrow_mut() = Some(reg_addr);
    }

    /// Clear all scripted faults
    pub fn clear_faults(&self) {
        *self.fail_write_reg.borrow_mut() = None;
        *self.fail_read_reg.borrow_mut() = None;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// All writes that have been made, in order
    pub fn writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Number of writes made to `reg_addr`
    pub fn writes_to(&self, reg_addr: u8) -> usize {
        self.write_log
            .borrow()
            .iter()
            .filter(|w| w.1 == reg_addr)
            .count()
    }

    /// Number of reads made from `reg_addr`
    pub fn reads_to(&self, reg_addr: u8) -> usize {
        self.read_log
            .borrow()
            .iter()
            .filter(|r| r.1 == reg_addr)
            .count()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// The page the emulated chip currently has selected
    pub fn selected_page(&self) -> u8 {
        *self.page.borrow()
    }

    // =========================================================================
    // Protocol Emulation
    // =========================================================================

    fn slot_word(&self, index: u8) -> u64 {
        let word = self
            .regs
            .borrow()
            .get(&(mii::DATA0 + index))
            .copied()
            .unwrap_or(0);
        u64::from(word)
    }

    fn execute_op(&self, word: u16) {
        let reg = (word >> 8) as u8;
        let page = *self.page.borrow();

        if word & ADDR_OP_WRITE != 0 {
            // Commit the staged slots to the backing store
            let mut value = 0u64;
            for i in 0..4 {
                value |= self.slot_word(i) << (16 * u32::from(i));
            }
            self.store.borrow_mut().insert((page, reg), value);
        } else if word & ADDR_OP_READ != 0 {
            // Latch the backing store into the slots
            let value = self.store.borrow().get(&(page, reg)).copied().unwrap_or(0);
            let mut regs = self.regs.borrow_mut();
            for i in 0..4u8 {
                regs.insert(mii::DATA0 + i, (value >> (16 * u32::from(i))) as u16);
            }
        }
    }

    fn do_write(&self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()> {
        if *self.fail_write_reg.borrow() == Some(reg_addr) {
            return Err(BusError::NoAck);
        }

        self.write_log.borrow_mut().push((phy_addr, reg_addr, value));

        match reg_addr {
            mii::PAGE => {
                if value & PAGE_ENABLE != 0 {
                    *self.page.borrow_mut() = (value >> 8) as u8;
                }
            }
            mii::ADDR => {
                *self.addr_reg.borrow_mut() = value;
                if value & (ADDR_OP_READ | ADDR_OP_WRITE) != 0 {
                    *self.pending.borrow_mut() = *self.busy_polls.borrow();
                    if !*self.always_busy.borrow() {
                        self.execute_op(value);
                    }
                }
            }
            _ => {
                self.regs.borrow_mut().insert(reg_addr, value);
            }
        }

        Ok(())
    }

    fn do_read(&self, phy_addr: u8, reg_addr: u8) -> BusResult<u16> {
        if *self.fail_read_reg.borrow() == Some(reg_addr) {
            return Err(BusError::NoAck);
        }

        self.read_log.borrow_mut().push((phy_addr, reg_addr));

        if reg_addr == mii::ADDR {
            let word = *self.addr_reg.borrow();
            if *self.always_busy.borrow() {
                return Ok(word);
            }
            let mut pending = self.pending.borrow_mut();
            if *pending > 0 {
                *pending -= 1;
                return Ok(word);
            }
            return Ok(word & !(ADDR_OP_READ | ADDR_OP_WRITE));
        }

        Ok(self.regs.borrow().get(&reg_addr).copied().unwrap_or(0))
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> BusResult<u16> {
        self.do_read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()> {
        self.do_write(phy_addr, reg_addr, value)
    }
}

impl MdioBus for &MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> BusResult<u16> {
        self.do_read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()> {
        self.do_write(phy_addr, reg_addr, value)
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

impl embedded_hal::delay::DelayNs for &MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_bus_plain_registers() {
        let mut bus = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(bus.read(0x1e, 0x02).unwrap(), 0);

        bus.set_phy_register(0x02, 0x0143);
        assert_eq!(bus.read(0x1e, 0x02).unwrap(), 0x0143);
    }

    #[test]
    fn mock_bus_page_pointer_follows_selects() {
        let mut bus = MockMdioBus::new();

        bus.write(0x1e, mii::PAGE, (0x25 << 8) | PAGE_ENABLE).unwrap();
        assert_eq!(bus.selected_page(), 0x25);

        // A write without the enable bit does not move the pointer
        bus.write(0x1e, mii::PAGE, 0x30 << 8).unwrap();
        assert_eq!(bus.selected_page(), 0x25);
    }

    #[test]
    fn mock_bus_read_op_latches_store_into_slots() {
        let mut bus = MockMdioBus::new();
        bus.set_wide_register(0x00, 0x10, 0x0004_0003_0002_0001);

        bus.write(0x1e, mii::PAGE, PAGE_ENABLE).unwrap();
        bus.write(0x1e, mii::ADDR, (0x10 << 8) | ADDR_OP_READ).unwrap();

        assert_eq!(bus.read(0x1e, mii::DATA0).unwrap(), 0x0001);
        assert_eq!(bus.read(0x1e, mii::DATA1).unwrap(), 0x0002);
        assert_eq!(bus.read(0x1e, mii::DATA2).unwrap(), 0x0003);
        assert_eq!(bus.read(0x1e, mii::DATA3).unwrap(), 0x0004);
    }

    #[test]
    fn mock_bus_write_op_commits_slots_to_store() {
        let mut bus = MockMdioBus::new();

        bus.write(0x1e, mii::DATA0, 0xaaaa).unwrap();
        bus.write(0x1e, mii::DATA1, 0xbbbb).unwrap();
        bus.write(0x1e, mii::DATA2, 0).unwrap();
        bus.write(0x1e, mii::DATA3, 0).unwrap();
        bus.write(0x1e, mii::PAGE, (0x02 << 8) | PAGE_ENABLE).unwrap();
        bus.write(0x1e, mii::ADDR, (0x30 << 8) | ADDR_OP_WRITE).unwrap();

        assert_eq!(bus.wide_register(0x02, 0x30), Some(0xbbbb_aaaa));
    }

    #[test]
    fn mock_bus_completion_after_scripted_polls() {
        let mut bus = MockMdioBus::new();
        bus.set_busy_polls(2);

        bus.write(0x1e, mii::ADDR, (0x10 << 8) | ADDR_OP_READ).unwrap();

        let pending = ADDR_OP_READ | ADDR_OP_WRITE;
        assert_ne!(bus.read(0x1e, mii::ADDR).unwrap() & pending, 0);
        assert_ne!(bus.read(0x1e, mii::ADDR).unwrap() & pending, 0);
        assert_eq!(bus.read(0x1e, mii::ADDR).unwrap() & pending, 0);
    }

    #[test]
    fn mock_bus_fault_injection() {
        let mut bus = MockMdioBus::new();
        bus.fail_writes_to(mii::DATA1);

        assert!(bus.write(0x1e, mii::DATA0, 1).is_ok());
        assert_eq!(bus.write(0x1e, mii::DATA1, 1), Err(BusError::NoAck));

        bus.clear_faults();
        assert!(bus.write(0x1e, mii::DATA1, 1).is_ok());

        // Failed transactions never reach the log
        assert_eq!(bus.writes_to(mii::DATA1), 1);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1000);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 2000);

        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_us(), 3);

        delay.reset();
        assert_eq!(delay.total_ns(), 0);
    }
}
