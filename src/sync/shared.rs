//! ISR-safe switch wrapper using critical sections.
//!
//! Provides [`SharedSwitch`] for callers that must reach one switch handle
//! from several contexts. Each closure runs under a critical section, which
//! realizes the coarse external lock the access protocol requires: a whole
//! read or write call completes before any other context can start one.

use embedded_hal::delay::DelayNs;

use super::primitives::CriticalSectionCell;
use crate::hal::mdio::MdioBus;
use crate::switch::device::Switch;

/// ISR-safe switch wrapper using critical sections.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure. Keep closures short: a wide register
/// access spans up to eleven bus transactions plus polling delays.
///
/// # Example
///
/// ```ignore
/// static SWITCH: SharedSwitch<Mdio, Delay> =
///     SharedSwitch::new(Switch::new(mdio, delay));
///
/// SWITCH.with(|switch| {
///     switch.write16(0x00, 0x2c, 0x0083).ok();
/// });
/// ```
pub struct SharedSwitch<B: MdioBus, D: DelayNs> {
    inner: CriticalSectionCell<Switch<B, D>>,
}

impl<B: MdioBus, D: DelayNs> SharedSwitch<B, D> {
    /// Wrap a switch handle (const, suitable for static initialization).
    pub const fn new(switch: Switch<B, D>) -> Self {
        Self {
            inner: CriticalSectionCell::new(switch),
        }
    }

    /// Execute a closure with exclusive access to the switch.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Switch<B, D>) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Switch<B, D>) -> R,
    {
        self.inner.try_with(f)
    }
}
