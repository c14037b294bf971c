//! Watchdog timer control.
//!
//! **Note**: the watchdog is running at power-on and will reset the part
//! unless it is either fed or disabled. This firmware never feeds it, so
//! startup must disable it before anything else happens.

pub use crate::hw_traits::wdt::WdtPeriph;

// Two-byte disable sequence. The second write must follow the first within
// four system clocks, which back-to-back register writes satisfy.
const DISABLE_KEY_1: u8 = 0xDE;
const DISABLE_KEY_2: u8 = 0xAD;

/// Watchdog timer.
pub struct Wdt<W: WdtPeriph> {
    periph: W,
}

impl<W: WdtPeriph> Wdt<W> {
    /// Take ownership of the watchdog control register. The hardware is left
    /// in its power-on state (watchdog enabled).
    pub fn constrain(wdt: W) -> Self {
        Wdt { periph: wdt }
    }

    /// Enable or disable the watchdog. Enabled is the power-on default, so
    /// `set_enabled(true)` writes nothing; `set_enabled(false)` writes the
    /// WDTCN disable sequence. There is no status readback; a rejected
    /// sequence is silent and shows up as an unexpected reset.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.periph.wdtcn_wr(DISABLE_KEY_1);
            self.periph.wdtcn_wr(DISABLE_KEY_2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Wdt;
    use crate::hw_traits::mock::MockWdt;

    #[test]
    fn disable_writes_the_two_byte_sequence_in_order() {
        let wdt = MockWdt::default();
        let mut hal = Wdt::constrain(wdt.clone());
        hal.set_enabled(false);
        assert_eq!(*wdt.trace.borrow(), [("WDTCN", 0xDE), ("WDTCN", 0xAD)]);
    }

    #[test]
    fn leaving_the_watchdog_enabled_writes_nothing() {
        let wdt = MockWdt::default();
        let mut hal = Wdt::constrain(wdt.clone());
        hal.set_enabled(true);
        assert!(wdt.trace.borrow().is_empty());
    }
}
