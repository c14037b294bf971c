//! C8051F005 special function register map.
//!
//! Only the registers this firmware touches are defined. The addresses are
//! the hardware-fixed SFR locations from the datasheet and are the external
//! contract the rest of the crate must honor bit-for-bit.

use core::sync::atomic::{AtomicBool, Ordering};

/// Port 0 data latch.
pub(crate) const P0: u8 = 0x80;
/// System clock control, holds the timer 2 clock select bit T2M.
pub(crate) const CKCON: u8 = 0x8E;
/// Port 0 output mode configuration.
pub(crate) const PRT0CF: u8 = 0xA4;
/// Interrupt enable, holds ET2.
pub(crate) const IE: u8 = 0xA8;
/// External oscillator control.
pub(crate) const OSCXCN: u8 = 0xB1;
/// Internal oscillator control.
pub(crate) const OSCICN: u8 = 0xB2;
/// Timer 2 control, holds TR2 and TF2.
pub(crate) const T2CON: u8 = 0xC8;
/// Timer 2 capture/reload, low byte.
pub(crate) const RCAP2L: u8 = 0xCA;
/// Timer 2 capture/reload, high byte.
pub(crate) const RCAP2H: u8 = 0xCB;
/// Timer 2 counter, low byte.
pub(crate) const TL2: u8 = 0xCC;
/// Timer 2 counter, high byte.
pub(crate) const TH2: u8 = 0xCD;
/// Digital crossbar control 2.
pub(crate) const XBR2: u8 = 0xE3;
/// Watchdog timer control.
pub(crate) const WDTCN: u8 = 0xFF;

#[inline(always)]
pub(crate) unsafe fn read(addr: u8) -> u8 {
    core::ptr::read_volatile(addr as usize as *const u8)
}

#[inline(always)]
pub(crate) unsafe fn write(addr: u8, bits: u8) {
    core::ptr::write_volatile(addr as usize as *mut u8, bits);
}

#[inline(always)]
pub(crate) unsafe fn modify(addr: u8, f: impl FnOnce(u8) -> u8) {
    write(addr, f(read(addr)));
}

/// Watchdog timer control register (WDTCN).
pub struct WDT {
    _private: (),
}

/// Internal and external oscillator control registers (OSCICN, OSCXCN).
pub struct OSC {
    _private: (),
}

/// Digital crossbar control (XBR2).
pub struct XBAR {
    _private: (),
}

/// Port 0 data latch and output configuration (P0, PRT0CF).
pub struct PORT0 {
    _private: (),
}

/// Timer 2 (T2CON, RCAP2, T2) along with its interrupt enable bit in IE and
/// its clock select bit in CKCON.
pub struct TIMER2 {
    _private: (),
}

/// All device peripherals used by this firmware.
pub struct Peripherals {
    /// Watchdog timer
    pub wdt: WDT,
    /// Oscillator control
    pub osc: OSC,
    /// Digital crossbar
    pub xbar: XBAR,
    /// Port 0
    pub port0: PORT0,
    /// Timer 2
    pub timer2: TIMER2,
}

static TAKEN: AtomicBool = AtomicBool::new(false);

impl Peripherals {
    /// Returns the peripheral singleton the first time it is called and `None`
    /// afterwards.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(unsafe { Self::steal() })
        }
    }

    /// Unchecked version of [`Peripherals::take`].
    ///
    /// # Safety
    ///
    /// Creates a second handle to registers that may already be owned
    /// elsewhere, bypassing the singleton check.
    pub unsafe fn steal() -> Self {
        Peripherals {
            wdt: WDT { _private: () },
            osc: OSC { _private: () },
            xbar: XBAR { _private: () },
            port0: PORT0 { _private: () },
            timer2: TIMER2 { _private: () },
        }
    }
}
