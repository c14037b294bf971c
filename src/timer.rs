//! Timer 2 abstraction.
//!
//! Timer 2 runs in 16-bit auto-reload mode off SYSCLK/12 and overflows at
//! [`TICK_HZ`]. The overflow flag is polled, never interrupt-driven; the
//! configuration disables the timer 2 interrupt source up front.

use crate::clock::{Clock, Sysclk};

pub use crate::hw_traits::timer2::Timer2Periph;

/// Timer 2 overflow rate in overflows per second. One overflow is one
/// millisecond tick.
pub const TICK_HZ: u32 = 1000;

// Counts per tick at SYSCLK/12, negated by 16-bit wraparound so the counter
// overflows after exactly that many counts. Both divisions truncate; at 16 MHz
// this is 1333 counts and a reload of 0xFACB.
const fn reload_value(sysclk: u32) -> u16 {
    0u16.wrapping_sub((sysclk / 12 / TICK_HZ) as u16)
}

/// Configuration for timer 2.
pub struct TimerConfig {
    reload: u16,
}

impl TimerConfig {
    /// Configure the SYSCLK/12 time base with the reload value for a
    /// [`TICK_HZ`] overflow rate at the given system clock.
    pub fn sysclk_div12(sysclk: &Sysclk) -> Self {
        TimerConfig {
            reload: reload_value(sysclk.freq()),
        }
    }

    fn write_regs<T: Timer2Periph>(self, timer: &T) {
        timer.et2_clr();
        timer.t2m_clr();
        timer.rcap2_wr(self.reload);
        timer.t2_wr(self.reload);
    }
}

/// Periodic auto-reload timer, stopped until [`Timer2::start`] is called.
pub struct Timer2<T: Timer2Periph> {
    timer: T,
}

/// Extension trait for creating timers
pub trait TimerExt {
    #[doc(hidden)]
    type Timer;

    /// Create new timer out of peripheral
    fn to_timer(self, config: TimerConfig) -> Self::Timer;
}

impl<T: Timer2Periph> TimerExt for T {
    type Timer = Timer2<T>;

    fn to_timer(self, config: TimerConfig) -> Self::Timer {
        config.write_regs(&self);
        Timer2 { timer: self }
    }
}

impl<T: Timer2Periph> Timer2<T> {
    /// Start the timer running.
    pub fn start(&mut self) {
        self.timer.tr2_set();
    }

    /// Stop the timer.
    pub fn stop(&mut self) {
        self.timer.tr2_clr();
    }

    /// Clear the overflow flag.
    pub fn clear_overflow(&mut self) {
        self.timer.tf2_clr();
    }

    /// Check for a timer overflow. Does not clear the flag; auto-reload means
    /// the hardware keeps counting regardless.
    pub fn wait(&mut self) -> nb::Result<(), void::Void> {
        if self.timer.tf2_rd() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
