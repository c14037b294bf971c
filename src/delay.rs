//! Blocking millisecond delay over timer 2.

use embedded_hal::delay::DelayNs;
use void::ResultVoidExt;

use crate::timer::{Timer2, Timer2Periph};

const NS_PER_MS: u32 = 1_000_000;

/// Delay provider. Owns the configured timer; delays are deliberate
/// spin-waits on the overflow flag, so nothing else runs meanwhile and a
/// large request blocks for its full duration. Accuracy is whatever the
/// timer's tick rate and the oscillator give.
pub struct Delay<T: Timer2Periph> {
    timer: Timer2<T>,
}

impl<T: Timer2Periph> Delay<T> {
    /// Create a delay provider out of the configured timer.
    pub fn new(timer: Timer2<T>) -> Self {
        Delay { timer }
    }

    /// Block for `ms` milliseconds. A zero count returns immediately without
    /// starting the timer. Otherwise the timer runs while, `ms` times over,
    /// the overflow flag is cleared and then spun on until hardware sets it
    /// again; the timer is stopped on the way out.
    pub fn delay_ms(&mut self, mut ms: u16) {
        if ms == 0 {
            return;
        }
        self.timer.start();
        while ms > 0 {
            self.timer.clear_overflow();
            nb::block!(self.timer.wait()).void_unwrap();
            ms -= 1;
        }
        self.timer.stop();
    }

    /// Release the timer.
    pub fn free(self) -> Timer2<T> {
        self.timer
    }
}

impl<T: Timer2Periph> DelayNs for Delay<T> {
    /// Rounded up to whole milliseconds; this timer has no finer grain.
    fn delay_ns(&mut self, ns: u32) {
        // u32 nanoseconds top out around 4295 ms, which fits in u16
        Delay::delay_ms(self, ((ns + (NS_PER_MS - 1)) / NS_PER_MS) as u16);
    }

    fn delay_ms(&mut self, mut ms: u32) {
        while ms > 0 {
            let chunk = ms.min(u16::MAX as u32) as u16;
            Delay::delay_ms(self, chunk);
            ms -= chunk as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Delay;
    use crate::clock::OscExt;
    use crate::hw_traits::mock::{MockOsc, MockTimer2};
    use crate::timer::{TimerConfig, TimerExt};

    fn delay_over(mock: &MockTimer2) -> Delay<MockTimer2> {
        let sysclk = MockOsc::default().constrain().freeze();
        Delay::new(mock.clone().to_timer(TimerConfig::sysclk_div12(&sysclk)))
    }

    #[test]
    fn zero_milliseconds_never_starts_the_timer() {
        let mock = MockTimer2::default();
        let mut delay = delay_over(&mock);
        delay.delay_ms(0);
        assert_eq!(mock.0.starts.get(), 0);
        assert_eq!(mock.0.clears.get(), 0);
    }

    #[test]
    fn n_milliseconds_waits_out_exactly_n_overflows() {
        let mock = MockTimer2::default();
        let mut delay = delay_over(&mock);
        delay.delay_ms(5);
        assert_eq!(mock.0.starts.get(), 1);
        assert_eq!(mock.0.clears.get(), 5);
        assert_eq!(mock.0.overflows.get(), 5);
        assert!(!mock.0.running.get());
    }

    #[test]
    fn embedded_hal_delay_rounds_nanoseconds_up() {
        let mock = MockTimer2::default();
        let mut delay = delay_over(&mock);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1_500_000);
        assert_eq!(mock.0.clears.get(), 2);
    }
}
