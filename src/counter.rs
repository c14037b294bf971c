//! The digit counter and the power-on main loop.

use crate::delay::Delay;
use crate::display::SevenSeg;
use crate::gpio::PortPeriph;
use crate::timer::Timer2Periph;

// Wraparound bound, digits 0 through 9.
const DIGIT_COUNT: i16 = 10;

// One second per digit.
const STEP_MS: u16 = 1000;

/// Counter cycling 0,1,...,9,0,... with period 10.
pub struct DigitCounter {
    count: i16,
}

impl DigitCounter {
    /// Start counting from zero.
    pub fn new() -> Self {
        DigitCounter { count: 0 }
    }

    /// The digit currently being counted.
    pub fn value(&self) -> i16 {
        self.count
    }

    /// Advance by one, wrapping back to zero after nine.
    pub fn increment(&mut self) {
        self.count += 1;
        if self.count == DIGIT_COUNT {
            self.count = 0;
        }
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One iteration of the main loop: render the current digit, hold it for a
/// second, advance the counter.
pub fn step<P: PortPeriph, T: Timer2Periph>(
    counter: &mut DigitCounter,
    display: &mut SevenSeg<P>,
    delay: &mut Delay<T>,
) {
    display.show(counter.value());
    delay.delay_ms(STEP_MS);
    counter.increment();
}

/// The firmware main loop, entered once after init and never left.
pub fn run<P: PortPeriph, T: Timer2Periph>(mut display: SevenSeg<P>, mut delay: Delay<T>) -> ! {
    let mut counter = DigitCounter::new();
    loop {
        step(&mut counter, &mut display, &mut delay);
    }
}
