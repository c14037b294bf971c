//! System clock configuration.
//!
//! The firmware runs entirely off the internal oscillator at full speed; the
//! external oscillator is explicitly deselected. These are fire-and-forget
//! register writes with no verification.

pub use crate::hw_traits::osc::OscPeriph;

/// SYSCLK frequency with the internal oscillator at full speed.
pub const SYSCLK: u32 = 16_000_000;

// Internal oscillator selected (CLKSL = 0) at the full 16 MHz (IFCN = 0b11).
const OSCICN_INTERNAL_FULL_SPEED: u8 = 0x83;

/// Extension trait allowing the oscillator peripheral to be converted into
/// the clock configuration builder object.
pub trait OscExt: OscPeriph + Sized {
    /// Converts the oscillator control registers into a clock configuration
    /// builder object
    fn constrain(self) -> ClockConfig<Self>;
}

impl<O: OscPeriph> OscExt for O {
    fn constrain(self) -> ClockConfig<O> {
        ClockConfig { periph: self }
    }
}

/// Builder object for the system clock configuration. The only supported
/// configuration is the internal oscillator at 16 MHz.
pub struct ClockConfig<O: OscPeriph> {
    periph: O,
}

impl<O: OscPeriph> ClockConfig<O> {
    /// Apply the clock configuration and return the `Sysclk` clock object.
    /// Turns the external oscillator off and selects the internal oscillator
    /// at full speed. Idempotent.
    pub fn freeze(self) -> Sysclk {
        self.periph.oscxcn_wr(0x00);
        self.periph.oscicn_set(OSCICN_INTERNAL_FULL_SPEED);
        Sysclk(SYSCLK)
    }
}

/// SYSCLK clock object
pub struct Sysclk(u32);

/// Trait for configured clock objects
pub trait Clock {
    /// Type of the returned frequency value
    type Freq;

    /// Frequency of the clock
    fn freq(&self) -> Self::Freq;
}

impl Clock for Sysclk {
    type Freq = u32;

    fn freq(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, OscExt};
    use crate::hw_traits::mock::MockOsc;

    #[test]
    fn freeze_deselects_external_osc_then_selects_internal_full_speed() {
        let osc = MockOsc::default();
        let sysclk = osc.clone().constrain().freeze();
        assert_eq!(*osc.trace.borrow(), [("OSCXCN", 0x00), ("OSCICN|=", 0x83)]);
        assert_eq!(sysclk.freq(), 16_000_000);
    }
}
