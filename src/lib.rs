//! Seven-segment LED digit counter firmware for the Silicon Labs C8051F005.
//!
//! Cycles a single digit 0-9 on a 7-segment display wired to P0.0-P0.6, one
//! digit per second. Startup disables the watchdog, selects the internal
//! 16 MHz oscillator, routes port 0 through the digital crossbar as push-pull
//! outputs, and sets up timer 2 as a polled 1 kHz auto-reload tick source.
//! After that the program is a single render/delay/increment loop.
//!
//! No C8051 peripheral access crate exists, so the special function registers
//! this program touches are defined in the [`sfr`] module. All higher layers
//! are generic over per-peripheral register traits, which lets every register
//! write be checked on the host against a simulated register bank.
//!
//! # Usage
//!
//! ```no_run
//! use c8051f005_sevenseg::clock::OscExt;
//! use c8051f005_sevenseg::counter;
//! use c8051f005_sevenseg::delay::Delay;
//! use c8051f005_sevenseg::display::SevenSeg;
//! use c8051f005_sevenseg::gpio::{Crossbar, Port0};
//! use c8051f005_sevenseg::sfr::Peripherals;
//! use c8051f005_sevenseg::timer::{TimerConfig, TimerExt};
//! use c8051f005_sevenseg::watchdog::Wdt;
//!
//! let periph = Peripherals::take().unwrap();
//!
//! // Watchdog first, else the part resets before the loop is reached
//! let mut wdt = Wdt::constrain(periph.wdt);
//! wdt.set_enabled(false);
//!
//! let sysclk = periph.osc.constrain().freeze();
//! let xbar = Crossbar::new(periph.xbar);
//! let port = Port0::push_pull(periph.port0, &xbar);
//! let timer = periph.timer2.to_timer(TimerConfig::sysclk_div12(&sysclk));
//!
//! counter::run(SevenSeg::new(port), Delay::new(timer));
//! ```

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod counter;
pub mod delay;
pub mod display;
pub mod gpio;
pub mod prelude;
pub mod sfr;
pub mod timer;
pub mod watchdog;

mod hw_traits;
mod util;
