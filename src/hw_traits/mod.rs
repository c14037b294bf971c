pub mod gpio;
pub mod osc;
pub mod timer2;
pub mod wdt;

#[cfg(test)]
pub mod mock;
