//! Digital crossbar and port 0 output configuration.
//!
//! The seven segment lines live on P0.0-P0.6, driven push-pull with
//! logic-high meaning segment on. Port writes are always whole-port; no
//! caller mutates individual bits.

pub use crate::hw_traits::gpio::{PortPeriph, XbarPeriph};

// Crossbar enabled, weak pull-ups enabled.
const XBR2_XBARE: u8 = 0x40;
// P0.0-P0.6 push-pull.
const PRT0CF_PUSH_PULL: u8 = 0x7F;

/// Token proving the digital crossbar has been enabled. Port outputs cannot
/// drive their pins until this exists.
pub struct Crossbar<X: XbarPeriph> {
    _periph: X,
}

impl<X: XbarPeriph> Crossbar<X> {
    /// Enable the crossbar with weak pull-ups and return the token.
    pub fn new(xbar: X) -> Self {
        xbar.xbr2_wr(XBR2_XBARE);
        Crossbar { _periph: xbar }
    }
}

/// Port 0 configured as a push-pull output bank, all pins initially low.
pub struct Port0<P: PortPeriph> {
    periph: P,
}

impl<P: PortPeriph> Port0<P> {
    /// Configure P0.0-P0.6 as push-pull outputs and drive the whole port low.
    /// Requires the crossbar to be enabled first.
    pub fn push_pull<X: XbarPeriph>(port: P, _xbar: &Crossbar<X>) -> Self {
        port.prt0cf_wr(PRT0CF_PUSH_PULL);
        port.p0_wr(0x00);
        Port0 { periph: port }
    }

    /// Overwrite the output latch wholesale.
    pub fn write(&mut self, bits: u8) {
        self.periph.p0_wr(bits);
    }
}
