use crate::sfr::{self, PORT0, XBAR};

/// Register access for the digital crossbar.
pub trait XbarPeriph {
    /// Overwrite XBR2
    fn xbr2_wr(&self, bits: u8);
}

impl XbarPeriph for XBAR {
    #[inline(always)]
    fn xbr2_wr(&self, bits: u8) {
        unsafe { sfr::write(sfr::XBR2, bits) }
    }
}

/// Register access for port 0.
pub trait PortPeriph {
    /// Overwrite the P0 data latch
    fn p0_wr(&self, bits: u8);
    /// Overwrite the P0 output mode configuration
    fn prt0cf_wr(&self, bits: u8);
}

impl PortPeriph for PORT0 {
    #[inline(always)]
    fn p0_wr(&self, bits: u8) {
        unsafe { sfr::write(sfr::P0, bits) }
    }

    #[inline(always)]
    fn prt0cf_wr(&self, bits: u8) {
        unsafe { sfr::write(sfr::PRT0CF, bits) }
    }
}
