use crate::sfr::{self, WDT};

/// Register access for the watchdog timer.
pub trait WdtPeriph {
    /// Write a byte of the WDTCN control sequence
    fn wdtcn_wr(&self, bits: u8);
}

impl WdtPeriph for WDT {
    #[inline(always)]
    fn wdtcn_wr(&self, bits: u8) {
        unsafe { sfr::write(sfr::WDTCN, bits) }
    }
}
