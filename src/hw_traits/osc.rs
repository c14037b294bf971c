use crate::sfr::{self, OSC};
use crate::util::BitsExt;

/// Register access for the oscillator control registers.
pub trait OscPeriph {
    /// Overwrite OSCXCN
    fn oscxcn_wr(&self, bits: u8);
    /// Set bits in OSCICN, leaving the rest untouched
    fn oscicn_set(&self, mask: u8);
}

impl OscPeriph for OSC {
    #[inline(always)]
    fn oscxcn_wr(&self, bits: u8) {
        unsafe { sfr::write(sfr::OSCXCN, bits) }
    }

    #[inline(always)]
    fn oscicn_set(&self, mask: u8) {
        unsafe { sfr::modify(sfr::OSCICN, |b| b.set_mask(mask)) }
    }
}
