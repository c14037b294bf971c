use crate::sfr::{self, TIMER2};
use crate::util::BitsExt;

// IE.5
const ET2: u8 = 5;
// CKCON.5
const T2M: u8 = 5;
// T2CON.2
const TR2: u8 = 2;
// T2CON.7
const TF2: u8 = 7;

/// Register access for timer 2 in 16-bit auto-reload mode.
pub trait Timer2Periph {
    /// Disable the timer 2 overflow interrupt (IE.ET2)
    fn et2_clr(&self);
    /// Select SYSCLK/12 as the timer 2 time base (clear CKCON.T2M)
    fn t2m_clr(&self);
    /// Write the 16-bit reload value RCAP2
    fn rcap2_wr(&self, count: u16);
    /// Write the 16-bit counter T2
    fn t2_wr(&self, count: u16);
    /// Start the timer (set T2CON.TR2)
    fn tr2_set(&self);
    /// Stop the timer (clear T2CON.TR2)
    fn tr2_clr(&self);
    /// Read the overflow flag T2CON.TF2
    fn tf2_rd(&self) -> bool;
    /// Clear the overflow flag T2CON.TF2
    fn tf2_clr(&self);
}

impl Timer2Periph for TIMER2 {
    #[inline(always)]
    fn et2_clr(&self) {
        unsafe { sfr::modify(sfr::IE, |b| b.clear(ET2)) }
    }

    #[inline(always)]
    fn t2m_clr(&self) {
        unsafe { sfr::modify(sfr::CKCON, |b| b.clear(T2M)) }
    }

    #[inline(always)]
    fn rcap2_wr(&self, count: u16) {
        unsafe {
            sfr::write(sfr::RCAP2L, count as u8);
            sfr::write(sfr::RCAP2H, (count >> 8) as u8);
        }
    }

    #[inline(always)]
    fn t2_wr(&self, count: u16) {
        unsafe {
            sfr::write(sfr::TL2, count as u8);
            sfr::write(sfr::TH2, (count >> 8) as u8);
        }
    }

    #[inline(always)]
    fn tr2_set(&self) {
        unsafe { sfr::modify(sfr::T2CON, |b| b.set(TR2)) }
    }

    #[inline(always)]
    fn tr2_clr(&self) {
        unsafe { sfr::modify(sfr::T2CON, |b| b.clear(TR2)) }
    }

    #[inline(always)]
    fn tf2_rd(&self) -> bool {
        unsafe { sfr::read(sfr::T2CON) }.check(TF2) != 0
    }

    #[inline(always)]
    fn tf2_clr(&self) {
        unsafe { sfr::modify(sfr::T2CON, |b| b.clear(TF2)) }
    }
}
