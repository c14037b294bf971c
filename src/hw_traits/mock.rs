//! Simulated register bank for host-side unit tests.
//!
//! Each mock implements one of the peripheral register traits and records the
//! register traffic it sees. State is shared through `Rc` so tests can keep a
//! handle after moving the mock into a HAL object.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use super::gpio::{PortPeriph, XbarPeriph};
use super::osc::OscPeriph;
use super::timer2::Timer2Periph;
use super::wdt::WdtPeriph;

/// Ordered log of `(register, value)` writes.
pub type Trace = Rc<RefCell<Vec<(&'static str, u16)>>>;

#[derive(Clone, Default)]
pub struct MockWdt {
    pub trace: Trace,
}

impl WdtPeriph for MockWdt {
    fn wdtcn_wr(&self, bits: u8) {
        self.trace.borrow_mut().push(("WDTCN", bits.into()));
    }
}

#[derive(Clone, Default)]
pub struct MockOsc {
    pub trace: Trace,
}

impl OscPeriph for MockOsc {
    fn oscxcn_wr(&self, bits: u8) {
        self.trace.borrow_mut().push(("OSCXCN", bits.into()));
    }

    fn oscicn_set(&self, mask: u8) {
        self.trace.borrow_mut().push(("OSCICN|=", mask.into()));
    }
}

#[derive(Clone, Default)]
pub struct MockXbar {
    pub trace: Trace,
}

impl XbarPeriph for MockXbar {
    fn xbr2_wr(&self, bits: u8) {
        self.trace.borrow_mut().push(("XBR2", bits.into()));
    }
}

#[derive(Clone, Default)]
pub struct MockPort {
    pub trace: Trace,
}

impl MockPort {
    /// Values written to the P0 data latch, in order.
    pub fn p0_writes(&self) -> Vec<u8> {
        self.trace
            .borrow()
            .iter()
            .filter(|(reg, _)| *reg == "P0")
            .map(|&(_, bits)| bits as u8)
            .collect()
    }
}

impl PortPeriph for MockPort {
    fn p0_wr(&self, bits: u8) {
        self.trace.borrow_mut().push(("P0", bits.into()));
    }

    fn prt0cf_wr(&self, bits: u8) {
        self.trace.borrow_mut().push(("PRT0CF", bits.into()));
    }
}

#[derive(Default)]
pub struct Timer2State {
    pub trace: RefCell<Vec<(&'static str, u16)>>,
    pub running: Cell<bool>,
    pub overflow: Cell<bool>,
    // reads of TF2 left before the simulated overflow fires
    pending_reads: Cell<u8>,
    pub starts: Cell<u32>,
    pub clears: Cell<u32>,
    pub overflows: Cell<u32>,
}

/// Timer 2 mock. While the timer is running, the overflow flag sets itself a
/// couple of TF2 reads after each clear, so a spin-wait sees at least one
/// not-yet-overflowed poll per tick without any real time passing.
#[derive(Clone, Default)]
pub struct MockTimer2(pub Rc<Timer2State>);

impl Timer2Periph for MockTimer2 {
    fn et2_clr(&self) {
        self.0.trace.borrow_mut().push(("IE.ET2=0", 0));
    }

    fn t2m_clr(&self) {
        self.0.trace.borrow_mut().push(("CKCON.T2M=0", 0));
    }

    fn rcap2_wr(&self, count: u16) {
        self.0.trace.borrow_mut().push(("RCAP2", count));
    }

    fn t2_wr(&self, count: u16) {
        self.0.trace.borrow_mut().push(("T2", count));
    }

    fn tr2_set(&self) {
        self.0.running.set(true);
        self.0.starts.set(self.0.starts.get() + 1);
    }

    fn tr2_clr(&self) {
        self.0.running.set(false);
    }

    fn tf2_rd(&self) -> bool {
        if self.0.overflow.get() {
            return true;
        }
        if self.0.running.get() {
            let left = self.0.pending_reads.get();
            if left <= 1 {
                self.0.overflow.set(true);
                self.0.overflows.set(self.0.overflows.get() + 1);
            } else {
                self.0.pending_reads.set(left - 1);
            }
        }
        false
    }

    fn tf2_clr(&self) {
        self.0.overflow.set(false);
        self.0.pending_reads.set(2);
        self.0.clears.set(self.0.clears.get() + 1);
    }
}
