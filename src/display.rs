//! Seven-segment digit renderer.
//!
//! One byte of port 0 is one digit: bits 0-6 drive segments A-G, active
//! high. Rendering overwrites the whole latch every time.

use bitflags::bitflags;

use crate::gpio::{Port0, PortPeriph};

bitflags! {
    /// Segment lines of the display, P0.0 through P0.6.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Segments: u8 {
        /// Top
        const A = 1 << 0;
        /// Top right
        const B = 1 << 1;
        /// Bottom right
        const C = 1 << 2;
        /// Bottom
        const D = 1 << 3;
        /// Bottom left
        const E = 1 << 4;
        /// Top left
        const F = 1 << 5;
        /// Middle
        const G = 1 << 6;
    }
}

/// Segment patterns for the digits 0 through 9.
pub const DIGIT_PATTERNS: [Segments; 10] = [
    // 0: ABCDEF
    Segments::A
        .union(Segments::B)
        .union(Segments::C)
        .union(Segments::D)
        .union(Segments::E)
        .union(Segments::F),
    // 1: BC
    Segments::B.union(Segments::C),
    // 2: ABDEG
    Segments::A
        .union(Segments::B)
        .union(Segments::D)
        .union(Segments::E)
        .union(Segments::G),
    // 3: ABCDG
    Segments::A
        .union(Segments::B)
        .union(Segments::C)
        .union(Segments::D)
        .union(Segments::G),
    // 4: BCFG
    Segments::B
        .union(Segments::C)
        .union(Segments::F)
        .union(Segments::G),
    // 5: ACDFG
    Segments::A
        .union(Segments::C)
        .union(Segments::D)
        .union(Segments::F)
        .union(Segments::G),
    // 6: ACDEFG
    Segments::A
        .union(Segments::C)
        .union(Segments::D)
        .union(Segments::E)
        .union(Segments::F)
        .union(Segments::G),
    // 7: ABC
    Segments::A.union(Segments::B).union(Segments::C),
    // 8: ABCDEFG
    Segments::all(),
    // 9: ABCDFG
    Segments::A
        .union(Segments::B)
        .union(Segments::C)
        .union(Segments::D)
        .union(Segments::F)
        .union(Segments::G),
];

/// Single-digit seven-segment display on port 0.
pub struct SevenSeg<P: PortPeriph> {
    port: Port0<P>,
}

impl<P: PortPeriph> SevenSeg<P> {
    /// Attach the display to the configured output port.
    pub fn new(port: Port0<P>) -> Self {
        SevenSeg { port }
    }

    /// Display `number` if it is a digit in 0-9; anything else blanks the
    /// display. Blank-on-invalid is the whole error policy here, nothing is
    /// reported back.
    pub fn show(&mut self, number: i16) {
        let pattern = if (0..=9).contains(&number) {
            DIGIT_PATTERNS[number as usize]
        } else {
            Segments::empty()
        };
        self.port.write(pattern.bits());
    }
}
