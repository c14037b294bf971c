//! Prelude

pub use crate::clock::Clock as _c8051f005_sevenseg_Clock;
pub use crate::clock::OscExt as _c8051f005_sevenseg_OscExt;
pub use crate::timer::TimerExt as _c8051f005_sevenseg_TimerExt;
