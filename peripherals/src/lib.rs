//! Memory-mapped peripherals for the 6502 sandbox: a 32x32 framebuffer and a
//! character printer. Neither peripheral is called into by the CPU -- both
//! poll the shared bus on whatever cadence the host loop drives them at.

pub mod framebuffer;
pub mod printer;

pub use framebuffer::{Framebuffer, Rgb};
pub use printer::Printer;
