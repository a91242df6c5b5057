#![allow(clippy::new_without_default)]

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod opcodes;

pub use bus::{Bus, SharedBus};
pub use cpu::Cpu6502;
pub use error::LoadError;
