use crate::cpu::{Cpu6502, StatusFlag};
use crate::opcodes::Mode;

/// Clear Carry flag
/// Function: C:=0
/// Flags: C
pub fn clc(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set Carry flag
/// Function: C:=1
/// Flags: C
pub fn sec(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear Decimal flag
/// Function: D:=0
/// Flags: D
pub fn cld(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set Decimal flag
/// Function: D:=1
/// Flags: D
pub fn sed(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear Interrupt disable
/// Function: I:=0
/// Flags: I
pub fn cli(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set Interrupt disable
/// Function: I:=1
/// Flags: I
pub fn sei(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
/// Flags: V
pub fn clv(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// No operation
/// Function:
/// Flags:
pub fn nop(_cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {}
