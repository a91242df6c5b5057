use crate::cpu::{Cpu6502, StatusFlag};
use crate::opcodes::Mode;

/// Push A to the stack
/// Function: (S)-:=A
/// Flags:
pub fn pha(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u8(cpu.a);
}

/// Pull A
/// Function: A:=+(S)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.pull_stack_u8();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Push the status register to the stack
/// Function: (S)-:=P
/// Flags:
///
/// PHP always pushes with the B flag and the unused bit 5 set, regardless of
/// their current (non-observable) state.
pub fn php(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    let status = cpu.p | (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.push_stack_u8(status);
}

/// Pull the status register from the stack
/// Function: P:=+(S)
/// Flags: N V D I Z C
///
/// PLP restores C,Z,I,D,V,N from the pulled byte; bits 4 and 5 are discarded
/// rather than stored, since B/bit-5 are not observable CPU state.
pub fn plp(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    let pulled = cpu.pull_stack_u8();
    let preserved_mask = (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.p = (pulled & !preserved_mask) | (cpu.p & preserved_mask);
}
