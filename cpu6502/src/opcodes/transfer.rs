use crate::cpu::Cpu6502;
use crate::opcodes::Mode;

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer S to X
/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer X to S
/// Function: S:=X
/// Flags:
///
/// TXS does not touch the flags -- the stack pointer isn't N/Z observable.
pub fn txs(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.s = cpu.x;
}
