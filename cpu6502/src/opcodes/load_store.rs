use crate::cpu::Cpu6502;
use crate::opcodes::Mode;

/// Load register A with the value
/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a = operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Store register A at address
/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.bus.borrow_mut().set_u8(address, cpu.a);
}

/// Load register X with the value
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.x = operand;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Store register X at address
/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.bus.borrow_mut().set_u8(address, cpu.x);
}

/// Load register Y with the value
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.y = operand;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Store register Y at address
/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.bus.borrow_mut().set_u8(address, cpu.y);
}
