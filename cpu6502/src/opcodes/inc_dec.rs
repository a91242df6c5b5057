use crate::cpu::Cpu6502;
use crate::opcodes::Mode;

/// Decrement at an address
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand_for_write(mode, extra_cycle);
    let result = operand.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.bus.borrow_mut().set_u8(address, result);
}

/// Increment the address
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand_for_write(mode, extra_cycle);
    let result = operand.wrapping_add(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.bus.borrow_mut().set_u8(address, result);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}
