use crate::cpu::{Cpu6502, StatusFlag};
use crate::opcodes::Mode;

fn writeback(cpu: &mut Cpu6502, mode: Mode, address: Option<u16>, result: u8) {
    match address {
        Some(addr) => cpu.bus.borrow_mut().set_u8(addr, result),
        None => {
            debug_assert_eq!(mode, Mode::RegisterA);
            cpu.a = result;
        }
    }
}

/// Arithmetic shift left
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand << 1;
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    writeback(cpu, mode, address, result);
}

/// Logical shift right
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = operand >> 1;
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    writeback(cpu, mode, address, result);
}

/// Rotate left
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = (operand << 1) | cpu.get_carry();
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    writeback(cpu, mode, address, result);
}

/// Rotate right
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let result = (operand >> 1) | (cpu.get_carry() << 7);
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    writeback(cpu, mode, address, result);
}
