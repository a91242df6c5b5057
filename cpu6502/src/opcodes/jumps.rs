use crate::constants::InterruptVectors;
use crate::cpu::{Cpu6502, StatusFlag};
use crate::opcodes::Mode;

/// Jump
/// Function: PC:={adr}
/// Flags:
pub fn jmp(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.pc = address;
}

/// Absolute-indirect JMP. The page-boundary bug lives in
/// `Cpu6502::get_operand_address`'s `Mode::Indirect` arm; this just takes
/// whatever address that arm produces.
pub fn jmp_indirect(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.pc = address;
}

/// JSR pushes the address of the last byte of the JSR instruction, not the
/// return address itself -- RTS adds the `+1` back on the way out.
pub fn jsr(cpu: &mut Cpu6502, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand_for_write(mode, extra_cycle);
    cpu.push_stack_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = address;
}

/// Return from Sub Routine
/// Function: PC:=+(S)
/// Flags:
pub fn rts(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    let address = cpu.pull_stack_u16();
    cpu.pc = address.wrapping_add(1);
}

/// BRK is a one-byte opcode that behaves like a two-byte one: the byte after
/// it is a padding/signature byte that's skipped rather than executed, so the
/// pushed return address is `PC + 2` measured from the opcode itself, and
/// control resumes through the IRQ/BRK vector rather than reset.
pub fn brk(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.push_stack_u16(cpu.pc.wrapping_add(1));
    let status = cpu.p | (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.push_stack_u8(status);
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu
        .bus
        .borrow()
        .read_u16(InterruptVectors::IrqBrkVector as u16, false);
}

/// RTI pulls status then PC, with no `+1` adjustment (unlike RTS) since the
/// pushed PC was never decremented to begin with.
pub fn rti(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    let pulled = cpu.pull_stack_u8();
    let preserved_mask = (StatusFlag::Break as u8) | (StatusFlag::Push as u8);
    cpu.p = (pulled & !preserved_mask) | (cpu.p & preserved_mask);
    cpu.pc = cpu.pull_stack_u16();
}
