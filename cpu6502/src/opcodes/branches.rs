use crate::cpu::{Cpu6502, StatusFlag};
use crate::opcodes::Mode;

/// Branch if Carry Clear
/// Function: branch on C=0
/// Flags:
pub fn bcc(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(!cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Carry Set
/// Function: branch on C=1
/// Flags:
pub fn bcs(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Equal
/// Function: branch on Z=1
/// Flags:
pub fn beq(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch if Not Equal
/// Function: branch on Z=0
/// Flags:
pub fn bne(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(!cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch if minus
/// Function: branch on N=1
/// Flags:
pub fn bmi(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if plus
/// Function: branch on N=0
/// Flags:
pub fn bpl(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(!cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if Overflow Clear
/// Function: branch on V=0
/// Flags:
pub fn bvc(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(!cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if Overflow Set
/// Function: branch on V=1
/// Flags:
pub fn bvs(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    cpu.branch_if(cpu.is_status_flag_set(StatusFlag::Overflow));
}
