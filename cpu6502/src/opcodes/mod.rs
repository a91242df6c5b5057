//! Opcode dispatch: the addressing-mode enum, the per-opcode lookup tables,
//! and the handler functions the tables point into.
//!
//! The tables are built once (see [`tables`]) rather than written out as a
//! literal 256-entry array, so that only the ~151 documented opcodes need to
//! be named; everything else defaults to the illegal-opcode no-op.

pub mod arithmetic;
pub mod branches;
pub mod compare;
pub mod flags_ops;
pub mod inc_dec;
pub mod jumps;
pub mod load_store;
pub mod logical;
pub mod shifts;
pub mod stack;
pub mod transfer;

use std::sync::OnceLock;

use crate::cpu::Cpu6502;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,
    AbsoluteIndexedX,
    AbsoluteIndexedY,
    Immediate,
    Implied,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    RegisterA,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    /// Not a real addressing mode; used for the undocumented-opcode no-op.
    None,
}

/// `extra_cycle` is the opcode's `EXTRA_CYCLES_TABLE` entry: 1 for the
/// read-family instructions that charge a page-cross penalty, 0 otherwise.
pub type OperationFn = fn(&mut Cpu6502, Mode, u8);

pub struct Tables {
    pub cycles: [u8; 256],
    pub extra_cycles: [u8; 256],
    pub modes: [Mode; 256],
    pub operations: [OperationFn; 256],
}

fn illegal(cpu: &mut Cpu6502, _mode: Mode, _extra_cycle: u8) {
    log::debug!("illegal opcode encountered at {:#06x}", cpu.pc.wrapping_sub(1));
}

macro_rules! fill {
    ($cycles:ident, $extra:ident, $modes:ident, $ops:ident, $op:expr, $cyc:expr, $mode:expr, $func:expr) => {
        $cycles[$op as usize] = $cyc;
        $modes[$op as usize] = $mode;
        $ops[$op as usize] = $func;
    };
    ($cycles:ident, $extra:ident, $modes:ident, $ops:ident, $op:expr, $cyc:expr, $mode:expr, $func:expr, extra) => {
        fill!($cycles, $extra, $modes, $ops, $op, $cyc, $mode, $func);
        $extra[$op as usize] = 1;
    };
}

pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> Tables {
    use Mode::*;

    let mut cycles = [2u8; 256];
    let mut extra_cycles = [0u8; 256];
    let mut modes = [Mode::None; 256];
    let mut operations: [OperationFn; 256] = [illegal; 256];

    // ADC
    fill!(cycles, extra_cycles, modes, operations, 0x69, 2, Immediate, arithmetic::adc);
    fill!(cycles, extra_cycles, modes, operations, 0x65, 3, ZeroPage, arithmetic::adc);
    fill!(cycles, extra_cycles, modes, operations, 0x75, 4, ZeroPageX, arithmetic::adc);
    fill!(cycles, extra_cycles, modes, operations, 0x6D, 4, Absolute, arithmetic::adc);
    fill!(cycles, extra_cycles, modes, operations, 0x7D, 4, AbsoluteIndexedX, arithmetic::adc, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x79, 4, AbsoluteIndexedY, arithmetic::adc, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x61, 6, IndirectX, arithmetic::adc);
    fill!(cycles, extra_cycles, modes, operations, 0x71, 5, IndirectY, arithmetic::adc, extra);

    // SBC
    fill!(cycles, extra_cycles, modes, operations, 0xE9, 2, Immediate, arithmetic::sbc);
    fill!(cycles, extra_cycles, modes, operations, 0xE5, 3, ZeroPage, arithmetic::sbc);
    fill!(cycles, extra_cycles, modes, operations, 0xF5, 4, ZeroPageX, arithmetic::sbc);
    fill!(cycles, extra_cycles, modes, operations, 0xED, 4, Absolute, arithmetic::sbc);
    fill!(cycles, extra_cycles, modes, operations, 0xFD, 4, AbsoluteIndexedX, arithmetic::sbc, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xF9, 4, AbsoluteIndexedY, arithmetic::sbc, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xE1, 6, IndirectX, arithmetic::sbc);
    fill!(cycles, extra_cycles, modes, operations, 0xF1, 5, IndirectY, arithmetic::sbc, extra);

    // AND
    fill!(cycles, extra_cycles, modes, operations, 0x29, 2, Immediate, logical::and);
    fill!(cycles, extra_cycles, modes, operations, 0x25, 3, ZeroPage, logical::and);
    fill!(cycles, extra_cycles, modes, operations, 0x35, 4, ZeroPageX, logical::and);
    fill!(cycles, extra_cycles, modes, operations, 0x2D, 4, Absolute, logical::and);
    fill!(cycles, extra_cycles, modes, operations, 0x3D, 4, AbsoluteIndexedX, logical::and, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x39, 4, AbsoluteIndexedY, logical::and, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x21, 6, IndirectX, logical::and);
    fill!(cycles, extra_cycles, modes, operations, 0x31, 5, IndirectY, logical::and, extra);

    // ORA
    fill!(cycles, extra_cycles, modes, operations, 0x09, 2, Immediate, logical::ora);
    fill!(cycles, extra_cycles, modes, operations, 0x05, 3, ZeroPage, logical::ora);
    fill!(cycles, extra_cycles, modes, operations, 0x15, 4, ZeroPageX, logical::ora);
    fill!(cycles, extra_cycles, modes, operations, 0x0D, 4, Absolute, logical::ora);
    fill!(cycles, extra_cycles, modes, operations, 0x1D, 4, AbsoluteIndexedX, logical::ora, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x19, 4, AbsoluteIndexedY, logical::ora, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x01, 6, IndirectX, logical::ora);
    fill!(cycles, extra_cycles, modes, operations, 0x11, 5, IndirectY, logical::ora, extra);

    // EOR
    fill!(cycles, extra_cycles, modes, operations, 0x49, 2, Immediate, logical::eor);
    fill!(cycles, extra_cycles, modes, operations, 0x45, 3, ZeroPage, logical::eor);
    fill!(cycles, extra_cycles, modes, operations, 0x55, 4, ZeroPageX, logical::eor);
    fill!(cycles, extra_cycles, modes, operations, 0x4D, 4, Absolute, logical::eor);
    fill!(cycles, extra_cycles, modes, operations, 0x5D, 4, AbsoluteIndexedX, logical::eor, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x59, 4, AbsoluteIndexedY, logical::eor, extra);
    fill!(cycles, extra_cycles, modes, operations, 0x41, 6, IndirectX, logical::eor);
    fill!(cycles, extra_cycles, modes, operations, 0x51, 5, IndirectY, logical::eor, extra);

    // BIT
    fill!(cycles, extra_cycles, modes, operations, 0x24, 3, ZeroPage, logical::bit);
    fill!(cycles, extra_cycles, modes, operations, 0x2C, 4, Absolute, logical::bit);

    // CMP
    fill!(cycles, extra_cycles, modes, operations, 0xC9, 2, Immediate, compare::cmp);
    fill!(cycles, extra_cycles, modes, operations, 0xC5, 3, ZeroPage, compare::cmp);
    fill!(cycles, extra_cycles, modes, operations, 0xD5, 4, ZeroPageX, compare::cmp);
    fill!(cycles, extra_cycles, modes, operations, 0xCD, 4, Absolute, compare::cmp);
    fill!(cycles, extra_cycles, modes, operations, 0xDD, 4, AbsoluteIndexedX, compare::cmp, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xD9, 4, AbsoluteIndexedY, compare::cmp, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xC1, 6, IndirectX, compare::cmp);
    fill!(cycles, extra_cycles, modes, operations, 0xD1, 5, IndirectY, compare::cmp, extra);

    // CPX / CPY
    fill!(cycles, extra_cycles, modes, operations, 0xE0, 2, Immediate, compare::cpx);
    fill!(cycles, extra_cycles, modes, operations, 0xE4, 3, ZeroPage, compare::cpx);
    fill!(cycles, extra_cycles, modes, operations, 0xEC, 4, Absolute, compare::cpx);
    fill!(cycles, extra_cycles, modes, operations, 0xC0, 2, Immediate, compare::cpy);
    fill!(cycles, extra_cycles, modes, operations, 0xC4, 3, ZeroPage, compare::cpy);
    fill!(cycles, extra_cycles, modes, operations, 0xCC, 4, Absolute, compare::cpy);

    // DEC / INC (memory)
    fill!(cycles, extra_cycles, modes, operations, 0xC6, 5, ZeroPage, inc_dec::dec);
    fill!(cycles, extra_cycles, modes, operations, 0xD6, 6, ZeroPageX, inc_dec::dec);
    fill!(cycles, extra_cycles, modes, operations, 0xCE, 6, Absolute, inc_dec::dec);
    fill!(cycles, extra_cycles, modes, operations, 0xDE, 7, AbsoluteIndexedX, inc_dec::dec);
    fill!(cycles, extra_cycles, modes, operations, 0xE6, 5, ZeroPage, inc_dec::inc);
    fill!(cycles, extra_cycles, modes, operations, 0xF6, 6, ZeroPageX, inc_dec::inc);
    fill!(cycles, extra_cycles, modes, operations, 0xEE, 6, Absolute, inc_dec::inc);
    fill!(cycles, extra_cycles, modes, operations, 0xFE, 7, AbsoluteIndexedX, inc_dec::inc);

    // DEX/DEY/INX/INY
    fill!(cycles, extra_cycles, modes, operations, 0xCA, 2, Implied, inc_dec::dex);
    fill!(cycles, extra_cycles, modes, operations, 0x88, 2, Implied, inc_dec::dey);
    fill!(cycles, extra_cycles, modes, operations, 0xE8, 2, Implied, inc_dec::inx);
    fill!(cycles, extra_cycles, modes, operations, 0xC8, 2, Implied, inc_dec::iny);

    // Shifts/rotates
    fill!(cycles, extra_cycles, modes, operations, 0x0A, 2, RegisterA, shifts::asl);
    fill!(cycles, extra_cycles, modes, operations, 0x06, 5, ZeroPage, shifts::asl);
    fill!(cycles, extra_cycles, modes, operations, 0x16, 6, ZeroPageX, shifts::asl);
    fill!(cycles, extra_cycles, modes, operations, 0x0E, 6, Absolute, shifts::asl);
    fill!(cycles, extra_cycles, modes, operations, 0x1E, 7, AbsoluteIndexedX, shifts::asl);

    fill!(cycles, extra_cycles, modes, operations, 0x4A, 2, RegisterA, shifts::lsr);
    fill!(cycles, extra_cycles, modes, operations, 0x46, 5, ZeroPage, shifts::lsr);
    fill!(cycles, extra_cycles, modes, operations, 0x56, 6, ZeroPageX, shifts::lsr);
    fill!(cycles, extra_cycles, modes, operations, 0x4E, 6, Absolute, shifts::lsr);
    fill!(cycles, extra_cycles, modes, operations, 0x5E, 7, AbsoluteIndexedX, shifts::lsr);

    fill!(cycles, extra_cycles, modes, operations, 0x2A, 2, RegisterA, shifts::rol);
    fill!(cycles, extra_cycles, modes, operations, 0x26, 5, ZeroPage, shifts::rol);
    fill!(cycles, extra_cycles, modes, operations, 0x36, 6, ZeroPageX, shifts::rol);
    fill!(cycles, extra_cycles, modes, operations, 0x2E, 6, Absolute, shifts::rol);
    fill!(cycles, extra_cycles, modes, operations, 0x3E, 7, AbsoluteIndexedX, shifts::rol);

    fill!(cycles, extra_cycles, modes, operations, 0x6A, 2, RegisterA, shifts::ror);
    fill!(cycles, extra_cycles, modes, operations, 0x66, 5, ZeroPage, shifts::ror);
    fill!(cycles, extra_cycles, modes, operations, 0x76, 6, ZeroPageX, shifts::ror);
    fill!(cycles, extra_cycles, modes, operations, 0x6E, 6, Absolute, shifts::ror);
    fill!(cycles, extra_cycles, modes, operations, 0x7E, 7, AbsoluteIndexedX, shifts::ror);

    // Branches (cycle accounting for taken/page-cross happens in branches::branch)
    fill!(cycles, extra_cycles, modes, operations, 0x90, 2, Relative, branches::bcc);
    fill!(cycles, extra_cycles, modes, operations, 0xB0, 2, Relative, branches::bcs);
    fill!(cycles, extra_cycles, modes, operations, 0xF0, 2, Relative, branches::beq);
    fill!(cycles, extra_cycles, modes, operations, 0xD0, 2, Relative, branches::bne);
    fill!(cycles, extra_cycles, modes, operations, 0x30, 2, Relative, branches::bmi);
    fill!(cycles, extra_cycles, modes, operations, 0x10, 2, Relative, branches::bpl);
    fill!(cycles, extra_cycles, modes, operations, 0x50, 2, Relative, branches::bvc);
    fill!(cycles, extra_cycles, modes, operations, 0x70, 2, Relative, branches::bvs);

    // Jumps/calls
    fill!(cycles, extra_cycles, modes, operations, 0x4C, 3, Absolute, jumps::jmp);
    fill!(cycles, extra_cycles, modes, operations, 0x6C, 5, Indirect, jumps::jmp_indirect);
    fill!(cycles, extra_cycles, modes, operations, 0x20, 6, Absolute, jumps::jsr);
    fill!(cycles, extra_cycles, modes, operations, 0x60, 6, Implied, jumps::rts);
    fill!(cycles, extra_cycles, modes, operations, 0x00, 7, Implied, jumps::brk);
    fill!(cycles, extra_cycles, modes, operations, 0x40, 6, Implied, jumps::rti);

    // Flag ops
    fill!(cycles, extra_cycles, modes, operations, 0x18, 2, Implied, flags_ops::clc);
    fill!(cycles, extra_cycles, modes, operations, 0x38, 2, Implied, flags_ops::sec);
    fill!(cycles, extra_cycles, modes, operations, 0xD8, 2, Implied, flags_ops::cld);
    fill!(cycles, extra_cycles, modes, operations, 0xF8, 2, Implied, flags_ops::sed);
    fill!(cycles, extra_cycles, modes, operations, 0x58, 2, Implied, flags_ops::cli);
    fill!(cycles, extra_cycles, modes, operations, 0x78, 2, Implied, flags_ops::sei);
    fill!(cycles, extra_cycles, modes, operations, 0xB8, 2, Implied, flags_ops::clv);
    fill!(cycles, extra_cycles, modes, operations, 0xEA, 2, Implied, flags_ops::nop);

    // Load/store
    fill!(cycles, extra_cycles, modes, operations, 0xA9, 2, Immediate, load_store::lda);
    fill!(cycles, extra_cycles, modes, operations, 0xA5, 3, ZeroPage, load_store::lda);
    fill!(cycles, extra_cycles, modes, operations, 0xB5, 4, ZeroPageX, load_store::lda);
    fill!(cycles, extra_cycles, modes, operations, 0xAD, 4, Absolute, load_store::lda);
    fill!(cycles, extra_cycles, modes, operations, 0xBD, 4, AbsoluteIndexedX, load_store::lda, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xB9, 4, AbsoluteIndexedY, load_store::lda, extra);
    fill!(cycles, extra_cycles, modes, operations, 0xA1, 6, IndirectX, load_store::lda);
    fill!(cycles, extra_cycles, modes, operations, 0xB1, 5, IndirectY, load_store::lda, extra);

    fill!(cycles, extra_cycles, modes, operations, 0xA2, 2, Immediate, load_store::ldx);
    fill!(cycles, extra_cycles, modes, operations, 0xA6, 3, ZeroPage, load_store::ldx);
    fill!(cycles, extra_cycles, modes, operations, 0xB6, 4, ZeroPageY, load_store::ldx);
    fill!(cycles, extra_cycles, modes, operations, 0xAE, 4, Absolute, load_store::ldx);
    fill!(cycles, extra_cycles, modes, operations, 0xBE, 4, AbsoluteIndexedY, load_store::ldx, extra);

    fill!(cycles, extra_cycles, modes, operations, 0xA0, 2, Immediate, load_store::ldy);
    fill!(cycles, extra_cycles, modes, operations, 0xA4, 3, ZeroPage, load_store::ldy);
    fill!(cycles, extra_cycles, modes, operations, 0xB4, 4, ZeroPageX, load_store::ldy);
    fill!(cycles, extra_cycles, modes, operations, 0xAC, 4, Absolute, load_store::ldy);
    fill!(cycles, extra_cycles, modes, operations, 0xBC, 4, AbsoluteIndexedX, load_store::ldy, extra);

    fill!(cycles, extra_cycles, modes, operations, 0x85, 3, ZeroPage, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x95, 4, ZeroPageX, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x8D, 4, Absolute, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x9D, 5, AbsoluteIndexedX, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x99, 5, AbsoluteIndexedY, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x81, 6, IndirectX, load_store::sta);
    fill!(cycles, extra_cycles, modes, operations, 0x91, 6, IndirectY, load_store::sta);

    fill!(cycles, extra_cycles, modes, operations, 0x86, 3, ZeroPage, load_store::stx);
    fill!(cycles, extra_cycles, modes, operations, 0x96, 4, ZeroPageY, load_store::stx);
    fill!(cycles, extra_cycles, modes, operations, 0x8E, 4, Absolute, load_store::stx);

    fill!(cycles, extra_cycles, modes, operations, 0x84, 3, ZeroPage, load_store::sty);
    fill!(cycles, extra_cycles, modes, operations, 0x94, 4, ZeroPageX, load_store::sty);
    fill!(cycles, extra_cycles, modes, operations, 0x8C, 4, Absolute, load_store::sty);

    // Transfers
    fill!(cycles, extra_cycles, modes, operations, 0xAA, 2, Implied, transfer::tax);
    fill!(cycles, extra_cycles, modes, operations, 0x8A, 2, Implied, transfer::txa);
    fill!(cycles, extra_cycles, modes, operations, 0xA8, 2, Implied, transfer::tay);
    fill!(cycles, extra_cycles, modes, operations, 0x98, 2, Implied, transfer::tya);
    fill!(cycles, extra_cycles, modes, operations, 0xBA, 2, Implied, transfer::tsx);
    fill!(cycles, extra_cycles, modes, operations, 0x9A, 2, Implied, transfer::txs);

    // Stack
    fill!(cycles, extra_cycles, modes, operations, 0x48, 3, Implied, stack::pha);
    fill!(cycles, extra_cycles, modes, operations, 0x08, 3, Implied, stack::php);
    fill!(cycles, extra_cycles, modes, operations, 0x68, 4, Implied, stack::pla);
    fill!(cycles, extra_cycles, modes, operations, 0x28, 4, Implied, stack::plp);

    Tables {
        cycles,
        extra_cycles,
        modes,
        operations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_opcode_was_assigned_a_real_mode() {
        let t = tables();
        // Spot check a representative opcode from each addressing family.
        assert_eq!(t.modes[0xA9], Mode::Immediate); // LDA #
        assert_eq!(t.modes[0x6C], Mode::Indirect); // JMP ()
        assert_eq!(t.modes[0x00], Mode::Implied); // BRK
        assert_eq!(t.cycles[0x00], 7);
        assert_eq!(t.extra_cycles[0x7D], 1); // ADC abs,X is a read
        assert_eq!(t.extra_cycles[0x9D], 0); // STA abs,X is a store
    }

    #[test]
    fn unknown_opcode_defaults_to_two_cycle_noop() {
        let t = tables();
        assert_eq!(t.cycles[0x02], 2);
        assert_eq!(t.modes[0x02], Mode::None);
    }
}
