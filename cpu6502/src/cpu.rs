use crate::bus::SharedBus;
use crate::constants::{memory_range, InterruptVectors};
use crate::opcodes::{self, Mode};

/// Bit 5 of the packed status byte is unused padding, hardwired to read back
/// as 1; it isn't one of N,V,B,D,I,Z,C so "all flags clear" at reset still
/// leaves it set.
pub const RESET_STATUS_FLAG: u8 = StatusFlag::Push as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 0b0000_0001,
    Zero             = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal          = 0b0000_1000,
    Break            = 0b0001_0000,
    Push             = 0b0010_0000,
    Overflow         = 0b0100_0000,
    Negative         = 0b1000_0000,
}

/// Which vector an [`interrupt`](Cpu6502::interrupt) pushes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Irq,
    Nmi,
}

/// A MOS 6502 central processing unit.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
pub struct Cpu6502 {
    pub bus: SharedBus,
    /// Accumulator.
    pub a: u8,
    /// Index register X.
    pub x: u8,
    /// Index register Y.
    pub y: u8,
    /// Program counter.
    pub pc: u16,
    /// Stack pointer. Effective stack address is `0x0100 + s`.
    pub s: u8,
    /// Processor status, packed as N V 1 B D I Z C (bit 7 .. bit 0).
    pub p: u8,
    /// Cycles still owed before the next instruction fetch. Set to the full
    /// cost of an instruction by `step`, and drained one at a time by `cycle`.
    pub cycles_remaining: u16,
    pub tick_count: u64,
    /// Stop `run_until_halt` after this many `step()` calls. Useful for tests
    /// and for the sandbox's `--max-ticks` flag.
    pub max_ticks: Option<u64>,
}

impl Cpu6502 {
    pub fn new(bus: SharedBus) -> Cpu6502 {
        let pc = bus.borrow().read_u16(InterruptVectors::ResetVector as u16, false);
        Cpu6502 {
            bus,
            a: 0,
            x: 0,
            y: 0,
            pc,
            s: 0xFF,
            p: RESET_STATUS_FLAG,
            cycles_remaining: 0,
            tick_count: 0,
            max_ticks: None,
        }
    }

    fn next_u8(&mut self) -> u8 {
        let value = self.bus.borrow().read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn next_u16(&mut self) -> u16 {
        let value = self.bus.borrow().read_u16(self.pc, false);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Computes the effective address for `mode`, advancing the PC past any
    /// operand bytes. Panics for `Implied`/`RegisterA`/`None`, which never
    /// reach here (their handlers don't call `get_operand`/`get_operand_address`).
    fn get_operand_address(&mut self, mode: Mode, extra_cycle: u8) -> u16 {
        match mode {
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteIndexedX => {
                let base = self.next_u16();
                let ea = base.wrapping_add(self.x as u16);
                self.add_page_cross_penalty(base, ea, extra_cycle);
                ea
            }
            Mode::AbsoluteIndexedY => {
                let base = self.next_u16();
                let ea = base.wrapping_add(self.y as u16);
                self.add_page_cross_penalty(base, ea, extra_cycle);
                ea
            }
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::Implied => panic!("Implied mode has no operand address."),
            Mode::RegisterA => panic!("Register A has no address."),
            // JMP indirect reproduces the page-boundary bug: when the low
            // byte of the pointer is 0xFF, the high byte wraps within the
            // same page instead of rolling over into the next one.
            Mode::Indirect => {
                let pointer = self.next_u16();
                let [p_low, p_high] = pointer.to_le_bytes();
                let low = self.bus.borrow().read_u8(pointer);
                let high_address = u16::from_le_bytes([p_low.wrapping_add(1), p_high]);
                let high = self.bus.borrow().read_u8(high_address);
                u16::from_le_bytes([low, high])
            }
            Mode::IndirectX => {
                let zero_page_address = self.next_u8().wrapping_add(self.x) as u16;
                self.bus.borrow().read_u16(zero_page_address, true)
            }
            Mode::IndirectY => {
                let zero_page_address = self.next_u8() as u16;
                let base = self.bus.borrow().read_u16(zero_page_address, true);
                let ea = base.wrapping_add(self.y as u16);
                self.add_page_cross_penalty(base, ea, extra_cycle);
                ea
            }
            Mode::Relative => {
                let offset = self.next_u8() as i8;
                self.pc.wrapping_add(offset as u16)
            }
            Mode::ZeroPage => self.next_u8() as u16,
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
            Mode::None => 0,
        }
    }

    /// Returns the effective address (when there is one) and the operand
    /// value read from it, or `(None, self.a)` for accumulator mode.
    pub(crate) fn get_operand(&mut self, mode: Mode, extra_cycle: u8) -> (Option<u16>, u8) {
        if mode == Mode::RegisterA {
            return (None, self.a);
        }
        let address = self.get_operand_address(mode, extra_cycle);
        let value = self.bus.borrow().read_u8(address);
        (Some(address), value)
    }

    /// Like `get_operand`, but for instructions that must have a concrete
    /// address to write back to (stores, RMW). Never called with `RegisterA`.
    pub(crate) fn get_operand_for_write(&mut self, mode: Mode, extra_cycle: u8) -> (u16, u8) {
        let address = self.get_operand_address(mode, extra_cycle);
        let value = self.bus.borrow().read_u8(address);
        (address, value)
    }

    /// Charges `extra_cycle` more cycles to the instruction in progress if
    /// `base` and `ea` fall on different 256-byte pages. `extra_cycle` is 0
    /// for every opcode except the read-family indexed/indirect ones (per
    /// `EXTRA_CYCLES_TABLE`), so store and RMW variants never pay this.
    fn add_page_cross_penalty(&mut self, base: u16, ea: u16, extra_cycle: u8) {
        let [_, base_page] = base.to_le_bytes();
        let [_, ea_page] = ea.to_le_bytes();
        if base_page != ea_page {
            self.cycles_remaining += extra_cycle as u16;
        }
    }

    pub(crate) fn update_zero_and_negative_flag(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    }

    pub(crate) fn update_carry_flag(&mut self, result: u16) {
        self.set_status_flag(StatusFlag::Carry, result & 0b1_0000_0000 != 0);
    }

    pub(crate) fn update_overflow_flag(&mut self, operand: u8, result: u8) {
        let bit_7 = 0b1000_0000;
        let overflowed = bit_7 & !(self.a ^ operand) & (self.a ^ result) == bit_7;
        self.set_status_flag(StatusFlag::Overflow, overflowed);
    }

    pub(crate) fn set_status_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.p |= flag as u8;
        } else {
            self.p &= !(flag as u8);
        }
    }

    pub(crate) fn get_carry(&self) -> u8 {
        self.p & (StatusFlag::Carry as u8)
    }

    pub fn is_status_flag_set(&self, flag: StatusFlag) -> bool {
        let bit = flag as u8;
        self.p & bit == bit
    }

    pub(crate) fn push_stack_u8(&mut self, value: u8) {
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        self.bus.borrow_mut().set_u8(address, value);
        self.s = self.s.wrapping_sub(1);
    }

    pub(crate) fn pull_stack_u8(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        self.bus.borrow().read_u8(address)
    }

    /// Pushes `value` high byte first, then low byte -- the order JSR and
    /// BRK both use, and the order RTS/RTI pull back out in reverse.
    pub(crate) fn push_stack_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_stack_u8(high);
        self.push_stack_u8(low);
    }

    pub(crate) fn pull_stack_u16(&mut self) -> u16 {
        let low = self.pull_stack_u8();
        let high = self.pull_stack_u8();
        u16::from_le_bytes([low, high])
    }

    /// Shared by every conditional branch. Always consumes the relative
    /// offset byte; only charges cycles and moves the PC when `condition`
    /// holds. The page-cross check compares the branch opcode's own address
    /// against the target, not the post-operand PC -- a branch that merely
    /// steps onto the next page because it sits at the end of one still
    /// crosses a boundary even though its displacement is small.
    pub(crate) fn branch_if(&mut self, condition: bool) {
        let opcode_address = self.pc.wrapping_sub(1);
        let offset = self.next_u8() as i8;
        if condition {
            let target = self.pc.wrapping_add(offset as u16);
            self.cycles_remaining += 1;
            self.add_page_cross_penalty(opcode_address, target, 1);
            self.pc = target;
        }
    }

    /// Executes exactly one instruction: decode, address, operate, advance
    /// PC, set `cycles_remaining`. Unknown opcodes cost 2 cycles and advance
    /// PC by 1 without otherwise touching CPU state.
    pub fn step(&mut self) {
        self.tick_count += 1;
        let opcode = self.next_u8();
        let opcode_index = opcode as usize;

        let tables = opcodes::tables();
        let base_cycles = tables.cycles[opcode_index];
        let extra_cycle = tables.extra_cycles[opcode_index];
        let mode = tables.modes[opcode_index];
        let operation = tables.operations[opcode_index];

        self.cycles_remaining = base_cycles as u16;
        log::trace!(
            "step: pc={:#06x} opcode={:#04x} mode={:?}",
            self.pc.wrapping_sub(1),
            opcode,
            mode
        );
        operation(self, mode, extra_cycle);
    }

    /// Cycle-paced stepping: calls `step()` once `cycles_remaining` reaches
    /// zero, then always consumes one cycle. `n` calls to `cycle()` elapse
    /// exactly one n-cycle instruction.
    pub fn cycle(&mut self) {
        if self.cycles_remaining == 0 {
            self.step();
        }
        self.cycles_remaining = self.cycles_remaining.saturating_sub(1);
    }

    /// Runs `step()` until `predicate` returns true, or `max_ticks` (if set)
    /// is exceeded.
    pub fn run_until<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Cpu6502) -> bool,
    {
        loop {
            if predicate(self) {
                break;
            }
            self.step();
            if let Some(max_ticks) = self.max_ticks {
                if self.tick_count >= max_ticks {
                    break;
                }
            }
        }
    }

    /// Nothing in this crate drives interrupt lines -- the current system has
    /// no IRQ/NMI source -- but the vector-fetch and push sequence are worth
    /// having tested and correct: see SPEC_FULL.md's interrupt design note.
    pub fn interrupt(&mut self, kind: InterruptKind) {
        if kind == InterruptKind::Irq && self.is_status_flag_set(StatusFlag::InterruptDisable) {
            return;
        }
        self.push_stack_u16(self.pc);
        let mut status = self.p;
        status &= !(StatusFlag::Break as u8);
        status |= StatusFlag::Push as u8;
        self.push_stack_u8(status);
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        let vector = match kind {
            InterruptKind::Irq => InterruptVectors::IrqBrkVector,
            InterruptKind::Nmi => InterruptVectors::NonMaskableInterrupt,
        };
        self.pc = self.bus.borrow().read_u16(vector as u16, false);
        self.cycles_remaining = 7;
    }
}

#[cfg(test)]
#[path = "test_helpers.rs"]
mod test_helpers;

#[cfg(test)]
mod test;
