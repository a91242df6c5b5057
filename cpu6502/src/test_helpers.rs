#![macro_use]

use crate::bus::Bus;
use crate::cpu::{Cpu6502, StatusFlag, RESET_STATUS_FLAG};

pub const P: u8 = RESET_STATUS_FLAG;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const T: u8 = StatusFlag::Push as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Loads `bytes` at address zero and steps until the PC lands on `0x02`, a
/// guaranteed-undocumented opcode fixtures use as a halt marker instead of
/// executing it.
pub fn run_bytes(bytes: &[u8]) -> Cpu6502 {
    let bus = Bus::new_shared_bus();
    bus.borrow_mut().load(bytes);
    let mut cpu = Cpu6502::new(bus);
    cpu.max_ticks = Some(10_000);
    cpu.run_until(|cpu| cpu.bus.borrow().read_u8(cpu.pc) == 0x02);
    cpu
}

/// Two's complement of a u8, handy for writing negative immediates in test
/// fixtures without sign-extension footguns.
pub fn negative(n: u8) -> u8 {
    !n + 1
}

pub fn assert_register_a(bytes: &[u8], value: u8, status: u8) {
    let cpu = run_bytes(bytes);
    if cpu.a != value {
        panic!(
            "Expected register A to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.a, cpu.a
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(bytes: &[u8], value: u8, status: u8) {
    let cpu = run_bytes(bytes);
    if cpu.x != value {
        panic!(
            "Expected register X to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.x, cpu.x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(bytes: &[u8], value: u8, status: u8) {
    let cpu = run_bytes(bytes);
    if cpu.y != value {
        panic!(
            "Expected register Y to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.y, cpu.y
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_status(cpu: &Cpu6502, value: u8) {
    let mut mismatches = String::new();
    let flags = [
        ("Carry", StatusFlag::Carry),
        ("Zero", StatusFlag::Zero),
        ("InterruptDisable", StatusFlag::InterruptDisable),
        ("Decimal", StatusFlag::Decimal),
        ("Break", StatusFlag::Break),
        ("Push", StatusFlag::Push),
        ("Overflow", StatusFlag::Overflow),
        ("Negative", StatusFlag::Negative),
    ];
    for (name, flag) in flags {
        let expected = value & flag as u8 == flag as u8;
        let actual = cpu.is_status_flag_set(flag);
        if expected != actual {
            mismatches.push_str(&format!(
                "Expected StatusFlag::{} to be {} but received {}\n",
                name, expected, actual
            ));
        }
    }
    if cpu.p != value {
        panic!(
            "Expected cpu status 0b{:08b} to match 0b{:08b}\n{}",
            cpu.p, value, mismatches
        );
    }
}
