use std::io::{self, Write};

use cpu6502::constants::memory_range;
use cpu6502::SharedBus;

/// Polls the strobe cell (0x00FE) and character latch (0x00FF) each tick.
/// When the CPU program stores a character then raises the strobe, the
/// printer reads it back out, writes it to `sink`, and clears the strobe so
/// the next character can be latched. Generic over the output sink so tests
/// can capture output without touching a terminal.
pub struct Printer<W: Write> {
    bus: SharedBus,
    sink: W,
}

impl<W: Write> Printer<W> {
    pub fn new(bus: SharedBus, sink: W) -> Printer<W> {
        Printer { bus, sink }
    }

    /// Checks the strobe cell once. Returns `Ok(true)` if a character was
    /// printed this call. Does not itself detect the soft-halt value -- see
    /// [`is_halt_requested`].
    pub fn poll(&mut self) -> io::Result<bool> {
        let strobe = self.bus.borrow().read_u8(memory_range::PRINTER_STROBE);
        if strobe != 1 {
            return Ok(false);
        }
        let byte = self.bus.borrow().read_u8(memory_range::PRINTER_DATA);
        self.sink.write_all(&[byte])?;
        self.sink.flush()?;
        self.bus.borrow_mut().set_u8(memory_range::PRINTER_STROBE, 0);
        log::trace!("printer: emitted {:?}", byte as char);
        Ok(true)
    }

    /// True when the strobe cell holds the soft-halt sentinel (127). The
    /// host loop checks this independently of `poll` so a halt request is
    /// never swallowed by the "strobe == 1" branch.
    pub fn is_halt_requested(&self) -> bool {
        self.bus.borrow().read_u8(memory_range::PRINTER_STROBE) == memory_range::SOFT_HALT_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpu6502::Bus;

    #[test]
    fn prints_character_and_clears_strobe() {
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().set_u8(memory_range::PRINTER_DATA, b'A');
        bus.borrow_mut().set_u8(memory_range::PRINTER_STROBE, 1);
        let mut output = Vec::new();
        let mut printer = Printer::new(bus.clone(), &mut output);
        assert!(printer.poll().unwrap());
        assert_eq!(output, b"A");
        assert_eq!(bus.borrow().read_u8(memory_range::PRINTER_STROBE), 0);
    }

    #[test]
    fn does_nothing_when_strobe_not_set() {
        let bus = Bus::new_shared_bus();
        let mut output = Vec::new();
        let mut printer = Printer::new(bus, &mut output);
        assert!(!printer.poll().unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn detects_soft_halt_sentinel() {
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().set_u8(memory_range::PRINTER_STROBE, 127);
        let mut output = Vec::new();
        let printer = Printer::new(bus, &mut output);
        assert!(printer.is_halt_requested());
    }

    #[test]
    fn scenario_f_matches_spec() {
        // LDA #'A'; STA $FF; LDA #1; STA $FE; BRK
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().load(&[0xA9, 0x41, 0x85, 0xFF, 0xA9, 0x01, 0x85, 0xFE, 0x00]);
        let mut cpu = cpu6502::Cpu6502::new(bus.clone());
        let mut output = Vec::new();
        let mut printer = Printer::new(bus, &mut output);
        for _ in 0..4 {
            cpu.step();
            printer.poll().unwrap();
        }
        assert_eq!(output, b"A");
        assert_eq!(
            cpu.bus.borrow().read_u8(memory_range::PRINTER_STROBE),
            0
        );
    }
}
