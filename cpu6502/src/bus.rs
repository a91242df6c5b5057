use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the memory bus. The CPU and each peripheral borrow it for
/// the duration of a single operation; nothing holds a borrow across ticks.
pub type SharedBus = Rc<RefCell<Bus>>;

/// A flat 64 KiB byte-addressable memory array. There is no mapping, no
/// mirroring, and no access logging here -- every address in 0x0000-0xFFFF
/// reads and writes the same underlying byte every time.
pub struct Bus {
    memory: [u8; 0x10000],
}

impl Bus {
    pub fn new() -> Bus {
        Bus {
            memory: [0; 0x10000],
        }
    }

    pub fn new_shared_bus() -> SharedBus {
        Rc::new(RefCell::new(Bus::new()))
    }

    #[inline]
    pub fn read_u8(&self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    #[inline]
    pub fn set_u8(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }

    /// Reads a little-endian u16. When `zero_page_wrap` is set, the high
    /// byte is fetched with the address masked to 8 bits, so reading from
    /// 0x00FF wraps to 0x0000 rather than spilling into the stack page.
    pub fn read_u16(&self, address: u16, zero_page_wrap: bool) -> u16 {
        let low = self.read_u8(address);
        let high_address = if zero_page_wrap {
            (address as u8).wrapping_add(1) as u16
        } else {
            address.wrapping_add(1)
        };
        let high = self.read_u8(high_address);
        u16::from_le_bytes([low, high])
    }

    pub fn write_u16(&mut self, address: u16, value: u16, zero_page_wrap: bool) {
        let [low, high] = value.to_le_bytes();
        let high_address = if zero_page_wrap {
            (address as u8).wrapping_add(1) as u16
        } else {
            address.wrapping_add(1)
        };
        self.set_u8(address, low);
        self.set_u8(high_address, high);
    }

    /// Copies `data` into memory starting at offset 0. Panics if `data` is
    /// larger than the address space; callers that need a typed error use
    /// `crate::loader` instead.
    pub fn load(&mut self, data: &[u8]) {
        self.memory[..data.len()].copy_from_slice(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_u8_roundtrip() {
        let mut bus = Bus::new();
        bus.set_u8(0x1234, 0xAB);
        assert_eq!(bus.read_u8(0x1234), 0xAB);
    }

    #[test]
    fn read_u16_little_endian() {
        let mut bus = Bus::new();
        bus.set_u8(0x2000, 0x34);
        bus.set_u8(0x2001, 0x12);
        assert_eq!(bus.read_u16(0x2000, false), 0x1234);
    }

    #[test]
    fn read_u16_zero_page_wrap() {
        let mut bus = Bus::new();
        bus.set_u8(0x00FF, 0x78);
        bus.set_u8(0x0000, 0x56);
        bus.set_u8(0x0100, 0xCD); // decoy: must not be read
        assert_eq!(bus.read_u16(0x00FF, true), 0x5678);
    }

    #[test]
    fn read_u16_no_wrap_crosses_into_next_page() {
        let mut bus = Bus::new();
        bus.set_u8(0x00FF, 0x78);
        bus.set_u8(0x0100, 0x56);
        assert_eq!(bus.read_u16(0x00FF, false), 0x5678);
    }
}
