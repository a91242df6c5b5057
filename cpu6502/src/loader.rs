use std::fs;
use std::path::Path;

use crate::bus::{Bus, SharedBus};
use crate::error::LoadError;

const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Loads a raw byte stream into a fresh bus starting at offset 0, per the
/// binary image format: no header, no relocation, at most 65536 bytes. The
/// reset vector baked into the image determines the CPU's initial PC once
/// `Cpu6502::new` reads it back out.
pub fn load_bytes(bytes: &[u8]) -> Result<SharedBus, LoadError> {
    if bytes.len() > ADDRESS_SPACE_SIZE {
        return Err(LoadError::ImageTooLarge { len: bytes.len() });
    }
    log::debug!("loading {} byte ROM image", bytes.len());
    let bus = Bus::new_shared_bus();
    bus.borrow_mut().load(bytes);
    Ok(bus)
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SharedBus, LoadError> {
    let bytes = fs::read(path)?;
    load_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_image() {
        let bytes = vec![0u8; ADDRESS_SPACE_SIZE + 1];
        let result = load_bytes(&bytes);
        assert!(matches!(result, Err(LoadError::ImageTooLarge { len }) if len == bytes.len()));
    }

    #[test]
    fn loads_bytes_at_offset_zero() {
        let bus = load_bytes(&[0xA9, 0x05]).unwrap();
        assert_eq!(bus.borrow().read_u8(0x0000), 0xA9);
        assert_eq!(bus.borrow().read_u8(0x0001), 0x05);
        assert_eq!(bus.borrow().read_u8(0x0002), 0x00);
    }
}
