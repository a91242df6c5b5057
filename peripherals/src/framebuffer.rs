use cpu6502::constants::memory_range;
use cpu6502::SharedBus;

/// A decoded RGB pixel, each channel scaled to the full 0-255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Decodes a packed `RRRGGGBB` byte into an 8-bit-per-channel color. Red and
/// green each get 3 bits (0-7), scaled by `round((n/7)*255)`; blue gets 2
/// bits (0-3), scaled by `round((n/3)*255)` -- the same rounded per-channel
/// scaling the peripheral's original color routine used, rather than a
/// naive bit-shift-and-pad or a truncating divide.
pub fn decode_pixel(byte: u8) -> Rgb {
    let r = (byte >> 5) & 0x7;
    let g = (byte >> 2) & 0x7;
    let b = byte & 0x3;
    Rgb {
        r: ((r as u32 * 255 + 3) / 7) as u8,
        g: ((g as u32 * 255 + 3) / 7) as u8,
        b: ((b as u32 * 255 + 1) / 3) as u8,
    }
}

const WIDTH: usize = memory_range::FRAMEBUFFER_WIDTH as usize;
const HEIGHT: usize = memory_range::FRAMEBUFFER_HEIGHT as usize;
const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Polls the 32x32 framebuffer window (0x0200-0x05FF) on the bus and keeps a
/// decoded copy the caller can hand to whatever it uses to draw. The
/// framebuffer never writes back to the bus.
pub struct Framebuffer {
    bus: SharedBus,
    pixels: [Rgb; PIXEL_COUNT],
}

impl Framebuffer {
    pub fn new(bus: SharedBus) -> Framebuffer {
        Framebuffer {
            bus,
            pixels: [Rgb::default(); PIXEL_COUNT],
        }
    }

    /// Address of the pixel at `(x, y)` within the framebuffer window.
    pub fn address_of(x: u16, y: u16) -> u16 {
        memory_range::FRAMEBUFFER.min + y * memory_range::FRAMEBUFFER_WIDTH + x
    }

    /// Re-reads every pixel byte from the bus. Returns `true` if any pixel
    /// changed since the last poll, so a caller can skip redrawing an
    /// unchanged frame.
    pub fn poll(&mut self) -> bool {
        let bus = self.bus.borrow();
        let mut dirty = false;
        for y in 0..memory_range::FRAMEBUFFER_HEIGHT {
            for x in 0..memory_range::FRAMEBUFFER_WIDTH {
                let address = Self::address_of(x, y);
                let decoded = decode_pixel(bus.read_u8(address));
                let index = (y * memory_range::FRAMEBUFFER_WIDTH + x) as usize;
                if self.pixels[index] != decoded {
                    self.pixels[index] = decoded;
                    dirty = true;
                }
            }
        }
        if dirty {
            log::trace!("framebuffer: frame updated");
        }
        dirty
    }

    pub fn pixel(&self, x: u16, y: u16) -> Rgb {
        self.pixels[(y * memory_range::FRAMEBUFFER_WIDTH + x) as usize]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpu6502::Bus;

    #[test]
    fn decodes_pure_channels() {
        assert_eq!(decode_pixel(0b1110_0000), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(decode_pixel(0b0001_1100), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(decode_pixel(0b0000_0011), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(decode_pixel(0), Rgb { r: 0, g: 0, b: 0 });
    }

    /// Mid-scale values are where a truncating divide and a rounding one
    /// disagree: r=2 is 72 truncated vs 73 rounded, matching
    /// `_8bitTo24bitColor`'s `round((r/7)*255)`.
    #[test]
    fn decodes_mid_scale_channels_with_rounding() {
        assert_eq!(decode_pixel(0b0100_0000), Rgb { r: 73, g: 0, b: 0 }); // r=2
        assert_eq!(decode_pixel(0b1000_0000), Rgb { r: 146, g: 0, b: 0 }); // r=4
        assert_eq!(decode_pixel(0b1100_0000), Rgb { r: 219, g: 0, b: 0 }); // r=6
        assert_eq!(decode_pixel(0b0000_0010), Rgb { r: 0, g: 0, b: 170 }); // b=2
    }

    #[test]
    fn poll_reads_pixel_grid_from_bus() {
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().set_u8(Framebuffer::address_of(3, 5), 0b1110_0000);
        let mut fb = Framebuffer::new(bus);
        assert!(fb.poll());
        assert_eq!(fb.pixel(3, 5), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn poll_reports_no_change_on_second_call() {
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().set_u8(Framebuffer::address_of(0, 0), 0xFF);
        let mut fb = Framebuffer::new(bus);
        assert!(fb.poll());
        assert!(!fb.poll());
    }
}
