use crate::{cartridge::Cartridge, cpu::Cpu, error::CoreError, input::Button, mmu::Mmu};

/// 154 scanlines x 456 cycles.
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// High-level Game Boy machine: the CPU core plus the bus it drives.
///
/// The CPU is the master clock. Each `step` retires one instruction and
/// returns its cycle count, which is then fanned out to the PPU and timer,
/// so every component observes the same timeline.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    /// Cycles the last frame ran past the frame budget; rolled into the
    /// next frame so the long-run rate stays exact.
    cycle_carry: u32,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
            cycle_carry: 0,
        }
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.mmu.load_cart(cart);
        // PC already points at 0x0100; no boot ROM is executed.
    }

    /// Parse and insert a raw ROM image.
    pub fn load_rom(&mut self, data: Vec<u8>) -> Result<(), CoreError> {
        let cart = Cartridge::load(data)?;
        self.load_cart(cart);
        Ok(())
    }

    /// Reset to the power-on state while preserving the loaded cartridge.
    pub fn reset(&mut self) {
        let cart = self.mmu.cart.take();
        self.cpu.reset();
        self.mmu = Mmu::new();
        self.cycle_carry = 0;
        if let Some(c) = cart {
            self.mmu.load_cart(c);
        }
    }

    /// Run one frame's worth of emulated time (70 224 cycles).
    ///
    /// An [`CoreError::IllegalOpcode`] aborts the frame; the machine then
    /// refuses to make further progress until [`GameBoy::reset`].
    pub fn run_frame(&mut self) -> Result<(), CoreError> {
        let mut total = self.cycle_carry;
        while total < CYCLES_PER_FRAME {
            let cycles = self.cpu.step(&mut self.mmu)?;
            self.mmu.tick(cycles);
            total += cycles;
        }
        self.cycle_carry = total - CYCLES_PER_FRAME;
        Ok(())
    }

    /// Push a button state change from the frontend.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.mmu
            .input
            .set_button(button, pressed, &mut self.mmu.if_reg);
    }

    /// Read-only view of the 160x144 RGBA framebuffer.
    pub fn framebuffer(&self) -> &[u8] {
        &self.mmu.ppu.framebuffer
    }

    /// True once the PPU has entered VBlank with a completed frame.
    pub fn frame_ready(&self) -> bool {
        self.mmu.ppu.frame_ready()
    }

    /// Acknowledge the current frame; the presentation layer calls this
    /// after copying the framebuffer out.
    pub fn clear_frame_ready(&mut self) {
        self.mmu.ppu.clear_frame_ready();
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
