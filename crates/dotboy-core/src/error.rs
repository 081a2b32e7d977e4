use thiserror::Error;

/// Errors surfaced by the emulation core.
///
/// Guest programs cannot produce these by ordinary execution; they cover
/// undefined opcodes and loader failures. Recoverable conditions (disabled
/// cartridge RAM reads, unusable-region accesses) stay inside the core and
/// follow open-bus semantics instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The CPU fetched one of the eleven undefined primary opcodes.
    /// Execution cannot continue without a reset.
    #[error("illegal opcode {opcode:#04X} at {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The ROM image is smaller than the size its header declares.
    #[error("ROM image is {actual} bytes but the header declares {expected}")]
    RomTooShort { expected: usize, actual: usize },

    /// The cartridge header selects a mapper this core does not implement.
    #[error("unsupported cartridge type {0:#04X}")]
    UnsupportedMbc(u8),

    /// An address escaped bus decoding. Unreachable as long as the region
    /// table is total over the 16-bit address space.
    #[error("address {0:#06X} escaped bus decoding")]
    BusOutOfRange(u16),
}
