#![doc = include_str!("../README.md")]
mod error;
mod pec;

pub use error::Error;
pub use pec::Pec;

/// Polynomial `0x07` with its implicit `x^8` term (`0x107`), aligned so that
/// it can be applied while the tested bit sits at position 15.
const POLYNOMIAL: u32 = 0x1070 << 3;

/// SMBus PEC Algorithm
///
/// Non-reflected CRC-8 with the 0x07 polynomial, zero initial value and no
/// final XOR. Each byte is loaded into the high half of a 16-bit register and
/// shifted out one bit at a time; the remainder ends up in bits 8-15.
pub fn crc8(data: &[u8]) -> u8 {
    // Bits shifted past 15 never reach the test or the result.
    let mut crc: u32 = 0;
    for &byte in data {
        crc ^= (byte as u32) << 8;
        for _bit in 0..8 {
            if crc & 0x8000 != 0 {
                crc ^= POLYNOMIAL;
            }
            crc <<= 1;
        }
    }
    let pec = (crc >> 8) as u8;
    log::trace!("PEC over {} bytes: {:#04x}", data.len(), pec);
    pec
}

/// Computes the PEC of the first `length` bytes of `buffer`.
///
/// `length` may be shorter than the buffer, in which case the trailing bytes
/// are ignored. A `length` of zero yields `Pec(0x00)`.
///
/// # Errors
///
/// Returns [`Error::LengthExceedsBuffer`] if `length` is greater than
/// `buffer.len()`.
pub fn checksum(buffer: &[u8], length: usize) -> Result<Pec, Error> {
    let data = buffer.get(..length).ok_or(Error::LengthExceedsBuffer {
        length,
        available: buffer.len(),
    })?;
    Ok(Pec::of(data))
}
