use std::fmt;

use crate::crc8;

/// Packet Error Code
///
/// The CRC-8 byte that trails an SMBus transaction, see [`crc8`].
/// Displays as two lowercase hex digits.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Pec(pub u8);

impl Pec {
    /// Computes the PEC of every byte in `data`.
    pub fn of(data: &[u8]) -> Self {
        Self(crc8(data))
    }
}

impl From<u8> for Pec {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Pec> for u8 {
    fn from(pec: Pec) -> Self {
        pec.0
    }
}

impl fmt::Display for Pec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl fmt::LowerHex for Pec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Pec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        assert_eq!(Pec(0x30).to_string(), "30");
        assert_eq!(Pec(0x07).to_string(), "07");
        assert_eq!(Pec::default().to_string(), "00");
        assert_eq!(format!("{:#04x}", Pec(0x48)), "0x48");
        assert_eq!(format!("{:X}", Pec(0xf3)), "F3");
    }

    #[test]
    fn conversions() {
        let pec = Pec::of(&[0xB4, 0x22, 0x07, 0xC8]);
        assert_eq!(u8::from(pec), 0x48);
        assert_eq!(Pec::from(0x48), pec);
    }
}
